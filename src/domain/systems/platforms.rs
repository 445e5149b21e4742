// Platform contact resolution.

use crate::domain::state::{AvatarState, Volume};
use glam::Vec3;

/// Strategy for separating the avatar from platforms after it has moved.
///
/// Implementations clear and re-derive `on_ground`.
pub trait PlatformPolicy {
    fn resolve(&self, avatar: &mut AvatarState, half_extents: Vec3, platforms: &[Volume]);
}

/// First-axis-wins, insertion-order iteration.
///
/// Each overlapping platform gets exactly one correction, tried in priority order:
/// land on top (falling), bump the underside (rising), then push out sideways on X.
/// Platforms are visited once in list order, so a correction against a later platform
/// may leave the avatar overlapping an earlier one until the next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAxisWins;

impl PlatformPolicy for FirstAxisWins {
    fn resolve(&self, avatar: &mut AvatarState, half_extents: Vec3, platforms: &[Volume]) {
        avatar.on_ground = false;

        for platform in platforms {
            let bounds = platform.bounds;
            if !avatar.bounds(half_extents).overlaps(&bounds) {
                continue;
            }

            let bottom = avatar.position.y - half_extents.y;
            let top = avatar.position.y + half_extents.y;
            let vy = avatar.velocity.y;

            if bottom <= bounds.top() && vy < 0.0 {
                avatar.position.y = bounds.top() + half_extents.y;
                avatar.velocity.y = 0.0;
                avatar.on_ground = true;
            } else if top >= bounds.bottom() && vy > 0.0 {
                avatar.position.y = bounds.bottom() - half_extents.y;
                avatar.velocity.y = 0.0;
            } else if bottom >= bounds.top() {
                // Standing still exactly on the top face.
                avatar.on_ground = true;
            } else if top <= bounds.bottom() {
                // Touching the underside without moving into it.
            } else {
                let left = avatar.position.x - half_extents.x;
                let right = avatar.position.x + half_extents.x;
                if right > bounds.left() && left < bounds.right() {
                    if avatar.position.x < bounds.center.x {
                        avatar.position.x = bounds.left() - half_extents.x;
                    } else {
                        avatar.position.x = bounds.right() + half_extents.x;
                    }
                    avatar.velocity.x = 0.0;
                }
            }
        }
    }
}
