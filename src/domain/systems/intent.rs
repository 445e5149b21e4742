// Camera-relative movement input for the avatar.

use crate::domain::state::{AvatarState, InputIntent};

/// Turns held directions into horizontal velocity along the camera's ground-plane axes.
///
/// Each held direction contributes a full `move_speed` step, so diagonals are faster
/// than straight movement.
pub fn accumulate(avatar: &mut AvatarState, intent: &InputIntent, move_speed: f32) {
    avatar.velocity.x = 0.0;
    avatar.velocity.z = 0.0;

    let forward = intent.camera.forward * move_speed;
    let right = intent.camera.right * move_speed;

    if intent.forward {
        avatar.velocity += forward;
    }
    if intent.back {
        avatar.velocity -= forward;
    }
    if intent.left {
        avatar.velocity -= right;
    }
    if intent.right {
        avatar.velocity += right;
    }
}
