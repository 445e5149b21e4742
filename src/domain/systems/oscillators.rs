use crate::domain::state::{Oscillator, Volume, VolumeKind};

/// Advances one ping-pong step and returns the new height.
///
/// The bound is checked after moving, so the value can overshoot either end by at most
/// one step before reversing.
pub fn advance(motion: &mut Oscillator, y: f32) -> f32 {
    let y = y + motion.speed * motion.direction;
    if y > motion.start_y + motion.range {
        motion.direction = -1.0;
    } else if y < motion.start_y {
        motion.direction = 1.0;
    }
    y
}

/// Moves every moving platform; static platforms are untouched.
pub fn advance_platforms(platforms: &mut [Volume]) {
    for platform in platforms {
        if let VolumeKind::MovingPlatform(ref mut motion) = platform.kind {
            platform.bounds.center.y = advance(motion, platform.bounds.center.y);
        }
    }
}
