//! Gameplay tuning for the platformer avatar.
//!
//! Keep this separate from runtime configuration (tick rates, channel sizes, etc.).

use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Half of the avatar's 1 x 2 x 1 box; the vertical half doubles as the landing margin.
    pub half_extents: Vec3,

    /// Distance the avatar is shoved away from an obstacle it touches.
    pub knockback: f32,

    /// Falling below this height ends the run.
    pub fall_threshold: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            half_extents: Vec3::new(0.5, 1.0, 0.5),
            knockback: 0.5,
            fall_threshold: -10.0,
        }
    }
}
