//! Gameplay tuning for collectible coins.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupTuning {
    /// Score awarded per collected coin.
    pub reward: u32,

    /// Bounding half-extents of a coin lying flat (torus radius 0.5, tube 0.2).
    pub half_extents: Vec3,

    /// Height of the coin grid above a platform's top face.
    pub hover_height: f32,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self {
            reward: 10,
            half_extents: Vec3::new(0.7, 0.2, 0.7),
            hover_height: 2.0,
        }
    }
}
