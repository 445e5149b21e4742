//! Gameplay tuning for the helicopter in flight mode.

use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct FlightTuning {
    /// Top forward throttle speed per tick; reverse is capped at half of it.
    pub max_speed: f32,

    /// Throttle change per tick while forward/back is held.
    pub acceleration: f32,

    /// Fraction of speed lost per tick with no throttle input.
    pub deceleration: f32,

    /// Strafing moves at this fraction of the current speed.
    pub strafe_factor: f32,

    /// Below this absolute speed the craft cannot strafe or turn.
    pub min_turn_speed: f32,

    /// The craft is never allowed below this height.
    pub min_altitude: f32,

    pub spawn: Vec3,

    /// Enemies are scattered uniformly over +/- this distance on X and Z.
    pub enemy_spread: f32,

    pub enemy_count: usize,

    pub enemy_half_extents: Vec3,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            max_speed: 0.3,
            acceleration: 0.005,
            deceleration: 0.002,
            strafe_factor: 0.5,
            min_turn_speed: 0.01,
            min_altitude: 2.0,
            spawn: Vec3::new(0.0, 2.0, 0.0),
            enemy_spread: 50.0,
            enemy_count: 10,
            enemy_half_extents: Vec3::ONE,
        }
    }
}
