/// Gameplay tuning for flight-mode projectiles.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Distance travelled per tick.
    pub speed: f32,

    /// A projectile closer than this to an enemy center destroys it.
    pub hit_radius: f32,

    /// Projectiles farther than this from the craft are despawned.
    pub max_range: f32,

    /// Spawn offset below the craft's center.
    pub drop: f32,

    /// Ticks between shots while fire is held (0 fires every tick).
    pub cooldown_ticks: u32,

    /// Score awarded per destroyed enemy.
    pub reward: u32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 0.5,
            hit_radius: 2.0,
            max_range: 100.0,
            drop: 0.5,
            cooldown_ticks: 0,
            reward: 100,
        }
    }
}
