use crate::domain::state::{Craft, Enemy, SimProjectile, TickEvent};
use crate::domain::tuning::ProjectileTuning;
use glam::Vec3;
use tracing::debug;

/// Spawns, moves and resolves projectiles for one flight tick. Returns the score gained.
pub fn tick_projectiles(
    craft: &mut Craft,
    firing: bool,
    projectiles: &mut Vec<SimProjectile>,
    enemies: &mut Vec<Enemy>,
    next_projectile_id: &mut u64,
    cfg: &ProjectileTuning,
    events: &mut Vec<TickEvent>,
) -> u32 {
    // Spawn from the fire button and cooldown.
    craft.fire_cooldown = craft.fire_cooldown.saturating_sub(1);
    if firing && craft.fire_cooldown == 0 {
        // Heading 0 faces +Z.
        let dir = Vec3::new(craft.heading.sin(), 0.0, craft.heading.cos());
        let id = *next_projectile_id;
        projectiles.push(SimProjectile {
            id,
            position: craft.position - Vec3::Y * cfg.drop,
            velocity: dir * cfg.speed,
        });
        *next_projectile_id = next_projectile_id.wrapping_add(1);
        craft.fire_cooldown = cfg.cooldown_ticks;
        events.push(TickEvent::Fired { projectile_id: id });
    }

    let mut gained = 0;
    let hit_radius_sq = cfg.hit_radius * cfg.hit_radius;
    let max_range_sq = cfg.max_range * cfg.max_range;

    projectiles.retain_mut(|p| {
        p.position += p.velocity;

        // Naive O(P*E): the first enemy in range absorbs the projectile.
        if let Some(index) = enemies
            .iter()
            .position(|e| e.bounds.center.distance_squared(p.position) < hit_radius_sq)
        {
            let enemy = enemies.remove(index);
            gained += cfg.reward;
            debug!(enemy_id = enemy.id, projectile_id = p.id, "enemy destroyed");
            events.push(TickEvent::EnemyDestroyed {
                enemy_id: enemy.id,
                value: cfg.reward,
                position: enemy.bounds.center,
            });
            return false;
        }

        p.position.distance_squared(craft.position) <= max_range_sq
    });

    gained
}
