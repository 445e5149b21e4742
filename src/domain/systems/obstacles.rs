use crate::domain::state::{GameOverReason, SimState, TickEvent, Volume};
use glam::Vec3;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ObstacleConfig {
    pub damage: i32,
    pub knockback: f32,
    pub half_extents: Vec3,
}

/// Damages and knocks back the avatar for every obstacle it overlaps.
///
/// There is no per-contact cooldown: an obstacle keeps dealing damage on every tick the
/// avatar stays inside it. Processing stops at the hit that ends the run.
pub fn resolve_obstacles(
    state: &mut SimState,
    obstacles: &[Volume],
    cfg: ObstacleConfig,
    events: &mut Vec<TickEvent>,
) {
    for obstacle in obstacles {
        if state.is_over() {
            break;
        }
        if !state
            .avatar
            .bounds(cfg.half_extents)
            .overlaps(&obstacle.bounds)
        {
            continue;
        }

        state.health = (state.health - cfg.damage).max(0);
        events.push(TickEvent::Hit {
            obstacle_id: obstacle.id,
            damage: cfg.damage,
            health: state.health,
        });
        debug!(obstacle_id = obstacle.id, health = state.health, "avatar hit");

        let away = (state.avatar.position - obstacle.bounds.center).normalize_or_zero();
        state.avatar.position += away * cfg.knockback;

        if state.health <= 0 {
            state.outcome = Some(GameOverReason::HealthZero);
            events.push(TickEvent::GameOver {
                reason: GameOverReason::HealthZero,
            });
        }
    }
}
