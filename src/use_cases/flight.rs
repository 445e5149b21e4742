// Flight game mode: helicopter movement, shooting and scattered targets.

use super::simulation::Simulation;
use super::types::GameMode;
use crate::domain::systems::flight::tick_craft;
use crate::domain::systems::projectiles::tick_projectiles;
use crate::domain::tuning::{Difficulty, FlightTuning, ProjectileTuning};
use crate::domain::{
    Aabb, Craft, Enemy, FlightSnapshot, InputIntent, ProjectileSnapshot, SimProjectile, TickEvent,
    VolumeSnapshot, WorldSnapshot,
};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub struct FlightSim {
    tuning: FlightTuning,
    projectile: ProjectileTuning,
    seed: u64,
    craft: Craft,
    projectiles: Vec<SimProjectile>,
    enemies: Vec<Enemy>,
    next_projectile_id: u64,
    score: u32,
}

impl FlightSim {
    pub fn new(tuning: FlightTuning, projectile: ProjectileTuning, seed: u64) -> Self {
        let mut sim = Self {
            tuning,
            projectile,
            seed,
            craft: Craft::at(tuning.spawn),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            next_projectile_id: 1,
            score: 0,
        };
        sim.reset();
        sim
    }

    fn reset(&mut self) {
        self.craft = Craft::at(self.tuning.spawn);
        self.projectiles.clear();
        self.enemies = scatter_enemies(&self.tuning, self.seed);
        self.next_projectile_id = 1;
        self.score = 0;
    }

    pub fn craft(&self) -> &Craft {
        &self.craft
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

// Same seed, same layout: restarts replay the same field.
fn scatter_enemies(tuning: &FlightTuning, seed: u64) -> Vec<Enemy> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let spread = tuning.enemy_spread;
    let y = tuning.enemy_half_extents.y;

    (0..tuning.enemy_count)
        .map(|i| {
            let x = rng.random_range(-spread..=spread);
            let z = rng.random_range(-spread..=spread);
            Enemy {
                id: i as u32 + 1,
                bounds: Aabb::new(Vec3::new(x, y, z), tuning.enemy_half_extents),
            }
        })
        .collect()
}

impl Simulation for FlightSim {
    fn mode(&self) -> GameMode {
        GameMode::Flight
    }

    fn step(&mut self, input: &InputIntent) -> Vec<TickEvent> {
        let mut events = Vec::new();
        tick_craft(&mut self.craft, input, &self.tuning);
        self.score += tick_projectiles(
            &mut self.craft,
            input.fire,
            &mut self.projectiles,
            &mut self.enemies,
            &mut self.next_projectile_id,
            &self.projectile,
            &mut events,
        );
        events
    }

    // Flight has no difficulty table.
    fn restart(&mut self, _difficulty: Option<Difficulty>) {
        self.reset();
    }

    fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::Flight(FlightSnapshot {
            position: self.craft.position,
            heading: self.craft.heading,
            speed: self.craft.speed,
            score: self.score,
            projectiles: self.projectiles.iter().map(ProjectileSnapshot::from).collect(),
            enemies: self.enemies.iter().map(VolumeSnapshot::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_created_then_enemies_are_scattered_on_the_ground_within_spread() {
        let sim = FlightSim::new(FlightTuning::default(), ProjectileTuning::default(), 7);

        assert_eq!(sim.enemies().len(), 10);
        for enemy in sim.enemies() {
            assert_eq!(enemy.bounds.center.y, 1.0);
            assert!(enemy.bounds.center.x.abs() <= 50.0);
            assert!(enemy.bounds.center.z.abs() <= 50.0);
        }
    }

    #[test]
    fn when_restarted_then_the_same_seed_gives_the_same_layout() {
        let mut sim = FlightSim::new(FlightTuning::default(), ProjectileTuning::default(), 42);
        let before: Vec<Vec3> = sim.enemies().iter().map(|e| e.bounds.center).collect();

        sim.step(&InputIntent {
            forward: true,
            fire: true,
            ..InputIntent::default()
        });
        sim.restart(None);

        let after: Vec<Vec3> = sim.enemies().iter().map(|e| e.bounds.center).collect();
        assert_eq!(before, after);
        assert_eq!(sim.craft().position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(sim.score(), 0);
    }

    #[test]
    fn when_an_enemy_sits_in_front_then_firing_destroys_it() {
        let tuning = FlightTuning {
            enemy_count: 0,
            ..FlightTuning::default()
        };
        let mut sim = FlightSim::new(tuning, ProjectileTuning::default(), 1);
        sim.enemies.push(Enemy {
            id: 1,
            bounds: Aabb::new(Vec3::new(0.0, 1.5, 2.0), Vec3::ONE),
        });

        let mut events = sim.step(&InputIntent {
            fire: true,
            ..InputIntent::default()
        });
        for _ in 0..4 {
            events.extend(sim.step(&InputIntent::default()));
        }

        assert!(sim.enemies().is_empty());
        assert_eq!(sim.score(), 100);
        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::EnemyDestroyed { enemy_id: 1, .. })));
    }
}
