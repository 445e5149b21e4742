// Shared builders for integration tests.
#![allow(dead_code)]

use glam::Vec3;
use platformer_sim::domain::tuning::{PhysicsProfile, PickupTuning, PlayerTuning};
use platformer_sim::domain::systems::Resolver;
use platformer_sim::domain::{Aabb, Oscillator, SimState, Volume, VolumeKind, World};
use platformer_sim::use_cases::{SessionRegistry, SessionSettings};
use std::time::Duration;

// Avatar half-extents for the 1 x 2 x 1 box.
pub const HALF: Vec3 = Vec3::new(0.5, 1.0, 0.5);

// A profile with round numbers so expected values stay exact.
pub fn profile(gravity: f32) -> PhysicsProfile {
    PhysicsProfile {
        move_speed: 0.1,
        jump_force: 1.0,
        gravity,
        max_health: 10,
        damage_per_hit: 2,
    }
}

pub fn resolver_with_knockback(knockback: f32) -> Resolver {
    Resolver::new(
        PlayerTuning {
            knockback,
            ..PlayerTuning::default()
        },
        PickupTuning::default(),
    )
}

pub fn platform(id: u32, center: Vec3, size: Vec3) -> Volume {
    Volume {
        id,
        bounds: Aabb::from_size(center, size),
        kind: VolumeKind::StaticPlatform,
    }
}

pub fn moving_platform(id: u32, center: Vec3, size: Vec3, range: f32, speed: f32) -> Volume {
    Volume {
        id,
        bounds: Aabb::from_size(center, size),
        kind: VolumeKind::MovingPlatform(Oscillator::new(center.y, range, speed)),
    }
}

pub fn obstacle(id: u32, center: Vec3) -> Volume {
    Volume {
        id,
        bounds: Aabb::from_size(center, Vec3::new(1.0, 2.0, 1.0)),
        kind: VolumeKind::Obstacle,
    }
}

pub fn coin(id: u32, center: Vec3) -> Volume {
    Volume {
        id,
        bounds: Aabb::new(center, PickupTuning::default().half_extents),
        kind: VolumeKind::Collectible,
    }
}

pub fn world(volumes: impl IntoIterator<Item = Volume>) -> World {
    let mut world = World::default();
    for volume in volumes {
        world.insert(volume);
    }
    world
}

// The 10 x 1 x 10 floor slab at the origin; its top face is at y = 0.5.
pub fn floor() -> Volume {
    platform(1, Vec3::ZERO, Vec3::new(10.0, 1.0, 10.0))
}

pub fn standing_on_floor(health: i32) -> SimState {
    let mut state = SimState::new(Vec3::new(0.0, 1.5, 0.0), health);
    state.avatar.on_ground = true;
    state
}

pub fn registry() -> SessionRegistry {
    SessionRegistry::new(SessionSettings {
        command_channel_capacity: 64,
        frame_broadcast_capacity: 256,
        tick_interval: Duration::from_millis(1000 / 60),
    })
}
