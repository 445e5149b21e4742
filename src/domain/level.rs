// Level authoring: an immutable blueprint that can be instantiated into a fresh world.

use crate::domain::errors::LevelError;
use crate::domain::geometry::Aabb;
use crate::domain::state::{Oscillator, Volume, VolumeKind, World};
use crate::domain::tuning::PickupTuning;
use glam::Vec3;

/// Blueprint for a platformer course.
///
/// Volumes keep the order they were added in; the platform resolver walks them in that
/// order, so authoring order is observable behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub spawn: Vec3,
    volumes: Vec<Volume>,
    next_id: u32,
    pickups: PickupTuning,
}

impl Level {
    pub fn new(spawn: Vec3) -> Self {
        Self::with_pickups(spawn, PickupTuning::default())
    }

    pub fn with_pickups(spawn: Vec3, pickups: PickupTuning) -> Self {
        Self {
            spawn,
            volumes: Vec::new(),
            next_id: 1,
            pickups,
        }
    }

    fn push(&mut self, bounds: Aabb, kind: VolumeKind) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.volumes.push(Volume { id, bounds, kind });
        id
    }

    /// Adds a static platform described by its center and full size.
    pub fn platform(&mut self, center: Vec3, size: Vec3) -> u32 {
        self.push(Aabb::from_size(center, size), VolumeKind::StaticPlatform)
    }

    /// Adds a platform that bobs between its start height and `start + range`.
    pub fn moving_platform(&mut self, center: Vec3, size: Vec3, range: f32, speed: f32) -> u32 {
        self.push(
            Aabb::from_size(center, size),
            VolumeKind::MovingPlatform(Oscillator::new(center.y, range, speed)),
        )
    }

    pub fn obstacle(&mut self, center: Vec3, size: Vec3) -> u32 {
        self.push(Aabb::from_size(center, size), VolumeKind::Obstacle)
    }

    pub fn collectible(&mut self, center: Vec3) -> u32 {
        self.push(
            Aabb::new(center, self.pickups.half_extents),
            VolumeKind::Collectible,
        )
    }

    /// Places a 3x3 grid of coins hovering above the platform with the given id.
    ///
    /// Coins are placed relative to the platform's authored position and do not follow
    /// a moving platform afterwards.
    pub fn coins_above(&mut self, platform_id: u32) {
        let Some(platform) = self
            .volumes
            .iter()
            .find(|v| v.id == platform_id && v.kind.is_platform())
            .map(|v| v.bounds)
        else {
            return;
        };

        let size = platform.half_extents * 2.0;
        let y = platform.center.y + size.y + self.pickups.hover_height;
        for i in -1..=1 {
            for k in -1..=1 {
                let x = platform.center.x + i as f32 * (size.x / 4.0);
                let z = platform.center.z + k as f32 * (size.z / 4.0);
                self.collectible(Vec3::new(x, y, z));
            }
        }
    }

    pub fn pickups(&self) -> PickupTuning {
        self.pickups
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    /// Builds a fresh world from the blueprint.
    pub fn instantiate(&self) -> World {
        let mut world = World::default();
        for volume in &self.volumes {
            world.insert(volume.clone());
        }
        world
    }

    /// Rejects volumes the resolver cannot handle.
    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.spawn.is_finite() {
            return Err(LevelError::InvalidSpawn);
        }

        for (index, volume) in self.volumes.iter().enumerate() {
            if !volume.bounds.is_well_formed() {
                return Err(LevelError::MalformedVolume {
                    index,
                    kind: kind_name(&volume.kind),
                });
            }
            if let VolumeKind::MovingPlatform(motion) = volume.kind {
                let valid = motion.range.is_finite()
                    && motion.speed.is_finite()
                    && motion.range >= 0.0
                    && motion.speed >= 0.0;
                if !valid {
                    return Err(LevelError::InvalidOscillator { index });
                }
            }
        }
        Ok(())
    }

    /// The built-in course: a main path of wide platforms, side platforms, two lifts and
    /// three posts, with a coin grid over every platform.
    pub fn classic() -> Self {
        let mut level = Level::new(Vec3::new(0.0, 1.0, 0.0));
        let wide = Vec3::new(10.0, 1.0, 10.0);
        let narrow = Vec3::new(8.0, 1.0, 8.0);
        let lift = Vec3::new(6.0, 1.0, 6.0);
        let post = Vec3::new(1.0, 2.0, 1.0);

        // Main path.
        let mut platforms = vec![
            level.platform(Vec3::new(0.0, 0.0, 0.0), wide),
            level.platform(Vec3::new(12.0, 0.0, 0.0), wide),
            level.platform(Vec3::new(24.0, 0.0, 0.0), wide),
            level.platform(Vec3::new(36.0, 0.0, 0.0), wide),
        ];
        // Side platforms.
        platforms.push(level.platform(Vec3::new(12.0, 0.0, 12.0), narrow));
        platforms.push(level.platform(Vec3::new(24.0, 0.0, -12.0), narrow));
        platforms.push(level.platform(Vec3::new(36.0, 0.0, 12.0), narrow));
        // Lifts between the main platforms.
        platforms.push(level.moving_platform(Vec3::new(18.0, 0.0, 0.0), lift, 3.0, 0.02));
        platforms.push(level.moving_platform(Vec3::new(30.0, 0.0, 0.0), lift, 4.0, 0.03));

        level.obstacle(Vec3::new(15.0, 3.0, 5.0), post);
        level.obstacle(Vec3::new(30.0, 5.0, -5.0), post);
        level.obstacle(Vec3::new(45.0, 7.0, 5.0), post);

        for id in platforms {
            level.coins_above(id);
        }
        level
    }
}

fn kind_name(kind: &VolumeKind) -> &'static str {
    match kind {
        VolumeKind::StaticPlatform => "platform",
        VolumeKind::MovingPlatform(_) => "moving platform",
        VolumeKind::Obstacle => "obstacle",
        VolumeKind::Collectible => "collectible",
    }
}
