// Domain-level simulation entities and input/snapshot types.

use crate::domain::geometry::Aabb;
use glam::Vec3;

/// Position and motion of the player-controlled avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
}

impl AvatarState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            on_ground: false,
        }
    }

    pub fn bounds(&self, half_extents: Vec3) -> Aabb {
        Aabb::new(self.position, half_extents)
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Fell,
    HealthZero,
}

/// Everything the resolver mutates for one run of the platformer.
#[derive(Debug, Clone, PartialEq)]
pub struct SimState {
    pub avatar: AvatarState,
    pub health: i32,
    pub score: u32,
    // Set once; a terminal state never changes again until reset.
    pub outcome: Option<GameOverReason>,
}

impl SimState {
    pub fn new(spawn: Vec3, health: i32) -> Self {
        Self {
            avatar: AvatarState::at(spawn),
            health,
            score: 0,
            outcome: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Vertical ping-pong motion for moving platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub start_y: f32,
    pub range: f32,
    pub speed: f32,
    // +1.0 rising, -1.0 sinking.
    pub direction: f32,
}

impl Oscillator {
    pub fn new(start_y: f32, range: f32, speed: f32) -> Self {
        Self {
            start_y,
            range,
            speed,
            direction: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeKind {
    StaticPlatform,
    MovingPlatform(Oscillator),
    Obstacle,
    Collectible,
}

impl VolumeKind {
    pub fn is_platform(&self) -> bool {
        matches!(self, VolumeKind::StaticPlatform | VolumeKind::MovingPlatform(_))
    }
}

/// A collidable box placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    pub id: u32,
    pub bounds: Aabb,
    pub kind: VolumeKind,
}

/// Collidable volumes grouped the way the resolver walks them.
///
/// Platforms (static and moving) share one list in insertion order; obstacles and
/// collectibles are kept apart because they are resolved by separate steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub platforms: Vec<Volume>,
    pub obstacles: Vec<Volume>,
    pub collectibles: Vec<Volume>,
}

impl World {
    pub fn insert(&mut self, volume: Volume) {
        match volume.kind {
            VolumeKind::StaticPlatform | VolumeKind::MovingPlatform(_) => {
                self.platforms.push(volume)
            }
            VolumeKind::Obstacle => self.obstacles.push(volume),
            VolumeKind::Collectible => self.collectibles.push(volume),
        }
    }

    pub fn volume_count(&self) -> usize {
        self.platforms.len() + self.obstacles.len() + self.collectibles.len()
    }
}

/// Horizontal camera axes used to make movement camera-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl CameraBasis {
    /// Flattens a look direction onto the ground plane and derives the right axis from it.
    pub fn from_look_direction(look: Vec3) -> Self {
        let forward = Vec3::new(look.x, 0.0, look.z).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        Self { forward, right }
    }

    /// Yaw 0 looks down -Z; positive yaw turns toward +X.
    pub fn from_yaw(yaw: f32) -> Self {
        let (sin, cos) = yaw.sin_cos();
        Self::from_look_direction(Vec3::new(sin, 0.0, -cos))
    }
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self::from_yaw(0.0)
    }
}

/// Snapshot of held controls for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    // Only read by flight mode.
    pub fire: bool,
    pub camera: CameraBasis,
}

impl InputIntent {
    pub fn is_moving(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Discrete things that happened during a tick, consumed by presentation layers.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    Jumped,
    Landed,
    Hit {
        obstacle_id: u32,
        damage: i32,
        health: i32,
    },
    Collected {
        collectible_id: u32,
        value: u32,
        position: Vec3,
    },
    Fired {
        projectile_id: u64,
    },
    EnemyDestroyed {
        enemy_id: u32,
        value: u32,
        position: Vec3,
    },
    GameOver {
        reason: GameOverReason,
    },
}

/// Animation hint for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarPose {
    Idle,
    Run,
    Airborne,
}

impl AvatarPose {
    pub fn from_motion(on_ground: bool, moving: bool) -> Self {
        match (on_ground, moving) {
            (false, _) => AvatarPose::Airborne,
            (true, true) => AvatarPose::Run,
            (true, false) => AvatarPose::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub on_ground: bool,
    pub pose: AvatarPose,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSnapshot {
    pub id: u32,
    pub center: Vec3,
    pub half_extents: Vec3,
    pub kind: VolumeKind,
}

impl From<&Volume> for VolumeSnapshot {
    fn from(v: &Volume) -> Self {
        Self {
            id: v.id,
            center: v.bounds.center,
            half_extents: v.bounds.half_extents,
            kind: v.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformerSnapshot {
    pub avatar: AvatarSnapshot,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    pub volumes: Vec<VolumeSnapshot>,
}

/// Helicopter state for flight mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Craft {
    pub position: Vec3,
    // Signed throttle speed; negative while reversing.
    pub speed: f32,
    // Rotation about +Y in radians; 0 faces +Z.
    pub heading: f32,
    pub fire_cooldown: u32,
}

impl Craft {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            speed: 0.0,
            heading: 0.0,
            fire_cooldown: 0,
        }
    }
}

pub struct SimProjectile {
    pub id: u64,
    pub position: Vec3,
    pub velocity: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub position: Vec3,
}

impl From<&SimProjectile> for ProjectileSnapshot {
    fn from(p: &SimProjectile) -> Self {
        Self {
            id: p.id,
            position: p.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlightSnapshot {
    pub position: Vec3,
    pub heading: f32,
    pub speed: f32,
    pub score: u32,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub enemies: Vec<VolumeSnapshot>,
}

impl From<&Enemy> for VolumeSnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.id,
            center: e.bounds.center,
            half_extents: e.bounds.half_extents,
            kind: VolumeKind::Obstacle,
        }
    }
}

/// Per-mode world snapshot carried in frame updates.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldSnapshot {
    Platformer(PlatformerSnapshot),
    Flight(FlightSnapshot),
}

impl WorldSnapshot {
    pub fn score(&self) -> u32 {
        match self {
            WorldSnapshot::Platformer(s) => s.score,
            WorldSnapshot::Flight(s) => s.score,
        }
    }
}
