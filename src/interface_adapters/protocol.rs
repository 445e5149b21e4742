// Renderer-facing frame DTOs and conversions.
// Vectors are flattened to `[x, y, z]` arrays on the wire.

use crate::domain::{
    AvatarPose, GameOverReason, TickEvent, VolumeKind, VolumeSnapshot, WorldSnapshot,
};
use crate::use_cases::{FrameUpdate, SessionStatus};
use serde::Serialize;

/// Messages published to renderers and other frame consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum FrameMessage {
    // Snapshot and events for a given tick.
    Frame(FrameDto),
    // Session status transitions (running, paused, game over).
    Status(SessionStatusDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameDto {
    pub tick: u64,
    pub status: SessionStatusDto,
    pub score: u32,
    pub world: WorldDto,
    pub events: Vec<EventDto>,
}

impl From<FrameUpdate> for FrameDto {
    fn from(frame: FrameUpdate) -> Self {
        Self {
            tick: frame.tick,
            status: frame.status.into(),
            score: frame.snapshot.score(),
            world: WorldDto::from(&frame.snapshot),
            events: frame.events.iter().map(EventDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionStatusDto {
    Running,
    Paused,
    GameOver { reason: GameOverReasonDto },
}

impl From<SessionStatus> for SessionStatusDto {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Running => SessionStatusDto::Running,
            SessionStatus::Paused => SessionStatusDto::Paused,
            SessionStatus::GameOver { reason } => SessionStatusDto::GameOver {
                reason: reason.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverReasonDto {
    Fell,
    HealthZero,
}

impl From<GameOverReason> for GameOverReasonDto {
    fn from(reason: GameOverReason) -> Self {
        match reason {
            GameOverReason::Fell => GameOverReasonDto::Fell,
            GameOverReason::HealthZero => GameOverReasonDto::HealthZero,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WorldDto {
    Platformer {
        avatar: AvatarDto,
        health: i32,
        max_health: i32,
        volumes: Vec<VolumeDto>,
    },
    Flight {
        position: [f32; 3],
        heading: f32,
        speed: f32,
        projectiles: Vec<ProjectileDto>,
        enemies: Vec<VolumeDto>,
    },
}

impl From<&WorldSnapshot> for WorldDto {
    fn from(snapshot: &WorldSnapshot) -> Self {
        match snapshot {
            WorldSnapshot::Platformer(s) => WorldDto::Platformer {
                avatar: AvatarDto {
                    position: s.avatar.position.to_array(),
                    velocity: s.avatar.velocity.to_array(),
                    on_ground: s.avatar.on_ground,
                    pose: match s.avatar.pose {
                        AvatarPose::Idle => "idle",
                        AvatarPose::Run => "run",
                        AvatarPose::Airborne => "airborne",
                    },
                },
                health: s.health,
                max_health: s.max_health,
                volumes: s.volumes.iter().map(VolumeDto::from).collect(),
            },
            WorldSnapshot::Flight(s) => WorldDto::Flight {
                position: s.position.to_array(),
                heading: s.heading,
                speed: s.speed,
                projectiles: s
                    .projectiles
                    .iter()
                    .map(|p| ProjectileDto {
                        id: p.id,
                        position: p.position.to_array(),
                    })
                    .collect(),
                enemies: s.enemies.iter().map(VolumeDto::from).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvatarDto {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub on_ground: bool,
    pub pose: &'static str,
}

/// Flattened volume state; `kind` is one of platform, moving_platform, obstacle, collectible.
#[derive(Debug, Clone, Serialize)]
pub struct VolumeDto {
    pub id: u32,
    pub kind: &'static str,
    pub center: [f32; 3],
    pub half_extents: [f32; 3],
}

impl From<&VolumeSnapshot> for VolumeDto {
    fn from(volume: &VolumeSnapshot) -> Self {
        Self {
            id: volume.id,
            kind: match volume.kind {
                VolumeKind::StaticPlatform => "platform",
                VolumeKind::MovingPlatform(_) => "moving_platform",
                VolumeKind::Obstacle => "obstacle",
                VolumeKind::Collectible => "collectible",
            },
            center: volume.center.to_array(),
            half_extents: volume.half_extents.to_array(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileDto {
    pub id: u64,
    pub position: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum EventDto {
    Jumped,
    Landed,
    Hit { obstacle_id: u32, damage: i32, health: i32 },
    Collected { collectible_id: u32, value: u32, position: [f32; 3] },
    Fired { projectile_id: u64 },
    EnemyDestroyed { enemy_id: u32, value: u32, position: [f32; 3] },
    GameOver { reason: GameOverReasonDto },
}

impl From<&TickEvent> for EventDto {
    fn from(event: &TickEvent) -> Self {
        match *event {
            TickEvent::Jumped => EventDto::Jumped,
            TickEvent::Landed => EventDto::Landed,
            TickEvent::Hit {
                obstacle_id,
                damage,
                health,
            } => EventDto::Hit {
                obstacle_id,
                damage,
                health,
            },
            TickEvent::Collected {
                collectible_id,
                value,
                position,
            } => EventDto::Collected {
                collectible_id,
                value,
                position: position.to_array(),
            },
            TickEvent::Fired { projectile_id } => EventDto::Fired { projectile_id },
            TickEvent::EnemyDestroyed {
                enemy_id,
                value,
                position,
            } => EventDto::EnemyDestroyed {
                enemy_id,
                value,
                position: position.to_array(),
            },
            TickEvent::GameOver { reason } => EventDto::GameOver {
                reason: reason.into(),
            },
        }
    }
}
