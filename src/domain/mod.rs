// Domain layer: core simulation types and rules.

pub mod errors;
pub mod geometry;
pub mod level;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::{LevelError, TuningError};
pub use geometry::Aabb;
pub use level::Level;
pub use state::{
    AvatarPose, AvatarSnapshot, AvatarState, CameraBasis, Craft, Enemy, FlightSnapshot,
    GameOverReason, InputIntent, Oscillator, PlatformerSnapshot, ProjectileSnapshot, SimProjectile,
    SimState, TickEvent, Volume, VolumeKind, VolumeSnapshot, World, WorldSnapshot,
};
