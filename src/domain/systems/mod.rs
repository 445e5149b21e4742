// Per-tick simulation systems.

pub mod flight;
pub mod intent;
pub mod movement;
pub mod obstacles;
pub mod oscillators;
pub mod pickups;
pub mod platforms;
pub mod projectiles;
pub mod resolver;

pub use platforms::{FirstAxisWins, PlatformPolicy};
pub use resolver::Resolver;
