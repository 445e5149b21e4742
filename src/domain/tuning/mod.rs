// Gameplay tuning values, kept apart from runtime configuration.

pub mod flight;
pub mod pickup;
pub mod player;
pub mod profile;
pub mod projectile;

pub use flight::FlightTuning;
pub use pickup::PickupTuning;
pub use player::PlayerTuning;
pub use profile::{Difficulty, PhysicsProfile};
pub use projectile::ProjectileTuning;
