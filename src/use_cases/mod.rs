// Use cases layer: session workflows around the simulation.

pub mod flight;
pub mod game;
pub mod platformer;
pub mod registry;
pub mod session;
pub mod simulation;
pub mod types;

pub use flight::FlightSim;
pub use platformer::PlatformerSim;
pub use registry::{SessionError, SessionHandle, SessionRegistry, SessionSettings};
pub use session::Session;
pub use simulation::{InputFeed, Simulation};
pub use types::{FrameUpdate, GameMode, SessionCommand, SessionStatus};
