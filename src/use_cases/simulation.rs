// Port between the session controller and a concrete game mode.

use super::types::GameMode;
use crate::domain::tuning::Difficulty;
use crate::domain::{InputIntent, TickEvent, WorldSnapshot};

/// A game mode the session loop can drive one tick at a time.
pub trait Simulation: Send + 'static {
    fn mode(&self) -> GameMode;

    /// Advances one fixed tick and reports what happened.
    fn step(&mut self, input: &InputIntent) -> Vec<TickEvent>;

    /// Resets to the start of the run, switching difficulty when one is given.
    fn restart(&mut self, difficulty: Option<Difficulty>);

    fn snapshot(&self) -> WorldSnapshot;
}

/// Input known ahead of time, looked up by zero-based tick.
pub trait InputFeed: Send + 'static {
    /// `None` once the feed has run out; the session then holds no controls.
    fn intent_at(&self, tick: u64) -> Option<InputIntent>;
}
