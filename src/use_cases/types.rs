// Use-case level inputs/outputs for the session loop.

use crate::domain::tuning::Difficulty;
use crate::domain::{GameOverReason, InputIntent, TickEvent, WorldSnapshot};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Platformer,
    Flight,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platformer" => Ok(GameMode::Platformer),
            "flight" | "helicopter" => Ok(GameMode::Flight),
            other => Err(format!("unknown game mode `{other}`")),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Platformer => f.write_str("platformer"),
            GameMode::Flight => f.write_str("flight"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionCommand {
    // Replaces the held controls used on following ticks.
    Input(InputIntent),
    TogglePause,
    // Rebuilds the run from its level; optionally switches difficulty first.
    Restart { difficulty: Option<Difficulty> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Paused,
    GameOver { reason: GameOverReason },
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::GameOver { .. })
    }
}

#[derive(Debug, Clone)]
pub struct FrameUpdate {
    pub tick: u64,
    pub status: SessionStatus,
    pub snapshot: WorldSnapshot,
    pub events: Vec<TickEvent>,
}
