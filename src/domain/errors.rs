// Domain-level errors raised while loading tuning and level data.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    UnknownDifficulty(String),
    InvalidConstant { name: &'static str, value: f32 },
    InvalidMaxHealth(i32),
    NegativeDamage(i32),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::UnknownDifficulty(name) => write!(f, "unknown difficulty `{name}`"),
            TuningError::InvalidConstant { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            TuningError::InvalidMaxHealth(value) => {
                write!(f, "max health must be positive, got {value}")
            }
            TuningError::NegativeDamage(value) => {
                write!(f, "damage per hit must not be negative, got {value}")
            }
        }
    }
}

impl std::error::Error for TuningError {}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    MalformedVolume { index: usize, kind: &'static str },
    InvalidOscillator { index: usize },
    InvalidSpawn,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MalformedVolume { index, kind } => {
                write!(f, "{kind} #{index} has a non-finite center or non-positive extents")
            }
            LevelError::InvalidOscillator { index } => {
                write!(f, "platform #{index} has a non-finite or negative motion range/speed")
            }
            LevelError::InvalidSpawn => write!(f, "spawn point must be finite"),
        }
    }
}

impl std::error::Error for LevelError {}
