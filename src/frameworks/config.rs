use crate::domain::TuningError;
use crate::domain::tuning::Difficulty;
use crate::use_cases::GameMode;
use std::{env, path::PathBuf, time::Duration};

// Runtime constants (not gameplay tuning).

pub fn game_mode() -> Result<GameMode, String> {
    match env::var("GAME_MODE") {
        Ok(value) => value.parse(),
        Err(_) => Ok(GameMode::default()),
    }
}

pub fn difficulty() -> Result<Difficulty, TuningError> {
    match env::var("DIFFICULTY") {
        Ok(value) => value.parse(),
        Err(_) => Ok(Difficulty::default()),
    }
}

/// Custom level file; the built-in course is used when unset.
pub fn level_path() -> Option<PathBuf> {
    env::var_os("LEVEL_PATH").map(PathBuf::from)
}

/// Input script for headless runs; the avatar idles when unset.
pub fn input_script() -> Option<PathBuf> {
    env::var_os("INPUT_SCRIPT").map(PathBuf::from)
}

pub fn tick_interval() -> Duration {
    let hz = env::var("TICK_RATE_HZ")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|hz| *hz > 0)
        .unwrap_or(DEFAULT_TICK_RATE_HZ);
    Duration::from_secs(1) / hz
}

/// Tick limit for a run; 0 means "until the script ends".
pub fn max_ticks() -> u64 {
    env::var("MAX_TICKS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_MAX_TICKS)
}

pub fn seed() -> Option<u64> {
    env::var("SEED").ok().and_then(|value| value.parse().ok())
}

pub const COMMAND_CHANNEL_CAPACITY: usize = 1024;
pub const FRAME_BROADCAST_CAPACITY: usize = 128;
pub const TONE_CHANNEL_CAPACITY: usize = 32;

pub const DEFAULT_TICK_RATE_HZ: u32 = 60;
// Ten seconds at the default tick rate.
pub const DEFAULT_MAX_TICKS: u64 = 600;
