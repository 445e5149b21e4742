// TOML level files for custom courses.
//
// ```toml
// spawn = [0.0, 1.0, 0.0]
//
// [[volumes]]
// kind = "platform"
// center = [0.0, 0.0, 0.0]
// size = [10.0, 1.0, 10.0]
// coins = true
//
// [[volumes]]
// kind = "moving_platform"
// center = [18.0, 0.0, 0.0]
// size = [6.0, 1.0, 6.0]
// range = 3.0
// speed = 0.02
// ```

use crate::domain::tuning::PickupTuning;
use crate::domain::{Level, LevelError};
use glam::Vec3;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum LevelFileError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(LevelError),
}

impl fmt::Display for LevelFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFileError::Io(e) => write!(f, "failed to read level file: {e}"),
            LevelFileError::Parse(e) => write!(f, "failed to parse level file: {e}"),
            LevelFileError::Invalid(e) => write!(f, "invalid level: {e}"),
        }
    }
}

impl std::error::Error for LevelFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelFileError::Io(e) => Some(e),
            LevelFileError::Parse(e) => Some(e),
            LevelFileError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LevelFileError {
    fn from(e: std::io::Error) -> Self {
        LevelFileError::Io(e)
    }
}

impl From<toml::de::Error> for LevelFileError {
    fn from(e: toml::de::Error) -> Self {
        LevelFileError::Parse(e)
    }
}

impl From<LevelError> for LevelFileError {
    fn from(e: LevelError) -> Self {
        LevelFileError::Invalid(e)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelFile {
    pub spawn: [f32; 3],
    #[serde(default)]
    pub pickups: Option<PickupsDto>,
    #[serde(default)]
    pub volumes: Vec<VolumeDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickupsDto {
    pub reward: Option<u32>,
    pub half_extents: Option<[f32; 3]>,
    pub hover_height: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolumeDef {
    Platform {
        center: [f32; 3],
        size: [f32; 3],
        #[serde(default)]
        coins: bool,
    },
    MovingPlatform {
        center: [f32; 3],
        size: [f32; 3],
        range: f32,
        speed: f32,
        #[serde(default)]
        coins: bool,
    },
    Obstacle {
        center: [f32; 3],
        size: [f32; 3],
    },
    Collectible {
        center: [f32; 3],
    },
}

impl TryFrom<LevelFile> for Level {
    type Error = LevelError;

    fn try_from(file: LevelFile) -> Result<Self, Self::Error> {
        let defaults = PickupTuning::default();
        let pickups = match file.pickups {
            Some(p) => PickupTuning {
                reward: p.reward.unwrap_or(defaults.reward),
                half_extents: p.half_extents.map(Vec3::from).unwrap_or(defaults.half_extents),
                hover_height: p.hover_height.unwrap_or(defaults.hover_height),
            },
            None => defaults,
        };

        let mut level = Level::with_pickups(Vec3::from(file.spawn), pickups);
        // Coin grids go after every authored volume, matching the built-in course.
        let mut coin_platforms = Vec::new();
        for def in file.volumes {
            match def {
                VolumeDef::Platform {
                    center,
                    size,
                    coins,
                } => {
                    let id = level.platform(center.into(), size.into());
                    if coins {
                        coin_platforms.push(id);
                    }
                }
                VolumeDef::MovingPlatform {
                    center,
                    size,
                    range,
                    speed,
                    coins,
                } => {
                    let id = level.moving_platform(center.into(), size.into(), range, speed);
                    if coins {
                        coin_platforms.push(id);
                    }
                }
                VolumeDef::Obstacle { center, size } => {
                    level.obstacle(center.into(), size.into());
                }
                VolumeDef::Collectible { center } => {
                    level.collectible(center.into());
                }
            }
        }
        for id in coin_platforms {
            level.coins_above(id);
        }

        level.validate()?;
        Ok(level)
    }
}

pub fn parse_level(text: &str) -> Result<Level, LevelFileError> {
    let file: LevelFile = toml::from_str(text)?;
    Ok(Level::try_from(file)?)
}

pub fn load_level(path: impl AsRef<Path>) -> Result<Level, LevelFileError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let level = parse_level(&text)?;
    debug!(path = %path.display(), volumes = level.volumes().len(), "level loaded");
    Ok(level)
}
