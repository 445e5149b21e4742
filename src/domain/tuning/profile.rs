//! Per-difficulty physics and damage constants for the platformer.
//!
//! All values are per tick: the simulation advances one fixed step per rendered frame.

use crate::domain::errors::TuningError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn profile(self) -> PhysicsProfile {
        match self {
            Difficulty::Easy => PhysicsProfile {
                move_speed: 0.08,
                jump_force: 0.8,
                gravity: 0.05,
                max_health: 150,
                damage_per_hit: 1,
            },
            Difficulty::Medium => PhysicsProfile {
                move_speed: 0.1,
                jump_force: 1.0,
                gravity: 0.06,
                max_health: 100,
                damage_per_hit: 2,
            },
            Difficulty::Hard => PhysicsProfile {
                move_speed: 0.12,
                jump_force: 1.2,
                gravity: 0.07,
                max_health: 75,
                damage_per_hit: 3,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(TuningError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsProfile {
    /// Horizontal distance covered per tick for each held direction.
    pub move_speed: f32,

    /// Vertical velocity applied on the tick a jump starts.
    pub jump_force: f32,

    /// Subtracted from vertical velocity every tick.
    pub gravity: f32,

    /// Health at the start of a run.
    pub max_health: i32,

    /// Health lost per overlapping obstacle per tick.
    pub damage_per_hit: i32,
}

impl Default for PhysicsProfile {
    fn default() -> Self {
        Difficulty::default().profile()
    }
}

impl PhysicsProfile {
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::InvalidConstant { name, value });
            }
        }
        if self.max_health <= 0 {
            return Err(TuningError::InvalidMaxHealth(self.max_health));
        }
        if self.damage_per_hit < 0 {
            return Err(TuningError::NegativeDamage(self.damage_per_hit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_parsing_difficulty_then_case_and_whitespace_are_ignored() {
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!(matches!(
            "nightmare".parse::<Difficulty>(),
            Err(TuningError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn when_difficulty_rises_then_profile_gets_faster_and_harsher() {
        let easy = Difficulty::Easy.profile();
        let hard = Difficulty::Hard.profile();

        assert!(hard.move_speed > easy.move_speed);
        assert!(hard.gravity > easy.gravity);
        assert!(hard.damage_per_hit > easy.damage_per_hit);
        assert!(hard.max_health < easy.max_health);
    }

    #[test]
    fn when_builtin_profiles_are_validated_then_all_pass() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.profile().validate(), Ok(()));
        }
    }

    #[test]
    fn when_gravity_is_negative_then_validation_rejects_it() {
        let profile = PhysicsProfile {
            gravity: -0.05,
            ..PhysicsProfile::default()
        };

        assert!(matches!(
            profile.validate(),
            Err(TuningError::InvalidConstant { name: "gravity", .. })
        ));
    }

    #[test]
    fn when_gravity_is_zero_then_validation_accepts_it() {
        let profile = PhysicsProfile {
            gravity: 0.0,
            ..PhysicsProfile::default()
        };

        assert_eq!(profile.validate(), Ok(()));
    }

    #[test]
    fn when_max_health_is_zero_then_validation_rejects_it() {
        let profile = PhysicsProfile {
            max_health: 0,
            ..PhysicsProfile::default()
        };

        assert_eq!(profile.validate(), Err(TuningError::InvalidMaxHealth(0)));
    }
}
