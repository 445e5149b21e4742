// Scripted input for headless runs: held controls for a number of ticks, segment by segment.

use crate::domain::{CameraBasis, InputIntent};
use crate::use_cases::InputFeed;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum ScriptError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    EmptySegment { index: usize },
    InvalidYaw { index: usize },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io(e) => write!(f, "failed to read input script: {e}"),
            ScriptError::Parse(e) => write!(f, "failed to parse input script: {e}"),
            ScriptError::EmptySegment { index } => {
                write!(f, "segment #{index} must last at least one tick")
            }
            ScriptError::InvalidYaw { index } => write!(f, "segment #{index} has a non-finite yaw"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io(e) => Some(e),
            ScriptError::Parse(e) => Some(e),
            ScriptError::EmptySegment { .. } | ScriptError::InvalidYaw { .. } => None,
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(e: std::io::Error) -> Self {
        ScriptError::Io(e)
    }
}

impl From<toml::de::Error> for ScriptError {
    fn from(e: toml::de::Error) -> Self {
        ScriptError::Parse(e)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputScript {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Segment {
    pub ticks: u32,
    #[serde(default)]
    pub forward: bool,
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub fire: bool,
    /// Camera yaw in radians; 0 looks down -Z.
    #[serde(default)]
    pub yaw: f32,
}

impl Segment {
    pub fn intent(&self) -> InputIntent {
        InputIntent {
            forward: self.forward,
            back: self.back,
            left: self.left,
            right: self.right,
            jump: self.jump,
            fire: self.fire,
            camera: CameraBasis::from_yaw(self.yaw),
        }
    }
}

impl InputScript {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let script: InputScript = toml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn validate(&self) -> Result<(), ScriptError> {
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.ticks == 0 {
                return Err(ScriptError::EmptySegment { index });
            }
            if !segment.yaw.is_finite() {
                return Err(ScriptError::InvalidYaw { index });
            }
        }
        Ok(())
    }

    pub fn total_ticks(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }

    /// Controls held on the given zero-based tick, or `None` past the end.
    pub fn intent_at(&self, tick: u64) -> Option<InputIntent> {
        let mut start = 0u64;
        for segment in &self.segments {
            let end = start + u64::from(segment.ticks);
            if tick < end {
                return Some(segment.intent());
            }
            start = end;
        }
        None
    }
}

impl InputFeed for InputScript {
    fn intent_at(&self, tick: u64) -> Option<InputIntent> {
        InputScript::intent_at(self, tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
        [[segments]]
        ticks = 30

        [[segments]]
        ticks = 10
        forward = true
        jump = true
        yaw = 1.5707964
    "#;

    #[test]
    fn when_script_is_parsed_then_segments_cover_consecutive_ticks() {
        let script = InputScript::parse(SCRIPT).unwrap();

        assert_eq!(script.total_ticks(), 40);
        assert!(!script.intent_at(29).unwrap().forward);
        let held = script.intent_at(30).unwrap();
        assert!(held.forward && held.jump);
        assert!(script.intent_at(40).is_none());
    }

    #[test]
    fn when_yaw_is_a_quarter_turn_then_forward_points_along_x() {
        let script = InputScript::parse(SCRIPT).unwrap();

        let forward = script.intent_at(35).unwrap().camera.forward;

        assert!((forward.x - 1.0).abs() < 1e-5);
        assert!(forward.z.abs() < 1e-5);
    }

    #[test]
    fn when_segment_has_zero_ticks_then_script_is_rejected() {
        let err = InputScript::parse("[[segments]]\nticks = 0\n").unwrap_err();

        assert!(matches!(err, ScriptError::EmptySegment { index: 0 }));
    }

    #[test]
    fn when_field_is_misspelled_then_parse_fails() {
        let err = InputScript::parse("[[segments]]\nticks = 1\nfowrard = true\n").unwrap_err();

        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn when_script_file_is_missing_then_the_io_error_is_the_source() {
        use std::error::Error;

        let err = InputScript::load("/nonexistent/route.toml").unwrap_err();

        assert!(matches!(err, ScriptError::Io(_)));
        assert!(err.source().is_some());
        assert!(
            InputScript::parse("[[segments]]\nticks = 0\n")
                .unwrap_err()
                .source()
                .is_none()
        );
    }
}
