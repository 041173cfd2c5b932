use crate::domain::model::PinAssignment;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional project configuration file.
///
/// ```toml
/// [project]
/// name = "my_synth"
///
/// [audio]
/// sample_rate = 44100
///
/// [audio.pins]
/// ws = 26
/// bclk = 27
/// dout = 25
/// ```
///
/// Every section and field is optional; omitted values fall back to the
/// reference-board defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub audio: AudioSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Overrides the project name derived from the patch file name.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSection {
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    #[serde(default)]
    pub pins: PinAssignment,
}

impl Default for AudioSection {
    fn default() -> Self {
        Self {
            sample_rate: default_sample_rate(),
            pins: PinAssignment::default(),
        }
    }
}

fn default_sample_rate() -> u32 {
    48000
}

impl ProjectConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for ProjectConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.project.name {
            validate_non_empty_string("project.name", name)?;
        }

        validate_range("audio.sample_rate", self.audio.sample_rate, 8000, 192000)?;

        let pins = self.audio.pins;
        validate_range("audio.pins.ws", pins.ws, 0, 39)?;
        validate_range("audio.pins.bclk", pins.bclk, 0, 39)?;
        validate_range("audio.pins.dout", pins.dout, 0, 39)?;

        if pins.ws == pins.bclk || pins.ws == pins.dout || pins.bclk == pins.dout {
            return Err(crate::utils::error::GenError::InvalidConfigValueError {
                field: "audio.pins".to_string(),
                value: format!("ws={} bclk={} dout={}", pins.ws, pins.bclk, pins.dout),
                reason: "I2S pins must be pairwise distinct".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let config = ProjectConfig::default();
        assert_eq!(config.audio.sample_rate, 48000);
        assert_eq!(config.audio.pins.ws, 26);
        assert_eq!(config.audio.pins.bclk, 27);
        assert_eq!(config.audio.pins.dout, 25);
        assert!(config.project.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config = ProjectConfig::from_toml_str(
            r#"
            [audio]
            sample_rate = 44100
            "#,
        )
        .unwrap();
        assert_eq!(config.audio.sample_rate, 44100);
        assert_eq!(config.audio.pins, PinAssignment::default());
    }

    #[test]
    fn parses_full_toml() {
        let config = ProjectConfig::from_toml_str(
            r#"
            [project]
            name = "my_synth"

            [audio]
            sample_rate = 96000

            [audio.pins]
            ws = 14
            bclk = 13
            dout = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.project.name.as_deref(), Some("my_synth"));
        assert_eq!(config.audio.sample_rate, 96000);
        assert_eq!(
            config.audio.pins,
            PinAssignment {
                ws: 14,
                bclk: 13,
                dout: 12
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_sample_rate() {
        let mut config = ProjectConfig::default();
        config.audio.sample_rate = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_pins() {
        let mut config = ProjectConfig::default();
        config.audio.pins.bclk = config.audio.pins.ws;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_gpio() {
        let mut config = ProjectConfig::default();
        config.audio.pins.dout = 40;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(ProjectConfig::from_toml_str("[audio\nsample_rate = 48000").is_err());
    }
}
