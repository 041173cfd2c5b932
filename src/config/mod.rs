#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::ProjectConfig;
#[cfg(feature = "cli")]
use crate::domain::ports::DriverConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hvcc2idf")]
#[command(about = "Generate an ESP-IDF audio project from a Pure Data patch via HVCC")]
pub struct CliConfig {
    /// Path to the Pure Data patch
    #[arg(default_value = "main/test.pd")]
    pub pd_patch: PathBuf,

    /// Output ESP-IDF project directory
    #[arg(long, short = 'o', default_value = "generated/espidf_app")]
    pub out: PathBuf,

    /// Serial port for flashing (e.g. /dev/ttyUSB0); defaults from ESPPORT,
    /// then PORT
    #[arg(long, short = 'p')]
    pub port: Option<String>,

    /// ESP-IDF target chip
    #[arg(long, default_value = "esp32")]
    pub target: String,

    /// Project configuration file (pins, sample rate, project name)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    pub project: ProjectConfig,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the optional `--config` file into `project`. Must run before the
    /// config is handed to the driver.
    pub fn resolve_project(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            self.project = ProjectConfig::from_file(path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl DriverConfig for CliConfig {
    fn pd_patch(&self) -> &Path {
        &self.pd_patch
    }

    fn out_dir(&self) -> &Path {
        &self.out
    }

    fn port(&self) -> Option<String> {
        self.port
            .clone()
            .or_else(|| std::env::var("ESPPORT").ok())
            .or_else(|| std::env::var("PORT").ok())
            .filter(|p| !p.is_empty())
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn project(&self) -> &ProjectConfig {
        &self.project
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("pd_patch", &self.pd_patch)?;
        validate_path("out", &self.out)?;
        validate_non_empty_string("target", &self.target)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        self.project.validate()
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_reference_workflow() {
        let config = CliConfig::parse_from(["hvcc2idf"]);
        assert_eq!(config.pd_patch, PathBuf::from("main/test.pd"));
        assert_eq!(config.out, PathBuf::from("generated/espidf_app"));
        assert_eq!(config.target, "esp32");
        assert!(config.port.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_port_wins_over_environment() {
        let config = CliConfig::parse_from(["hvcc2idf", "-p", "/dev/ttyUSB1", "patch.pd"]);
        assert_eq!(config.port(), Some("/dev/ttyUSB1".to_string()));
    }

    #[test]
    fn empty_target_is_rejected() {
        let config = CliConfig::parse_from(["hvcc2idf", "--target", " "]);
        assert!(config.validate().is_err());
    }
}
