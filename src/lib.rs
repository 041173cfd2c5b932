pub mod config;
pub mod core;
pub mod domain;
pub mod templates;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::SystemToolRunner, CliConfig};

pub use config::toml_config::ProjectConfig;
pub use core::{driver::BuildDriver, generator::EspIdfGenerator};
pub use domain::model::{GeneratorReport, HeavyBinding, PinAssignment};
pub use utils::error::{GenError, Result};
