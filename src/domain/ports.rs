use crate::config::toml_config::ProjectConfig;
use crate::utils::error::Result;
use std::path::Path;

/// Configuration surface the build driver needs, independent of where the
/// values come from (CLI flags, environment, tests).
pub trait DriverConfig {
    fn pd_patch(&self) -> &Path;
    fn out_dir(&self) -> &Path;
    fn port(&self) -> Option<String>;
    fn target(&self) -> &str;
    fn project(&self) -> &ProjectConfig;
    fn verbose(&self) -> bool;
}

/// External tool invocation boundary.
///
/// `run` returns `Err(GenError::ToolFailed { .. })` on a non-zero exit so the
/// caller can propagate the child's exit code.
pub trait ToolRunner {
    fn is_available(&self, tool: &str) -> bool;
    fn run(&self, tool: &str, args: &[&str], cwd: Option<&Path>) -> Result<()>;
}
