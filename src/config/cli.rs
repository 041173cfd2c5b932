use crate::domain::ports::ToolRunner;
use crate::utils::error::{GenError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs external tools found on the system PATH, inheriting stdio so build
/// output streams through.
#[derive(Debug, Clone, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemToolRunner {
    fn is_available(&self, tool: &str) -> bool {
        // Spawning succeeds only if the executable resolves on PATH; the
        // probe's own exit status is irrelevant.
        Command::new(tool)
            .arg("--help")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn run(&self, tool: &str, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        println!("$ {} {}", tool, args.join(" "));

        let mut cmd = Command::new(tool);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GenError::ToolNotFound {
                    tool: tool.to_string(),
                }
            } else {
                GenError::IoError(e)
            }
        })?;

        if !status.success() {
            return Err(GenError::ToolFailed {
                tool: format!("{} {}", tool, args.join(" ")),
                code: status.code().unwrap_or(1),
            });
        }

        Ok(())
    }
}
