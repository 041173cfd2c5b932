use crate::core::generator::EspIdfGenerator;
use crate::domain::model::GeneratorReport;
use crate::domain::ports::{DriverConfig, ToolRunner};
use crate::utils::error::{GenError, Result};
use std::fs;

/// Orchestrates the full workflow: run `hvcc` on the patch, generate the
/// ESP-IDF project from its C output, then build and flash with `idf.py`
/// when it is installed.
pub struct BuildDriver<R: ToolRunner, C: DriverConfig> {
    runner: R,
    config: C,
}

impl<R: ToolRunner, C: DriverConfig> BuildDriver<R, C> {
    pub fn new(runner: R, config: C) -> Self {
        Self { runner, config }
    }

    pub fn run(&self) -> Result<GeneratorReport> {
        if !self.runner.is_available("hvcc") {
            return Err(GenError::ToolNotFound {
                tool: "hvcc".to_string(),
            });
        }

        let out_dir = self.config.out_dir();
        if let Some(parent) = out_dir.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if out_dir.is_dir() {
            tracing::debug!("Clearing previous output directory {}", out_dir.display());
            fs::remove_dir_all(out_dir)?;
        }

        let patch = self.config.pd_patch();
        tracing::info!(
            "Generating ESP-IDF app from {} -> {}",
            patch.display(),
            out_dir.display()
        );

        let patch_arg = patch.display().to_string();
        let out_arg = out_dir.display().to_string();
        self.runner
            .run("hvcc", &[&patch_arg, "-o", &out_arg, "-g", "c"], None)?;

        // hvcc emits the C sources into <out>/c
        let c_src_dir = out_dir.join("c");
        let patch_stem = patch
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());

        let generator = EspIdfGenerator::new(self.config.project().clone())?;
        let report = generator.compile(&c_src_dir, out_dir, patch_stem.as_deref())?;

        if self.config.verbose() {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        if !self.runner.is_available("idf.py") {
            let port = self.config.port().unwrap_or_else(|| "/dev/ttyUSB0".to_string());
            println!("idf.py not found. Project generated at {}.", out_dir.display());
            println!("To build:");
            println!("  . \"$HOME/esp/esp-idf/export.sh\"");
            println!(
                "  cd {} && idf.py set-target {} && idf.py build && idf.py -p {} flash",
                out_dir.display(),
                self.config.target(),
                port
            );
            return Ok(report);
        }

        tracing::info!("Setting ESP-IDF target: {}", self.config.target());
        self.runner
            .run("idf.py", &["set-target", self.config.target()], Some(out_dir))?;

        tracing::info!("Building firmware");
        self.runner.run("idf.py", &["build"], Some(out_dir))?;

        match self.config.port() {
            Some(port) => {
                tracing::info!("Flashing to port {}", port);
                self.runner
                    .run("idf.py", &["-p", &port, "flash"], Some(out_dir))?;
            }
            None => {
                tracing::info!("Flashing (auto port)");
                self.runner.run("idf.py", &["flash"], Some(out_dir))?;
            }
        }

        println!("Done. Optionally run: idf.py monitor");
        Ok(report)
    }
}
