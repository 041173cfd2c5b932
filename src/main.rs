use anyhow::Context;
use clap::Parser;
use hvcc2idf::utils::{logger, validation::Validate};
use hvcc2idf::{BuildDriver, CliConfig, SystemToolRunner};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hvcc2idf");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    config
        .resolve_project()
        .with_context(|| format!("Failed to load project config {:?}", config.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let runner = SystemToolRunner::new();
    let driver = BuildDriver::new(runner, config);

    match driver.run() {
        Ok(report) => {
            tracing::info!("✅ Generation completed in {:.2}s", report.compile_time);
            println!("✅ ESP-IDF project ready at: {}", report.out_dir.display());
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // Subprocess failures reuse the child's exit code
            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
