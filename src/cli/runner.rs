use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use codon_batch::{
    BatchReport, DriverConfig, Error, OutputMode, SubdirOutcome, process_directory,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // keep an already installed subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Merge the optional JSON config file with command line overrides
fn resolve_config(args: &CliArgs) -> Result<DriverConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => DriverConfig::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => DriverConfig::default(),
    };

    if args.multi {
        config.mode = OutputMode::Multi;
    }
    if let Some(program) = &args.program {
        config.program = program.clone();
    }
    if args.dry_run {
        config.dry_run = true;
    }
    if args.fail_fast {
        config.continue_on_error = false;
    }
    Ok(config)
}

fn log_summary(report: &BatchReport) {
    info!("Batch processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    if report.planned > 0 {
        info!("Planned (dry run): {}", report.planned);
    }
    info!("Errors: {}", report.errors);
    for failure in report.failures() {
        if let SubdirOutcome::Failed { reason } = &failure.outcome {
            warn!("  {:?}: {}", failure.subdir, reason);
        }
    }
}

pub fn run(args: CliArgs) -> Result<BatchReport, AppError> {
    init_logging(args.log);

    let config = resolve_config(&args)?;

    if config.mode == OutputMode::Multi {
        // printed regardless of the log filter
        eprintln!("{}", multi_mode_notice(&config));
    }

    let report = match process_directory(&args.parent_directory, &config) {
        Ok(report) => report,
        Err(e) => {
            if let Error::Aborted { report, .. } = &e {
                finish(report, &args)?;
            }
            return Err(e.into());
        }
    };
    finish(&report, &args)?;

    Ok(report)
}

fn multi_mode_notice(config: &DriverConfig) -> String {
    format!(
        "Multi-output mode: a {}/ directory will be created in each subdirectory instead of a single CSV file",
        config.multi_output_dir
    )
}

/// Summary and optional JSON report, also after a fail-fast abort
fn finish(report: &BatchReport, args: &CliArgs) -> Result<(), AppError> {
    log_summary(report);

    if let Some(path) = &args.report {
        report.write_json(path).map_err(|source| AppError::Report {
            path: path.clone(),
            source,
        })?;
        info!("Report written to {:?}", path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "program": "from-file", "continue_on_error": true }"#).unwrap();

        let args = CliArgs::try_parse_from([
            "codon-batch",
            "-m",
            "--fail-fast",
            "--program",
            "from-flag",
            "--config",
            path.to_str().unwrap(),
            "/data",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.mode, OutputMode::Multi);
        assert_eq!(config.program, "from-flag");
        assert!(!config.continue_on_error);
    }

    #[test]
    fn file_mode_survives_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "mode": "multi" }"#).unwrap();

        let args =
            CliArgs::try_parse_from(["codon-batch", "--config", path.to_str().unwrap(), "/data"])
                .unwrap();
        assert_eq!(resolve_config(&args).unwrap().mode, OutputMode::Multi);
    }

    #[test]
    fn multi_notice_names_output_dir() {
        let config = DriverConfig {
            mode: OutputMode::Multi,
            ..Default::default()
        };
        let notice = multi_mode_notice(&config);
        assert!(notice.starts_with("Multi-output mode"));
        assert!(notice.contains("Codon_Distributions/"));
    }

    #[test]
    fn unreadable_config_is_reported() {
        let args =
            CliArgs::try_parse_from(["codon-batch", "--config", "/no/such/config.json", "/data"])
                .unwrap();
        assert!(matches!(resolve_config(&args), Err(AppError::Config { .. })));
    }
}
