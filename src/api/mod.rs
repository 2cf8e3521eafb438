//! High-level, ergonomic library API: run the driver over a parent directory,
//! with the default process runner or a custom `CommandRunner`, and collect a
//! `BatchReport`. Prefer these entrypoints over the `core` primitives.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::discovery::{enumerate_subdirectories, validate_parent_directory};
use crate::core::params::DriverConfig;
use crate::core::plan::{Plan, plan_subdirectory};
use crate::error::{Error, Result};
use crate::io::{CommandRunner, ProcessRunner};
use crate::types::{OutputMode, SkipReason, SubdirOutcome};

/// What happened to one subdirectory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdirEntry {
    pub subdir: PathBuf,
    pub outcome: SubdirOutcome,
    /// Rendered command line, when one was built
    pub command: Option<String>,
}

/// Batch processing report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub parent: PathBuf,
    pub mode: OutputMode,
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub planned: usize,
    pub entries: Vec<SubdirEntry>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl BatchReport {
    fn new(parent: &Path, mode: OutputMode) -> Self {
        Self {
            parent: parent.to_path_buf(),
            mode,
            processed: 0,
            skipped: 0,
            errors: 0,
            planned: 0,
            entries: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    fn record(&mut self, subdir: &Path, outcome: SubdirOutcome, command: Option<String>) {
        match &outcome {
            SubdirOutcome::Invoked => self.processed += 1,
            SubdirOutcome::Planned => self.planned += 1,
            SubdirOutcome::Skipped { .. } => self.skipped += 1,
            SubdirOutcome::Failed { .. } => self.errors += 1,
        }
        self.entries.push(SubdirEntry {
            subdir: subdir.to_path_buf(),
            outcome,
            command,
        });
    }

    /// Entries whose external call could not be started or exited non-zero
    pub fn failures(&self) -> impl Iterator<Item = &SubdirEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, SubdirOutcome::Failed { .. }))
    }

    /// Commands that were (or in a dry run would have been) executed, in order
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| e.command.as_deref())
    }

    pub fn has_failures(&self) -> bool {
        self.errors > 0
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// Process every subdirectory of `parent` with the default `ProcessRunner`
pub fn process_directory(parent: &Path, config: &DriverConfig) -> Result<BatchReport> {
    process_directory_with_runner(parent, config, &mut ProcessRunner)
}

/// Process every subdirectory of `parent`, handing invocations to `runner`.
///
/// The parent is validated before anything is listed. Subdirectories are
/// handled one at a time; a failed invocation is recorded in the report and
/// processing continues unless `config.continue_on_error` is false, in which
/// case the batch stops with `Error::Aborted`.
pub fn process_directory_with_runner<R: CommandRunner + ?Sized>(
    parent: &Path,
    config: &DriverConfig,
    runner: &mut R,
) -> Result<BatchReport> {
    config.validate()?;
    validate_parent_directory(parent)?;

    let mut report = BatchReport::new(parent, config.mode);
    info!("Starting batch over {:?} ({} output mode)", parent, config.mode);

    for subdir in enumerate_subdirectories(parent)? {
        match plan_subdirectory(&subdir, config) {
            Plan::Skip(reason) => {
                match &reason {
                    SkipReason::NoSequenceFile => warn!(
                        "No sequence file (*.{}) in {:?}, skipping",
                        config.sequence_extensions.join(", *."),
                        subdir
                    ),
                    SkipReason::OutputExists { path } => {
                        info!("Output already present at {:?}, skipping", path)
                    }
                }
                report.record(&subdir, SubdirOutcome::Skipped { reason }, None);
            }
            Plan::Invoke(invocation) => {
                let command = invocation.to_string();
                if config.dry_run {
                    info!("Would run: {}", command);
                    report.record(&subdir, SubdirOutcome::Planned, Some(command));
                    continue;
                }

                info!("Running: {}", command);
                match runner.run(&invocation) {
                    Ok(()) => {
                        debug!("Finished {:?}", subdir);
                        report.record(&subdir, SubdirOutcome::Invoked, Some(command));
                    }
                    Err(e) => {
                        warn!("Error processing {:?}: {}", subdir, e);
                        let reason = e.to_string();
                        report.record(
                            &subdir,
                            SubdirOutcome::Failed {
                                reason: reason.clone(),
                            },
                            Some(command),
                        );
                        if !config.continue_on_error {
                            report.finished_at = Some(Utc::now());
                            return Err(Error::Aborted {
                                subdir,
                                reason,
                                report: Box::new(report),
                            });
                        }
                    }
                }
            }
        }
    }

    report.finished_at = Some(Utc::now());
    Ok(report)
}
