//! Per-subdirectory decision: locate the sequence file, derive the expected
//! output artifact and either skip (artifact present) or build the invocation.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::discovery::{locate_sequence_file, with_trailing_separator};
use crate::core::params::DriverConfig;
use crate::io::Invocation;
use crate::types::{OutputMode, SkipReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Skip(SkipReason),
    Invoke(Invocation),
}

/// `<dir>/<stem>` of `sequence` (final extension removed) followed by `suffix`
pub fn single_output_path(sequence: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = sequence.with_extension("").into_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

/// `<subdir>/<name>/`, the directory the program fills in multi-output mode
pub fn multi_output_path(subdir: &Path, name: &str) -> PathBuf {
    with_trailing_separator(&subdir.join(name))
}

pub fn plan_subdirectory(subdir: &Path, config: &DriverConfig) -> Plan {
    let Some(sequence) = locate_sequence_file(subdir, &config.sequence_extensions) else {
        return Plan::Skip(SkipReason::NoSequenceFile);
    };

    match config.mode {
        OutputMode::Single => {
            let outfile = single_output_path(&sequence, &config.dist_suffix);
            if outfile.exists() {
                return Plan::Skip(SkipReason::OutputExists { path: outfile });
            }
            Plan::Invoke(
                Invocation::new(config.program.clone(), subdir)
                    .arg(sequence)
                    .arg(with_trailing_separator(subdir))
                    .arg("-o")
                    .arg(outfile),
            )
        }
        OutputMode::Multi => {
            let target = multi_output_path(subdir, &config.multi_output_dir);
            if target.is_dir() {
                return Plan::Skip(SkipReason::OutputExists { path: target });
            }
            Plan::Invoke(
                Invocation::new(config.program.clone(), subdir)
                    .arg(sequence)
                    .arg(target)
                    .arg("-m"),
            )
        }
    }
}
