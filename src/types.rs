//! Shared types and enums used across the driver.
//! Includes `OutputMode`, the per-subdirectory `SubdirOutcome` and `SkipReason`.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which artifact the external program is asked to produce
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One `<sample>_dist.csv` per subdirectory
    #[default]
    Single,
    /// One `Codon_Distributions/` directory per subdirectory
    Multi,
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputMode::Single => "single",
            OutputMode::Multi => "multi",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    OutputExists { path: PathBuf },
    NoSequenceFile,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::OutputExists { path } => write!(f, "output exists: {}", path.display()),
            SkipReason::NoSequenceFile => write!(f, "no sequence file found"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubdirOutcome {
    Invoked,
    Planned,
    Skipped { reason: SkipReason },
    Failed { reason: String },
}

impl std::fmt::Display for SubdirOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubdirOutcome::Invoked => write!(f, "Invoked"),
            SubdirOutcome::Planned => write!(f, "Planned"),
            SubdirOutcome::Skipped { reason } => write!(f, "Skipped({})", reason),
            SubdirOutcome::Failed { reason } => write!(f, "Failed({})", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_serializes_lowercase() {
        let json = serde_json::to_string(&OutputMode::Multi).unwrap();
        assert_eq!(json, "\"multi\"");
        let mode: OutputMode = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(mode, OutputMode::Single);
    }

    #[test]
    fn outcome_display_names_the_reason() {
        let outcome = SubdirOutcome::Skipped {
            reason: SkipReason::NoSequenceFile,
        };
        assert_eq!(outcome.to_string(), "Skipped(no sequence file found)");
    }
}
