use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OutputMode;

pub const DEFAULT_PROGRAM: &str = "codon_dist_from_fasta.py";
pub const DEFAULT_DIST_SUFFIX: &str = "_dist.csv";
pub const DEFAULT_MULTI_OUTPUT_DIR: &str = "Codon_Distributions";

/// Driver parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    pub mode: OutputMode,
    /// External program invoked once per subdirectory
    pub program: String,
    /// Sequence file extensions without the dot, in order of preference
    pub sequence_extensions: Vec<String>,
    /// Appended to the sequence file stem in single-output mode
    pub dist_suffix: String,
    /// Directory created under each subdirectory in multi-output mode
    pub multi_output_dir: String,
    pub continue_on_error: bool,
    /// If true, invocations are planned and logged but never spawned
    pub dry_run: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::Single,
            program: DEFAULT_PROGRAM.to_string(),
            sequence_extensions: vec!["fna".to_string(), "fasta".to_string()],
            dist_suffix: DEFAULT_DIST_SUFFIX.to_string(),
            multi_output_dir: DEFAULT_MULTI_OUTPUT_DIR.to_string(),
            continue_on_error: true,
            dry_run: false,
        }
    }
}

impl DriverConfig {
    /// Load a config from a JSON file; missing fields fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: DriverConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(Error::invalid_argument("program", "<empty>"));
        }
        if self.sequence_extensions.is_empty() {
            return Err(Error::invalid_argument("sequence_extensions", "[]"));
        }
        if let Some(ext) = self
            .sequence_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.') || ext.contains('/'))
        {
            return Err(Error::invalid_argument("sequence_extensions", ext));
        }
        if self.dist_suffix.is_empty() {
            return Err(Error::invalid_argument("dist_suffix", "<empty>"));
        }
        if self.multi_output_dir.is_empty() || self.multi_output_dir.contains('/') {
            return Err(Error::invalid_argument(
                "multi_output_dir",
                &self.multi_output_dir,
            ));
        }
        Ok(())
    }
}
