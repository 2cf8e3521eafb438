use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: codon_batch::Error,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: codon_batch::Error,
    },

    #[error(transparent)]
    Batch(#[from] codon_batch::Error),
}
