//! Command Line Interface (CLI) layer for codon-batch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, config resolution,
//! the batch run itself and the end-of-run summary. It wires user-provided
//! options to the library functionality exposed via `codon_batch::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
