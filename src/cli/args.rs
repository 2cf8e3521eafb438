use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codon-batch",
    version,
    about = "Run codon_dist_from_fasta.py over every taxonomy subdirectory, skipping finished ones"
)]
pub struct CliArgs {
    /// Parent directory whose immediate subdirectories are processed
    pub parent_directory: PathBuf,

    /// Create a Codon_Distributions/ directory per subdirectory instead of one CSV file
    #[arg(short = 'm', long = "multi", default_value_t = false)]
    pub multi: bool,

    /// External program to invoke (default: codon_dist_from_fasta.py on PATH)
    #[arg(long)]
    pub program: Option<String>,

    /// JSON config file; command line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the commands that would run without running them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Stop at the first subdirectory whose command fails
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
