//! codon-batch CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args (clap exits with status 2
//! on usage errors), run the batch and exit with status 1 on fatal errors.
//! For programmatic use, prefer the library API (`codon_batch::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
