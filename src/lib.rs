#![doc = r#"
codon-batch — an idempotent batch driver for codon-distribution runs.

Given a parent directory holding one taxonomy-labeled subdirectory per sample,
this crate finds the sequence file of each sample (`*.fna`, falling back to
`*.fasta`) and runs the external `codon_dist_from_fasta.py` program on it,
skipping samples whose output already exists. It powers the `codon-batch` CLI
and can be embedded in your own Rust applications.

Expected layout
---------------
```text
parent/
  562/
    genome.fna
    genome_dist.csv          <- single-output artifact
  1280/
    sample.fasta
    Codon_Distributions/     <- multi-output artifact (-m)
```

Quick start
-----------
```rust,no_run
use std::path::Path;
use codon_batch::{process_directory, DriverConfig, OutputMode};

fn main() -> codon_batch::Result<()> {
    let config = DriverConfig {
        mode: OutputMode::Multi,
        ..Default::default()
    };

    let report = process_directory(Path::new("/data/genomes"), &config)?;
    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Custom runners
--------------
Invocations go through the [`CommandRunner`] trait. Supply your own to queue
jobs elsewhere or to record calls:

```rust
use codon_batch::{CommandRunner, Invocation};

struct Echo;

impl CommandRunner for Echo {
    fn run(&mut self, invocation: &Invocation) -> codon_batch::Result<()> {
        println!("{}", invocation);
        Ok(())
    }
}
```

Error handling
--------------
All public functions return `codon_batch::Result<T>`; match on
`codon_batch::Error` to handle specific cases.

```rust,no_run
use std::path::Path;
use codon_batch::{process_directory, DriverConfig, Error};

fn main() {
    match process_directory(Path::new("/bad/path"), &DriverConfig::default()) {
        Ok(report) => println!("{} failures", report.errors),
        Err(Error::DirectoryNotFound { path }) => eprintln!("no such directory: {}", path.display()),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and `BatchReport`.
- [`types`] — `OutputMode`, `SubdirOutcome`, `SkipReason`.
- [`core`] — discovery, planning and `DriverConfig`.
- [`io`] — `Invocation`, `CommandRunner`, `ProcessRunner`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::params::DriverConfig;
pub use error::{Error, Result};
pub use types::{OutputMode, SkipReason, SubdirOutcome};

pub use core::discovery::{
    enumerate_subdirectories, locate_sequence_file, validate_parent_directory,
};
pub use core::plan::{Plan, plan_subdirectory};
pub use io::{CommandRunner, Invocation, ProcessRunner};

pub use api::{BatchReport, SubdirEntry, process_directory, process_directory_with_runner};
