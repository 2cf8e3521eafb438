use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// One external program call for one subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    /// Subdirectory this call belongs to (for reporting only)
    pub subdir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, subdir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            subdir: subdir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Arguments as lossy strings, handy for logs and assertions
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | ',' | ':' | '=' | '+' | '-')
}

/// Single-quote `arg` unless every character is shell-safe
fn quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_shell_safe) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in self.args_lossy() {
            write!(f, " {}", quote(&arg))?;
        }
        Ok(())
    }
}

/// Executes invocations. The batch driver only talks to this trait, so other
/// runners (remote schedulers, recorders in tests) can be plugged in.
pub trait CommandRunner {
    /// Run to completion; `Ok` only if the program started and exited successfully
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Spawns the program as a child process with inherited stdio and waits for it
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        debug!("Spawning: {}", invocation);
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(Error::CommandFailed {
                program: invocation.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_whitespace() {
        let inv = Invocation::new("codon_dist_from_fasta.py", "/data/t 1")
            .arg("/data/t 1/genome.fna")
            .arg("-m");
        assert_eq!(
            inv.to_string(),
            "codon_dist_from_fasta.py '/data/t 1/genome.fna' -m"
        );
    }

    #[test]
    fn display_quotes_shell_metacharacters() {
        let inv = Invocation::new("codon_dist_from_fasta.py", "/data/x")
            .arg("/data/$HOME;rm *&/it's.fna")
            .arg("/data/x/")
            .arg("-o")
            .arg("/data/x/a-b_c,d:e=f+g.csv");
        assert_eq!(
            inv.to_string(),
            r"codon_dist_from_fasta.py '/data/$HOME;rm *&/it'\''s.fna' /data/x/ -o /data/x/a-b_c,d:e=f+g.csv"
        );
        assert_eq!(quote(""), "''");
    }

    #[cfg(unix)]
    #[test]
    fn process_runner_reports_exit_status() {
        let mut runner = ProcessRunner;
        assert!(runner.run(&Invocation::new("true", "/tmp")).is_ok());
        assert!(matches!(
            runner.run(&Invocation::new("false", "/tmp")),
            Err(Error::CommandFailed { .. })
        ));
    }

    #[test]
    fn process_runner_reports_spawn_failure() {
        let mut runner = ProcessRunner;
        let inv = Invocation::new("definitely-not-a-real-program-7f3a", "/tmp");
        assert!(matches!(runner.run(&inv), Err(Error::Spawn { .. })));
    }
}
