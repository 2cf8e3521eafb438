//! I/O boundary of the driver: building and running external program calls.
pub mod command;

pub use command::{CommandRunner, Invocation, ProcessRunner};
