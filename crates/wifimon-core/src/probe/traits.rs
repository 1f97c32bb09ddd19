//! Abstraction for external process invocation to enable testing and mocking.
//!
//! The `CommandRunner` trait allows probes to shell out to the real platform
//! diagnostic tools or to a mock implementation replaying canned output.

use std::io;
use std::process::Command;

/// Abstraction for running an external diagnostic command.
///
/// Implementations capture the command's standard output as text. A non-zero
/// exit status is not an error at this layer: several platform tools exit
/// non-zero while still printing usable diagnostics, so probes parse whatever
/// stdout was produced.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args` and returns captured stdout.
    ///
    /// # Errors
    /// An I/O error when the process cannot be spawned (e.g. the program is
    /// not installed).
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String>;
}

/// Real runner that spawns processes via `std::process::Command`.
///
/// Use this in production to invoke the actual platform tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Creates a new `SystemRunner` instance.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String> {
        // `output()` waits for exit and drains both pipes, so no child
        // process outlives the call.
        let output = Command::new(program).args(args).output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_io_error() {
        let runner = SystemRunner::new();
        let result = runner.run("wifimon-no-such-binary-61f3", &[]);
        assert!(result.is_err());
    }
}
