//! Platform probes for the active wireless connection.
//!
//! Each supported OS family exposes signal quality through a different
//! diagnostic tool with a different, loosely-structured text format. One probe
//! per family knows how to invoke its tool and how to parse the output into a
//! raw value in the tool's native unit.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     SignalEstimator                      │
//! │  ┌────────────┐    ┌────────────┐    ┌────────────────┐  │
//! │  │ NetshProbe │    │ NmcliProbe │    │  AirportProbe  │  │
//! │  │ (Windows)  │    │  (Linux)   │    │    (macOS)     │  │
//! │  └──────┬─────┘    └──────┬─────┘    └────────┬───────┘  │
//! │         └─────────────────┼───────────────────┘          │
//! │                  ┌────────▼────────┐                     │
//! │                  │  CommandRunner  │ (trait)             │
//! │                  └────────┬────────┘                     │
//! └───────────────────────────┼──────────────────────────────┘
//!                 ┌───────────┴───────────┐
//!          ┌──────▼──────┐         ┌──────▼──────┐
//!          │SystemRunner │         │ MockRunner  │
//!          │(production) │         │ (testing)   │
//!          └─────────────┘         └─────────────┘
//! ```
//!
//! Parsers are plain functions over `&str`, decoupled from process
//! invocation, so they can be exercised against captured tool output without
//! spawning anything.

pub mod airport;
pub mod mock;
pub mod netsh;
pub mod nmcli;
pub mod traits;

pub use airport::AirportProbe;
pub use mock::MockRunner;
pub use netsh::NetshProbe;
pub use nmcli::NmcliProbe;
pub use traits::{CommandRunner, SystemRunner};

use std::fmt;

/// A raw signal value in the native unit of the tool that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSignal {
    /// Direct signal quality percentage (`netsh`, `nmcli`).
    Percent(f32),
    /// Received signal strength in dBm (`airport`).
    Rssi(i32),
}

/// Why a probe could not produce a raw signal value.
///
/// These never reach the estimator's callers; they exist so that logs and
/// tests can tell the failure modes apart.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// The host OS has no bound probe.
    UnsupportedPlatform,

    /// The diagnostic command could not be spawned.
    CommandUnavailable {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error text.
        message: String,
    },

    /// The command ran but its output did not match the expected format.
    OutputUnparseable {
        /// What was being looked for, or the offending line.
        detail: String,
    },

    /// The output was well-formed but no associated wireless network exists.
    NoActiveNetwork,
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPlatform => {
                write!(f, "no wireless probe is bound for this platform")
            }
            Self::CommandUnavailable { program, message } => {
                write!(f, "failed to run {program}: {message}")
            }
            Self::OutputUnparseable { detail } => {
                write!(f, "unrecognized diagnostic output: {detail}")
            }
            Self::NoActiveNetwork => {
                write!(f, "no active wireless network")
            }
        }
    }
}

impl std::error::Error for ProbeError {}

/// A platform-specific probing strategy.
///
/// Implementations are stateless and may be invoked repeatedly. Each call
/// spawns one external process through the supplied runner and fully drains
/// its stdout before returning; no process is left behind.
pub trait ProbeStrategy: Send + Sync {
    /// Invokes the platform diagnostic command and parses its output.
    fn probe(&self, runner: &dyn CommandRunner) -> Result<RawSignal, ProbeError>;
}
