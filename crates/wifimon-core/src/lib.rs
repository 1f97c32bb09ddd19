//! wifimon-core — shared library for the wifimon toolset.
//!
//! Provides:
//! - `probe` — per-platform wireless diagnostic probes and the command
//!   runner abstraction (real and mock)
//! - `estimator` — platform classification, RSSI normalization, and the
//!   always-succeeding signal estimator
//! - `monitor` — the fixed-cadence polling loop and its subscriber seam

pub mod estimator;
pub mod monitor;
pub mod probe;

pub use estimator::{PlatformKind, SignalEstimator, SignalReading, estimate_percent_from_rssi};
pub use monitor::{SignalMonitor, SignalSink};
pub use probe::{CommandRunner, MockRunner, ProbeError, ProbeStrategy, RawSignal, SystemRunner};
