//! Signal estimation: platform classification, probe dispatch and unit
//! normalization.
//!
//! [`SignalEstimator::estimate`] is the single entry point for "what is the
//! current signal quality". It always returns a [`SignalReading`]; every
//! failure mode degrades to an invalid reading so a polling loop built on top
//! can never crash on a missing tool or a changed output format.

use tracing::{debug, warn};

use crate::probe::traits::CommandRunner;
use crate::probe::{AirportProbe, NetshProbe, NmcliProbe, ProbeError, ProbeStrategy, RawSignal};

/// Host operating system family, as far as wireless probing is concerned.
///
/// Derived once per process lifetime; the host OS cannot change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Windows,
    Linux,
    MacOs,
    Unsupported,
}

impl PlatformKind {
    /// Classifies an OS name string.
    ///
    /// Matching is by case-insensitive substring so that variants such as
    /// "Windows 11", "linux-gnu" or "Mac OS X" all land in the right family.
    pub fn classify(os_name: &str) -> Self {
        let os = os_name.to_lowercase();
        if os.contains("windows") {
            Self::Windows
        } else if os.contains("linux") {
            Self::Linux
        } else if os.contains("mac") {
            Self::MacOs
        } else {
            Self::Unsupported
        }
    }

    /// Classifies the host this process is running on.
    pub fn detect() -> Self {
        Self::classify(std::env::consts::OS)
    }

    /// The probe strategy bound to this platform, if any.
    pub fn strategy(self) -> Option<&'static dyn ProbeStrategy> {
        match self {
            Self::Windows => Some(&NetshProbe),
            Self::Linux => Some(&NmcliProbe),
            Self::MacOs => Some(&AirportProbe),
            Self::Unsupported => None,
        }
    }
}

/// A single estimation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalReading {
    /// Normalized signal quality in [0, 100].
    pub percentage: f32,
    /// False when no estimate could be produced.
    pub valid: bool,
}

impl SignalReading {
    /// A valid reading, clamped to [0, 100].
    pub fn from_percent(percentage: f32) -> Self {
        Self {
            percentage: percentage.clamp(0.0, 100.0),
            valid: true,
        }
    }

    /// The reading produced when no estimate is available.
    pub fn invalid() -> Self {
        Self {
            percentage: 0.0,
            valid: false,
        }
    }
}

/// Maps an RSSI value in dBm to an estimated signal percentage.
///
/// Linear across the [-100, -50] dBm calibration window and clamped outside
/// it, never extrapolated. The breakpoints are the common heuristic for
/// consumer adapters and are fixed so readings stay comparable across
/// releases.
pub fn estimate_percent_from_rssi(rssi: i32) -> f32 {
    if rssi <= -100 {
        0.0
    } else if rssi >= -50 {
        100.0
    } else {
        2.0 * (rssi + 100) as f32
    }
}

/// Produces [`SignalReading`]s for the active wireless connection.
///
/// The platform is classified once at construction and the matching probe is
/// bound for the estimator's lifetime, so no per-poll re-dispatch happens.
pub struct SignalEstimator<R: CommandRunner> {
    runner: R,
    platform: PlatformKind,
    strategy: Option<&'static dyn ProbeStrategy>,
}

impl<R: CommandRunner> SignalEstimator<R> {
    /// Creates an estimator for the host platform.
    pub fn new(runner: R) -> Self {
        Self::with_platform(runner, PlatformKind::detect())
    }

    /// Creates an estimator for an explicit platform.
    ///
    /// Lets tests exercise any probe regardless of the machine the tests run
    /// on.
    pub fn with_platform(runner: R, platform: PlatformKind) -> Self {
        Self {
            runner,
            platform,
            strategy: platform.strategy(),
        }
    }

    /// The platform this estimator probes.
    pub fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Estimates the current signal quality.
    ///
    /// Always returns a reading. An unsupported platform yields an invalid
    /// reading without spawning any process; probe failures are logged and
    /// reported as invalid.
    pub fn estimate(&self) -> SignalReading {
        let Some(strategy) = self.strategy else {
            debug!("no wireless probe for {:?}, reporting invalid", self.platform);
            return SignalReading::invalid();
        };

        match strategy.probe(&self.runner) {
            Ok(RawSignal::Percent(pct)) => SignalReading::from_percent(pct),
            Ok(RawSignal::Rssi(rssi)) => {
                SignalReading::from_percent(estimate_percent_from_rssi(rssi))
            }
            Err(e @ ProbeError::CommandUnavailable { .. }) => {
                warn!("wireless probe failed: {e}");
                SignalReading::invalid()
            }
            Err(e) => {
                debug!("wireless probe produced no estimate: {e}");
                SignalReading::invalid()
            }
        }
    }
}
