//! macOS probe: parses `airport -I` output.

use super::traits::CommandRunner;
use super::{ProbeError, ProbeStrategy, RawSignal};

/// Absolute path to the private wireless diagnostic utility.
const AIRPORT: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";

/// Probes the associated interface via `airport -I` and reports RSSI in dBm.
///
/// Unlike the other platforms the tool exposes no percentage, only raw signal
/// power on the control channel:
///
/// ```text
///      agrCtlRSSI: -67
///      agrExtRSSI: 0
///           SSID: HomeLan
/// ```
///
/// When the adapter is powered off or not associated the field is absent,
/// which surfaces as [`ProbeError::OutputUnparseable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AirportProbe;

impl ProbeStrategy for AirportProbe {
    fn probe(&self, runner: &dyn CommandRunner) -> Result<RawSignal, ProbeError> {
        let output = runner
            .run(AIRPORT, &["-I"])
            .map_err(|e| ProbeError::CommandUnavailable {
                program: "airport".to_string(),
                message: e.to_string(),
            })?;
        parse_interface_info(&output).map(RawSignal::Rssi)
    }
}

/// Extracts the control-channel RSSI from `airport -I` output.
///
/// Scans for the first line of the form `agrCtlRSSI: <signed integer>`.
pub fn parse_interface_info(output: &str) -> Result<i32, ProbeError> {
    for line in output.lines() {
        if let Some(rssi) = try_parse_rssi_line(line) {
            return Ok(rssi);
        }
    }

    Err(ProbeError::OutputUnparseable {
        detail: "no `agrCtlRSSI: <n>` line in interface info".to_string(),
    })
}

/// Parses an `agrCtlRSSI: -67` line into `-67`, or `None` for any other line.
fn try_parse_rssi_line(line: &str) -> Option<i32> {
    let (key, value) = line.split_once(':')?;
    if key.trim() != "agrCtlRSSI" {
        return None;
    }
    value.trim().parse::<i32>().ok()
}
