//! Windows probe: parses `netsh wlan show interfaces` output.

use super::traits::CommandRunner;
use super::{ProbeError, ProbeStrategy, RawSignal};

/// Probes the connected interface via a command-interpreter invocation of
/// `netsh wlan show interfaces`.
///
/// The interface listing reports signal quality directly as a percentage:
///
/// ```text
///     Name                   : Wi-Fi
///     State                  : connected
///     Signal                 : 73%
/// ```
///
/// A disconnected adapter simply omits the `Signal` line, which surfaces as
/// [`ProbeError::OutputUnparseable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NetshProbe;

impl ProbeStrategy for NetshProbe {
    fn probe(&self, runner: &dyn CommandRunner) -> Result<RawSignal, ProbeError> {
        let output = runner
            .run("cmd", &["/c", "netsh wlan show interfaces"])
            .map_err(|e| ProbeError::CommandUnavailable {
                program: "netsh".to_string(),
                message: e.to_string(),
            })?;
        parse_interfaces(&output).map(RawSignal::Percent)
    }
}

/// Extracts the signal percentage from `netsh wlan show interfaces` output.
///
/// Scans for the first line of the form `Signal : <integer>%`. The percent
/// sign is mandatory; `netsh` always prints it, so its absence means the
/// format changed under us.
pub fn parse_interfaces(output: &str) -> Result<f32, ProbeError> {
    for line in output.lines() {
        if let Some(pct) = try_parse_signal_line(line) {
            return Ok(pct);
        }
    }

    Err(ProbeError::OutputUnparseable {
        detail: "no `Signal : <n>%` line in interface listing".to_string(),
    })
}

/// Parses a `Signal : 73%` line into `73.0`, or `None` for any other line.
fn try_parse_signal_line(line: &str) -> Option<f32> {
    let (key, value) = line.split_once(':')?;
    if key.trim() != "Signal" {
        return None;
    }
    let digits = value.trim().strip_suffix('%')?;
    digits.parse::<u32>().ok().map(|pct| pct as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::mock::MockRunner;

    const SAMPLE_OUTPUT: &str = "\
There is 1 interface on the system:

    Name                   : Wi-Fi
    Description            : Intel(R) Wi-Fi 6 AX201 160MHz
    GUID                   : 6c9a4571-7ae1-4cb4-8e92-3a54336dd8a0
    Physical address       : d8:f8:83:11:22:33
    State                  : connected
    SSID                   : HomeLan
    BSSID                  : aa:bb:cc:dd:ee:ff
    Network type           : Infrastructure
    Radio type             : 802.11ax
    Authentication         : WPA2-Personal
    Cipher                 : CCMP
    Connection mode        : Auto Connect
    Channel                : 44
    Receive rate (Mbps)    : 573.5
    Transmit rate (Mbps)   : 573.5
    Signal                 : 73%
    Profile                : HomeLan

    Hosted network status  : Not available
";

    #[test]
    fn extracts_signal_percentage() {
        assert_eq!(parse_interfaces(SAMPLE_OUTPUT).unwrap(), 73.0);
    }

    #[test]
    fn signal_line_embedded_in_unrelated_text() {
        let output = "preamble\nsome unrelated line\nSignal : 73%\ntrailer\n";
        assert_eq!(parse_interfaces(output).unwrap(), 73.0);
    }

    #[test]
    fn handles_windows_crlf_line_endings() {
        let output = "    State : connected\r\n    Signal : 81%\r\n";
        assert_eq!(parse_interfaces(output).unwrap(), 81.0);
    }

    #[test]
    fn disconnected_interface_has_no_signal_line() {
        let output = "\
    Name                   : Wi-Fi
    State                  : disconnected
";
        assert!(matches!(
            parse_interfaces(output),
            Err(ProbeError::OutputUnparseable { .. })
        ));
    }

    #[test]
    fn missing_percent_sign_is_rejected() {
        assert!(parse_interfaces("    Signal : 73\n").is_err());
    }

    #[test]
    fn non_numeric_signal_is_rejected() {
        assert!(parse_interfaces("    Signal : strong%\n").is_err());
    }

    #[test]
    fn unrelated_keys_do_not_match() {
        // "Signal quality" is a different key and must not be picked up.
        assert!(parse_interfaces("    Signal quality : 73%\n").is_err());
    }

    #[test]
    fn empty_output_is_unparseable() {
        assert!(parse_interfaces("").is_err());
    }

    #[test]
    fn probe_reports_percent_unit() {
        let runner = MockRunner::with_output("    Signal : 42%\n");
        assert_eq!(NetshProbe.probe(&runner).unwrap(), RawSignal::Percent(42.0));
    }

    #[test]
    fn probe_maps_spawn_failure_to_command_unavailable() {
        let runner = MockRunner::unavailable();
        assert!(matches!(
            NetshProbe.probe(&runner),
            Err(ProbeError::CommandUnavailable { .. })
        ));
    }
}
