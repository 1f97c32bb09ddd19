//! Scripted command runner for testing probes without spawning processes.

use std::io;
use std::sync::{Arc, Mutex};

use super::traits::CommandRunner;

/// One scripted response to a `run` call.
#[derive(Debug, Clone)]
enum Step {
    /// Return this text as captured stdout.
    Output(String),
    /// Fail as if the program were not installed.
    NotFound,
}

#[derive(Debug, Default)]
struct ScriptState {
    script: Vec<Step>,
    cursor: usize,
    invocations: usize,
}

/// In-memory runner that replays canned command output.
///
/// Responses are consumed in order, one per `run` call; once the script is
/// exhausted the final entry repeats, so a single-entry script behaves like a
/// fixed response. An empty script fails every call. Invocations are counted,
/// letting tests assert how many processes would have been spawned.
///
/// Clones share the script cursor and the invocation counter, so a test can
/// keep a handle after moving the runner into an estimator.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    state: Arc<Mutex<ScriptState>>,
}

impl MockRunner {
    /// Creates a runner with an empty script; every call fails as not-found.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner that returns `output` on every call.
    pub fn with_output(output: impl Into<String>) -> Self {
        Self::new().then_output(output)
    }

    /// Creates a runner whose every call fails as not-found.
    pub fn unavailable() -> Self {
        Self::new().then_unavailable()
    }

    /// Appends a successful response to the script.
    pub fn then_output(self, output: impl Into<String>) -> Self {
        self.push(Step::Output(output.into()));
        self
    }

    /// Appends a spawn failure to the script.
    pub fn then_unavailable(self) -> Self {
        self.push(Step::NotFound);
        self
    }

    /// Number of `run` calls observed so far.
    pub fn invocations(&self) -> usize {
        self.state.lock().unwrap().invocations
    }

    fn push(&self, step: Step) {
        self.state.lock().unwrap().script.push(step);
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, _program: &str, _args: &[&str]) -> io::Result<String> {
        let mut state = self.state.lock().unwrap();
        state.invocations += 1;

        if state.script.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "mock runner has no scripted response",
            ));
        }

        let idx = state.cursor.min(state.script.len() - 1);
        if state.cursor < state.script.len() {
            state.cursor += 1;
        }

        match state.script[idx].clone() {
            Step::Output(text) => Ok(text),
            Step::NotFound => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "mock command not found",
            )),
        }
    }
}

/// Pre-built outputs mirroring real hosts, for estimator-level tests.
impl MockRunner {
    /// Windows host associated to an access point at 73%.
    pub fn windows_connected() -> Self {
        Self::with_output(
            "\
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
",
        )
    }

    /// Linux host with one active network at 58%.
    pub fn linux_connected() -> Self {
        Self::with_output(
            "\
ACTIVE  SSID              SIGNAL
yes     HomeLan           58
no      Neighbor-5G       47
no      CoffeeShack       31
",
        )
    }

    /// Linux host in range of networks but associated to none.
    pub fn linux_not_associated() -> Self {
        Self::with_output(
            "\
ACTIVE  SSID              SIGNAL
no      Neighbor-5G       47
no      CoffeeShack       31
",
        )
    }

    /// macOS host associated at -67 dBm.
    pub fn macos_connected() -> Self {
        Self::with_output(
            "\
     agrCtlRSSI: -67
     agrExtRSSI: 0
    agrCtlNoise: -92
    agrExtNoise: 0
          state: running
        op mode: station
     lastTxRate: 526
        maxRate: 867
lastAssocStatus: 0
    802.11 auth: open
      link auth: wpa2-psk
          BSSID: aa:bb:cc:dd:ee:ff
           SSID: HomeLan
            MCS: 7
        channel: 44,80
",
        )
    }

    /// macOS host with the wireless adapter powered off.
    pub fn macos_adapter_off() -> Self {
        Self::with_output("AirPort: Off\n")
    }
}
