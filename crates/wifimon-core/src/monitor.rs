//! Polling loop that re-estimates signal quality on a fixed cadence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::estimator::SignalEstimator;
use crate::probe::traits::CommandRunner;

/// Consumer of published signal updates.
///
/// The presentation layer (bars, colors, windowing) lives behind this trait
/// and is not part of this crate. It receives at most one update per poll,
/// and only when the value changed.
pub trait SignalSink {
    /// Receives a new signal percentage in [0, 100].
    fn publish(&mut self, percentage: f32);
}

/// Drives periodic estimation and pushes changed values to a sink.
///
/// One probe runs at a time: the loop sleeps for the configured interval
/// after each estimation completes, so a slow diagnostic tool stretches the
/// effective period instead of piling up concurrent probes.
pub struct SignalMonitor<R: CommandRunner> {
    estimator: SignalEstimator<R>,
    interval: Duration,
    last_percentage: f32,
}

impl<R: CommandRunner> SignalMonitor<R> {
    /// Default polling interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

    /// Creates a monitor polling at [`DEFAULT_INTERVAL`](Self::DEFAULT_INTERVAL).
    pub fn new(estimator: SignalEstimator<R>) -> Self {
        Self::with_interval(estimator, Self::DEFAULT_INTERVAL)
    }

    /// Creates a monitor with a custom polling interval.
    pub fn with_interval(estimator: SignalEstimator<R>, interval: Duration) -> Self {
        Self {
            estimator,
            interval,
            last_percentage: 0.0,
        }
    }

    /// Runs one estimation tick.
    ///
    /// An invalid reading counts as 0% (no information means no signal). The
    /// sink is only notified when the value differs from the previous tick,
    /// so a stable association produces no redundant updates.
    pub fn poll_once(&mut self, sink: &mut dyn SignalSink) {
        let reading = self.estimator.estimate();
        let percentage = if reading.valid { reading.percentage } else { 0.0 };

        if percentage != self.last_percentage {
            debug!("signal changed {} -> {}", self.last_percentage, percentage);
            self.last_percentage = percentage;
            sink.publish(percentage);
        }
    }

    /// Polls until `running` is cleared.
    ///
    /// Sleeps in short slices between ticks so a shutdown request takes
    /// effect promptly rather than after a full interval.
    pub fn run(&mut self, sink: &mut dyn SignalSink, running: &AtomicBool) {
        while running.load(Ordering::SeqCst) {
            self.poll_once(sink);

            let sleep_slice = Duration::from_millis(100);
            let mut remaining = self.interval;
            while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
                let sleep_time = remaining.min(sleep_slice);
                std::thread::sleep(sleep_time);
                remaining = remaining.saturating_sub(sleep_time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::PlatformKind;
    use crate::probe::mock::MockRunner;

    #[derive(Default)]
    struct RecordingSink {
        published: Vec<f32>,
    }

    impl SignalSink for RecordingSink {
        fn publish(&mut self, percentage: f32) {
            self.published.push(percentage);
        }
    }

    fn nmcli_row(signal: u32) -> String {
        format!("ACTIVE  SSID      SIGNAL\nyes     HomeLan   {signal}\n")
    }

    fn linux_monitor(runner: MockRunner) -> SignalMonitor<MockRunner> {
        SignalMonitor::new(SignalEstimator::with_platform(runner, PlatformKind::Linux))
    }

    #[test]
    fn publishes_only_on_change() {
        let runner = MockRunner::with_output(nmcli_row(40))
            .then_output(nmcli_row(40))
            .then_output(nmcli_row(55));
        let mut monitor = linux_monitor(runner);
        let mut sink = RecordingSink::default();

        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);

        assert_eq!(sink.published, vec![40.0, 55.0]);
    }

    #[test]
    fn initial_zero_is_not_published() {
        // No active network degrades to 0, which equals the initial state.
        let mut monitor = linux_monitor(MockRunner::linux_not_associated());
        let mut sink = RecordingSink::default();

        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);

        assert!(sink.published.is_empty());
    }

    #[test]
    fn invalid_reading_degrades_to_zero() {
        // Healthy association first, then the tool disappears.
        let runner = MockRunner::with_output(nmcli_row(40)).then_unavailable();
        let mut monitor = linux_monitor(runner);
        let mut sink = RecordingSink::default();

        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);

        assert_eq!(sink.published, vec![40.0, 0.0]);
    }

    #[test]
    fn recovery_after_outage_is_published() {
        let runner = MockRunner::with_output(nmcli_row(62))
            .then_unavailable()
            .then_output(nmcli_row(62));
        let mut monitor = linux_monitor(runner);
        let mut sink = RecordingSink::default();

        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);
        monitor.poll_once(&mut sink);

        assert_eq!(sink.published, vec![62.0, 0.0, 62.0]);
    }

    #[test]
    fn unsupported_platform_stays_silent() {
        let runner = MockRunner::windows_connected();
        let counter = runner.clone();
        let mut monitor = SignalMonitor::new(SignalEstimator::with_platform(
            runner,
            PlatformKind::Unsupported,
        ));
        let mut sink = RecordingSink::default();

        monitor.poll_once(&mut sink);

        assert!(sink.published.is_empty());
        assert_eq!(counter.invocations(), 0);
    }
}
