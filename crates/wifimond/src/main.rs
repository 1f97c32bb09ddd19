//! wifimond - Wi-Fi signal strength monitor daemon.
//!
//! Polls the platform wireless diagnostic tool on a fixed cadence and
//! publishes the normalized signal percentage whenever it changes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info, warn};
use tracing_subscriber::EnvFilter;

use wifimon_core::estimator::{PlatformKind, SignalEstimator};
use wifimon_core::monitor::{SignalMonitor, SignalSink};
use wifimon_core::probe::SystemRunner;

/// Wi-Fi signal strength monitor daemon.
#[derive(Parser)]
#[command(name = "wifimond", about = "Wi-Fi signal strength monitor daemon", version)]
struct Args {
    /// Polling interval in milliseconds.
    #[arg(short, long, default_value = "1000")]
    interval_ms: u64,

    /// Estimate once, print the percentage, and exit.
    #[arg(long)]
    once: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("wifimond={}", level).parse().unwrap())
        .add_directive(format!("wifimon_core={}", level).parse().unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Publishes signal updates to the log.
///
/// Stands in for a presentation layer, which would consume the same numeric
/// contract: a value in [0, 100], at most one update per poll, only on
/// change.
struct LogSink;

impl SignalSink for LogSink {
    fn publish(&mut self, percentage: f32) {
        info!("Signal: {:.0}%", percentage);
    }
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let estimator = SignalEstimator::new(SystemRunner::new());
    let platform = estimator.platform();

    if args.once {
        let reading = estimator.estimate();
        if reading.valid {
            println!("{:.0}", reading.percentage);
        } else {
            eprintln!("no estimate available");
            std::process::exit(1);
        }
        return;
    }

    info!("wifimond {} starting", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: platform={:?}, interval={}ms",
        platform, args.interval_ms
    );
    if platform == PlatformKind::Unsupported {
        warn!("No wireless probe for this platform; every poll will report 0%");
    }

    // Setup graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    if let Err(e) = ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }

    let mut monitor =
        SignalMonitor::with_interval(estimator, Duration::from_millis(args.interval_ms));
    let mut sink = LogSink;

    info!("Starting polling loop");
    monitor.run(&mut sink, &running);

    info!("Shutdown complete");
}
