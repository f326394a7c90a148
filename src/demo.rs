use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use crossbeam_channel as channel;
use tracing::{debug, info, warn};

use crate::cli::Demo;
use crate::tui::run_tui;

/// Bar width used when the config does not set `bar_width`.
pub const DEFAULT_BAR_WIDTH: u16 = 56;

/// Longest delay allowed between two completed units.
pub const MAX_UNIT_INTERVAL: Duration = Duration::from_secs(3600);

pub fn run_demo(demo: Demo) -> Result<()> {
    let cfg = demo.columns.resolve()?;
    let base = validate_demo(&demo)?;
    let bar_width = cfg
        .passthrough_u64("bar_width")
        .map(|w| w.min(u16::MAX as u64) as u16)
        .unwrap_or(DEFAULT_BAR_WIDTH);
    for key in cfg.passthrough.keys().filter(|k| k.as_str() != "bar_width") {
        debug!(%key, "Ignoring renderer option");
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    {
        let stop = stop_flag.clone();
        let _ = ctrlc::set_handler(move || {
            stop.store(true, Ordering::Relaxed);
        });
    }

    info!(total = demo.total, rate = demo.rate, smoothing = cfg.smoothing, unit = %cfg.unit, "Starting demo");

    // Worker thread: completes units and reports each one. Dropping
    // shutdown_tx wakes it from its wait immediately.
    let (advance_tx, advance_rx) = channel::unbounded::<u64>();
    let (shutdown_tx, shutdown_rx) = channel::bounded::<()>(0);
    let (total, jitter) = (demo.total, demo.jitter);
    let worker = thread::spawn(move || {
        for step in 0..total {
            match shutdown_rx.recv_timeout(jittered_interval(base, jitter, step)) {
                Err(channel::RecvTimeoutError::Timeout) => {}
                _ => break,
            }
            if advance_tx.send(1).is_err() {
                break;
            }
        }
    });

    let result = run_tui(&demo, &cfg, bar_width, advance_rx, stop_flag);
    drop(shutdown_tx);
    if worker.join().is_err() {
        warn!("Worker thread panicked");
    }
    info!("Demo finished");
    result
}

/// Checks the workload flags and returns the mean delay per unit.
pub(crate) fn validate_demo(demo: &Demo) -> Result<Duration> {
    if !(demo.rate.is_finite() && demo.rate > 0.0) {
        bail!("--rate must be a positive number, got {}", demo.rate);
    }
    if !(0.0..1.0).contains(&demo.jitter) {
        bail!("--jitter must be in [0, 1), got {}", demo.jitter);
    }
    match Duration::try_from_secs_f64(1.0 / demo.rate) {
        Ok(base) if base <= MAX_UNIT_INTERVAL => Ok(base),
        _ => bail!(
            "--rate {} is too slow; at most {}s per unit is supported",
            demo.rate,
            MAX_UNIT_INTERVAL.as_secs()
        ),
    }
}

/// Deterministic per-step delay varying within `base * (1 ± jitter)`.
pub(crate) fn jittered_interval(base: Duration, jitter: f64, step: u64) -> Duration {
    let wobble = (step as f64 * 0.7).sin() * 0.6 + (step as f64 * 0.13).sin() * 0.4;
    Duration::try_from_secs_f64(base.as_secs_f64() * (1.0 + jitter * wobble)).unwrap_or(Duration::MAX)
}
