use std::collections::VecDeque;
use std::time::{Duration, Instant};

use smooth_progress::Tick;

/// Window over which the instantaneous speed is estimated.
pub const SPEED_WINDOW: Duration = Duration::from_secs(30);

#[derive(Clone, Copy, Debug)]
struct Sample {
    at: Instant,
    advanced: u64,
}

/// Unit-of-work bookkeeping for the demo display.
///
/// Produces raw, unsmoothed estimates; the columns do the smoothing.
#[derive(Debug)]
pub struct SimulatedTask {
    pub description: String,
    pub total: u64,
    pub completed: u64,
    started: Instant,
    samples: VecDeque<Sample>,
}

impl SimulatedTask {
    pub fn new(description: impl Into<String>, total: u64, started: Instant) -> Self {
        Self {
            description: description.into(),
            total,
            completed: 0,
            started,
            samples: VecDeque::new(),
        }
    }

    pub fn advance(&mut self, units: u64, now: Instant) {
        let units = units.min(self.total - self.completed);
        self.completed += units;
        while let Some(front) = self.samples.front() {
            if now.saturating_duration_since(front.at) > SPEED_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        self.samples.push_back(Sample { at: now, advanced: units });
    }

    pub fn finished(&self) -> bool {
        self.completed >= self.total
    }

    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.completed as f64 * 100.0 / self.total as f64
        }
    }

    /// Units per second across the sample window; the first sample only
    /// anchors the window start.
    pub fn speed(&self) -> Option<f64> {
        let first = self.samples.front()?;
        let last = self.samples.back()?;
        let span = last.at.saturating_duration_since(first.at).as_secs_f64();
        if span == 0.0 {
            return None;
        }
        let advanced: u64 = self.samples.iter().skip(1).map(|s| s.advanced).sum();
        Some(advanced as f64 / span)
    }

    pub fn time_remaining(&self) -> Option<f64> {
        if self.finished() {
            return Some(0.0);
        }
        let speed = self.speed()?;
        if speed <= 0.0 {
            return None;
        }
        Some(((self.total - self.completed) as f64 / speed).ceil())
    }

    pub fn snapshot(&self, now: Instant) -> Tick {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        Tick::new(elapsed, self.time_remaining(), self.speed())
    }
}
