use std::time::Duration;

use tracing::{debug, trace};

use super::{Column, Fragment, MAX_REFRESH};
use crate::config::{validate_smoothing, ColumnConfig};
use crate::error::ConfigError;
use crate::format::format_seconds;
use crate::smoothing::Smoother;
use crate::tick::Tick;

/// Shown while no remaining-time estimate exists.
pub const UNKNOWN_TIME: &str = "--m:--s<--m:--s";

/// Smoothed `elapsed<remaining` column.
///
/// Both averages are updated together, so they are either both unset or
/// both set. Ticks without a remaining estimate leave them untouched.
#[derive(Debug, Clone)]
pub struct TimeRemainingColumn {
    elapsed: Smoother,
    remaining: Smoother,
}

impl TimeRemainingColumn {
    pub fn new(smoothing: f64) -> Self {
        Self {
            elapsed: Smoother::new(smoothing),
            remaining: Smoother::new(smoothing),
        }
    }

    pub fn from_config(cfg: &ColumnConfig) -> Result<Self, ConfigError> {
        validate_smoothing(cfg.smoothing)?;
        debug!(smoothing = cfg.smoothing, "time column configured");
        Ok(Self::new(cfg.smoothing))
    }

    pub fn render_text(&mut self, elapsed: f64, remaining: Option<f64>) -> String {
        let Some(remaining) = remaining else {
            trace!(elapsed, "no remaining estimate, keeping averages");
            return UNKNOWN_TIME.to_string();
        };
        let elapsed = self.elapsed.update(elapsed);
        let remaining = self.remaining.update(remaining);
        format!("{}<{}", format_seconds(elapsed), format_seconds(remaining))
    }

    pub fn smoothing(&self) -> f64 {
        self.elapsed.alpha()
    }

    /// Current `(elapsed, remaining)` averages, `None` before the first estimate.
    pub fn averages(&self) -> Option<(f64, f64)> {
        self.elapsed.average().zip(self.remaining.average())
    }
}

impl Column for TimeRemainingColumn {
    fn render(&mut self, tick: &Tick) -> Fragment {
        Fragment::remaining(self.render_text(tick.elapsed, tick.remaining))
    }

    fn max_refresh(&self) -> Option<Duration> {
        Some(MAX_REFRESH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_remaining_renders_sentinel_without_updating() {
        let mut col = TimeRemainingColumn::new(0.3);
        assert_eq!(col.render_text(12.0, None), UNKNOWN_TIME);
        assert_eq!(col.render_text(99.0, None), UNKNOWN_TIME);
        assert_eq!(col.averages(), None);

        col.render_text(10.0, Some(20.0));
        let before = col.averages();
        assert_eq!(col.render_text(500.0, None), UNKNOWN_TIME);
        assert_eq!(col.render_text(700.0, None), UNKNOWN_TIME);
        assert_eq!(col.averages(), before);
    }

    #[test]
    fn first_estimate_passes_through() {
        let mut col = TimeRemainingColumn::new(0.3);
        assert_eq!(col.render_text(3599.0, Some(3600.0)), "59m:59s<01h:00m");
        assert_eq!(col.averages(), Some((3599.0, 3600.0)));
    }

    #[test]
    fn later_estimates_are_smoothed_independently() {
        let mut col = TimeRemainingColumn::new(0.5);
        col.render_text(10.0, Some(100.0));
        let text = col.render_text(20.0, Some(40.0));
        // elapsed 15, remaining 70
        assert_eq!(text, "00m:15s<01m:10s");
        assert_eq!(col.averages(), Some((15.0, 70.0)));
    }

    #[test]
    fn smoothing_resumes_after_gap() {
        let mut col = TimeRemainingColumn::new(0.5);
        col.render_text(10.0, Some(100.0));
        col.render_text(11.0, None);
        col.render_text(30.0, Some(0.0));
        assert_eq!(col.averages(), Some((20.0, 50.0)));
    }

    #[test]
    fn from_config_rejects_bad_smoothing() {
        let cfg = ColumnConfig::default().with_smoothing(2.0);
        assert!(TimeRemainingColumn::from_config(&cfg).is_err());
        let cfg = ColumnConfig::default();
        assert_eq!(TimeRemainingColumn::from_config(&cfg).unwrap().smoothing(), 0.3);
        assert_eq!(TimeRemainingColumn::new(0.75).smoothing(), 0.75);
    }

    #[test]
    fn column_render_uses_remaining_style() {
        let mut col = TimeRemainingColumn::new(0.3);
        let frag = col.render(&Tick::new(0.0, None, Some(1.0)));
        assert_eq!(frag, Fragment::remaining(UNKNOWN_TIME));
    }
}
