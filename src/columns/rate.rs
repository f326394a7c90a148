use std::time::Duration;

use tracing::{debug, trace};

use super::{Column, Fragment, MAX_REFRESH};
use crate::config::{validate_smoothing, ColumnConfig};
use crate::error::ConfigError;
use crate::format::format_rate;
use crate::smoothing::Smoother;
use crate::tick::Tick;

/// Smoothed throughput column, e.g. ` 4.20items/s`.
#[derive(Debug, Clone)]
pub struct RateColumn {
    unit: String,
    speed: Smoother,
}

impl RateColumn {
    pub fn new(smoothing: f64, unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            speed: Smoother::new(smoothing),
        }
    }

    pub fn from_config(cfg: &ColumnConfig) -> Result<Self, ConfigError> {
        validate_smoothing(cfg.smoothing)?;
        debug!(smoothing = cfg.smoothing, unit = %cfg.unit, "rate column configured");
        Ok(Self::new(cfg.smoothing, cfg.unit.clone()))
    }

    pub fn render_text(&mut self, speed: Option<f64>) -> String {
        match speed {
            // a display default, not a sample
            None => {
                trace!("no speed estimate, keeping average");
                format!("0{}/s", self.unit)
            }
            Some(speed) => format_rate(self.speed.update(speed), &self.unit),
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn smoothing(&self) -> f64 {
        self.speed.alpha()
    }

    pub fn average(&self) -> Option<f64> {
        self.speed.average()
    }
}

impl Column for RateColumn {
    fn render(&mut self, tick: &Tick) -> Fragment {
        Fragment::remaining(self.render_text(tick.speed))
    }

    fn max_refresh(&self) -> Option<Duration> {
        Some(MAX_REFRESH)
    }
}
