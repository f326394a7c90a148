use std::time::Instant;

use smooth_progress::{Column, Fragment, Tick};

/// Re-renders a column no more often than its `max_refresh` hint.
pub struct RefreshCache {
    column: Box<dyn Column + Send>,
    last: Option<(Instant, Fragment)>,
}

impl RefreshCache {
    pub fn new(column: Box<dyn Column + Send>) -> Self {
        Self { column, last: None }
    }

    pub fn render(&mut self, tick: &Tick, now: Instant) -> Fragment {
        if let (Some(limit), Some((at, cached))) = (self.column.max_refresh(), &self.last) {
            if now.saturating_duration_since(*at) < limit {
                return cached.clone();
            }
        }
        self.force(tick, now)
    }

    /// Renders regardless of the throttle, e.g. for the final frame.
    pub fn force(&mut self, tick: &Tick, now: Instant) -> Fragment {
        let fresh = self.column.render(tick);
        self.last = Some((now, fresh.clone()));
        fresh
    }
}
