//! Display columns fed by per-tick measurements.
//!
//! A renderer holds columns behind [`Column`] and calls `render` once per
//! refresh. Columns keep their own smoothing state, so `render` takes
//! `&mut self`; sharing one column across threads needs external locking.

pub mod rate;
pub mod time;

use std::time::Duration;

use crate::tick::Tick;

pub use rate::RateColumn;
pub use time::TimeRemainingColumn;

/// Ceiling on how often the smoothed columns want to be re-rendered.
pub const MAX_REFRESH: Duration = Duration::from_millis(500);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StyleTag {
    Remaining,
}

impl StyleTag {
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Remaining => "progress.remaining",
        }
    }
}

/// Rendered text plus the style the renderer should apply to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub style: StyleTag,
}

impl Fragment {
    pub fn remaining(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: StyleTag::Remaining }
    }
}

pub trait Column {
    fn render(&mut self, tick: &Tick) -> Fragment;

    /// Throttling hint for the renderer. `None` means render every refresh.
    fn max_refresh(&self) -> Option<Duration> {
        None
    }
}
