//! Smoothed elapsed/remaining time and throughput columns for terminal
//! progress displays.
//!
//! Each column owns exponential moving averages of the raw estimates it is
//! fed per refresh and renders a short text fragment from them.

pub mod columns;
pub mod config;
pub mod error;
pub mod format;
pub mod smoothing;
pub mod tick;

pub use columns::{Column, Fragment, RateColumn, StyleTag, TimeRemainingColumn, MAX_REFRESH};
pub use config::ColumnConfig;
pub use error::ConfigError;
pub use smoothing::Smoother;
pub use tick::Tick;
