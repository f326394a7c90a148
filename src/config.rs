use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;

pub const DEFAULT_SMOOTHING: f64 = 0.3;
pub const DEFAULT_UNIT: &str = "items";

/// Construction options shared by the smoothed columns.
///
/// Keys this crate does not recognize are kept in `passthrough` so the
/// surrounding renderer can pick up its own settings from the same file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub smoothing: f64,
    pub unit: String,
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            unit: DEFAULT_UNIT.to_string(),
            passthrough: Map::new(),
        }
    }
}

impl ColumnConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_smoothing(self.smoothing)
    }

    /// Reads an unsigned integer renderer option, e.g. `bar_width`.
    pub fn passthrough_u64(&self, key: &str) -> Option<u64> {
        self.passthrough.get(key).and_then(Value::as_u64)
    }
}

pub(crate) fn validate_smoothing(smoothing: f64) -> Result<(), ConfigError> {
    if smoothing.is_finite() && (0.0..=1.0).contains(&smoothing) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSmoothing(smoothing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = ColumnConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, ColumnConfig::default());
        assert_eq!(cfg.smoothing, 0.3);
        assert_eq!(cfg.unit, "items");
    }

    #[test]
    fn unknown_keys_are_passed_through() {
        let cfg = ColumnConfig::from_json_str(r#"{"smoothing": 0.5, "bar_width": 40, "theme": "dark"}"#).unwrap();
        assert_eq!(cfg.smoothing, 0.5);
        assert_eq!(cfg.unit, "items");
        assert_eq!(cfg.passthrough_u64("bar_width"), Some(40));
        assert_eq!(cfg.passthrough.get("theme"), Some(&Value::from("dark")));
        assert!(!cfg.passthrough.contains_key("smoothing"));
    }

    #[test]
    fn smoothing_bounds_are_inclusive() {
        assert!(ColumnConfig::default().with_smoothing(0.0).validate().is_ok());
        assert!(ColumnConfig::default().with_smoothing(1.0).validate().is_ok());
    }

    #[test]
    fn smoothing_out_of_range_is_rejected() {
        for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let err = ColumnConfig::default().with_smoothing(bad).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidSmoothing(_)));
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ColumnConfig::from_json_str("{smoothing").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = ColumnConfig::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
