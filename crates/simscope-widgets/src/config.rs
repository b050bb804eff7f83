#![forbid(unsafe_code)]

//! Drawer configuration.
//!
//! Plain structs with `Default` and builder methods. [`MonitorConfig`] can
//! also be read from `SIMSCOPE_*` environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::series::DEFAULT_CAPACITY;

/// Default time between two samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);
/// Default canvas width below which the summary wraps.
pub const DEFAULT_SUMMARY_WRAP_WIDTH: u16 = 1080;

const ENV_PLOT_CAPACITY: &str = "SIMSCOPE_PLOT_CAPACITY";
const ENV_SAMPLE_INTERVAL_MS: &str = "SIMSCOPE_SAMPLE_INTERVAL_MS";
const ENV_HIDE_PLOTS: &str = "SIMSCOPE_HIDE_PLOTS";
const ENV_HIDE_GROUPS: &str = "SIMSCOPE_HIDE_GROUPS";

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable did not parse.
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    /// A field is outside its allowed range.
    OutOfRange {
        field: &'static str,
        message: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                key,
                value,
                expected,
            } => write!(f, "{key}={value} (expected {expected})"),
            ConfigError::OutOfRange { field, message } => write!(f, "{field}: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the [`Monitor`](crate::monitor::Monitor) drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonitorConfig {
    /// Number of samples kept per plot.
    pub plot_capacity: usize,
    /// Minimum time between two samples.
    pub sample_interval: Duration,
    /// Start with the plot column hidden.
    pub hide_plots: bool,
    /// Start with the group column hidden.
    pub hide_groups: bool,
    /// Canvas width, in logical units, below which the summary takes two lines.
    pub summary_wrap_width: u16,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            plot_capacity: DEFAULT_CAPACITY,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            hide_plots: false,
            hide_groups: false,
            summary_wrap_width: DEFAULT_SUMMARY_WRAP_WIDTH,
        }
    }
}

impl MonitorConfig {
    /// Set the number of samples kept per plot.
    #[must_use]
    pub fn plot_capacity(mut self, capacity: usize) -> Self {
        self.plot_capacity = capacity;
        self
    }

    /// Set the minimum time between samples.
    #[must_use]
    pub fn sample_interval(mut self, interval: Duration) -> Self {
        self.sample_interval = interval;
        self
    }

    /// Hide or show the plot column.
    #[must_use]
    pub fn hide_plots(mut self, hide: bool) -> Self {
        self.hide_plots = hide;
        self
    }

    /// Hide or show the group column.
    #[must_use]
    pub fn hide_groups(mut self, hide: bool) -> Self {
        self.hide_groups = hide;
        self
    }

    /// Set the summary wrap width.
    #[must_use]
    pub fn summary_wrap_width(mut self, width: u16) -> Self {
        self.summary_wrap_width = width;
        self
    }

    /// Defaults overridden by `SIMSCOPE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// [`from_env`](Self::from_env) with a custom lookup (for tests).
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = get_env(ENV_PLOT_CAPACITY) {
            config.plot_capacity = parse_number(ENV_PLOT_CAPACITY, &value)?;
        }
        if let Some(value) = get_env(ENV_SAMPLE_INTERVAL_MS) {
            config.sample_interval =
                Duration::from_millis(parse_number(ENV_SAMPLE_INTERVAL_MS, &value)?);
        }
        if let Some(value) = get_env(ENV_HIDE_PLOTS) {
            config.hide_plots = parse_flag(ENV_HIDE_PLOTS, &value)?;
        }
        if let Some(value) = get_env(ENV_HIDE_GROUPS) {
            config.hide_groups = parse_flag(ENV_HIDE_GROUPS, &value)?;
        }
        Ok(config)
    }

    /// Report fields that [`normalized`](Self::normalized) would replace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plot_capacity == 0 {
            return Err(ConfigError::OutOfRange {
                field: "plot_capacity",
                message: "must be positive",
            });
        }
        if self.sample_interval.is_zero() {
            return Err(ConfigError::OutOfRange {
                field: "sample_interval",
                message: "must be positive",
            });
        }
        Ok(())
    }

    /// Replace zero capacity and zero interval with their defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.plot_capacity == 0 {
            self.plot_capacity = DEFAULT_CAPACITY;
        }
        if self.sample_interval.is_zero() {
            self.sample_interval = DEFAULT_SAMPLE_INTERVAL;
        }
        self
    }
}

/// Which parts of a record the text panes show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetailConfig {
    /// Show only record labels.
    pub hide_fields: bool,
    /// Omit the type column.
    pub hide_types: bool,
    /// Omit the value column.
    pub hide_values: bool,
    /// Render nested values without their field names.
    pub hide_names: bool,
}

impl DetailConfig {
    /// Hide or show fields.
    #[must_use]
    pub fn hide_fields(mut self, hide: bool) -> Self {
        self.hide_fields = hide;
        self
    }

    /// Hide or show field types.
    #[must_use]
    pub fn hide_types(mut self, hide: bool) -> Self {
        self.hide_types = hide;
        self
    }

    /// Hide or show field values.
    #[must_use]
    pub fn hide_values(mut self, hide: bool) -> Self {
        self.hide_values = hide;
        self
    }

    /// Hide or show nested field names.
    #[must_use]
    pub fn hide_names(mut self, hide: bool) -> Self {
        self.hide_names = hide;
        self
    }
}

/// Settings for the [`Processes`](crate::processes::Processes) drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessesConfig {
    pub detail: DetailConfig,
    /// Leave out render-phase processes.
    pub hide_render: bool,
}

impl ProcessesConfig {
    /// Set the record detail toggles.
    #[must_use]
    pub fn detail(mut self, detail: DetailConfig) -> Self {
        self.detail = detail;
        self
    }

    /// Hide or show render-phase processes.
    #[must_use]
    pub fn hide_render(mut self, hide: bool) -> Self {
        self.hide_render = hide;
        self
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_owned(),
            expected: "a non-negative integer",
        })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_owned(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_map(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.plot_capacity, 300);
        assert_eq!(config.sample_interval, Duration::from_secs(1));
        assert_eq!(config.summary_wrap_width, 1080);
        assert!(!config.hide_plots && !config.hide_groups);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides() {
        let config = MonitorConfig::from_env_with(env_map(&[
            ("SIMSCOPE_PLOT_CAPACITY", "120"),
            ("SIMSCOPE_SAMPLE_INTERVAL_MS", " 250 "),
            ("SIMSCOPE_HIDE_PLOTS", "yes"),
            ("SIMSCOPE_HIDE_GROUPS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.plot_capacity, 120);
        assert_eq!(config.sample_interval, Duration::from_millis(250));
        assert!(config.hide_plots);
        assert!(!config.hide_groups);
    }

    #[test]
    fn env_rejects_garbage() {
        let err = MonitorConfig::from_env_with(env_map(&[("SIMSCOPE_PLOT_CAPACITY", "lots")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "SIMSCOPE_PLOT_CAPACITY=lots (expected a non-negative integer)"
        );
        let err = MonitorConfig::from_env_with(env_map(&[("SIMSCOPE_HIDE_GROUPS", "maybe")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "SIMSCOPE_HIDE_GROUPS",
                ..
            }
        ));
    }

    #[test]
    fn zero_values_normalise_to_defaults() {
        let config = MonitorConfig::default()
            .plot_capacity(0)
            .sample_interval(Duration::ZERO);
        assert!(config.validate().is_err());
        let config = config.normalized();
        assert_eq!(config.plot_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.sample_interval, DEFAULT_SAMPLE_INTERVAL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders() {
        let detail = DetailConfig::default().hide_types(true).hide_names(true);
        assert!(detail.hide_types && detail.hide_names);
        assert!(!detail.hide_fields && !detail.hide_values);
        let processes = ProcessesConfig::default().detail(detail).hide_render(true);
        assert!(processes.hide_render);
        assert_eq!(processes.detail, detail);
    }
}
