use std::str::FromStr;

use anyhow::Context;
use serde::Serialize;

/// Weights and limits for ranking daily walking windows.
///
/// `uv_weight` is part of the recognised configuration but the ranking does
/// not score UV exposure, so the applied weights sum to 0.8.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestTimesConfig {
    pub max_time_windows: usize,
    pub temperature_weight: f64,
    pub humidity_weight: f64,
    pub wind_weight: f64,
    pub uv_weight: f64,
}

impl Default for BestTimesConfig {
    fn default() -> Self {
        Self {
            max_time_windows: 4,
            temperature_weight: 0.4,
            humidity_weight: 0.2,
            wind_weight: 0.2,
            uv_weight: 0.2,
        }
    }
}

impl BestTimesConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            max_time_windows: parse_or(
                &lookup,
                "WALKSAFE_MAX_TIME_WINDOWS",
                defaults.max_time_windows,
            )?,
            temperature_weight: parse_or(
                &lookup,
                "WALKSAFE_TEMPERATURE_WEIGHT",
                defaults.temperature_weight,
            )?,
            humidity_weight: parse_or(
                &lookup,
                "WALKSAFE_HUMIDITY_WEIGHT",
                defaults.humidity_weight,
            )?,
            wind_weight: parse_or(&lookup, "WALKSAFE_WIND_WEIGHT", defaults.wind_weight)?,
            uv_weight: parse_or(&lookup, "WALKSAFE_UV_WEIGHT", defaults.uv_weight)?,
        })
    }

    pub fn with_max_time_windows(mut self, max_time_windows: Option<usize>) -> Self {
        if let Some(value) = max_time_windows {
            self.max_time_windows = value;
        }
        self
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        None => Ok(default),
    }
}
