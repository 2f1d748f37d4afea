//! Engine configuration.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`LINEQ_LOWER_BOUND`, `LINEQ_UPPER_BOUND`)
//! 2. Built-in defaults
//!
//! The configuration is serde-capable so a host application can embed it in
//! its own settings file; this crate never reads files itself.

use std::env;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fraction::{Bounds, Fraction};

pub const LOWER_BOUND_VAR: &str = "LINEQ_LOWER_BOUND";
pub const UPPER_BOUND_VAR: &str = "LINEQ_UPPER_BOUND";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Magnitude limits applied to every arithmetic result.
    #[serde(default)]
    pub bounds: Bounds,
}

impl EngineConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Like [`EngineConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Bounds::default();
        let lower = match lookup(LOWER_BOUND_VAR) {
            Some(raw) => parse_bound("lower", &raw)?,
            None => defaults.lower().clone(),
        };
        let upper = match lookup(UPPER_BOUND_VAR) {
            Some(raw) => parse_bound("upper", &raw)?,
            None => defaults.upper().clone(),
        };

        let bounds = Bounds::new(lower, upper)?;
        debug!(
            "Engine bounds: lower={} upper={}",
            bounds.lower(),
            bounds.upper()
        );
        Ok(EngineConfig { bounds })
    }
}

fn parse_bound(name: &'static str, raw: &str) -> Result<Fraction, ConfigError> {
    raw.parse().map_err(|_| ConfigError::InvalidBound {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_keep_defaults() {
        let config = EngineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn overrides_are_parsed_as_fractions() {
        let config = EngineConfig::from_lookup(|name| match name {
            LOWER_BOUND_VAR => Some("1/1000".to_string()),
            UPPER_BOUND_VAR => Some(" 250 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bounds.lower(), &Fraction::new(1, 1000).unwrap());
        assert_eq!(config.bounds.upper(), &Fraction::integer(250));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = EngineConfig::from_lookup(|name| {
            (name == UPPER_BOUND_VAR).then(|| "lots".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBound {
                name: "upper",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = EngineConfig::from_lookup(|name| match name {
            LOWER_BOUND_VAR => Some("10".to_string()),
            UPPER_BOUND_VAR => Some("5".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { .. }));
    }
}
