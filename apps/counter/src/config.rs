//! Counter configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::str::FromStr;

use barista_core::{Addition, BaseItem, ValidationError};
use serde::{Deserialize, Serialize};

/// How the finished order is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ValidationError::UnknownName {
                kind: "output format",
                value: s.trim().to_string(),
            }),
        }
    }
}

/// Counter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Base drink of the order
    pub base: BaseItem,

    /// Additions, applied in order (innermost first)
    pub additions: Vec<Addition>,

    /// Output format for the finished order
    pub output: OutputFormat,

    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            base: BaseItem::Espresso,
            additions: vec![Addition::Milk, Addition::Sugar, Addition::WhippedCream],
            output: OutputFormat::Text,
            log_filter: "info".to_string(),
        }
    }
}

impl CounterConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CounterConfig::default();

        let base = match lookup("BARISTA_BASE") {
            Some(value) => value
                .parse::<BaseItem>()
                .map_err(|_| ConfigError::InvalidValue("BARISTA_BASE".to_string()))?,
            None => defaults.base,
        };

        // An empty list is a plain drink, not an error
        let additions = match lookup("BARISTA_ADDITIONS") {
            Some(value) => value
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| {
                    name.parse::<Addition>()
                        .map_err(|_| ConfigError::InvalidValue("BARISTA_ADDITIONS".to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.additions,
        };

        let output = match lookup("BARISTA_OUTPUT") {
            Some(value) => value
                .parse::<OutputFormat>()
                .map_err(|_| ConfigError::InvalidValue("BARISTA_OUTPUT".to_string()))?,
            None => defaults.output,
        };

        let log_filter = lookup("BARISTA_LOG").unwrap_or(defaults.log_filter);

        Ok(CounterConfig {
            base,
            additions,
            output,
            log_filter,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(" Text ".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(
            "xml".parse::<OutputFormat>(),
            Err(ValidationError::UnknownName {
                kind: "output format",
                value: "xml".to_string()
            })
        );
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CounterConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn test_reads_all_values() {
        let config = CounterConfig::from_lookup(lookup_from(&[
            ("BARISTA_BASE", "Latte"),
            ("BARISTA_ADDITIONS", "syrup, whipped-cream ,milk"),
            ("BARISTA_OUTPUT", "JSON"),
            ("BARISTA_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.base, BaseItem::Latte);
        assert_eq!(
            config.additions,
            vec![Addition::Syrup, Addition::WhippedCream, Addition::Milk]
        );
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_empty_additions_means_plain_drink() {
        let config =
            CounterConfig::from_lookup(lookup_from(&[("BARISTA_ADDITIONS", "")])).unwrap();
        assert!(config.additions.is_empty());
    }

    #[test]
    fn test_duplicate_additions_are_kept() {
        let config =
            CounterConfig::from_lookup(lookup_from(&[("BARISTA_ADDITIONS", "milk,milk")]))
                .unwrap();
        assert_eq!(config.additions, vec![Addition::Milk, Addition::Milk]);
    }

    #[test]
    fn test_invalid_values() {
        let err = CounterConfig::from_lookup(lookup_from(&[("BARISTA_BASE", "mocha")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("BARISTA_BASE".to_string()));

        let err = CounterConfig::from_lookup(lookup_from(&[("BARISTA_ADDITIONS", "milk,ketchup")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidValue("BARISTA_ADDITIONS".to_string()));

        let err = CounterConfig::from_lookup(lookup_from(&[("BARISTA_OUTPUT", "xml")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BARISTA_OUTPUT");
    }
}
