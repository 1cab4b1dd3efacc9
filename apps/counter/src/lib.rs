//! # Barista Counter
//!
//! Takes one order from configuration and prints it.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env vars ──► CounterConfig ──► OrderTicket ──► text / JSON on stdout   │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                           barista-core::Order                           │
//! │                                                                         │
//! │  Logs go to stderr so stdout carries only the ticket.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `BARISTA_BASE` - Base drink (default: espresso)
//! - `BARISTA_ADDITIONS` - Comma-separated additions (default: milk,sugar,whipped_cream)
//! - `BARISTA_OUTPUT` - `text` or `json` (default: text)
//! - `BARISTA_LOG` - Tracing filter when `RUST_LOG` is unset (default: info)

pub mod config;
pub mod error;
pub mod ticket;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::CounterConfig;
use crate::error::{CounterError, CounterResult};
use crate::ticket::OrderTicket;

/// Installs the global tracing subscriber, writing to stderr.
pub fn init_tracing(default_filter: &str) -> CounterResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| CounterError::Logging(e.to_string()))?;

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CounterError::Logging(e.to_string()))
}

/// Builds the configured order and renders it.
pub fn run(config: &CounterConfig) -> CounterResult<String> {
    let ticket = OrderTicket::issue(config.base, &config.additions);
    ticket.render(config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use barista_core::{Addition, BaseItem};

    #[test]
    fn test_run_default_config() {
        let output = run(&CounterConfig::default()).unwrap();
        assert!(output.ends_with("Your order: Espresso, Milk, Sugar, Whipped Cream\nTotal: $4.40"));
    }

    #[test]
    fn test_run_json() {
        let config = CounterConfig {
            base: BaseItem::Tea,
            additions: vec![Addition::Sugar, Addition::Sugar],
            output: OutputFormat::Json,
            ..CounterConfig::default()
        };
        let output = run(&config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["summary"]["description"], "Tea, Sugar, Sugar");
        assert_eq!(json["summary"]["total"], 240);
    }
}
