//! # Barista Counter
//!
//! Prints one order built from environment configuration.
//!
//! ## Usage
//! ```bash
//! # Espresso with milk, sugar and whipped cream (defaults)
//! cargo run -p barista-counter
//!
//! # Latte with syrup, as JSON
//! BARISTA_BASE=latte BARISTA_ADDITIONS=syrup BARISTA_OUTPUT=json cargo run -p barista-counter
//! ```

use barista_counter::config::CounterConfig;
use barista_counter::{init_tracing, run};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CounterConfig::load()?;
    init_tracing(&config.log_filter)?;

    info!(
        base = %config.base,
        additions = config.additions.len(),
        output = ?config.output,
        "Configuration loaded"
    );

    println!("{}", run(&config)?);
    Ok(())
}
