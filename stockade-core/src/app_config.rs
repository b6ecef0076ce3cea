use serde::Deserialize;
use std::env;

use crate::money::Cents;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub rules: BusinessRules,
}

/// Tunable catalog rules. Defaults reproduce the stock business policy:
/// books cost at least $5.00, electronics at least $10.00, and anything
/// with five or fewer units on hand counts as low stock.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct BusinessRules {
    #[serde(default = "default_book_min_price_cents")]
    pub book_min_price_cents: Cents,
    #[serde(default = "default_electronics_min_price_cents")]
    pub electronics_min_price_cents: Cents,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_book_min_price_cents() -> Cents {
    500
}

fn default_electronics_min_price_cents() -> Cents {
    1_000
}

fn default_low_stock_threshold() -> u32 {
    5
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            book_min_price_cents: default_book_min_price_cents(),
            electronics_min_price_cents: default_electronics_min_price_cents(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file; optional so the library works
            // out of the box with compiled-in defaults
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides, e.g. config/production.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `STOCKADE__RULES__LOW_STOCK_THRESHOLD=10`
            .add_source(config::Environment::with_prefix("STOCKADE").separator("__"))
            .build()?;

        let cfg: Config = s.try_deserialize()?;
        tracing::debug!(rules = ?cfg.rules, "loaded business rules");
        Ok(cfg)
    }
}
