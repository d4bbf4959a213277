//! Application configuration loading and validation.
//!
//! Configuration lives in a TOML file (`info.toml` by default) with the
//! ticker universe and the current holdings baseline, plus quote-provider,
//! broker, and logging settings.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::InstrumentId;
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Instrument id -> market-data symbol.
    pub tickers: BTreeMap<String, String>,
    /// Instrument id (or `MONEY`) -> currently held quantity.
    pub allocation: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub broker: BrokerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Quote provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Quote endpoint returning bid prices per symbol.
    #[serde(default = "default_quote_url")]
    pub quote_url: String,
    /// HTTP request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_quote_url() -> String {
    "https://query1.finance.yahoo.com/v7/finance/quote".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            quote_url: default_quote_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Broker fee settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    /// Flat fee charged per instrument actually purchased in a combination.
    #[serde(default = "default_commission")]
    pub commission_per_transaction: Decimal,
}

fn default_commission() -> Decimal {
    Decimal::new(250, 2) // 2.50
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            commission_per_transaction: default_commission(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tickers.is_empty() {
            return Err(ConfigError::MissingField { field: "tickers" }.into());
        }
        if self.allocation.is_empty() {
            return Err(ConfigError::MissingField { field: "allocation" }.into());
        }
        if self.broker.commission_per_transaction < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "commission_per_transaction",
                reason: format!(
                    "must be non-negative, got {}",
                    self.broker.commission_per_transaction
                ),
            }
            .into());
        }
        if self.provider.quote_url.is_empty() {
            return Err(ConfigError::MissingField { field: "quote_url" }.into());
        }
        Ok(())
    }

    /// Instrument ids paired with their market-data symbols.
    #[must_use]
    pub fn ticker_symbols(&self) -> Vec<(InstrumentId, String)> {
        self.tickers
            .iter()
            .map(|(id, symbol)| (InstrumentId::from(id.as_str()), symbol.clone()))
            .collect()
    }

    /// Initialize tracing output.
    ///
    /// Diagnostics go to stderr so the report on stdout stays clean.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            _ => {
                fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const MINIMAL: &str = r#"
        [tickers]
        VUAA = "VUAA.DE"
        VWCE = "VWCE.DE"

        [allocation]
        MONEY = 2000.0
        VUAA = 12
        VWCE = 7
    "#;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config: Config = toml::from_str(MINIMAL).unwrap();

        assert_eq!(config.tickers.len(), 2);
        assert_eq!(config.allocation["MONEY"], dec!(2000.0));
        assert_eq!(config.allocation["VUAA"], dec!(12));
        assert_eq!(config.broker.commission_per_transaction, dec!(2.50));
        assert_eq!(config.provider.timeout_ms, 10_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn ticker_symbols_are_in_canonical_order() {
        let config: Config = toml::from_str(MINIMAL).unwrap();
        let symbols = config.ticker_symbols();

        assert_eq!(symbols[0].0.as_str(), "VUAA");
        assert_eq!(symbols[0].1, "VUAA.DE");
        assert_eq!(symbols[1].0.as_str(), "VWCE");
    }

    #[test]
    fn rejects_empty_tickers() {
        let toml_str = r#"
            [tickers]

            [allocation]
            MONEY = 100
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_commission() {
        let toml_str = format!(
            "{MINIMAL}\n[broker]\ncommission_per_transaction = -1.0\n"
        );
        let config: Config = toml::from_str(&toml_str).unwrap();
        assert!(config.validate().is_err());
    }
}
