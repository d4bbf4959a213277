//! Test fixtures for exercising the pipeline without a live quote API.
//!
//! Enabled with the `testkit` feature; integration tests depend on the crate
//! with that feature turned on.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::InstrumentId;
use crate::error::{Error, Result};
use crate::port::price::PriceProvider;

/// Price provider backed by a fixed symbol -> price map.
pub struct StaticPriceProvider {
    quotes: Vec<(String, Decimal)>,
}

impl StaticPriceProvider {
    /// Provider that answers with the given price per symbol.
    #[must_use]
    pub fn new(quotes: Vec<(&str, Decimal)>) -> Self {
        Self {
            quotes: quotes
                .into_iter()
                .map(|(symbol, price)| (symbol.to_string(), price))
                .collect(),
        }
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn fetch_prices(
        &self,
        tickers: &[(InstrumentId, String)],
    ) -> Result<Vec<(InstrumentId, Decimal)>> {
        tickers
            .iter()
            .map(|(instrument, symbol)| {
                self.quotes
                    .iter()
                    .find(|(known, _)| known == symbol)
                    .map(|(_, price)| (instrument.clone(), *price))
                    .ok_or_else(|| Error::PriceUnavailable {
                        symbol: symbol.clone(),
                        reason: "symbol not in fixture".into(),
                    })
            })
            .collect()
    }

    fn provider_name(&self) -> &'static str {
        "static"
    }
}
