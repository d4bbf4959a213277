//! Yahoo Finance quote adapter.
//!
//! Fetches the current bid price per symbol from the Yahoo quote endpoint,
//! one synchronous request per symbol in configuration order. A symbol with
//! no bid in the response is a hard `PriceUnavailable` failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::domain::InstrumentId;
use crate::error::{Error, Result};
use crate::port::price::PriceProvider;

/// HTTP client for the Yahoo Finance quote API.
pub struct YahooQuoteClient {
    http: HttpClient,
    quote_url: String,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponse,
}

#[derive(Debug, serde::Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<Quote>,
}

#[derive(Debug, serde::Deserialize)]
struct Quote {
    symbol: String,
    bid: Option<f64>,
}

impl YahooQuoteClient {
    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            quote_url: config.quote_url.clone(),
        }
    }

    async fn bid_price(&self, symbol: &str) -> Result<Decimal> {
        let url = format!("{}?symbols={symbol}", self.quote_url);
        let envelope: QuoteEnvelope = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let quote = envelope
            .quote_response
            .result
            .into_iter()
            .find(|quote| quote.symbol == symbol)
            .ok_or_else(|| Error::PriceUnavailable {
                symbol: symbol.to_string(),
                reason: "symbol missing from quote response".into(),
            })?;

        let bid = quote.bid.ok_or_else(|| Error::PriceUnavailable {
            symbol: symbol.to_string(),
            reason: "no bid price in quote".into(),
        })?;

        Decimal::from_f64(bid).ok_or_else(|| Error::PriceUnavailable {
            symbol: symbol.to_string(),
            reason: format!("bid price {bid} is not representable"),
        })
    }
}

#[async_trait]
impl PriceProvider for YahooQuoteClient {
    async fn fetch_prices(
        &self,
        tickers: &[(InstrumentId, String)],
    ) -> Result<Vec<(InstrumentId, Decimal)>> {
        let mut prices = Vec::with_capacity(tickers.len());
        for (instrument, symbol) in tickers {
            let price = self.bid_price(symbol).await?;
            debug!(%instrument, symbol, %price, "Quote fetched");
            prices.push((instrument.clone(), price));
        }
        Ok(prices)
    }

    fn provider_name(&self) -> &'static str {
        "yahoo"
    }
}
