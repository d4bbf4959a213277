//! Price provider port.
//!
//! The one external integration point: a live lookup of current bid prices
//! for the configured symbols. Failures surface as a typed
//! [`Error::PriceUnavailable`](crate::error::Error::PriceUnavailable) per
//! symbol so the caller owns any retry policy; the core never retries.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::InstrumentId;
use crate::error::Result;

/// Supplies current bid prices per instrument.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the current bid price for every requested symbol.
    ///
    /// # Arguments
    ///
    /// * `tickers` - Instrument ids paired with their market-data symbols
    ///
    /// Fails on the first symbol without a usable quote; there is no
    /// partial-results mode.
    async fn fetch_prices(
        &self,
        tickers: &[(InstrumentId, String)],
    ) -> Result<Vec<(InstrumentId, Decimal)>>;

    /// Provider name for logging/debugging.
    fn provider_name(&self) -> &'static str;
}
