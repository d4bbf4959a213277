//! Validated, canonically ordered price table.
//!
//! The table fixes one ordering of the instrument universe for the whole
//! run. Every consumer that pairs quantities with instruments (the
//! enumerator, pricing, the balance calculator) walks entries in this order,
//! so a quantity vector and the table line up positionally by construction.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::id::InstrumentId;

/// Current unit price per instrument, fetched once per run.
///
/// Entries are sorted by instrument id at construction; iteration order is
/// the canonical instrument ordering for the run.
#[derive(Debug, Clone)]
pub struct PriceTable {
    entries: Vec<(InstrumentId, Decimal)>,
}

impl PriceTable {
    /// Build a table from quoted prices, validating every entry.
    ///
    /// Rejects non-positive prices and duplicate instruments before any
    /// enumeration can happen.
    pub fn try_new(
        quotes: impl IntoIterator<Item = (InstrumentId, Decimal)>,
    ) -> Result<Self, DomainError> {
        let mut entries: Vec<(InstrumentId, Decimal)> = quotes.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for window in entries.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(DomainError::DuplicateInstrument {
                    instrument: window[0].0.clone(),
                });
            }
        }
        for (instrument, price) in &entries {
            if *price <= Decimal::ZERO {
                return Err(DomainError::InvalidPrice {
                    instrument: instrument.clone(),
                    price: *price,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Instruments with their prices, in canonical order.
    pub fn entries(&self) -> impl Iterator<Item = (&InstrumentId, Decimal)> {
        self.entries.iter().map(|(id, price)| (id, *price))
    }

    /// Instruments in canonical order.
    pub fn instruments(&self) -> impl Iterator<Item = &InstrumentId> {
        self.entries.iter().map(|(id, _)| id)
    }

    /// Price for one instrument, if it is in the table.
    #[must_use]
    pub fn price(&self, instrument: &InstrumentId) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(id, _)| id == instrument)
            .map(|(_, price)| *price)
    }

    /// Number of instruments in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no instruments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
