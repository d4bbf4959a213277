//! Holdings baseline: cash plus instrument positions.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::DomainError;
use super::id::InstrumentId;

/// Name of the pseudo-entry carrying uninvested cash in the allocation
/// configuration.
pub const CASH_ENTRY: &str = "MONEY";

/// One entry of the holdings baseline.
///
/// The allocation configuration mixes instrument quantities with a cash
/// amount under the `MONEY` key. Parsing classifies each entry exactly once;
/// downstream code pattern-matches instead of re-checking the key string.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingEntry {
    /// Uninvested cash amount.
    Cash(Decimal),
    /// A held instrument position.
    Position {
        /// The held instrument.
        instrument: InstrumentId,
        /// Number of units held.
        quantity: u64,
    },
}

impl HoldingEntry {
    /// Classify one named allocation amount.
    ///
    /// `MONEY` becomes [`HoldingEntry::Cash`] (any non-negative amount);
    /// everything else must be a non-negative whole quantity.
    pub fn parse(name: &str, amount: Decimal) -> Result<Self, DomainError> {
        if name == CASH_ENTRY {
            if amount < Decimal::ZERO {
                return Err(DomainError::NegativeCash { amount });
            }
            return Ok(Self::Cash(amount));
        }

        let instrument = InstrumentId::from(name);
        if amount < Decimal::ZERO || amount.fract() != Decimal::ZERO {
            return Err(DomainError::InvalidQuantity { instrument, amount });
        }
        let quantity = amount
            .to_u64()
            .ok_or(DomainError::InvalidQuantity {
                instrument: instrument.clone(),
                amount,
            })?;

        Ok(Self::Position {
            instrument,
            quantity,
        })
    }
}

/// Currently held quantities: cash plus instrument positions, read once per
/// run and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Holdings {
    cash: Decimal,
    positions: Vec<(InstrumentId, u64)>,
}

impl Holdings {
    /// Build holdings from named allocation amounts.
    pub fn from_named_amounts<'a>(
        amounts: impl IntoIterator<Item = (&'a str, Decimal)>,
    ) -> Result<Self, DomainError> {
        let mut cash = Decimal::ZERO;
        let mut positions: Vec<(InstrumentId, u64)> = Vec::new();

        for (name, amount) in amounts {
            match HoldingEntry::parse(name, amount)? {
                HoldingEntry::Cash(amount) => cash = amount,
                HoldingEntry::Position {
                    instrument,
                    quantity,
                } => {
                    if positions.iter().any(|(id, _)| *id == instrument) {
                        return Err(DomainError::DuplicateInstrument { instrument });
                    }
                    positions.push((instrument, quantity));
                }
            }
        }

        positions.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Self { cash, positions })
    }

    /// Uninvested cash amount.
    #[must_use]
    pub fn cash(&self) -> Decimal {
        self.cash
    }

    /// Held quantity for one instrument.
    ///
    /// A priced instrument missing from the baseline is a configuration
    /// mistake and fails with [`DomainError::MissingAllocation`].
    pub fn quantity(&self, instrument: &InstrumentId) -> Result<u64, DomainError> {
        self.positions
            .iter()
            .find(|(id, _)| id == instrument)
            .map(|(_, quantity)| *quantity)
            .ok_or_else(|| DomainError::MissingAllocation {
                instrument: instrument.clone(),
            })
    }
}
