//! Domain validation errors for the allocation core.
//!
//! These errors are returned by `try_new` constructors and the balance
//! calculators when a domain invariant is violated. Validation happens up
//! front: a bad price is rejected when the price table is built, never deep
//! inside combination generation.

use rust_decimal::Decimal;
use thiserror::Error;

use super::id::InstrumentId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Prices must be strictly positive to bound purchase quantities.
    #[error("price for {instrument} must be positive, got {price}")]
    InvalidPrice {
        /// The instrument with the invalid quote.
        instrument: InstrumentId,
        /// The invalid price that was provided.
        price: Decimal,
    },

    /// An instrument appeared more than once in the same table.
    #[error("duplicate instrument {instrument}")]
    DuplicateInstrument {
        /// The repeated instrument.
        instrument: InstrumentId,
    },

    /// A priced instrument has no entry in the holdings baseline.
    /// Never defaulted to zero; a missing entry aborts the run.
    #[error("no allocation entry for {instrument}")]
    MissingAllocation {
        /// The instrument without a holdings entry.
        instrument: InstrumentId,
    },

    /// Cash holdings cannot be negative.
    #[error("cash holding must be non-negative, got {amount}")]
    NegativeCash {
        /// The invalid cash amount.
        amount: Decimal,
    },

    /// Instrument holdings must be non-negative whole quantities.
    #[error("holding for {instrument} must be a non-negative whole quantity, got {amount}")]
    InvalidQuantity {
        /// The instrument with the invalid holding.
        instrument: InstrumentId,
        /// The invalid quantity that was provided.
        amount: Decimal,
    },

    /// Weights are undefined for a portfolio with no value.
    #[error("total portfolio value is zero, weights are undefined")]
    ZeroPortfolioValue,
}
