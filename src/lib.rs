//! Buyside - brute-force ETF purchase planning.
//!
//! This crate computes feasible ways to spend a fixed budget on a small set
//! of exchange-traded funds: it enumerates integer purchase quantities per
//! instrument, keeps combinations whose total cost falls within a window
//! around the budget, and reports the resulting portfolio weight changes
//! against the configured holdings baseline.
//!
//! # Architecture
//!
//! The calculation core is provider-agnostic; the price lookup sits behind a
//! port so the pipeline runs identically against a live quote API or a
//! static fixture:
//!
//! - [`domain`] - price table, combination enumerator, budget window,
//!   pricing/commission, and balance calculators
//! - [`port`] - the [`port::price::PriceProvider`] trait
//! - [`adapter`] - Yahoo Finance quote implementation
//! - [`config`] - TOML configuration (tickers, allocation baseline, provider
//!   and broker settings)
//! - [`cli`] - argument surface and the stdout reporter
//! - [`app`] - one-pass orchestration
//!
//! # Example
//!
//! ```
//! use buyside::domain::{BudgetWindow, Combinations, InstrumentId, PriceTable};
//! use rust_decimal_macros::dec;
//!
//! let table = PriceTable::try_new(vec![
//!     (InstrumentId::from("VUAA"), dec!(10)),
//!     (InstrumentId::from("VWCE"), dec!(20)),
//! ])
//! .unwrap();
//!
//! let affordable = Combinations::over(&table, 25);
//! assert_eq!(affordable.search_space(), 6);
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(feature = "testkit")]
pub mod testkit;
