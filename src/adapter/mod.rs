//! Adapters implementing the provider ports against real services.

pub mod yahoo;

pub use yahoo::YahooQuoteClient;
