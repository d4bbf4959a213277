//! App orchestration module.
//!
//! One synchronous pass: fetch prices, validate the universe, report the
//! current balance, then enumerate, filter, and report purchase options.

use crate::cli::report;
use crate::config::Config;
use crate::domain::{
    current_balance, projected_balance, within_window, BudgetWindow, Combinations, Holdings,
    PriceTable,
};
use crate::error::Result;
use crate::port::price::PriceProvider;
use tracing::info;

/// Main application struct.
pub struct App;

impl App {
    /// Run one full planning pass and print the report.
    pub async fn run(
        config: &Config,
        provider: &dyn PriceProvider,
        budget: i64,
        window: u64,
    ) -> Result<()> {
        let tickers = config.ticker_symbols();
        info!(
            instruments = tickers.len(),
            provider = provider.provider_name(),
            "Fetching quotes"
        );

        let quotes = provider.fetch_prices(&tickers).await?;
        let table = PriceTable::try_new(quotes)?;
        let holdings = Holdings::from_named_amounts(
            config.allocation.iter().map(|(name, amount)| (name.as_str(), *amount)),
        )?;

        let sheet = current_balance(&table, &holdings)?;

        report::prices(&table);
        report::current_allocation(&sheet);
        report::search_banner(budget, window);

        let combinations = Combinations::over(&table, budget);
        info!(
            search_space = combinations.search_space(),
            budget,
            window,
            "Enumerating combinations"
        );

        let band = BudgetWindow::new(budget, window);
        let mut kept = 0usize;
        for (combination, cost) in within_window(&table, band, combinations) {
            let projected = projected_balance(&table, &holdings, &combination)?;
            let commission = combination.commission(config.broker.commission_per_transaction);
            kept += 1;
            report::option_block(
                kept,
                &table,
                &combination,
                cost,
                commission,
                &projected,
                &sheet.weights,
            );
        }

        if kept == 0 {
            report::no_options();
        }

        info!(kept, "Search complete");
        Ok(())
    }
}
