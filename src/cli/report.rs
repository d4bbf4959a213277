//! Human-readable report on stdout.
//!
//! Everything the operator reads goes through here; diagnostics stay on the
//! tracing side. Amounts print with two decimals and thousands separators,
//! weights as percentages with a signed two-decimal delta.

use rust_decimal::Decimal;

use crate::domain::{BalanceSheet, Combination, PriceTable, Weights, CASH_ENTRY};

const RULE_WIDTH: usize = 63;

/// Print the note shown when no budget was given.
pub fn no_budget() {
    println!("No budget amount specified");
}

/// Print current unit prices.
pub fn prices(table: &PriceTable) {
    let line = table
        .entries()
        .map(|(instrument, price)| format!("{instrument}: {price:.2}€"))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("ETFs Price: {line}");
}

/// Print the current allocation weights and total portfolio value.
pub fn current_allocation(sheet: &BalanceSheet) {
    println!("Portfolio Allocation: {}", weight_line(&sheet.weights, None));
    println!("Value: {}€", money(sheet.total_value));
}

/// Print the search parameters banner.
pub fn search_banner(budget: i64, window: u64) {
    println!("Performing calculations with Budget = {budget}€ and Window = {window}€");
}

/// Print one surviving combination: what to buy, what it costs, and the
/// allocation it would produce.
pub fn option_block(
    index: usize,
    table: &PriceTable,
    combination: &Combination,
    cost: Decimal,
    commission: Decimal,
    projected: &Weights,
    current: &Weights,
) {
    println!("{}", "-".repeat(RULE_WIDTH));
    let buys = combination
        .entries(table)
        .map(|(instrument, quantity)| format!("{quantity} {instrument}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Opt. {index} | Buying {buys} would use {}€ with +{}€ commission for {}€ total.",
        money(cost),
        money(commission),
        money(cost + commission),
    );
    println!(
        "Portfolio allocation would be: {}",
        weight_line(projected, Some(current))
    );
}

/// Print the closing line when the search kept nothing.
pub fn no_options() {
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("No combination fits the window");
}

fn weight_line(weights: &Weights, baseline: Option<&Weights>) -> String {
    let mut parts: Vec<String> = weights
        .instruments
        .iter()
        .enumerate()
        .map(|(position, (instrument, weight))| {
            let delta = baseline.map(|base| {
                let (_, current) = &base.instruments[position];
                delta_label(*weight, *current)
            });
            labelled_weight(&instrument.to_string(), *weight, delta)
        })
        .collect();

    let cash_delta = baseline.map(|base| delta_label(weights.cash, base.cash));
    parts.push(labelled_weight(CASH_ENTRY, weights.cash, cash_delta));

    parts.join(" | ")
}

fn labelled_weight(label: &str, weight: Decimal, delta: Option<String>) -> String {
    match delta {
        Some(delta) => format!("{label}: {weight:.2}%({delta}%)"),
        None => format!("{label}: {weight:.2}%"),
    }
}

/// Signed two-decimal difference, `+` only for a strict increase.
fn delta_label(projected: Decimal, current: Decimal) -> String {
    let difference = (projected - current).abs().round_dp(2);
    if projected > current {
        format!("+{difference:.2}")
    } else {
        format!("-{difference:.2}")
    }
}

/// Two decimals with thousands separators in the integer part.
fn money(value: Decimal) -> String {
    let raw = format!("{:.2}", value.round_dp(2));
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (offset, digit) in integer.chars().enumerate() {
        if offset > 0 && (integer.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}
