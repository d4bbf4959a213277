//! Portfolio weight calculation, current and projected.

use rust_decimal::Decimal;

use super::combination::Combination;
use super::error::DomainError;
use super::holdings::Holdings;
use super::id::InstrumentId;
use super::price::PriceTable;

/// Portfolio weights as percentages of total value.
///
/// Instrument weights follow the price table's canonical order; cash is kept
/// separate.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    /// Per-instrument weight, in canonical table order.
    pub instruments: Vec<(InstrumentId, Decimal)>,
    /// Weight of uninvested cash.
    pub cash: Decimal,
}

/// Current portfolio weights together with the total portfolio value.
#[derive(Debug, Clone)]
pub struct BalanceSheet {
    /// Weights of the holdings as they stand.
    pub weights: Weights,
    /// Total portfolio value: cash plus market value of all positions.
    pub total_value: Decimal,
}

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Weights of the holdings baseline as it stands.
pub fn current_balance(
    table: &PriceTable,
    holdings: &Holdings,
) -> Result<BalanceSheet, DomainError> {
    let (weights, total_value) = weigh(table, holdings, None)?;
    Ok(BalanceSheet {
        weights,
        total_value,
    })
}

/// Weights the portfolio would have after buying a candidate combination.
///
/// Each position grows by the combination's quantity; the cash amount is
/// deliberately left untouched, treating the budget as new money from
/// outside the portfolio rather than a draw on the cash bucket.
pub fn projected_balance(
    table: &PriceTable,
    holdings: &Holdings,
    combination: &Combination,
) -> Result<Weights, DomainError> {
    let (weights, _) = weigh(table, holdings, Some(combination))?;
    Ok(weights)
}

fn weigh(
    table: &PriceTable,
    holdings: &Holdings,
    purchase: Option<&Combination>,
) -> Result<(Weights, Decimal), DomainError> {
    let added = |index: usize| -> u64 {
        purchase.map_or(0, |combination| combination.quantities()[index])
    };

    let mut values: Vec<(InstrumentId, Decimal)> = Vec::with_capacity(table.len());
    let mut total = holdings.cash();
    for (index, (instrument, price)) in table.entries().enumerate() {
        let quantity = holdings.quantity(instrument)? + added(index);
        let value = Decimal::from(quantity) * price;
        total += value;
        values.push((instrument.clone(), value));
    }

    if total <= Decimal::ZERO {
        return Err(DomainError::ZeroPortfolioValue);
    }

    let instruments = values
        .into_iter()
        .map(|(instrument, value)| (instrument, value / total * HUNDRED))
        .collect();
    let cash = holdings.cash() / total * HUNDRED;

    Ok((Weights { instruments, cash }, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::combination::Combinations;
    use rust_decimal_macros::dec;

    fn table(prices: &[(&str, Decimal)]) -> PriceTable {
        PriceTable::try_new(
            prices
                .iter()
                .map(|(id, price)| (InstrumentId::from(*id), *price)),
        )
        .unwrap()
    }

    fn holdings(amounts: &[(&str, Decimal)]) -> Holdings {
        Holdings::from_named_amounts(amounts.iter().copied()).unwrap()
    }

    #[test]
    fn current_balance_splits_cash_and_position() {
        let table = table(&[("A", dec!(10))]);
        let holdings = holdings(&[("MONEY", dec!(100)), ("A", dec!(5))]);

        let sheet = current_balance(&table, &holdings).unwrap();

        assert_eq!(sheet.total_value, dec!(150));
        let (_, weight_a) = &sheet.weights.instruments[0];
        assert!((weight_a - dec!(33.33)).abs() < dec!(0.01));
        assert!((sheet.weights.cash - dec!(66.67)).abs() < dec!(0.01));
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        let table = table(&[("A", dec!(102.5)), ("B", dec!(98.1)), ("C", dec!(27.45))]);
        let holdings = holdings(&[
            ("MONEY", dec!(523.77)),
            ("A", dec!(12)),
            ("B", dec!(7)),
            ("C", dec!(31)),
        ]);

        let sheet = current_balance(&table, &holdings).unwrap();
        let sum: Decimal = sheet
            .weights
            .instruments
            .iter()
            .map(|(_, weight)| *weight)
            .sum::<Decimal>()
            + sheet.weights.cash;

        assert!((sum - dec!(100)).abs() < dec!(0.0000001));
    }

    #[test]
    fn projecting_all_zeros_reproduces_current_weights() {
        let table = table(&[("A", dec!(10)), ("B", dec!(20))]);
        let holdings = holdings(&[("MONEY", dec!(100)), ("A", dec!(5)), ("B", dec!(2))]);

        let all_zero = Combinations::over(&table, 0).next().unwrap();
        assert_eq!(all_zero.quantities(), &[0, 0]);

        let current = current_balance(&table, &holdings).unwrap();
        let projected = projected_balance(&table, &holdings, &all_zero).unwrap();

        assert_eq!(projected, current.weights);
    }

    #[test]
    fn projection_grows_positions_but_not_cash() {
        let table = table(&[("A", dec!(10))]);
        let holdings = holdings(&[("MONEY", dec!(100)), ("A", dec!(5))]);

        let buy_five = Combinations::over(&table, 50).last().unwrap();
        assert_eq!(buy_five.quantities(), &[5]);

        let projected = projected_balance(&table, &holdings, &buy_five).unwrap();

        // Position value doubles to 100, total becomes 200; cash stays 100.
        let (_, weight_a) = &projected.instruments[0];
        assert_eq!(*weight_a, dec!(50));
        assert_eq!(projected.cash, dec!(50));
    }

    #[test]
    fn missing_allocation_entry_fails_the_calculation() {
        let table = table(&[("A", dec!(10)), ("B", dec!(20))]);
        let holdings = holdings(&[("MONEY", dec!(100)), ("A", dec!(5))]);

        let result = current_balance(&table, &holdings);
        assert!(matches!(
            result,
            Err(DomainError::MissingAllocation { instrument }) if instrument.as_str() == "B"
        ));
    }

    #[test]
    fn zero_portfolio_value_is_an_error() {
        let table = table(&[("A", dec!(10))]);
        let holdings = holdings(&[("MONEY", dec!(0)), ("A", dec!(0))]);

        let result = current_balance(&table, &holdings);
        assert!(matches!(result, Err(DomainError::ZeroPortfolioValue)));
    }
}
