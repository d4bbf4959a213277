//! Purchase combination enumeration, pricing, and budget filtering.
//!
//! The enumerator walks the cartesian product of per-instrument quantity
//! ranges `0..=floor(budget / price)`. Ranges are independent per
//! instrument: a combination may cost far more than the budget, and the
//! window filter afterwards is the only pruning. The search space is
//! `∏ (max_quantity + 1)` - exponential in the instrument count, acceptable
//! only for a handful of ETFs.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::price::PriceTable;

/// One candidate purchase plan: a quantity to buy per instrument.
///
/// Quantities are positionally aligned with the canonical order of the
/// [`PriceTable`] the combination was enumerated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    quantities: Vec<u64>,
}

impl Combination {
    /// Purchase quantities in the table's canonical instrument order.
    #[must_use]
    pub fn quantities(&self) -> &[u64] {
        &self.quantities
    }

    /// Pair each quantity with its instrument.
    pub fn entries<'a>(
        &'a self,
        table: &'a PriceTable,
    ) -> impl Iterator<Item = (&'a super::id::InstrumentId, u64)> {
        debug_assert_eq!(self.quantities.len(), table.len());
        table.instruments().zip(self.quantities.iter().copied())
    }

    /// Total amount spent if this combination were bought.
    #[must_use]
    pub fn total_price(&self, table: &PriceTable) -> Decimal {
        debug_assert_eq!(self.quantities.len(), table.len());
        table
            .entries()
            .zip(self.quantities.iter())
            .map(|((_, price), quantity)| price * Decimal::from(*quantity))
            .sum()
    }

    /// Number of transactions: instruments actually purchased.
    #[must_use]
    pub fn transactions(&self) -> usize {
        self.quantities.iter().filter(|q| **q > 0).count()
    }

    /// Flat fee per purchased instrument; zero-quantity entries cost nothing
    /// and the fee is independent of quantity magnitude.
    #[must_use]
    pub fn commission(&self, fee_per_transaction: Decimal) -> Decimal {
        fee_per_transaction * Decimal::from(self.transactions() as u64)
    }
}

/// Maximum affordable quantity per instrument, in canonical table order.
///
/// `floor(budget / price)` independently per instrument; a non-positive
/// budget affords nothing anywhere.
#[must_use]
pub fn max_quantities(table: &PriceTable, budget: i64) -> Vec<u64> {
    if budget <= 0 {
        return vec![0; table.len()];
    }
    let budget = Decimal::from(budget);
    table
        .entries()
        .map(|(_, price)| (budget / price).floor().to_u64().unwrap_or(u64::MAX))
        .collect()
}

/// Lazy cartesian-product walk over per-instrument quantity ranges.
///
/// Yields every combination with `0 <= quantity[i] <= max_quantity[i]`, the
/// rightmost (last) instrument varying fastest. An empty table yields the
/// single empty combination.
#[derive(Debug)]
pub struct Combinations {
    maxes: Vec<u64>,
    next: Option<Vec<u64>>,
}

impl Combinations {
    /// Enumerate everything affordable per instrument under `budget`.
    #[must_use]
    pub fn over(table: &PriceTable, budget: i64) -> Self {
        let maxes = max_quantities(table, budget);
        Self {
            next: Some(vec![0; maxes.len()]),
            maxes,
        }
    }

    /// Size of the search space, saturating at `u64::MAX`.
    #[must_use]
    pub fn search_space(&self) -> u64 {
        self.maxes
            .iter()
            .fold(1u64, |acc, max| acc.saturating_mul(max.saturating_add(1)))
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let current = self.next.take()?;

        // Odometer increment, rightmost digit fastest.
        let mut successor = current.clone();
        let mut position = successor.len();
        loop {
            if position == 0 {
                break; // wrapped past the leftmost digit: exhausted
            }
            position -= 1;
            if successor[position] < self.maxes[position] {
                successor[position] += 1;
                self.next = Some(successor);
                break;
            }
            successor[position] = 0;
        }

        Some(Combination {
            quantities: current,
        })
    }
}

/// Acceptance band around the target budget.
#[derive(Debug, Clone, Copy)]
pub struct BudgetWindow {
    lower: Decimal,
    upper: Decimal,
}

impl BudgetWindow {
    /// Band of `window` around `budget`, inclusive on both ends.
    #[must_use]
    pub fn new(budget: i64, window: u64) -> Self {
        let budget = Decimal::from(budget);
        let window = Decimal::from(window);
        Self {
            lower: budget - window,
            upper: budget + window,
        }
    }

    /// Whether a total price falls inside the band.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.lower <= price && price <= self.upper
    }
}

/// Keep only combinations whose total price falls inside the window.
///
/// Single pass; output order follows enumeration order. Each surviving
/// combination is paired with its already computed total price.
pub fn within_window<'a>(
    table: &'a PriceTable,
    window: BudgetWindow,
    combinations: impl Iterator<Item = Combination> + 'a,
) -> impl Iterator<Item = (Combination, Decimal)> + 'a {
    combinations.filter_map(move |combination| {
        let price = combination.total_price(table);
        window.contains(price).then_some((combination, price))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::InstrumentId;
    use rust_decimal_macros::dec;

    fn two_etf_table() -> PriceTable {
        PriceTable::try_new(vec![
            (InstrumentId::from("A"), dec!(10)),
            (InstrumentId::from("B"), dec!(20)),
        ])
        .unwrap()
    }

    #[test]
    fn max_quantities_floor_the_budget() {
        let table = two_etf_table();
        assert_eq!(max_quantities(&table, 25), vec![2, 1]);
    }

    #[test]
    fn non_positive_budget_affords_nothing() {
        let table = two_etf_table();
        assert_eq!(max_quantities(&table, 0), vec![0, 0]);
        assert_eq!(max_quantities(&table, -50), vec![0, 0]);
    }

    #[test]
    fn enumerates_the_full_product() {
        let table = two_etf_table();
        let all: Vec<Combination> = Combinations::over(&table, 25).collect();

        // (2 + 1) * (1 + 1) combinations, rightmost instrument fastest.
        assert_eq!(all.len(), 6);
        let quantities: Vec<&[u64]> = all.iter().map(Combination::quantities).collect();
        assert_eq!(
            quantities,
            vec![
                &[0, 0][..],
                &[0, 1][..],
                &[1, 0][..],
                &[1, 1][..],
                &[2, 0][..],
                &[2, 1][..],
            ]
        );
    }

    #[test]
    fn every_combination_respects_per_instrument_bounds() {
        let table = PriceTable::try_new(vec![
            (InstrumentId::from("A"), dec!(7)),
            (InstrumentId::from("B"), dec!(13)),
            (InstrumentId::from("C"), dec!(29)),
        ])
        .unwrap();
        let budget = 60;
        let maxes = max_quantities(&table, budget);

        let mut count = 0u64;
        for combination in Combinations::over(&table, budget) {
            for (quantity, max) in combination.quantities().iter().zip(&maxes) {
                assert!(quantity <= max);
            }
            count += 1;
        }

        let expected: u64 = maxes.iter().map(|m| m + 1).product();
        assert_eq!(count, expected);
    }

    #[test]
    fn search_space_matches_enumeration_count() {
        let table = two_etf_table();
        let combos = Combinations::over(&table, 25);
        assert_eq!(combos.search_space(), 6);
    }

    #[test]
    fn non_positive_budget_yields_single_all_zero_combination() {
        let table = two_etf_table();
        let all: Vec<Combination> = Combinations::over(&table, 0).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantities(), &[0, 0]);
    }

    #[test]
    fn empty_table_yields_single_empty_combination() {
        let table = PriceTable::try_new(Vec::new()).unwrap();
        let all: Vec<Combination> = Combinations::over(&table, 100).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].quantities().is_empty());
    }

    #[test]
    fn window_keeps_totals_inside_the_band() {
        let table = two_etf_table();
        let window = BudgetWindow::new(25, 5);

        let kept: Vec<(Vec<u64>, Decimal)> =
            within_window(&table, window, Combinations::over(&table, 25))
                .map(|(combination, price)| (combination.quantities().to_vec(), price))
                .collect();

        // Totals in [20, 30]: {A:0,B:1}=20, {A:1,B:1}=30, {A:2,B:0}=20.
        // {A:2,B:1}=40 is excluded.
        assert_eq!(
            kept,
            vec![
                (vec![0, 1], dec!(20)),
                (vec![1, 1], dec!(30)),
                (vec![2, 0], dec!(20)),
            ]
        );
    }

    #[test]
    fn filtered_totals_stay_within_the_window() {
        let table = two_etf_table();
        let budget = 25;
        let window = BudgetWindow::new(budget, 5);

        for (_, price) in within_window(&table, window, Combinations::over(&table, budget)) {
            let distance = (price - Decimal::from(budget)).abs();
            assert!(distance <= dec!(5));
        }
    }

    #[test]
    fn total_price_sums_quantity_times_price() {
        let table = two_etf_table();
        let combination = Combinations::over(&table, 25)
            .find(|c| c.quantities() == [2, 1])
            .unwrap();
        assert_eq!(combination.total_price(&table), dec!(40));
    }

    #[test]
    fn commission_counts_purchased_instruments_only() {
        let table = two_etf_table();
        let fee = dec!(2.50);

        let nothing = Combinations::over(&table, 25)
            .find(|c| c.quantities() == [0, 0])
            .unwrap();
        let one_leg = Combinations::over(&table, 25)
            .find(|c| c.quantities() == [2, 0])
            .unwrap();
        let two_legs = Combinations::over(&table, 25)
            .find(|c| c.quantities() == [2, 1])
            .unwrap();

        assert_eq!(nothing.commission(fee), dec!(0));
        assert_eq!(one_leg.commission(fee), dec!(2.50));
        assert_eq!(two_legs.commission(fee), dec!(5.00));
    }

    #[test]
    fn commission_is_independent_of_quantity_magnitude() {
        let table = two_etf_table();
        let fee = dec!(2.50);

        let small = Combinations::over(&table, 25)
            .find(|c| c.quantities() == [1, 0])
            .unwrap();
        let large = Combinations::over(&table, 25)
            .find(|c| c.quantities() == [2, 0])
            .unwrap();

        assert_eq!(small.commission(fee), large.commission(fee));
    }
}
