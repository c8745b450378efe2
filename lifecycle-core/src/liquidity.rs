//! Borrowing capacity against future income.
//!
//! A subject may spend more than today's cash by pledging income from
//! later days, net of the compounding interest they would otherwise earn
//! or owe. Settlement and the engine's property tests share this single
//! definition of "how much is spendable today".

use crate::Trial;

/// Maximum amount drawable today against all future income.
///
/// Walks from the final day backward to `day`, discounting the running
/// total through each transition's interest and layering in each
/// intervening day's income. `day`'s own income is excluded from the
/// accumulation: it is cash on hand, not collateral, and counting it here
/// would double it.
///
/// # Panics
///
/// Panics if `day` is not strictly before the trial's last day; the last
/// day has no future income to borrow against.
#[must_use]
pub fn borrowing_capacity(trial: &Trial, day: usize) -> f64 {
    let incomes = trial.incomes();
    let rates = trial.decimal_rates();
    assert!(
        day < rates.len(),
        "day {day} has no future income to borrow against"
    );

    let mut capacity = incomes[incomes.len() - 1];
    for earlier in (day..rates.len()).rev() {
        capacity /= 1.0 + rates[earlier];
        if earlier != day {
            capacity += incomes[earlier];
        }
    }
    capacity
}

/// Total liquidity available on `day`: carried-over cash, today's income,
/// and the borrowing capacity against everything after it.
#[must_use]
pub fn spendable(trial: &Trial, day: usize, carry_over: f64) -> f64 {
    carry_over + trial.incomes()[day] + borrowing_capacity(trial, day)
}
