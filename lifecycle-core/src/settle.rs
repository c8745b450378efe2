use serde::Serialize;
use thiserror::Error;

use crate::{liquidity, rounding::round2, Trial};

/// Outcome of settling a trial's submitted consumption against its
/// liquidity constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    /// The corrected consumption path, one entry per day. The terminal
    /// entry is always the liquidation of whatever remained.
    pub consumption: Vec<f64>,

    /// The post-interest balance carried out of each non-terminal day,
    /// in day order (one shorter than `consumption`).
    pub carry_over: Vec<f64>,

    /// Days whose submitted amount exceeded their liquidity and was
    /// reduced. Empty when the submission was already feasible.
    pub clamped_days: Vec<usize>,
}

/// Errors that can occur when settling a response sequence.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettleError {
    /// The response slice was not exactly one shorter than the trial.
    #[error("expected {expected} responses for a {days}-day trial, got {actual}")]
    ResponseCountMismatch {
        days: usize,
        expected: usize,
        actual: usize,
    },

    /// A response was `NaN` or infinite.
    #[error("response for day {day} is not finite: {value}")]
    NonFiniteResponse { day: usize, value: f64 },
}

/// Settles a subject's submitted consumption against the trial's
/// borrowing constraint.
///
/// Walks the days in order carrying a running cash balance. Each day the
/// subject may spend at most their cash on hand plus the
/// [`liquidity::borrowing_capacity`] against all later income; a claim
/// above that bound is clamped down to it (rounded to two decimals) and
/// recorded in [`Settlement::clamped_days`]. Whatever is left after
/// consumption compounds into the next day at that transition's rate. The
/// terminal day is never submitted: its consumption is the carried
/// balance plus the final income.
///
/// Clamping is the designed self-correction for over-ambitious claims, a
/// normal branch of the walk rather than a failure. Responses below zero
/// pass through untouched; the walk imposes no floor.
///
/// Settling an already-feasible sequence reproduces it exactly, along
/// with the same carry-over trace.
///
/// # Errors
///
/// Returns [`SettleError::ResponseCountMismatch`] unless `responses`
/// holds exactly one entry per non-terminal day, and
/// [`SettleError::NonFiniteResponse`] if any entry is `NaN` or infinite.
///
/// # Examples
/// ```
/// use lifecycle_core::{settle, Trial};
///
/// let trial = Trial::new(vec![100.0, 100.0, 100.0], vec![10.0, 10.0]).unwrap();
/// let settlement = settle(&trial, &[50.0, 500.0]).unwrap();
///
/// // The second day's claim was far beyond its liquidity and came back
/// // clamped; the last day liquidates what remains.
/// assert_eq!(settlement.clamped_days, [1]);
/// assert_eq!(settlement.consumption.len(), 3);
/// ```
pub fn settle(trial: &Trial, responses: &[f64]) -> Result<Settlement, SettleError> {
    let n = trial.day_count();
    if responses.len() != n - 1 {
        return Err(SettleError::ResponseCountMismatch {
            days: n,
            expected: n - 1,
            actual: responses.len(),
        });
    }
    if let Some((day, &value)) = responses
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(SettleError::NonFiniteResponse { day, value });
    }

    let incomes = trial.incomes();
    let rates = trial.decimal_rates();

    let mut consumption = Vec::with_capacity(n);
    let mut carry_trace = Vec::with_capacity(n - 1);
    let mut clamped_days = Vec::new();
    let mut carry_over = 0.0;

    for (day, &submitted) in responses.iter().enumerate() {
        let today_money = carry_over + incomes[day];
        let spendable = today_money + liquidity::borrowing_capacity(trial, day);

        let spent = if submitted > spendable {
            clamped_days.push(day);
            round2(spendable)
        } else {
            submitted
        };

        carry_over = (today_money - spent) * (1.0 + rates[day]);
        consumption.push(spent);
        carry_trace.push(carry_over);
    }

    consumption.push(round2(carry_over + incomes[n - 1]));

    Ok(Settlement {
        consumption,
        carry_over: carry_trace,
        clamped_days,
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn three_day_trial() -> Trial {
        Trial::new(vec![100.0, 100.0, 100.0], vec![10.0, 10.0]).unwrap()
    }

    #[test]
    fn clamps_an_over_ambitious_claim() {
        let trial = three_day_trial();
        let settlement = settle(&trial, &[50.0, 500.0]).unwrap();

        // Day 2's liquidity: carried 55, income 100, plus 100/1.1 borrowable.
        assert_relative_eq!(settlement.consumption[0], 50.0);
        assert_relative_eq!(settlement.consumption[1], 245.91);
        assert_eq!(settlement.clamped_days, [1]);

        // The terminal day liquidates the (here, slightly overdrawn)
        // remainder plus the last income.
        let last_carry = *settlement.carry_over.last().unwrap();
        assert_eq!(
            *settlement.consumption.last().unwrap(),
            round_helper(last_carry + 100.0)
        );
        assert_abs_diff_eq!(*settlement.consumption.last().unwrap(), 0.0, epsilon = 1e-9);
    }

    fn round_helper(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[test]
    fn never_exceeds_liquidity() {
        let trial = three_day_trial();
        let settlement = settle(&trial, &[300.0, 400.0]).unwrap();

        let mut carry = 0.0;
        for day in 0..trial.day_count() - 1 {
            let bound = liquidity::spendable(&trial, day, carry);
            // The clamp rounds to the nearest cent, so allow half a cent.
            assert!(
                settlement.consumption[day] <= bound + 5e-3,
                "day {day} spent {} above bound {bound}",
                settlement.consumption[day]
            );
            carry = settlement.carry_over[day];
        }
    }

    #[test]
    fn feasible_input_settles_unchanged() {
        let trial = three_day_trial();
        let first = settle(&trial, &[50.0, 50.0]).unwrap();
        assert!(first.clamped_days.is_empty());
        assert_eq!(first.consumption, [50.0, 50.0, 215.5]);
        assert_abs_diff_eq!(first.carry_over[0], 55.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.carry_over[1], 115.5, epsilon = 1e-9);

        // Idempotence: re-settling the settled prefix reproduces the
        // whole settlement, carry-over trace included.
        let again = settle(&trial, &first.consumption[..2]).unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn terminal_day_is_the_liquidation() {
        let trial = three_day_trial();
        let settlement = settle(&trial, &[120.0, 30.0]).unwrap();
        let last_carry = *settlement.carry_over.last().unwrap();
        assert_relative_eq!(
            *settlement.consumption.last().unwrap(),
            round_helper(last_carry + 100.0)
        );
    }

    #[test]
    fn negative_responses_pass_through() {
        let trial = three_day_trial();
        let settlement = settle(&trial, &[-20.0, 10.0]).unwrap();
        assert_eq!(settlement.consumption[0], -20.0);
        assert!(settlement.clamped_days.is_empty());
        // Under-consumption compounds forward: (120)·1.1 = 132.
        assert_relative_eq!(settlement.carry_over[0], 132.0, epsilon = 1e-9);
    }

    #[test]
    fn single_day_trial_liquidates_immediately() {
        let trial = Trial::new(vec![75.0], vec![]).unwrap();
        let settlement = settle(&trial, &[]).unwrap();
        assert_eq!(settlement.consumption, [75.0]);
        assert!(settlement.carry_over.is_empty());
    }

    #[test]
    fn rejects_wrong_response_count() {
        let trial = three_day_trial();
        assert!(matches!(
            settle(&trial, &[50.0]),
            Err(SettleError::ResponseCountMismatch {
                days: 3,
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn rejects_non_finite_responses() {
        let trial = three_day_trial();
        assert!(matches!(
            settle(&trial, &[50.0, f64::NAN]),
            Err(SettleError::NonFiniteResponse { day: 1, .. })
        ));
    }
}
