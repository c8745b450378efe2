use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed weekday cycle trials draw their labels from.
///
/// The cycle starts on Monday and is never repeated, which is why a trial
/// cannot span more than seven days.
const DAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One round of the experiment: daily incomes and the interest rates
/// between consecutive days.
///
/// `incomes` has one entry per day (1 to 7 days); `interests` has one
/// entry per transition between consecutive days, so it is exactly one
/// shorter — no interest accrues after the last day because there is no
/// following day. Interest rates are percentages (`10.0` means 10%).
/// Both sequences are immutable once the trial is constructed.
///
/// # Examples
/// ```
/// use lifecycle_core::Trial;
///
/// let trial = Trial::new(vec![100.0, 100.0, 100.0], vec![10.0, 10.0]).unwrap();
/// assert_eq!(trial.day_count(), 3);
/// assert_eq!(trial.days(), ["Monday", "Tuesday", "Wednesday"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrialData")]
pub struct Trial {
    incomes: Vec<f64>,
    interests: Vec<f64>,
}

/// Raw deserialization shape; funneled through [`Trial::new`] so that a
/// deserialized trial upholds the same invariants as a constructed one.
#[derive(Debug, Clone, Deserialize)]
struct TrialData {
    incomes: Vec<f64>,
    interests: Vec<f64>,
}

impl Trial {
    /// Creates a trial from daily incomes and percentage interest rates.
    ///
    /// # Errors
    ///
    /// Returns an error if the trial has no days or more than seven, if
    /// `interests` is not exactly one shorter than `incomes`, or if any
    /// entry is non-finite or any income negative.
    pub fn new(incomes: Vec<f64>, interests: Vec<f64>) -> Result<Self, TrialError> {
        if incomes.is_empty() {
            return Err(TrialError::NoDays);
        }
        if incomes.len() > DAY_LABELS.len() {
            return Err(TrialError::TooManyDays {
                days: incomes.len(),
            });
        }
        if interests.len() != incomes.len() - 1 {
            return Err(TrialError::LengthMismatch {
                days: incomes.len(),
                expected: incomes.len() - 1,
                actual: interests.len(),
            });
        }
        for (day, &income) in incomes.iter().enumerate() {
            if !income.is_finite() {
                return Err(TrialError::NonFiniteIncome {
                    day: DAY_LABELS[day],
                    value: income,
                });
            }
            if income < 0.0 {
                return Err(TrialError::NegativeIncome {
                    day: DAY_LABELS[day],
                    value: income,
                });
            }
        }
        for (day, &rate) in interests.iter().enumerate() {
            if !rate.is_finite() {
                return Err(TrialError::NonFiniteInterest {
                    day: DAY_LABELS[day],
                    value: rate,
                });
            }
        }
        Ok(Self { incomes, interests })
    }

    /// Number of days in the trial.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.incomes.len()
    }

    /// Daily incomes, one per day.
    #[must_use]
    pub fn incomes(&self) -> &[f64] {
        &self.incomes
    }

    /// Percentage interest rates, one per transition between days.
    #[must_use]
    pub fn interests(&self) -> &[f64] {
        &self.interests
    }

    /// Weekday labels for the trial's days, starting on Monday.
    #[must_use]
    pub fn days(&self) -> &'static [&'static str] {
        &DAY_LABELS[..self.incomes.len()]
    }

    /// Multiplicative growth factors, one per day.
    ///
    /// Each percentage rate becomes `rate / 100 + 1`, and a virtual
    /// terminal factor of `1.0` is appended for the last day (no interest
    /// accrues after it). The trial's own `interests` are untouched.
    #[must_use]
    pub fn growth_factors(&self) -> Vec<f64> {
        self.interests
            .iter()
            .map(|rate| rate / 100.0 + 1.0)
            .chain(std::iter::once(1.0))
            .collect()
    }

    /// Interest rates as decimal figures (`10.0`% becomes `0.1`), one per
    /// transition between days.
    #[must_use]
    pub fn decimal_rates(&self) -> Vec<f64> {
        self.interests.iter().map(|rate| rate / 100.0).collect()
    }
}

impl TryFrom<TrialData> for Trial {
    type Error = TrialError;

    fn try_from(data: TrialData) -> Result<Self, Self::Error> {
        Trial::new(data.incomes, data.interests)
    }
}

/// Errors that can occur when constructing a [`Trial`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TrialError {
    /// The income sequence was empty.
    #[error("a trial needs at least one day of income")]
    NoDays,

    /// The trial spans more days than the weekday cycle covers.
    #[error("trial spans {days} days but the weekday cycle only covers 7")]
    TooManyDays { days: usize },

    /// The interest sequence was not exactly one shorter than the incomes.
    #[error("expected {expected} interest rates for a {days}-day trial, got {actual}")]
    LengthMismatch {
        days: usize,
        expected: usize,
        actual: usize,
    },

    /// An income was `NaN` or infinite.
    #[error("income for {day} is not finite: {value}")]
    NonFiniteIncome { day: &'static str, value: f64 },

    /// An income was negative.
    #[error("income for {day} is negative: {value}")]
    NegativeIncome { day: &'static str, value: f64 },

    /// An interest rate was `NaN` or infinite.
    #[error("interest rate leaving {day} is not finite: {value}")]
    NonFiniteInterest { day: &'static str, value: f64 },
}
