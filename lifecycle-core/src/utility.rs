use thiserror::Error;

use crate::{rounding::round2, Elasticity};

/// Maps consumption to utility units via the power law `c^k`, rounded to
/// two decimals.
///
/// The same [`Elasticity`] must be threaded here and into
/// [`optimal_path`](crate::optimal_path) so actual and optimal totals
/// stay comparable.
///
/// # Errors
///
/// Returns [`UtilityError::NegativeConsumption`] for negative input — a
/// fractional power of a negative base has no real value, and the engine
/// refuses to hand back a `NaN` — and [`UtilityError::NotFinite`] for
/// `NaN` or infinite input.
///
/// # Examples
/// ```
/// use lifecycle_core::{utility, Elasticity};
///
/// assert_eq!(utility(100.0, Elasticity::default()).unwrap(), 10.0);
/// ```
pub fn utility(consumption: f64, k: Elasticity) -> Result<f64, UtilityError> {
    if !consumption.is_finite() {
        return Err(UtilityError::NotFinite { value: consumption });
    }
    if consumption < 0.0 {
        return Err(UtilityError::NegativeConsumption { value: consumption });
    }
    Ok(round2(consumption.powf(k.get())))
}

/// Total utility of a consumption path: the sum of each day's rounded
/// utility, matching how per-day figures are totaled for trial feedback.
///
/// # Errors
///
/// Returns the first [`UtilityError`] among the path's entries.
pub fn path_utility(path: &[f64], k: Elasticity) -> Result<f64, UtilityError> {
    path.iter().map(|&consumption| utility(consumption, k)).sum()
}

/// Errors that can occur in the utility mapping.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum UtilityError {
    /// Consumption was negative; its fractional power is not real.
    #[error("consumption {value} is negative; its fractional power is not real")]
    NegativeConsumption { value: f64 },

    /// Consumption was `NaN` or infinite.
    #[error("consumption is not finite: {value}")]
    NotFinite { value: f64 },
}
