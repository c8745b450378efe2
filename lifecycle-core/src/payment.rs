use serde::{Deserialize, Serialize};

use crate::{optimal_path, path_utility, rounding::round2, Elasticity, Trial, UtilityError};

/// Constants of the payment rule: a flat base minus a scaled squared
/// shortfall from the optimal utility total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    /// Payment for matching the optimum exactly.
    pub base: f64,

    /// Weight on the squared utility shortfall.
    pub scale: f64,
}

impl Default for PaymentSchedule {
    /// The experiment's published rule: `40 - 0.01 · dif²`.
    fn default() -> Self {
        Self {
            base: 40.0,
            scale: 0.01,
        }
    }
}

impl PaymentSchedule {
    /// Validates that both constants are finite and the scale is
    /// non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending constant.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.base.is_finite() {
            return Err("base must be finite");
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err("scale must be finite and non-negative");
        }
        Ok(())
    }
}

/// Scores an actual utility total against the optimal one.
///
/// The result can be negative for sufficiently poor play; no floor is
/// applied.
#[must_use]
pub fn score(optimal_total: f64, actual_total: f64, schedule: &PaymentSchedule) -> f64 {
    let shortfall = optimal_total - actual_total;
    round2(schedule.base - schedule.scale * shortfall * shortfall)
}

/// Computes both utility totals for a trial and scores them.
///
/// `consumption` is a full settled path (one entry per day); pass
/// [`Settlement::consumption`](crate::Settlement::consumption) here.
///
/// # Errors
///
/// Returns a [`UtilityError`] if any entry of `consumption` is negative
/// or non-finite.
pub fn score_trial(
    trial: &Trial,
    consumption: &[f64],
    k: Elasticity,
    schedule: &PaymentSchedule,
) -> Result<f64, UtilityError> {
    let optimal_total = path_utility(&optimal_path(trial, k), k)?;
    let actual_total = path_utility(consumption, k)?;
    Ok(score(optimal_total, actual_total, schedule))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn perfect_play_earns_the_base() {
        let trial = Trial::new(vec![100.0, 100.0, 100.0], vec![10.0, 10.0]).unwrap();
        let k = Elasticity::default();
        let optimum = optimal_path(&trial, k);
        let payment = score_trial(&trial, &optimum, k, &PaymentSchedule::default()).unwrap();
        assert_eq!(payment, 40.0);
    }

    #[test]
    fn shortfall_is_squared() {
        let schedule = PaymentSchedule::default();
        // dif = 20 -> 40 - 0.01 * 400 = 36.
        assert_eq!(score(30.0, 10.0, &schedule), 36.0);
        // The shortfall is symmetric: overshooting the optimum (only
        // possible through rounding noise) costs the same.
        assert_eq!(score(10.0, 30.0, &schedule), 36.0);
    }

    #[test]
    fn payment_can_go_negative() {
        let schedule = PaymentSchedule::default();
        assert_eq!(score(100.0, 0.0, &schedule), -60.0);
    }

    #[test]
    fn schedule_validation() {
        assert!(PaymentSchedule::default().validate().is_ok());
        assert!(PaymentSchedule {
            base: f64::NAN,
            scale: 0.01
        }
        .validate()
        .is_err());
        assert!(PaymentSchedule {
            base: 40.0,
            scale: -0.5
        }
        .validate()
        .is_err());
    }
}
