use crate::{rounding::round2, Elasticity, Trial};

/// Computes the consumption path that maximizes total isoelastic utility
/// `Σ cₜᵏ` subject to the trial's intertemporal budget constraint.
///
/// The closed form comes from backward induction on the finite horizon:
/// the first-order conditions tie every day's consumption to the first
/// day's through the compounded growth since day 0,
///
/// ```text
/// c_d = J(d)^(1/(1-k)) · c_0,    J(d) = Π factors[0..d]
/// ```
///
/// and the budget constraint — the path's value at the horizon must equal
/// the income stream's value at the horizon — pins the level `c_0`. Each
/// day of the returned path is rounded to two decimals; the level is kept
/// unrounded internally so the rounded path still conserves present value
/// to within a cent per day.
///
/// The trial's interest sequence is consumed through
/// [`Trial::growth_factors`], which appends the virtual zero-rate
/// terminal period without mutating the caller's data.
///
/// # Examples
/// ```
/// use lifecycle_core::{optimal_path, Elasticity, Trial};
///
/// let trial = Trial::new(vec![100.0, 100.0, 100.0], vec![10.0, 10.0]).unwrap();
/// let path = optimal_path(&trial, Elasticity::default());
/// assert_eq!(path, [82.64, 100.0, 121.0]);
/// ```
#[must_use]
pub fn optimal_path(trial: &Trial, k: Elasticity) -> Vec<f64> {
    let n = trial.day_count();
    let factors = trial.growth_factors();
    let exponent = k.curvature_exponent();

    // I(d): compounded growth from day d to the horizon.
    let mut horizon_growth = vec![0.0; n];
    horizon_growth[n - 1] = factors[n - 1];
    for day in (0..n - 1).rev() {
        horizon_growth[day] = factors[day] * horizon_growth[day + 1];
    }

    // The income stream's value at the horizon.
    let wealth: f64 = trial
        .incomes()
        .iter()
        .zip(&horizon_growth)
        .map(|(income, growth)| income * growth)
        .sum();

    // With c_d = J(d)^e · c_0, the budget Σ c_d · I(d) = wealth fixes c_0.
    let mut elapsed_growth: f64 = 1.0;
    let mut budget_weight = 0.0;
    for day in 0..n {
        budget_weight += elapsed_growth.powf(exponent) * horizon_growth[day];
        elapsed_growth *= factors[day];
    }
    let first = wealth / budget_weight;

    let mut path = Vec::with_capacity(n);
    path.push(round2(first));
    let mut elapsed_growth = 1.0;
    for day in 1..n {
        elapsed_growth *= factors[day - 1];
        path.push(round2(elapsed_growth.powf(exponent) * first));
    }
    path
}
