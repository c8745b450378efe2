use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The curvature parameter `k` of the isoelastic utility function `c^k`.
///
/// The optimizer and the utility mapping must consume the same `k` so
/// that "optimal utility" and "actual utility" totals stay comparable;
/// threading one `Elasticity` value through both is how that sharing is
/// achieved. The value must lie strictly inside `(0, 1)`: `k = 1` makes
/// the optimizer's exponent `1 / (1 - k)` undefined, and `k = 0` makes
/// utility constant in consumption.
///
/// # Examples
/// ```
/// use lifecycle_core::Elasticity;
///
/// let k = Elasticity::new(0.5).unwrap();
/// assert_eq!(k.get(), 0.5);
/// assert_eq!(k.curvature_exponent(), 2.0);
///
/// // The experiment's published constant.
/// assert_eq!(Elasticity::default().get(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Elasticity(f64);

impl Elasticity {
    /// Creates an `Elasticity` if `k` lies strictly inside `(0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`ElasticityError::NotFinite`] if `k` is `NaN` or infinite.
    /// Returns [`ElasticityError::OutOfRange`] if `k` is outside `(0, 1)`;
    /// both endpoints are excluded.
    pub fn new(k: f64) -> Result<Self, ElasticityError> {
        if !k.is_finite() {
            return Err(ElasticityError::NotFinite(k));
        }
        if k <= 0.0 || k >= 1.0 {
            return Err(ElasticityError::OutOfRange(k));
        }
        Ok(Self(k))
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns the exponent `1 / (1 - k)` used by the closed-form optimum.
    ///
    /// Finite and greater than 1 for every constructible `Elasticity`.
    #[must_use]
    pub fn curvature_exponent(self) -> f64 {
        1.0 / (1.0 - self.0)
    }
}

impl Default for Elasticity {
    /// Returns the experiment's published constant, `k = 0.5`.
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Elasticity {
    type Error = ElasticityError;

    fn try_from(k: f64) -> Result<Self, Self::Error> {
        Elasticity::new(k)
    }
}

impl From<Elasticity> for f64 {
    fn from(k: Elasticity) -> Self {
        k.0
    }
}

/// Errors that can occur when constructing an [`Elasticity`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ElasticityError {
    /// Input was not finite.
    #[error("elasticity is not finite: {0}")]
    NotFinite(f64),

    /// Input was outside the open interval `(0, 1)`.
    #[error("elasticity {0} is outside the open interval (0, 1)")]
    OutOfRange(f64),
}
