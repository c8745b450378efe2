//! Pure trial-economics engine for life-cycle consumption experiments.
//!
//! A trial gives a subject a sequence of daily incomes and a fixed
//! interest-rate schedule; the subject decides how much to consume each
//! day, saving or borrowing the rest. This crate owns the numerical core
//! of that game:
//!
//! - [`Trial`] — the immutable income/interest scenario,
//! - [`optimal_path`] — the closed-form consumption path maximizing total
//!   isoelastic utility under the intertemporal budget constraint,
//! - [`settle`] — the liquidity-clamped correction of a subject's
//!   submitted consumption, day by day,
//! - [`utility`] / [`path_utility`] — the power-law mapping from
//!   consumption to utility units,
//! - [`score`] / [`score_trial`] — the payment rule comparing actual and
//!   optimal utility totals.
//!
//! Every operation is a deterministic, side-effect-free transformation
//! over explicit inputs; trials may be evaluated concurrently without
//! coordination.

mod elasticity;
pub mod liquidity;
mod optimum;
mod payment;
mod rounding;
mod settle;
mod trial;
mod utility;

pub use elasticity::{Elasticity, ElasticityError};
pub use optimum::optimal_path;
pub use payment::{score, score_trial, PaymentSchedule};
pub use settle::{settle, SettleError, Settlement};
pub use trial::{Trial, TrialError};
pub use utility::{path_utility, utility, UtilityError};
