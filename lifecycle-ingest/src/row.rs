use std::ops::Range;

use lifecycle_core::{Trial, TrialError};
use rand::Rng;
use thiserror::Error;

use crate::cell::{Cell, CellError};

/// Range of the whole-unit uniform draw substituted for [`Cell::Random`].
pub const RANDOM_INCOME_RANGE: Range<f64> = 20.0..200.0;

/// Resolves a parsed row into a clean numeric sequence.
///
/// Truncates at the first [`Cell::EndOfTrial`] and substitutes each
/// [`Cell::Random`] with a whole-unit draw from [`RANDOM_INCOME_RANGE`].
/// Plain values pass through unchanged.
pub fn resolve_row<R: Rng>(cells: &[Cell], rng: &mut R) -> Vec<f64> {
    let mut values = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            Cell::Value(value) => values.push(*value),
            Cell::EndOfTrial => break,
            Cell::Random => values.push(rng.gen_range(RANDOM_INCOME_RANGE).trunc()),
        }
    }
    values
}

/// Parses and resolves a row of raw cells in one step.
///
/// # Errors
///
/// Returns a [`CellError`] for the first unrecognized cell. The whole row
/// is parsed before resolution, so a bad token is reported even when it
/// sits past an end-of-trial sentinel.
pub fn parse_row<R: Rng>(raw: &[&str], rng: &mut R) -> Result<Vec<f64>, CellError> {
    let cells = raw
        .iter()
        .map(|cell| cell.parse())
        .collect::<Result<Vec<Cell>, _>>()?;
    Ok(resolve_row(&cells, rng))
}

/// Builds a [`Trial`] from an income row and an interest row.
///
/// Both rows are parsed and resolved independently, then handed to
/// [`Trial::new`], which enforces the shape invariants (the interest row
/// must end exactly one day before the income row, at most a week of
/// days, and so on).
///
/// # Errors
///
/// Returns [`IngestError::Cell`] if either row holds an unrecognized
/// cell, or [`IngestError::Trial`] if the resolved sequences do not form
/// a valid trial.
///
/// # Examples
/// ```
/// use lifecycle_ingest::trial_from_rows;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let trial = trial_from_rows(
///     &["100", "100", "100", "-", "-", "-", "-"],
///     &["10", "10", "-", "-", "-", "-"],
///     &mut rng,
/// )
/// .unwrap();
/// assert_eq!(trial.day_count(), 3);
/// ```
pub fn trial_from_rows<R: Rng>(
    income_cells: &[&str],
    interest_cells: &[&str],
    rng: &mut R,
) -> Result<Trial, IngestError> {
    let incomes = parse_row(income_cells, rng)?;
    let interests = parse_row(interest_cells, rng)?;
    Ok(Trial::new(incomes, interests)?)
}

/// Errors produced while building trials from source rows.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IngestError {
    /// A cell in either row could not be parsed.
    #[error("invalid trial cell")]
    Cell(#[from] CellError),

    /// The resolved rows do not form a valid trial.
    #[error("resolved rows do not form a valid trial")]
    Trial(#[from] TrialError),
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn values_pass_through_unchanged() {
        let cells = [Cell::Value(100.0), Cell::Value(2.5), Cell::Value(-10.0)];
        assert_eq!(resolve_row(&cells, &mut rng()), [100.0, 2.5, -10.0]);
    }

    #[test]
    fn truncates_at_end_of_trial() {
        let cells = [
            Cell::Value(100.0),
            Cell::Value(120.0),
            Cell::EndOfTrial,
            Cell::Value(999.0),
        ];
        assert_eq!(resolve_row(&cells, &mut rng()), [100.0, 120.0]);
    }

    #[test]
    fn random_draws_are_whole_units_in_range() {
        let cells = [Cell::Random; 50];
        let mut rng = rng();
        for value in resolve_row(&cells, &mut rng) {
            assert!((20.0..200.0).contains(&value), "draw {value} out of range");
            assert_eq!(value.trunc(), value, "draw {value} is not a whole unit");
        }
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let cells = [Cell::Random; 5];
        let first = resolve_row(&cells, &mut StdRng::seed_from_u64(7));
        let second = resolve_row(&cells, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn parse_row_reports_bad_cells() {
        assert!(matches!(
            parse_row(&["100", "oops"], &mut rng()),
            Err(CellError::Unrecognized(_))
        ));
        // Even past the sentinel: the whole row must be well formed.
        assert!(parse_row(&["100", "-", "oops"], &mut rng()).is_err());
    }

    #[test]
    fn builds_a_trial_from_sheet_rows() {
        let trial = trial_from_rows(
            &["100", "100", "100", "-", "-", "-", "-"],
            &["10", "10", "-", "-", "-", "-"],
            &mut rng(),
        )
        .unwrap();
        assert_eq!(trial.incomes(), [100.0, 100.0, 100.0]);
        assert_eq!(trial.interests(), [10.0, 10.0]);
    }

    #[test]
    fn random_incomes_reach_the_engine_resolved() {
        let trial = trial_from_rows(&["RAND", "RAND"], &["10", "-"], &mut rng()).unwrap();
        for &income in trial.incomes() {
            assert!((20.0..200.0).contains(&income));
            assert_eq!(income.trunc(), income);
        }
    }

    #[test]
    fn mismatched_rows_surface_the_trial_error() {
        let result = trial_from_rows(&["100", "100"], &["10", "10"], &mut rng());
        assert!(matches!(
            result,
            Err(IngestError::Trial(TrialError::LengthMismatch { .. }))
        ));
    }
}
