use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cell of a trial source row, parsed into a tagged value.
///
/// Authoring sheets are semi-structured: a cell holds a plain number, the
/// end-of-row sentinel `-`, or the draw-request sentinel `RAND`. Parsing
/// keeps the three cases distinct so that resolution — truncation and
/// random substitution — happens explicitly, in one place, rather than as
/// a side effect of coercion.
///
/// # Examples
/// ```
/// use lifecycle_ingest::Cell;
///
/// assert_eq!(" 120 ".parse::<Cell>().unwrap(), Cell::Value(120.0));
/// assert_eq!("-".parse::<Cell>().unwrap(), Cell::EndOfTrial);
/// assert_eq!("RAND".parse::<Cell>().unwrap(), Cell::Random);
/// assert!("n/a".parse::<Cell>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// A concrete amount or rate.
    Value(f64),

    /// The trial ends before this day; the rest of the row is unused.
    EndOfTrial,

    /// A uniformly drawn income should be substituted here.
    Random,
}

impl FromStr for Cell {
    type Err = CellError;

    /// Parses a raw cell, trimming surrounding whitespace.
    ///
    /// Sentinels are matched exactly: `-` ends the trial and `RAND`
    /// requests a draw. Anything else must parse as a number; unknown
    /// tokens are an error rather than an implicit draw request.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed {
            "-" => Ok(Self::EndOfTrial),
            "RAND" => Ok(Self::Random),
            _ => trimmed
                .parse::<f64>()
                .map(Self::Value)
                .map_err(|_| CellError::Unrecognized(raw.to_string())),
        }
    }
}

/// Errors produced while parsing trial source cells.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CellError {
    /// The cell is neither a number nor a known sentinel.
    #[error("unrecognized trial cell {0:?}")]
    Unrecognized(String),
}
