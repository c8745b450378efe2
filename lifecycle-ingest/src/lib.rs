//! Tolerant parsing of semi-structured trial source rows.
//!
//! Trial authoring sheets hold numbers alongside two sentinels: `-`,
//! meaning the trial ends before the full week, and `RAND`, requesting a
//! uniformly drawn income. This crate turns raw rows into tagged
//! [`Cell`]s, resolves them into clean numeric sequences, and hands the
//! result to [`lifecycle_core::Trial`]. Nothing here reads files; the
//! caller supplies rows however it sourced them, and the engine itself
//! only ever sees clean numbers.

mod cell;
mod row;

pub use cell::{Cell, CellError};
pub use row::{parse_row, resolve_row, trial_from_rows, IngestError, RANDOM_INCOME_RANGE};
