//! Data loading and preparation module
//!
//! This module reads uploaded tables and turns them into clean input for
//! the chart builder.
//!
//! ## Pipeline
//!
//! `parse_csv_*` -> [`validate`] -> [`process`]
//!
//! ## Error Handling
//!
//! Reading returns `DataResult<T>` which uses the `DataError` type.
//! Common errors include:
//! - `TooLarge`: File exceeds size limits
//! - `TooManyRows`: Dataset exceeds row limits
//! - `Io`: File system errors
//! - `Csv`/`Json`: Parse errors
//!
//! Validation failures are reported as `ValidationError`; `process` never
//! fails and reports problems as a diagnostic instead.

mod csv_parser;
mod error;
mod json_parser;
mod preparer;

pub use csv_parser::*;
pub use error::*;
pub use json_parser::*;
pub use preparer::*;
