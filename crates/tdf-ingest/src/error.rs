//! Error types for the fail-fast delimited layouts.

use thiserror::Error;

/// Errors raised while parsing a delimited export.
///
/// Row numbers are 1-based and count the header as row 1, so the first
/// data row reports as row 2. Any error aborts the whole parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input must contain at least a header line and one data row")]
    MissingData,
    #[error(
        "header does not match the {layout} layout; expected columns containing {expected}. {hint}"
    )]
    HeaderMismatch {
        layout: &'static str,
        expected: String,
        hint: &'static str,
    },
    #[error("row {row} does not have enough columns: expected at least {expected}, got {got}")]
    ColumnCount {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("row {row}: invalid email address \"{value}\"")]
    InvalidEmail { row: usize, value: String },
    #[error("row {row}: name is required")]
    MissingName { row: usize },
    #[error("row {row}: player id is required")]
    MissingPlayerId { row: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;
