//! This module contains the error and result definitions used in this crate.
//!
//! Note that invalid cell coordinates and out-of-range values are treated as
//! programming errors and panic fast instead of being reported through these
//! types (see the documentation of [Grid](crate::Grid)). Only parsing, which
//! deals with external input, is fallible.

use std::num::ParseIntError;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::Grid).
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with a number greater than 9.
    InvalidNumber
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}
