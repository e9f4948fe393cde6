//! Validation errors for birth-date input.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No birth date supplied
    #[error("Please pick your date of birth.")]
    MissingInput,

    /// Input does not parse as a calendar date
    #[error("That date doesn't look valid. Try again.")]
    InvalidDate,

    /// Birth date is later than today
    #[error("Date of birth cannot be in the future.")]
    FutureDate,
}
