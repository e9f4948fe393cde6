//! Turns raw birth-date input into a validated calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::date::{is_supported, normalize};
use crate::error::ValidationError;

/// Parses `input` as a date, folding timestamps down to their calendar day.
///
/// Accepts `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM:SS` and RFC 3339. Dates in
/// the last representable year are rejected.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_any(input.trim()).filter(|date| is_supported(*date))
}

fn parse_any(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Some(normalize(&ts));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(normalize(&ts));
    }

    None
}

/// Validates a birth date against `today`.
pub fn parse_birth_date(
    input: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    let raw = match input.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::MissingInput),
    };

    let birth = parse_date(raw).ok_or_else(|| {
        debug!(input = raw, "unparseable birth date");
        ValidationError::InvalidDate
    })?;

    if birth > today {
        debug!(%birth, %today, "birth date in the future");
        return Err(ValidationError::FutureDate);
    }

    Ok(birth)
}
