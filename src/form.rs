//! Display state of the age form: three result fields, a summary line and an
//! error line, driven by the calculate and reset actions.

use std::fmt;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::report::Report;
use crate::validate::parse_birth_date;

const EMPTY_FIELD: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub years: String,
    pub months: String,
    pub days: String,
    pub summary: String,
    pub error: Option<ValidationError>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            years: EMPTY_FIELD.to_string(),
            months: EMPTY_FIELD.to_string(),
            days: EMPTY_FIELD.to_string(),
            summary: String::new(),
            error: None,
        }
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `input` and fills the result fields.
    ///
    /// On failure only the error line changes; previous results stay shown.
    pub fn calculate(
        &mut self,
        input: Option<&str>,
        today: NaiveDate,
    ) -> Result<Report, ValidationError> {
        self.error = None;

        let birth = parse_birth_date(input, today).inspect_err(|err| {
            debug!(%err, "calculation rejected");
            self.error = Some(*err);
        })?;

        let report = Report::new(birth, today);
        self.years = report.age.years.to_string();
        self.months = report.age.months.to_string();
        self.days = report.age.days.to_string();
        self.summary = report.summary();

        info!(%birth, %today, age = %report.age, "calculated");
        Ok(report)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Latest selectable birth date.
    pub fn max_date(today: NaiveDate) -> String {
        today.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Years: {}  Months: {}  Days: {}",
            self.years, self.months, self.days
        )?;
        if !self.summary.is_empty() {
            writeln!(f, "{}", self.summary)?;
        }
        if let Some(err) = &self.error {
            writeln!(f, "Error: {err}")?;
        }
        Ok(())
    }
}
