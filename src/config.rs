use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

use crate::date;
use crate::validate::parse_date;

/// Environment variable overriding the reference date.
pub const TODAY_ENV: &str = "AGECALC_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub today: NaiveDate,
    pub format: OutputFormat,
    pub log_level: &'static str,
}

impl Config {
    /// Resolve the runtime config. `--today` wins over `AGECALC_TODAY`,
    /// which wins over the local clock.
    pub fn resolve(today_flag: Option<&str>, json: bool, verbose: u8) -> Result<Self> {
        let env_today = std::env::var(TODAY_ENV).ok();
        let today = match today_flag.or(env_today.as_deref()) {
            Some(raw) => parse_date(raw)
                .ok_or_else(|| anyhow!("`{raw}` is not a valid date"))
                .context("Failed to resolve reference date")?,
            None => date::today(),
        };

        Ok(Self {
            today,
            format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            log_level: log_level(verbose),
        })
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_flag_is_parsed() {
        let config = Config::resolve(Some("2024-02-29"), true, 0).unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn bad_today_flag_is_an_error() {
        let err = Config::resolve(Some("tomorrow"), false, 0).unwrap_err();
        assert!(format!("{err:#}").contains("`tomorrow` is not a valid date"));
    }

    #[test]
    fn today_in_last_representable_year_is_an_error() {
        let err = Config::resolve(Some("+262142-12-31"), false, 0).unwrap_err();
        assert!(format!("{err:#}").contains("is not a valid date"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(7), "trace");
    }
}
