//! Age in years, months and days, and the next birthday, from a birth date.

pub mod age;
pub mod birthday;
pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod report;
pub mod validate;

pub use age::{Age, compute_age};
pub use birthday::{NextBirthday, next_birthday};
pub use date::normalize;
pub use error::ValidationError;
pub use form::Form;
pub use report::Report;
pub use validate::parse_birth_date;
