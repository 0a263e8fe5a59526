//! Pure field validators shared by every wizard step.
//!
//! Each function takes raw user input and returns a [`ValidationError`] whose
//! display string is the message shown next to the field. Validation failures
//! are ordinary values, never panics; steps collect them and block forward
//! navigation until the draft is clean.

use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::wizard::session::PartialDate;

/// User-correctable validation failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Please enter a complete date")]
    IncompleteDate,
    #[error("Day must be between 1 and 31")]
    DayOutOfRange,
    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,
    #[error("Please enter a valid year")]
    YearOutOfRange,
    #[error("Please enter a valid date")]
    InvalidDate,
    #[error("Please enter a valid postcode")]
    PostcodeFormat,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid phone number")]
    PhoneFormat,
    #[error("Please enter a valid National Insurance number (e.g., AB123456C)")]
    NationalInsuranceFormat,
    #[error("Please provide a reason")]
    ReasonRequired,
    #[error("You must confirm that you have read and understood the information above")]
    ConfirmationRequired,
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        Self::Required {
            field: field.to_string(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn postcode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z]{1,2}\d[A-Z\d]?\s?\d[A-Z]{2}$").expect("postcode pattern")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\d\s+()-]{10,}$").expect("phone pattern"))
}

fn national_insurance_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z]{2}\d{6}[A-Z]$").expect("national insurance pattern")
    })
}

/// Non-empty after trimming whitespace.
pub fn required(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::required(field))
    } else {
        Ok(())
    }
}

/// Mandatory `local@domain.tld` shape.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !email_pattern().is_match(value) {
        return Err(ValidationError::EmailFormat);
    }
    Ok(())
}

/// A complete, real calendar date between 1900 and the current year.
///
/// The triple is rebuilt as a calendar date; chrono rejects combinations such
/// as 31 February or 29 February outside a leap year, so no leap-year table
/// is needed.
pub fn date(value: &PartialDate) -> Result<(), ValidationError> {
    if value.day.trim().is_empty()
        || value.month.trim().is_empty()
        || value.year.trim().is_empty()
    {
        return Err(ValidationError::IncompleteDate);
    }

    let day: u32 = value
        .day
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidDate)?;
    let month: u32 = value
        .month
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidDate)?;
    let year: i32 = value
        .year
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidDate)?;

    if !(1..=31).contains(&day) {
        return Err(ValidationError::DayOutOfRange);
    }
    if !(1..=12).contains(&month) {
        return Err(ValidationError::MonthOutOfRange);
    }
    if year < 1900 || year > Local::now().year() {
        return Err(ValidationError::YearOutOfRange);
    }

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(_) => Ok(()),
        None => Err(ValidationError::InvalidDate),
    }
}

/// Optional UK postcode: empty passes, anything else must match the
/// outward/inward shape.
pub fn postcode(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if !postcode_pattern().is_match(value.trim()) {
        return Err(ValidationError::PostcodeFormat);
    }
    Ok(())
}

/// Mandatory phone number: ten or more characters drawn from digits, spaces,
/// `+`, `-`, and parentheses.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::PhoneRequired);
    }
    if !phone_pattern().is_match(value) {
        return Err(ValidationError::PhoneFormat);
    }
    Ok(())
}

/// Optional National Insurance number: empty passes; internal spaces are
/// stripped before matching two letters, six digits, one letter.
pub fn national_insurance(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    let compact: String = value.chars().filter(|ch| !ch.is_whitespace()).collect();
    if !national_insurance_pattern().is_match(&compact) {
        return Err(ValidationError::NationalInsuranceFormat);
    }
    Ok(())
}
