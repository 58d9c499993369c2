//! Error types for interval-format operations.
//!
//! Formatting itself never fails: calendar-system mismatch is reported as an
//! absent result and missing localization keys degrade to empty strings.
//! These errors only surface while parsing inputs at the edges.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid bundle: {0}")]
    InvalidBundle(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
