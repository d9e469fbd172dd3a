//! Application record domain model.
//!
//! # Responsibility
//! - Define the single record shape tracked by SolSearch.
//! - Own field-level validation used by callers before writes.
//!
//! # Invariants
//! - `ApplicationStatus` is a closed set; no other status can be constructed.
//! - `Priority` always holds a value in `1..=5`.
//! - `AppliedDate` always holds a real calendar date and renders as `YYYY-MM-DD`.
//! - User input dates must already be zero-padded; stored dates are read tolerantly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned record identifier (SQLite `AUTOINCREMENT` rowid).
pub type ApplicationId = i64;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Hiring pipeline stage of one application.
///
/// Declaration order is the canonical funnel order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Rejected,
    Offer,
}

impl ApplicationStatus {
    /// All statuses in canonical funnel order.
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interview,
        ApplicationStatus::Rejected,
        ApplicationStatus::Offer,
    ];

    /// Persisted and displayed form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Rejected => "Rejected",
            Self::Offer => "Offer",
        }
    }

    /// Exact match against the persisted form. Used on the read path.
    pub(crate) fn from_db(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ApplicationValidationError;

    /// Case-insensitive, whitespace-tolerant parse of user input.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ApplicationValidationError::InvalidStatus(trimmed.to_string()))
    }
}

/// How much the applicant wants the job, `1` (low) to `5` (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ApplicationValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ApplicationValidationError::PriorityOutOfRange(i64::from(value)))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every valid level, ascending.
    pub fn levels() -> impl Iterator<Item = Priority> {
        (Self::MIN..=Self::MAX).map(Priority)
    }
}

impl TryFrom<u8> for Priority {
    type Error = ApplicationValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Priority {
    type Error = ApplicationValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ApplicationValidationError::PriorityOutOfRange(value))
            .and_then(Self::new)
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

impl FromStr for Priority {
    type Err = ApplicationValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<i64>()
            .map_err(|_| ApplicationValidationError::InvalidPriority(trimmed.to_string()))?;
        Self::try_from(parsed)
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date an application was sent.
///
/// Stored as literal `YYYY-MM-DD` text so reads never shift across timezones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AppliedDate(NaiveDate);

impl AppliedDate {
    /// Strict `YYYY-MM-DD` parse; the day must exist in that month.
    pub fn parse(value: &str) -> Result<Self, ApplicationValidationError> {
        let trimmed = value.trim();
        let invalid = || ApplicationValidationError::InvalidDate(trimmed.to_string());

        // chrono accepts unpadded fields; the stored text must be canonical.
        if trimmed.len() != 10 {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())?;
        if date.format(DATE_FORMAT).to_string() != trimmed {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    /// Tolerant parse for stored text: any real date `%Y-%m-%d` accepts,
    /// including unpadded `2024-1-5` written by older tools.
    pub(crate) fn from_db(value: &str) -> Option<Self> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .ok()
            .map(Self)
    }
}

impl Display for AppliedDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0.format(DATE_FORMAT).to_string())
    }
}

impl FromStr for AppliedDate {
    type Err = ApplicationValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for AppliedDate {
    type Error = ApplicationValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AppliedDate> for String {
    fn from(value: AppliedDate) -> Self {
        value.to_string()
    }
}

/// Field-level validation failures raised before anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationValidationError {
    /// Required text field is empty or whitespace only.
    EmptyField(&'static str),
    /// Date is malformed or does not exist.
    InvalidDate(String),
    /// Status is not one of the fixed set.
    InvalidStatus(String),
    /// Priority is an integer outside `1..=5`.
    PriorityOutOfRange(i64),
    /// Priority is not an integer at all.
    InvalidPriority(String),
}

impl Display for ApplicationValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} cannot be empty"),
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; use YYYY-MM-DD")
            }
            Self::InvalidStatus(value) => write!(
                f,
                "invalid status `{value}`; expected Applied / Interview / Rejected / Offer"
            ),
            Self::PriorityOutOfRange(value) => {
                write!(f, "priority {value} is out of range; enter a number 1-5")
            }
            Self::InvalidPriority(value) => {
                write!(f, "invalid priority `{value}`; enter a number 1-5")
            }
        }
    }
}

impl Error for ApplicationValidationError {}

/// Validated payload for inserting one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub date_applied: AppliedDate,
    pub status: ApplicationStatus,
    pub priority: Priority,
}

impl NewApplication {
    /// Builds a payload from typed parts, trimming and checking text fields.
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
        date_applied: AppliedDate,
        status: ApplicationStatus,
        priority: Priority,
    ) -> Result<Self, ApplicationValidationError> {
        let company = required_text("company", company.into())?;
        let role = required_text("role", role.into())?;
        Ok(Self {
            company,
            role,
            date_applied,
            status,
            priority,
        })
    }

    /// Builds a payload from raw user input.
    ///
    /// Fields are checked in display order and the first failure is returned.
    pub fn parse(
        company: &str,
        role: &str,
        date_applied: &str,
        status: &str,
        priority: &str,
    ) -> Result<Self, ApplicationValidationError> {
        let company = required_text("company", company.to_string())?;
        let role = required_text("role", role.to_string())?;
        let date_applied = AppliedDate::parse(date_applied)?;
        let status = status.parse()?;
        let priority = priority.parse()?;
        Ok(Self {
            company,
            role,
            date_applied,
            status,
            priority,
        })
    }
}

/// One persisted job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub company: String,
    pub role: String,
    pub date_applied: AppliedDate,
    pub status: ApplicationStatus,
    pub priority: Priority,
}

impl Application {
    /// Priority rendered as a star rating, e.g. `***` for 3.
    pub fn stars(&self) -> String {
        "*".repeat(usize::from(self.priority.get()))
    }
}

fn required_text(field: &'static str, value: String) -> Result<String, ApplicationValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApplicationValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
