//! UTC date and time for event timestamps and query bounds.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::{
    format_description::{self, well_known::Rfc3339},
    Date, Duration, Month, OffsetDateTime, Time,
};

/// Date and time in the UTC timezone.
#[derive(
    Debug, Clone, Serialize, Deserialize, Ord, PartialOrd, Eq, PartialEq, Hash,
)]
pub struct UtcDateTime(
    #[serde(with = "time::serde::rfc3339")] pub(crate) OffsetDateTime,
);

impl Default for UtcDateTime {
    fn default() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}

impl UtcDateTime {
    /// Create a UTC date time for now.
    pub fn now() -> Self {
        Default::default()
    }

    /// Create from a calendar date at midnight UTC.
    pub fn from_calendar_date(
        year: i32,
        month: Month,
        day: u8,
    ) -> Result<Self> {
        let date = Date::from_calendar_date(year, month, day)?;
        Ok(Self(OffsetDateTime::new_utc(date, Time::MIDNIGHT)))
    }

    /// Parse from a simple date format YYYY-MM-DD.
    pub fn parse_simple_date(s: &str) -> Result<Self> {
        let date_separator =
            format_description::parse("[year]-[month]-[day]")?;
        let date = Date::parse(s, &date_separator)?;
        Ok(Self(OffsetDateTime::new_utc(date, Time::MIDNIGHT)))
    }

    /// Format as a simple date YYYY-MM-DD.
    pub fn format_simple_date(&self) -> Result<String> {
        let format = format_description::parse("[year]-[month]-[day]")?;
        Ok(self.0.format(&format)?)
    }

    /// Parse as RFC3339.
    pub fn parse_rfc3339(value: &str) -> Result<Self> {
        Ok(Self(OffsetDateTime::parse(value, &Rfc3339)?))
    }

    /// Convert this date and time to a RFC3339 formatted string.
    pub fn to_rfc3339(&self) -> Result<String> {
        Ok(self.0.format(&Rfc3339)?)
    }

    /// A time the given number of whole seconds earlier, or
    /// `None` when the subtraction is out of range.
    pub fn checked_sub_seconds(&self, seconds: i64) -> Option<Self> {
        self.0.checked_sub(Duration::seconds(seconds)).map(Self)
    }
}

impl fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(value) => write!(f, "{}", value),
            Err(_) => write!(f, "{:?}", self.0),
        }
    }
}

impl From<OffsetDateTime> for UtcDateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

impl AsRef<OffsetDateTime> for UtcDateTime {
    fn as_ref(&self) -> &OffsetDateTime {
        &self.0
    }
}
