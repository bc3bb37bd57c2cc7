use crate::UtcDateTime;
use thiserror::Error;

/// Errors generated by the core model types.
///
/// Every variant is a validation failure; none of them are
/// transient so callers must correct the input rather than
/// retry.
#[derive(Debug, Error)]
pub enum Error {
    /// Field value does not satisfy its constraint.
    #[error("invalid value for {field}, expected {constraint}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Constraint the value must satisfy.
        constraint: &'static str,
    },

    /// Lookup combined more than one attribute with the time range.
    #[error(
        "lookup supports at most one attribute besides the time range, {0} were given"
    )]
    TooManyLookupAttributes(usize),

    /// Lookup end time is earlier than its start time.
    #[error("end time {end} is earlier than start time {start}")]
    InvalidTimeRange {
        /// Start of the queried range.
        start: UtcDateTime,
        /// End of the queried range.
        end: UtcDateTime,
    },

    /// Requested page size is outside the accepted range.
    #[error("page size {0} is outside the range 1..=50")]
    InvalidPageSize(u16),

    /// Error parsing a date or time.
    #[error(transparent)]
    TimeParse(#[from] time::error::Parse),

    /// Error formatting a date or time.
    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),

    /// Error parsing a date or time format description.
    #[error(transparent)]
    TimeFormatDescription(#[from] time::error::InvalidFormatDescription),

    /// Error converting a date or time component.
    #[error(transparent)]
    TimeComponentRange(#[from] time::error::ComponentRange),
}
