use crate::error::{FilterCopyError, Result, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

/// Parse a range bound written as `YYYY-MM-DD HH:MM:SS` (local wall-clock time)
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| {
        FilterCopyError::InvalidTimestamp {
            value: value.to_string(),
        }
    })
}
