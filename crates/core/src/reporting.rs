//! Parameter validation for the reporting endpoints.

use crate::error::CoreError;
use crate::types::Date;

/// Validate an inclusive activity date range.
///
/// A single-day range (`start == end`) is valid; an inverted range is not.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), CoreError> {
    if start > end {
        return Err(CoreError::Validation(
            "start_date cannot be after end_date".to_string(),
        ));
    }
    Ok(())
}
