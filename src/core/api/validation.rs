//! Local argument validation.

use std::fmt::Debug;

use super::error::{ApiError, ApiResult};

/// Check that `value` lies within the inclusive range `[min, max]`.
///
/// Bounds are printed with `Debug` so floats keep their decimal point
/// (`0.0 and 1.0`) while integers stay plain (`1 and 20`).
pub fn validate_range<T>(name: &str, value: T, min: T, max: T) -> ApiResult<()>
where
    T: PartialOrd + Debug,
{
    if !(value >= min && value <= max) {
        return Err(ApiError::validation(format!(
            "{} must be between {:?} and {:?}.",
            name, min, max
        )));
    }
    Ok(())
}

/// Encode `value` as one URL path segment.
///
/// Reserved characters, `/` included, are percent-encoded so the value stays
/// inside its segment. Empty values and dot segments are rejected: URL
/// normalization would resolve them against the surrounding path.
pub fn path_segment(name: &str, value: &str) -> ApiResult<String> {
    if matches!(value, "" | "." | "..") {
        return Err(ApiError::validation(format!(
            "Invalid {} '{}'.",
            name, value
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}
