//! Typed path parameter helpers.

use std::str::FromStr;

use crudhub_core::error::AppError;

/// Parses a resource identifier from a path segment.
pub fn parse_id<I: FromStr>(resource: &str, raw: &str) -> Result<I, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("Invalid {resource} id: {raw}")))
}
