use actix_web::{error::{JsonPayloadError, QueryPayloadError}, HttpRequest};

use crate::types::error::AppError;

/// Path ids that are not integer-shaped can never match a record, so they are reported as
/// missing rather than as a bad request.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim().parse::<i32>().map_err(|_| AppError::NotFound)
}

pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(err.to_string()).into()
}

pub fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidParameters(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn non_integer_ids_are_not_found() {
        assert!(matches!(parse_id("one"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("1.5"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("99999999999"), Err(AppError::NotFound)));
    }
}
