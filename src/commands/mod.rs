//! This module aggregates the chat commands and the error reporter they share.

use std::fmt::{Display, Write};

/// The movie log commands (`/add`, `/list`, `/search`, `/delete`).
pub mod movies;

/// Sent when even the error message cannot be built.
pub const ERROR_REPORT_FALLBACK: &str = "Unable to create error message";

/// Formats a failure for the channel as `Error occurred: <description>`.
///
/// Falls back to [`ERROR_REPORT_FALLBACK`] if the error's `Display` impl
/// fails, so this never panics.
pub fn report_error<E: Display + ?Sized>(error: &E) -> String {
    let mut message = String::new();
    match write!(message, "Error occurred: {error}") {
        Ok(()) => message,
        Err(_) => ERROR_REPORT_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::movie_log::StoreError;
    use crate::utils::normalizer::GatewayError;
    use pretty_assertions::assert_eq;
    use std::fmt;

    struct BrokenDisplay;

    impl Display for BrokenDisplay {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_report_gateway_error() {
        let err = GatewayError::Provider("rate limited".to_string());
        assert_eq!(
            report_error(&err),
            "Error occurred: Model provider error: rate limited"
        );
    }

    #[test]
    fn test_report_store_error() {
        let err = StoreError::Missing {
            file_name: "movie-log.txt".to_string(),
        };
        assert_eq!(report_error(&err), "Error occurred: movie-log.txt file not found");
    }

    #[test]
    fn test_report_plain_str() {
        assert_eq!(report_error("boom"), "Error occurred: boom");
    }

    #[test]
    fn test_report_falls_back_when_formatting_fails() {
        assert_eq!(report_error(&BrokenDisplay), ERROR_REPORT_FALLBACK);
    }
}
