//! Error types shared across the adapter.

use derive_more::{Display, Error};

/// Errors surfaced to the host across the adapter boundary.
///
/// The host treats any of these as a no-bid from this adapter; nothing is
/// retried inside the adapter itself.
#[derive(Debug, Display, Error)]
pub enum AdapterError {
    /// Configuration could not be loaded or failed validation.
    #[display("Configuration error: {message}")]
    Configuration { message: String },

    /// The inputs handed to `build_requests` cannot produce a payload.
    #[display("Invalid bid request: {message}")]
    InvalidRequest { message: String },

    /// The bid response body does not have the expected shape.
    #[display("Malformed bid response: {message}")]
    MalformedResponse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!(
                "{}",
                AdapterError::Configuration {
                    message: "test".into()
                }
            ),
            "Configuration error: test"
        );
        assert_eq!(
            format!(
                "{}",
                AdapterError::InvalidRequest {
                    message: "test".into()
                }
            ),
            "Invalid bid request: test"
        );
        assert_eq!(
            format!(
                "{}",
                AdapterError::MalformedResponse {
                    message: "test".into()
                }
            ),
            "Malformed bid response: test"
        );
    }
}
