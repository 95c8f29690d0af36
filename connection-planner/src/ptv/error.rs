//! PTV client error types.

use std::fmt;

use super::convert::ConversionError;

/// Errors from the PTV HTTP client.
#[derive(Debug)]
pub enum PtvError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response decoded but held values we could not interpret
    Conversion(ConversionError),

    /// API returned a non-success status code
    Status { status: u16, body: String },

    /// Developer id or signature rejected
    Unauthorized,

    /// The signing key could not be used
    InvalidKey,
}

impl fmt::Display for PtvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PtvError::Http(e) => write!(f, "HTTP error: {e}"),
            PtvError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PtvError::Conversion(e) => write!(f, "unexpected response data: {e}"),
            PtvError::Status { status, body } => write!(f, "API error {status}: {body}"),
            PtvError::Unauthorized => {
                write!(f, "unauthorized (check developer id and key)")
            }
            PtvError::InvalidKey => write!(f, "signing key rejected"),
        }
    }
}

impl std::error::Error for PtvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PtvError::Http(e) => Some(e),
            PtvError::Conversion(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PtvError {
    fn from(err: reqwest::Error) -> Self {
        PtvError::Http(err)
    }
}

impl From<ConversionError> for PtvError {
    fn from(err: ConversionError) -> Self {
        PtvError::Conversion(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PtvError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (check developer id and key)");

        let err = PtvError::Status {
            status: 500,
            body: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = PtvError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("<html>"));

        let err = PtvError::from(ConversionError::InvalidRunKey("x".into()));
        assert_eq!(err.to_string(), "unexpected response data: invalid run key: x");
    }
}
