//! Error types for the business card widget

use thiserror::Error;

/// Errors raised while loading or parsing widget attributes.
///
/// Rendering itself never fails: missing fields are omitted and unknown
/// enum values fall through unstyled. Only the configuration surface
/// around the widget can produce one of these.
#[derive(Error, Debug)]
pub enum CardError {
    /// General I/O error (reading a config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in an attribute file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Attribute value that cannot be expressed as an attribute string
    #[error("Invalid value for attribute '{name}': {reason}")]
    InvalidAttributeValue { name: String, reason: String },

    /// Malformed `name=value` argument
    #[error("Invalid attribute argument: {0}")]
    InvalidAttributeArg(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidAttributeValue {
            name: "brand".to_string(),
            reason: "arrays are not supported".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid value for attribute 'brand': arrays are not supported"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
