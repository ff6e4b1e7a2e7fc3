//! Error handling for the subscription tracker client

use std::fmt;
use thiserror::Error;

/// Form field an error should be surfaced next to.
///
/// The backend reports rejections with a structured `code`; this enum is
/// what display layers key on when deciding where to render the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// The email input
    Email,
    /// The password input
    Password,
    /// Not tied to a specific input; shown below the form
    General,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Email => write!(f, "email"),
            FormField::Password => write!(f, "password"),
            FormField::General => write!(f, "form"),
        }
    }
}

/// Unified error type for the subscription tracker client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Local store I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication and session errors raised client-side
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Client-side validation failures; block the request before it is sent
    #[error("Validation error ({field}): {message}")]
    Validation {
        /// Field the message belongs to
        field: FormField,
        /// Human-readable message
        message: String,
    },

    /// A rejection returned by the backend
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Structured error code, when the backend provides one
        code: Option<String>,
        /// Human-readable message
        message: String,
    },

    /// Wire records that cannot be mapped to the internal shape
    #[error("Malformed record: {0}")]
    Decode(String),
}

impl Error {
    /// Create a new authentication error
    pub fn auth<T: fmt::Display>(msg: T) -> Self {
        Error::Auth(msg.to_string())
    }

    /// Create a new validation error for a specific field
    pub fn validation<T: fmt::Display>(field: FormField, msg: T) -> Self {
        Error::Validation {
            field,
            message: msg.to_string(),
        }
    }

    /// Create a new decode error
    pub fn decode<T: fmt::Display>(msg: T) -> Self {
        Error::Decode(msg.to_string())
    }

    /// The form field this error should be rendered next to.
    ///
    /// Validation errors carry their field directly. Backend rejections are
    /// routed by their structured code: `SELF_GRANT` belongs to the email
    /// input, everything else falls through to the general form area.
    pub fn field(&self) -> FormField {
        match self {
            Error::Validation { field, .. } => *field,
            Error::Api {
                code: Some(code), ..
            } => match code.as_str() {
                "SELF_GRANT" => FormField::Email,
                _ => FormField::General,
            },
            _ => FormField::General,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_routes_by_code() {
        let err = Error::Api {
            status: 400,
            code: Some("SELF_GRANT".to_string()),
            message: "cannot grant guest access to yourself".to_string(),
        };
        assert_eq!(err.field(), FormField::Email);

        let err = Error::Api {
            status: 404,
            code: Some("USER_NOT_FOUND".to_string()),
            message: "user not found".to_string(),
        };
        assert_eq!(err.field(), FormField::General);
    }

    #[test]
    fn validation_error_keeps_its_field() {
        let err = Error::validation(FormField::Password, "too short");
        assert_eq!(err.field(), FormField::Password);
    }
}
