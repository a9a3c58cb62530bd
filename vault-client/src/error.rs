//! Client error types using thiserror 2.0.
//!
//! Argument and authentication failures are raised before any network
//! call; transport and decode failures pass through untranslated.

use thiserror::Error;

/// Errors produced by the Vault client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Malformed caller input, rejected before any network call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation requiring a token ran with the token slot empty
    #[error("Not authenticated: no client token is set")]
    Unauthenticated,

    /// The requested authentication scheme is not implemented
    #[error("Unsupported auth type: {method}")]
    UnsupportedAuthType {
        /// Tag of the attempted credential variant
        method: &'static str,
    },

    /// HTTP transport or response decoding error, passed through unchanged
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Create an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an unsupported-auth-type error for the given variant tag.
    #[must_use]
    pub const fn unsupported(method: &'static str) -> Self {
        Self::UnsupportedAuthType { method }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::invalid_argument("path must be a non-empty string");
        assert_eq!(
            err.to_string(),
            "Invalid argument: path must be a non-empty string"
        );

        let err = ClientError::Unauthenticated;
        assert_eq!(err.to_string(), "Not authenticated: no client token is set");

        let err = ClientError::unsupported("ldap");
        assert_eq!(err.to_string(), "Unsupported auth type: ldap");
    }

    #[test]
    fn test_unsupported_carries_variant_tag() {
        let err = ClientError::unsupported("ldap");
        assert!(matches!(
            err,
            ClientError::UnsupportedAuthType { method: "ldap" }
        ));
    }
}
