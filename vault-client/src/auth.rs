//! Authentication credential variants.

/// Credential presented to [`crate::VaultClient::authenticate`].
///
/// Exactly one variant per authentication call. The set is closed and
/// matched exhaustively; `Ldap` is declared but not implemented, and
/// selecting it fails with [`crate::ClientError::UnsupportedAuthType`].
#[derive(Clone)]
pub enum AuthMethod {
    /// Pre-issued client token, stored without a verification round-trip
    Token(String),
    /// Application-identity login against the app-id auth backend
    AppId {
        /// Application identifier
        app_id: String,
        /// User identifier bound to the application
        user_id: String,
    },
    /// Directory credentials. Not implemented
    Ldap {
        /// Directory username
        username: String,
        /// Directory password
        password: String,
    },
}

impl AuthMethod {
    /// Stable tag naming the variant, used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::AppId { .. } => "app-id",
            Self::Ldap { .. } => "ldap",
        }
    }
}

// Token and password values stay out of debug output.
impl std::fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
            Self::AppId { app_id, user_id } => f
                .debug_struct("AppId")
                .field("app_id", app_id)
                .field("user_id", user_id)
                .finish(),
            Self::Ldap { username, .. } => f
                .debug_struct("Ldap")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        assert_eq!(AuthMethod::Token("t".to_string()).name(), "token");
        assert_eq!(
            AuthMethod::AppId {
                app_id: "app".to_string(),
                user_id: "user".to_string(),
            }
            .name(),
            "app-id"
        );
        assert_eq!(
            AuthMethod::Ldap {
                username: "user".to_string(),
                password: "hunter2".to_string(),
            }
            .name(),
            "ldap"
        );
    }

    #[test]
    fn test_debug_redacts_token() {
        let method = AuthMethod::Token("s.super-secret".to_string());
        let debug = format!("{method:?}");
        assert!(!debug.contains("s.super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_debug_redacts_ldap_password() {
        let method = AuthMethod::Ldap {
            username: "jdoe".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{method:?}");
        assert!(debug.contains("jdoe"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
