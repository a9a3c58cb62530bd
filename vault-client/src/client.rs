//! Vault HTTP client with a single mutable token slot.

use crate::{
    auth::AuthMethod,
    config::ClientConfig,
    error::{ClientError, ClientResult},
    secrets::{AppIdLoginResponse, ListResponse, ReadResponse, SecretData},
};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";

/// Client for a Vault-style secret service.
///
/// Holds an immutable base address and a single mutable token slot. The
/// slot starts empty and is overwritten wholesale by each successful
/// [`authenticate`](Self::authenticate) call; there is no token history
/// and no expiry tracking.
pub struct VaultClient {
    config: ClientConfig,
    http: Client,
    token: Arc<RwLock<Option<SecretString>>>,
}

impl std::fmt::Debug for VaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClient")
            .field("addr", &self.config.addr)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl VaultClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if the configured address
    /// is empty, or the transport error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        if config.addr.is_empty() {
            return Err(ClientError::invalid_argument(
                "base address must be a non-empty string",
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .build()?;

        Ok(Self {
            config,
            http,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Create a client for the given server address with default settings.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`new`](Self::new).
    pub fn from_addr(addr: impl Into<String>) -> ClientResult<Self> {
        Self::new(ClientConfig::new(addr))
    }

    /// Authenticate against the server.
    ///
    /// A token credential is stored without a verification round-trip. An
    /// app-id credential performs a login request and stores the granted
    /// client token; a login response carrying no token leaves the slot
    /// unchanged and is not an error. Returns `&Self` so calls can chain.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnsupportedAuthType`] for credential variants
    /// this client does not implement, and passes through transport or
    /// decode failures from the app-id login request.
    #[instrument(skip(self, method), fields(auth = method.name()))]
    pub async fn authenticate(&self, method: AuthMethod) -> ClientResult<&Self> {
        match method {
            AuthMethod::Token(value) => {
                *self.token.write().await = Some(SecretString::from(value));
                debug!("Stored caller-supplied token");
            }
            AuthMethod::AppId { app_id, user_id } => {
                self.login_app_id(&app_id, &user_id).await?;
            }
            AuthMethod::Ldap { .. } => {
                return Err(ClientError::unsupported(method.name()));
            }
        }
        Ok(self)
    }

    /// List secret key names under a path.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] for an empty path and
    /// [`ClientError::Unauthenticated`] when no token is set, both before
    /// any network call; transport and decode failures pass through.
    #[instrument(skip(self))]
    pub async fn list_secrets(&self, path: &str) -> ClientResult<Vec<String>> {
        if path.is_empty() {
            return Err(ClientError::invalid_argument(
                "path must be a non-empty string",
            ));
        }
        let token = self.require_token().await?;
        let url = format!("{}/v1/{}", self.config.addr, path);

        let response: ListResponse = self
            .http
            .get(&url)
            .query(&[("list", "true")])
            .header(VAULT_TOKEN_HEADER, token.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let keys = response.data.keys;
        info!(path, entries = keys.len(), "Listed secrets");
        Ok(keys)
    }

    /// Read the secret at a path, returning its opaque data mapping.
    ///
    /// The lease duration reported by the server is logged for operator
    /// visibility; nothing is scheduled or renewed from it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`list_secrets`](Self::list_secrets).
    #[instrument(skip(self))]
    pub async fn read_secret(&self, path: &str) -> ClientResult<SecretData> {
        if path.is_empty() {
            return Err(ClientError::invalid_argument(
                "path must be a non-empty string",
            ));
        }
        let token = self.require_token().await?;
        let url = format!("{}/v1/{}", self.config.addr, path);

        let response: ReadResponse = self
            .http
            .get(&url)
            .header(VAULT_TOKEN_HEADER, token.expose_secret())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(
            path,
            lease_duration = response.lease_duration,
            "Read secret"
        );
        Ok(response.data)
    }

    /// Whether the token slot currently holds a non-empty token.
    pub async fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .await
            .as_ref()
            .is_some_and(|token| !token.expose_secret().is_empty())
    }

    async fn login_app_id(&self, app_id: &str, user_id: &str) -> ClientResult<()> {
        let url = format!("{}/v1/auth/app-id/login", self.config.addr);
        let body = serde_json::json!({ "app_id": app_id, "user_id": user_id });

        let response: AppIdLoginResponse = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // A response without a token is not an error; the slot stays as it was.
        let Some(auth) = response.auth else {
            warn!(app_id, "Login response carried no auth block; token unchanged");
            return Ok(());
        };
        let Some(client_token) = auth.client_token else {
            warn!(app_id, "Login response carried no client token; token unchanged");
            return Ok(());
        };

        *self.token.write().await = Some(SecretString::from(client_token));
        info!(
            app_id,
            policies = %auth.policies.join(","),
            "Authenticated via app-id"
        );
        Ok(())
    }

    async fn require_token(&self) -> ClientResult<SecretString> {
        self.token
            .read()
            .await
            .clone()
            .filter(|token| !token.expose_secret().is_empty())
            .ok_or(ClientError::Unauthenticated)
    }
}
