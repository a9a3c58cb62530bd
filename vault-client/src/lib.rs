//! Minimal client for a Vault-style secret-management service.
//!
//! Supports token and app-id authentication plus secret read/list
//! operations over the service HTTP API.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod secrets;

pub use auth::AuthMethod;
pub use client::VaultClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use secrets::SecretData;
