//! Response envelope types for the secret service wire protocol.

use serde::Deserialize;
use std::collections::HashMap;

/// Opaque secret payload, returned without interpreting its shape.
pub type SecretData = HashMap<String, serde_json::Value>;

/// Envelope returned by the app-id login endpoint.
#[derive(Debug, Deserialize)]
pub struct AppIdLoginResponse {
    /// Auth block; absent on malformed responses
    #[serde(default)]
    pub auth: Option<AuthData>,
}

/// Auth block of a login response.
#[derive(Debug, Deserialize)]
pub struct AuthData {
    /// Token granted by the server; absent on malformed responses
    #[serde(default)]
    pub client_token: Option<String>,
    /// Policy names attached to the token
    #[serde(default)]
    pub policies: Vec<String>,
}

/// Envelope returned by a list request.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    /// Data block carrying the key names
    pub data: ListData,
}

/// Data block of a list response.
#[derive(Debug, Deserialize)]
pub struct ListData {
    /// Key names, in server order
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Envelope returned by a read request.
#[derive(Debug, Deserialize)]
pub struct ReadResponse {
    /// Opaque secret payload
    pub data: SecretData,
    /// Remaining lease in seconds; logged, never acted on
    #[serde(default)]
    pub lease_duration: u64,
}
