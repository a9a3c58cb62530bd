//! JSON fixtures mirroring server response envelopes.

use serde_json::{Value, json};

/// Login envelope granting `token` with the given policies.
#[must_use]
pub fn app_id_login_response(token: &str, policies: &[&str]) -> Value {
    json!({ "auth": { "client_token": token, "policies": policies } })
}

/// Login envelope with an auth block but no token.
#[must_use]
pub fn tokenless_login_response() -> Value {
    json!({ "auth": {} })
}

/// List envelope carrying the given key names.
#[must_use]
pub fn list_response(keys: &[&str]) -> Value {
    json!({ "data": { "keys": keys } })
}

/// Read envelope carrying `data` and a lease duration.
#[must_use]
pub fn read_response(data: Value, lease_duration: u64) -> Value {
    json!({ "data": data, "lease_duration": lease_duration })
}
