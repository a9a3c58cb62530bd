//! Shared proptest generators for client inputs.

use proptest::prelude::*;

/// Generate valid secret paths.
pub fn secret_path_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("secret/app".to_string()),
        Just("secret/db/readonly".to_string()),
        // Generate path segments without consecutive slashes
        prop::collection::vec("[a-z][a-z0-9]{2,10}", 1..4)
            .prop_map(|segments| format!("secret/{}", segments.join("/"))),
    ]
}

/// Generate plausible client token values.
pub fn token_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{8,64}"
}

/// Generate app-id / user-id identifier pairs.
pub fn app_identity_strategy() -> impl Strategy<Value = (String, String)> {
    ("[a-z][a-z0-9-]{3,15}", "[a-z][a-z0-9-]{3,15}")
}

/// Generate policy-name lists.
pub fn policy_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9-]{2,12}", 0..5)
}
