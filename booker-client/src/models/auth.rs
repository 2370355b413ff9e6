use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth`.
///
/// The service answers rejected credentials with `200 {"reason": "Bad credentials"}`,
/// so both fields are optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
