//! Request and response bodies for the backend API.

use serde::{Deserialize, Serialize};

use crate::state::session::User;

/// Login form payload.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a successful login.
///
/// Every field is optional so a partial response can be represented; the
/// store rejects anything missing `access` or `user` instead of silently
/// accepting it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    pub access: Option<String>,
    pub refresh: Option<String>,
    pub user: Option<User>,
}

/// Error body the backend attaches to rejected requests.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}
