//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login form (`application/x-www-form-urlencoded`)
///
/// Both fields are optional so a partial submission is answered with the
/// usual redirect instead of a 422.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub is_admin: bool,
}
