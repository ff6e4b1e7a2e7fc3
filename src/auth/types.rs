//! Types for authentication and context switching

use serde::{Deserialize, Serialize};

/// A user as the backend reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub role: String,
}

/// Credentials sent to register and login
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Response to register, login and revert-context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,

    /// Absent when the operation did not establish a user
    #[serde(default)]
    pub user: Option<UserRecord>,
}

/// Request to act within another owner's context
#[derive(Debug, Clone, Serialize)]
pub struct SwitchContextRequest {
    #[serde(rename = "ownerId")]
    pub owner_id: i64,
}

/// Response to a context switch
#[derive(Debug, Clone, Deserialize)]
pub struct ContextSwitch {
    #[serde(rename = "authResponse")]
    pub auth_response: AuthResponse,

    /// Owner whose subscriptions are now being viewed
    #[serde(rename = "contextUserId")]
    pub context_user_id: i64,
}
