//! Guest access management
//!
//! Grants relate a guest email to the signed-in owner's account with a
//! read-only or read-write level. The backend enforces the permissions;
//! this client only issues the CRUD requests and lists grants.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fetch::Fetch;
use crate::validate;

/// Access level granted to a guest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionLevel {
    /// Guest may view and mutate the owner's subscriptions
    #[serde(rename = "GUEST_RW")]
    ReadWrite,
    /// Guest may only view
    #[serde(rename = "GUEST_RO")]
    ReadOnly,
}

/// Request body for adding or updating a grant
#[derive(Debug, Clone, Serialize)]
pub struct PermissionRequest {
    #[serde(rename = "guestEmail")]
    pub guest_email: String,
    pub permission: PermissionLevel,
}

/// An account context the current user may switch into
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContextRecord {
    #[serde(rename = "ownerId")]
    pub owner_id: i64,
    #[serde(rename = "ownerEmail")]
    pub owner_email: String,
    pub permission: PermissionLevel,
}

/// A guest the current user has granted access to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuestRecord {
    #[serde(rename = "guestId")]
    pub guest_id: i64,
    #[serde(rename = "guestEmail")]
    pub guest_email: String,
    pub permission: PermissionLevel,
}

/// Client for the backend's permission endpoints
pub struct PermissionsClient {
    base_url: String,
    client: Client,
}

impl PermissionsClient {
    pub(crate) fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/permissions{}", self.base_url, path)
    }

    /// Grant a guest access. Self-grants and unknown users are rejected
    /// by the backend with a structured code ([`Error::Api`]).
    pub async fn add(&self, guest_email: &str, permission: PermissionLevel) -> Result<(), Error> {
        validate::email(guest_email)?;
        let body = PermissionRequest {
            guest_email: guest_email.to_string(),
            permission,
        };
        Fetch::post(&self.client, &self.endpoint("/add"))
            .json(&body)?
            .execute_empty()
            .await
    }

    /// Change an existing guest's access level.
    pub async fn update(&self, guest_email: &str, permission: PermissionLevel) -> Result<(), Error> {
        validate::email(guest_email)?;
        let body = PermissionRequest {
            guest_email: guest_email.to_string(),
            permission,
        };
        Fetch::put(&self.client, &self.endpoint("/update"))
            .json(&body)?
            .execute_empty()
            .await
    }

    /// Revoke a guest's access. The endpoint takes the bare email as its
    /// body.
    pub async fn delete(&self, guest_email: &str) -> Result<(), Error> {
        Fetch::delete(&self.client, &self.endpoint("/delete"))
            .text(guest_email)
            .execute_empty()
            .await
    }

    /// Contexts the current user may act in.
    pub async fn contexts(&self) -> Result<Vec<ContextRecord>, Error> {
        Fetch::get(&self.client, &self.endpoint("/contexts"))
            .execute::<Vec<ContextRecord>>()
            .await
    }

    /// Guests the current user has granted access to.
    pub async fn guests(&self) -> Result<Vec<GuestRecord>, Error> {
        Fetch::get(&self.client, &self.endpoint("/guests"))
            .execute::<Vec<GuestRecord>>()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_levels_use_wire_spellings() {
        let json = serde_json::to_string(&PermissionLevel::ReadWrite).unwrap();
        assert_eq!(json, "\"GUEST_RW\"");
        let level: PermissionLevel = serde_json::from_str("\"GUEST_RO\"").unwrap();
        assert_eq!(level, PermissionLevel::ReadOnly);
    }
}
