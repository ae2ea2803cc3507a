//! # User accounts
//!
//! [`User`] (server only) is the full `users` row, loaded with
//! [`sqlx::FromRow`]. [`UserInfo`] is the client-safe projection that crosses
//! the server function boundary: no password hash, the id as a string, and the
//! resolved [`UserRole`] instead of the raw `user_role` / `account_type` columns.

use profile::{Identity, UserRole};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
    /// `"admin"` for back-office staff, otherwise unset.
    pub user_role: Option<String>,
    /// `"cuidador"` or `"cliente"`.
    pub account_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    pub fn role(&self) -> UserRole {
        UserRole::resolve(self.user_role.as_deref(), self.account_type.as_deref())
    }

    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            role: self.role(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// The identity handed to the caregiver profile loader.
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "7f1c".into(),
            email: "ana@example.com".into(),
            name: name.map(str::to_string),
            phone: Some("11999990000".into()),
            role: UserRole::Caregiver,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(info(Some("Ana")).display_name(), "Ana");
        assert_eq!(info(Some("  ")).display_name(), "ana@example.com");
        assert_eq!(info(None).display_name(), "ana@example.com");
    }

    #[test]
    fn test_identity_carries_metadata() {
        let identity = info(Some("Ana")).identity();
        assert_eq!(identity.user_id, "7f1c");
        assert_eq!(identity.name.as_deref(), Some("Ana"));
        assert_eq!(identity.phone.as_deref(), Some("11999990000"));
    }
}
