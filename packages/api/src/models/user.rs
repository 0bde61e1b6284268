//! # User model for authenticated owners
//!
//! Defines the two representations of a Devfolio user:
//!
//! - [`User`] (server only) — the complete database row from the `users`
//!   table, loaded directly from queries via [`sqlx::FromRow`]. Accounts are
//!   local email + password only, so the row always carries an Argon2
//!   `password_hash`. [`User::to_info`] projects it for the client.
//!
//! - [`UserInfo`] — the client-safe subset that crosses the server/client
//!   boundary via Dioxus server functions. It omits the password hash and
//!   timestamps and converts the `Uuid` to a `String` so it works in WASM.
//!   [`UserInfo::display_name`] falls back to the email address.

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
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
