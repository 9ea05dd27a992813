//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
///
/// Looked up by email; the document id is generated by the store and
/// surfaced to callers as an opaque `id` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Firestore document id (absent until the record is stored)
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Google subject id
    pub google_id: String,
    /// Display name from the Google profile
    pub name: String,
    /// Email address (unique lookup key)
    pub email: String,
    /// Profile picture URL
    pub profile_picture: Option<String>,
    /// Fixed role, currently always "student"
    pub role: String,
    /// Updated on every login
    pub last_login: DateTime<Utc>,
    /// When the user first registered
    pub created_at: DateTime<Utc>,
}

/// Role assigned to every newly registered user.
pub const DEFAULT_ROLE: &str = "student";
