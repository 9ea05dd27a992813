// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event record stored in Firestore, identified by its generated
/// document id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Firestore document id (absent until the record is stored)
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the hosting college
    pub college_name: String,
    pub event_name: String,
    pub description: String,
    /// Calendar date at creation (UTC midnight); full timestamp after update
    pub date: DateTime<Utc>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
