// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! College and embedded review models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic location of a campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Contact details for a college.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// A single review embedded in a college document.
///
/// Reviews are append-only: once stored they are never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Document id of the reviewing user (opaque string)
    pub user_id: String,
    pub user_email: String,
    pub rating: f64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// College record stored in Firestore.
///
/// The `name` field is the lookup key for updates, deletes, and review
/// intake; storage does not enforce uniqueness but the service treats it
/// as unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    /// Firestore document id (absent until the record is stored)
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub location: Location,
    pub website: String,
    pub contact: Contact,
    pub facilities: Vec<String>,
    pub departments: Vec<String>,
    pub courses: Vec<String>,
    pub city: String,
    pub state: String,
    pub branches: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Embedded, append-only review list
    #[serde(default)]
    pub reviews: Vec<Review>,
}
