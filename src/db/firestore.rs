// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage, email lookup)
//! - Colleges (registry plus embedded reviews)
//! - Events (registry keyed by generated document id)
//! - Facilities (read-only map feed)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{College, Event, Facility, Review, User};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by email (the unique lookup key).
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_string();
        let users: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.field("email").eq(email.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(users.into_iter().next())
    }

    /// Insert a new user with a generated document id.
    ///
    /// Returns the stored record including the assigned id.
    pub async fn insert_user(&self, user: &User) -> Result<User, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::USERS)
            .generate_document_id()
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write the `last_login` field of an existing user.
    pub async fn set_last_login(&self, user: &User) -> Result<(), AppError> {
        let doc_id = required_id(user.id.as_deref(), "user")?;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(["last_login"])
            .in_col(collections::USERS)
            .document_id(doc_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── College Operations ──────────────────────────────────────

    /// Get every college record.
    pub async fn list_colleges(&self) -> Result<Vec<College>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::COLLEGES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a college by name (treated as unique).
    pub async fn get_college_by_name(&self, name: &str) -> Result<Option<College>, AppError> {
        let name = name.to_string();
        let colleges: Vec<College> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::COLLEGES)
            .filter(move |q| q.field("name").eq(name.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(colleges.into_iter().next())
    }

    /// Insert a new college with a generated document id.
    pub async fn insert_college(&self, college: &College) -> Result<College, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::COLLEGES)
            .generate_document_id()
            .object(college)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write the named fields of an existing college.
    pub async fn update_college(&self, college: &College, fields: &[&str]) -> Result<(), AppError> {
        let doc_id = required_id(college.id.as_deref(), "college")?;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(fields.iter().copied())
            .in_col(collections::COLLEGES)
            .document_id(doc_id)
            .object(college)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete a college document.
    pub async fn delete_college(&self, college_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::COLLEGES)
            .document_id(college_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Append a review to a college's embedded review list.
    ///
    /// Uses a Firestore array transform, a single atomic document update
    /// with no read of the existing list. Concurrent appends to the same
    /// college cannot lose each other's entries.
    pub async fn append_review(&self, college_id: &str, review: &Review) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::COLLEGES)
            .document_id(college_id)
            .transforms(|t| {
                t.fields([t
                    .field("reviews")
                    .append_missing_elements([review.clone()])])
            })
            .only_transform()
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Event Operations ────────────────────────────────────────

    /// Get every event record.
    pub async fn list_events(&self) -> Result<Vec<Event>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::EVENTS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get an event by its generated document id.
    pub async fn get_event(&self, event_id: &str) -> Result<Option<Event>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::EVENTS)
            .obj()
            .one(event_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new event with a generated document id.
    pub async fn insert_event(&self, event: &Event) -> Result<Event, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(collections::EVENTS)
            .generate_document_id()
            .object(event)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write the named fields of an existing event.
    pub async fn update_event(&self, event: &Event, fields: &[&str]) -> Result<(), AppError> {
        let doc_id = required_id(event.id.as_deref(), "event")?;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(fields.iter().copied())
            .in_col(collections::EVENTS)
            .document_id(doc_id)
            .object(event)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Delete an event document.
    pub async fn delete_event(&self, event_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collections::EVENTS)
            .document_id(event_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Facility Operations ─────────────────────────────────────

    /// Get every facility record from the map feed collection.
    pub async fn list_facilities(&self) -> Result<Vec<Facility>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::FACILITIES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

/// Extract a stored record's document id, which is always present on
/// records read back from Firestore.
fn required_id<'a>(id: Option<&'a str>, kind: &str) -> Result<&'a str, AppError> {
    id.ok_or_else(|| AppError::Database(format!("{} document has no id", kind)))
}
