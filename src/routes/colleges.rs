// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! College registry routes: CRUD plus review intake.

use crate::error::{AppError, Result};
use crate::models::{College, Contact, Location, Review};
use crate::routes::ApiResponse;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/colleges", get(list_colleges).post(create_college))
        .route(
            "/colleges/{name}",
            put(update_college).delete(delete_college),
        )
        .route("/colleges/{name}/rate", post(rate_college))
}

// ─── Creation ────────────────────────────────────────────────

/// Creation payload. Every field is required, but presence is checked by
/// hand so the response can name all missing fields at once.
#[derive(Deserialize)]
struct CreateCollegeRequest {
    name: Option<String>,
    location: Option<LocationInput>,
    website: Option<String>,
    contact: Option<ContactInput>,
    facilities: Option<Vec<String>>,
    departments: Option<Vec<String>>,
    courses: Option<Vec<String>>,
    city: Option<String>,
    state: Option<String>,
    branches: Option<Vec<String>>,
}

/// Location mapping with per-key presence checks.
#[derive(Deserialize)]
struct LocationInput {
    latitude: Option<f64>,
    longitude: Option<f64>,
    address: Option<String>,
}

/// Contact mapping with per-key presence checks.
#[derive(Deserialize)]
struct ContactInput {
    email: Option<String>,
    phone: Option<String>,
}

impl LocationInput {
    fn into_location(self) -> Option<Location> {
        Some(Location {
            latitude: self.latitude?,
            longitude: self.longitude?,
            address: self.address?,
        })
    }
}

impl ContactInput {
    fn into_contact(self) -> Option<Contact> {
        Some(Contact {
            email: self.email?,
            phone: self.phone?,
        })
    }
}

impl CreateCollegeRequest {
    /// Required top-level fields, in reporting order.
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.website.is_none() {
            missing.push("website");
        }
        if self.contact.is_none() {
            missing.push("contact");
        }
        if self.facilities.is_none() {
            missing.push("facilities");
        }
        if self.departments.is_none() {
            missing.push("departments");
        }
        if self.courses.is_none() {
            missing.push("courses");
        }
        if self.city.is_none() {
            missing.push("city");
        }
        if self.state.is_none() {
            missing.push("state");
        }
        if self.branches.is_none() {
            missing.push("branches");
        }
        missing
    }

    /// Validate the payload and build the record to store.
    ///
    /// Missing top-level fields are reported all at once; the nested
    /// `location` and `contact` shapes each get their own error.
    fn try_into_college(self, now: DateTime<Utc>) -> Result<College> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let location = self
            .location
            .and_then(LocationInput::into_location)
            .ok_or_else(|| {
                AppError::Validation(
                    "Invalid location data. Must include latitude, longitude, and address."
                        .to_string(),
                )
            })?;

        let contact = self
            .contact
            .and_then(ContactInput::into_contact)
            .ok_or_else(|| {
                AppError::Validation(
                    "Invalid contact data. Must include email and phone.".to_string(),
                )
            })?;

        // The missing-field check above guarantees the remaining fields
        // are present.
        Ok(College {
            id: None,
            name: self.name.unwrap_or_default(),
            location,
            website: self.website.unwrap_or_default(),
            contact,
            facilities: self.facilities.unwrap_or_default(),
            departments: self.departments.unwrap_or_default(),
            courses: self.courses.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            branches: self.branches.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            reviews: Vec::new(),
        })
    }
}

/// Register a new college.
async fn create_college(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateCollegeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<College>>)> {
    let Json(body) = payload?;

    let college = body.try_into_college(chrono::Utc::now())?;
    let stored = state.db.insert_college(&college).await?;
    tracing::info!(name = %stored.name, "College added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message_with_data(
            "College added successfully",
            stored,
        )),
    ))
}

// ─── Listing ─────────────────────────────────────────────────

/// List every college.
async fn list_colleges(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<College>>>> {
    let colleges = state.db.list_colleges().await?;
    Ok(Json(ApiResponse::data(colleges)))
}

// ─── Update ──────────────────────────────────────────────────

/// Partial update payload; only supplied fields are merged. The embedded
/// review list is not an accepted field.
#[derive(Deserialize)]
struct UpdateCollegeRequest {
    name: Option<String>,
    location: Option<Location>,
    website: Option<String>,
    contact: Option<Contact>,
    facilities: Option<Vec<String>>,
    departments: Option<Vec<String>>,
    courses: Option<Vec<String>>,
    city: Option<String>,
    state: Option<String>,
    branches: Option<Vec<String>>,
}

/// Apply a supplied value to a field, recording the path when the value
/// actually differs.
fn merge_field<T: PartialEq>(
    target: &mut T,
    supplied: Option<T>,
    path: &'static str,
    changed: &mut Vec<&'static str>,
) {
    if let Some(value) = supplied {
        if *target != value {
            *target = value;
            changed.push(path);
        }
    }
}

/// Merge supplied fields into an existing college, looked up by name.
///
/// A name that resolves to nothing and a merge that changes nothing
/// produce the same not-found response; callers cannot distinguish the
/// two from this surface.
async fn update_college(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: std::result::Result<Json<UpdateCollegeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>> {
    let Json(body) = payload?;

    let Some(mut college) = state.db.get_college_by_name(&name).await? else {
        return Err(AppError::NotFound(
            "No changes made or college not found".to_string(),
        ));
    };

    let mut changed: Vec<&'static str> = Vec::new();
    merge_field(&mut college.name, body.name, "name", &mut changed);
    merge_field(&mut college.location, body.location, "location", &mut changed);
    merge_field(&mut college.website, body.website, "website", &mut changed);
    merge_field(&mut college.contact, body.contact, "contact", &mut changed);
    merge_field(
        &mut college.facilities,
        body.facilities,
        "facilities",
        &mut changed,
    );
    merge_field(
        &mut college.departments,
        body.departments,
        "departments",
        &mut changed,
    );
    merge_field(&mut college.courses, body.courses, "courses", &mut changed);
    merge_field(&mut college.city, body.city, "city", &mut changed);
    merge_field(&mut college.state, body.state, "state", &mut changed);
    merge_field(&mut college.branches, body.branches, "branches", &mut changed);

    if changed.is_empty() {
        return Err(AppError::NotFound(
            "No changes made or college not found".to_string(),
        ));
    }

    state.db.update_college(&college, &changed).await?;
    tracing::info!(name = %name, fields = changed.len(), "College updated");

    Ok(Json(ApiResponse::message("College updated successfully")))
}

// ─── Deletion ────────────────────────────────────────────────

/// Delete a college by name.
async fn delete_college(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let Some(college) = state.db.get_college_by_name(&name).await? else {
        return Err(AppError::NotFound("College not found".to_string()));
    };

    let college_id = college
        .id
        .as_deref()
        .ok_or_else(|| AppError::Database("college document has no id".to_string()))?;
    state.db.delete_college(college_id).await?;
    tracing::info!(name = %name, "College deleted");

    Ok(Json(ApiResponse::message("College deleted successfully")))
}

// ─── Review Intake ───────────────────────────────────────────

/// Review submission payload.
#[derive(Deserialize)]
struct RateCollegeRequest {
    user_email: Option<String>,
    rating: Option<f64>,
    message: Option<String>,
}

/// Append a review to a college.
///
/// Only known users may review: an unknown email is a 403, an unknown
/// college a 404. The append itself is a single atomic array transform
/// on the college document.
async fn rate_college(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: std::result::Result<Json<RateCollegeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    let Json(body) = payload?;

    let (Some(user_email), Some(rating), Some(message)) =
        (body.user_email, body.rating, body.message)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let user = state
        .db
        .get_user_by_email(&user_email)
        .await?
        .ok_or_else(|| AppError::Forbidden("Invalid user".to_string()))?;

    let college = state
        .db
        .get_college_by_name(&name)
        .await?
        .ok_or_else(|| AppError::NotFound("College not found".to_string()))?;

    let user_id = user
        .id
        .ok_or_else(|| AppError::Database("user document has no id".to_string()))?;
    let college_id = college
        .id
        .as_deref()
        .ok_or_else(|| AppError::Database("college document has no id".to_string()))?;

    let review = Review {
        user_id,
        user_email,
        rating,
        message,
        timestamp: chrono::Utc::now(),
    };

    state.db.append_review(college_id, &review).await?;
    tracing::info!(college = %name, "Review added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message("Review added successfully")),
    ))
}
