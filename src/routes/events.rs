// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event registry routes.

use crate::error::{AppError, Result};
use crate::models::Event;
use crate::routes::ApiResponse;
use crate::time_utils::{format_utc_rfc3339, parse_event_date, parse_event_timestamp};
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", put(update_event).delete(delete_event))
}

/// Event as rendered in API responses, timestamps as ISO-8601 text.
#[derive(Serialize)]
pub struct EventResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub college_name: String,
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            college_name: event.college_name,
            event_name: event.event_name,
            description: event.description,
            date: format_utc_rfc3339(event.date),
            location: event.location,
            created_at: format_utc_rfc3339(event.created_at),
            updated_at: format_utc_rfc3339(event.updated_at),
        }
    }
}

// ─── Creation ────────────────────────────────────────────────

/// Creation payload; `date` is a calendar date (`YYYY-MM-DD`).
#[derive(Deserialize)]
struct CreateEventRequest {
    college_name: Option<String>,
    event_name: Option<String>,
    description: Option<String>,
    date: Option<String>,
    location: Option<String>,
}

/// Add a new event.
async fn create_event(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<EventResponse>>)> {
    let Json(body) = payload?;

    let (Some(college_name), Some(event_name), Some(description), Some(date), Some(location)) = (
        body.college_name,
        body.event_name,
        body.description,
        body.date,
        body.location,
    ) else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let date = parse_event_date(&date)
        .ok_or_else(|| AppError::Validation("Invalid date format".to_string()))?;

    let now = chrono::Utc::now();
    let event = Event {
        id: None,
        college_name,
        event_name,
        description,
        date,
        location,
        created_at: now,
        updated_at: now,
    };

    let stored = state.db.insert_event(&event).await?;
    tracing::info!(event = %stored.event_name, "Event added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message_with_data(
            "Event added successfully",
            stored.into(),
        )),
    ))
}

// ─── Listing ─────────────────────────────────────────────────

/// List every event.
async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<EventResponse>>>> {
    let events = state.db.list_events().await?;

    Ok(Json(ApiResponse::data(
        events.into_iter().map(EventResponse::from).collect(),
    )))
}

// ─── Update ──────────────────────────────────────────────────

/// Partial update payload; `date` takes the full timestamp form
/// (`YYYY-MM-DDTHH:MM:SSZ`), unlike the date-only form at creation.
#[derive(Deserialize)]
struct UpdateEventRequest {
    college_name: Option<String>,
    event_name: Option<String>,
    description: Option<String>,
    date: Option<String>,
    location: Option<String>,
}

/// Merge supplied fields into an event by id; `updated_at` is restamped
/// unconditionally.
async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    payload: std::result::Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>> {
    let Json(body) = payload?;

    // Date validation happens before any store access.
    let date = body
        .date
        .map(|raw| {
            parse_event_timestamp(&raw)
                .ok_or_else(|| AppError::Validation("Invalid date format".to_string()))
        })
        .transpose()?;

    let Some(mut event) = state.db.get_event(&event_id).await? else {
        return Err(AppError::NotFound(
            "No changes made or event not found".to_string(),
        ));
    };

    let mut changed: Vec<&'static str> = Vec::new();
    if let Some(college_name) = body.college_name {
        event.college_name = college_name;
        changed.push("college_name");
    }
    if let Some(event_name) = body.event_name {
        event.event_name = event_name;
        changed.push("event_name");
    }
    if let Some(description) = body.description {
        event.description = description;
        changed.push("description");
    }
    if let Some(date) = date {
        event.date = date;
        changed.push("date");
    }
    if let Some(location) = body.location {
        event.location = location;
        changed.push("location");
    }

    event.updated_at = chrono::Utc::now();
    changed.push("updated_at");

    state.db.update_event(&event, &changed).await?;
    tracing::info!(event_id = %event_id, fields = changed.len(), "Event updated");

    Ok(Json(ApiResponse::message("Event updated successfully")))
}

// ─── Deletion ────────────────────────────────────────────────

/// Delete an event by id.
async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    if state.db.get_event(&event_id).await?.is_none() {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    state.db.delete_event(&event_id).await?;
    tracing::info!(event_id = %event_id, "Event deleted");

    Ok(Json(ApiResponse::message("Event deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_response_renders_iso_text() {
        let event = Event {
            id: Some("abc123".to_string()),
            college_name: "Test College".to_string(),
            event_name: "Tech Fest".to_string(),
            description: "Annual fest".to_string(),
            date: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            location: "Main Hall".to_string(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 4, 20, 9, 30, 0).unwrap(),
            updated_at: chrono::Utc.with_ymd_and_hms(2024, 4, 21, 9, 30, 0).unwrap(),
        };

        let rendered = EventResponse::from(event);
        assert_eq!(rendered.date, "2024-05-01T00:00:00Z");
        assert_eq!(rendered.created_at, "2024-04-20T09:30:00Z");
        assert_eq!(rendered.updated_at, "2024-04-21T09:30:00Z");
    }
}
