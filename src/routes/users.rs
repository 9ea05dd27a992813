// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User routes: Google login and email lookup.

use crate::error::{AppError, Result};
use crate::models::user::DEFAULT_ROLE;
use crate::models::User;
use crate::routes::ApiResponse;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/google-login", post(google_login))
        .route("/users/{email}", get(get_user))
}

/// Request body for Google login.
#[derive(Deserialize)]
struct GoogleLoginRequest {
    credential: Option<String>,
}

/// Login or register with a Google credential.
///
/// The credential is exchanged with the tokeninfo boundary service before
/// any store write happens. Returns 200 for an existing user (with
/// `last_login` refreshed) and 201 when a new record is registered; either
/// way exactly one store mutation is performed.
async fn google_login(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GoogleLoginRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let Json(body) = payload?;

    let credential = body
        .credential
        .filter(|credential| !credential.is_empty())
        .ok_or_else(|| AppError::Validation("Missing Google token".to_string()))?;

    let claims = state.google_verifier.verify_credential(&credential).await?;
    let now = chrono::Utc::now();

    if let Some(mut existing) = state.db.get_user_by_email(&claims.email).await? {
        existing.last_login = now;
        state.db.set_last_login(&existing).await?;
        tracing::info!(email = %existing.email, "User logged in");

        return Ok((
            StatusCode::OK,
            Json(ApiResponse::message_with_data("User logged in", existing)),
        ));
    }

    let user = User {
        id: None,
        google_id: claims.sub,
        name: claims.name,
        email: claims.email,
        profile_picture: claims.picture,
        role: DEFAULT_ROLE.to_string(),
        last_login: now,
        created_at: now,
    };

    let stored = state.db.insert_user(&user).await?;
    tracing::info!(email = %stored.email, "New user registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message_with_data("New user registered", stored)),
    ))
}

/// Fetch a user by email.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<User>>> {
    let user = state
        .db
        .get_user_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(ApiResponse::data(user)))
}
