// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! College Navigator: CRUD backend for college, event, and user records.
//!
//! This crate provides the backend API over Firestore with Google
//! credential login, event listings, facility map data, and embedded
//! college reviews.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;
use services::GoogleVerifier;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub google_verifier: GoogleVerifier,
}
