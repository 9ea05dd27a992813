// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - boundary service clients.

pub mod google;

pub use google::{GoogleClaims, GoogleVerifier};
