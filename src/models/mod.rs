// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod college;
pub mod event;
pub mod facility;
pub mod user;

pub use college::{College, Contact, Location, Review};
pub use event::Event;
pub use facility::Facility;
pub use user::User;
