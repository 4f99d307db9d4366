// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod photo;
pub mod profile;
pub mod session;
pub mod user;

pub use photo::Photo;
pub use profile::{Profile, ProfileUpsert};
pub use session::Session;
pub use user::{AuthUser, Credentials};
