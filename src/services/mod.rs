// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - capabilities consumed by the screens.
//!
//! Each capability is a trait so screens can run against the hosted backend
//! or against in-memory fakes.

pub mod auth;
pub mod session_store;
pub mod storage;
pub mod supabase;

pub use auth::SupabaseAuth;
pub use session_store::SessionStore;
pub use storage::SupabaseStorage;
pub use supabase::SupabaseClient;

use crate::error::Result;
use crate::models::{Credentials, Session};
use std::path::PathBuf;

/// Account and session management.
#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    /// Create an account. The service sends a confirmation email.
    async fn sign_up(&self, credentials: &Credentials) -> Result<()>;

    /// Create a session and make it the current one.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session>;

    /// The current session, or `None` when nobody is signed in.
    async fn current_session(&self) -> Result<Option<Session>>;

    /// End the current session.
    async fn sign_out(&self) -> Result<()>;
}

/// Key-addressed binary storage.
#[trait_variant::make(ObjectStore: Send)]
pub trait LocalObjectStore {
    /// Upload `bytes` under `key`, replacing any existing object.
    async fn upload(
        &self,
        session: &Session,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<()>;

    /// Public URL of the object stored under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Outcome of a media library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Device media library (permission prompt plus image picker).
#[trait_variant::make(MediaLibrary: Send)]
pub trait LocalMediaLibrary {
    async fn request_permission(&self) -> PermissionStatus;

    /// Let the user pick an image. `None` when the picker was cancelled.
    async fn pick_image(&self) -> Option<PathBuf>;
}
