// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Backend failures carry the service-reported message so screens can show
//! it to the user verbatim.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Storage(String),

    #[error("Authentication required")]
    Unauthorized,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the backend rejected the session itself (expired or revoked).
    pub fn is_session_rejected(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
