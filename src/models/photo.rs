// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile photo as held by the profile screen.

use std::path::PathBuf;

/// The photo currently attached to the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Photo {
    /// No photo yet
    #[default]
    Unset,
    /// Public URL of an object already in storage
    Stored(String),
    /// File picked from the media library, not uploaded yet
    PendingLocal(PathBuf),
}

impl Photo {
    /// Photo as read from a profile record.
    pub fn from_record(photo: Option<String>) -> Self {
        match photo {
            Some(url) if !url.is_empty() => Photo::Stored(url),
            _ => Photo::Unset,
        }
    }

    /// Whether saving must upload the file first.
    pub fn is_pending_upload(&self) -> bool {
        matches!(self, Photo::PendingLocal(_))
    }

    /// Value written to the record's `foto` column, for photos that need no upload.
    pub fn stored_url(&self) -> Option<&str> {
        match self {
            Photo::Stored(url) => Some(url),
            _ => None,
        }
    }

    /// URI to render, falling back to `default_avatar` when unset.
    pub fn display_uri(&self, default_avatar: &str) -> String {
        match self {
            Photo::Unset => default_avatar.to_string(),
            Photo::Stored(url) => url.clone(),
            Photo::PendingLocal(path) => format!("file://{}", path.display()),
        }
    }
}
