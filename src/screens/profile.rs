// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile screen: load, edit, photo upload, save and logout.

use std::path::Path;
use std::sync::Arc;

use crate::db::ProfileStore;
use crate::error::AppError;
use crate::models::{Photo, ProfileUpsert, Session};
use crate::screens::{messages, Navigation, Notice, Notifier, Route};
use crate::services::{AuthService, MediaLibrary, ObjectStore, PermissionStatus};

/// Content type used for uploaded profile photos.
pub const PHOTO_CONTENT_TYPE: &str = "image/jpeg";

/// Storage key of a user's profile photo. Each upload overwrites the last.
pub fn photo_key(user_id: &str) -> String {
    format!("{}.jpg", user_id)
}

/// Result of a save attempt, mirroring what the user was told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No session; nothing was sent
    NoSession,
    /// Photo upload failed; the record was not written
    UploadFailed,
    /// Record write failed
    WriteFailed,
    Saved,
}

/// Profile editor bound to the current session.
pub struct ProfileScreen<A, P, O>
where
    A: AuthService,
    P: ProfileStore,
    O: ObjectStore,
{
    auth: Arc<A>,
    profiles: Arc<P>,
    objects: Arc<O>,
    session: Option<Session>,
    pub name: String,
    pub description: String,
    pub photo: Photo,
}

impl<A, P, O> ProfileScreen<A, P, O>
where
    A: AuthService,
    P: ProfileStore,
    O: ObjectStore,
{
    pub fn new(auth: Arc<A>, profiles: Arc<P>, objects: Arc<O>) -> Self {
        Self {
            auth,
            profiles,
            objects,
            session: None,
            name: String::new(),
            description: String::new(),
            photo: Photo::Unset,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Load the session and the stored profile.
    ///
    /// Without a session the login screen takes over before any record is
    /// fetched. A missing or unreadable record leaves the form empty.
    pub async fn activate(&mut self) -> Option<Navigation> {
        let session = match self.auth.current_session().await {
            Ok(Some(session)) => session,
            Ok(None) => {
                tracing::debug!("No session, redirecting to login");
                return Some(Navigation::Replace(Route::Login));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed, redirecting to login");
                return Some(Navigation::Replace(Route::Login));
            }
        };

        match self.profiles.fetch(&session).await {
            Ok(Some(profile)) => {
                self.name = profile.name.unwrap_or_default();
                self.description = profile.description.unwrap_or_default();
                self.photo = Photo::from_record(profile.photo);
            }
            Ok(None) => {
                tracing::debug!(user_id = %session.user_id(), "Profile not completed yet");
            }
            Err(e) => {
                tracing::warn!(error = %e, user_id = %session.user_id(), "Profile fetch failed, showing empty form");
            }
        }

        self.session = Some(session);
        None
    }

    /// Ask for media library access and let the user pick a new photo.
    pub async fn choose_photo(&mut self, media: &impl MediaLibrary, notifier: &impl Notifier) {
        if media.request_permission().await == PermissionStatus::Denied {
            notifier.notify(Notice::new(
                messages::PERMISSION_TITLE,
                messages::GALLERY_ACCESS_NEEDED,
            ));
            return;
        }

        if let Some(path) = media.pick_image().await {
            tracing::debug!(path = %path.display(), "Photo picked");
            self.photo = Photo::PendingLocal(path);
        }
    }

    /// Upload a freshly picked photo if needed, then write the whole record.
    pub async fn save(&mut self, notifier: &impl Notifier) -> SaveOutcome {
        let Some(session) = self.session.as_ref() else {
            return SaveOutcome::NoSession;
        };

        let photo_url = match &self.photo {
            Photo::PendingLocal(path) => {
                match self.upload_photo(session, path).await {
                    Ok(url) => Some(url),
                    Err(e) => {
                        tracing::warn!(error = %e, user_id = %session.user_id(), "Photo upload failed");
                        notifier.notify(upload_error_notice(&e));
                        return SaveOutcome::UploadFailed;
                    }
                }
            }
            photo => photo.stored_url().map(str::to_string),
        };

        let row = ProfileUpsert {
            id: session.user_id().to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            photo: photo_url.clone(),
        };

        let result = self.profiles.upsert(session, &row).await;

        // The upload succeeded either way; keep the stored URL so a retry skips it.
        if let Some(url) = photo_url {
            self.photo = Photo::Stored(url);
        }

        match result {
            Ok(()) => {
                notifier.notify(Notice::success(messages::PROFILE_UPDATED));
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(error = %e, user_id = %row.id, "Profile write failed");
                notifier.notify(Notice::error(&e));
                SaveOutcome::WriteFailed
            }
        }
    }

    /// End the session and return to login, whatever the server says.
    pub async fn logout(&mut self) -> Navigation {
        if let Err(e) = self.auth.sign_out().await {
            tracing::warn!(error = %e, "Sign-out failed, leaving anyway");
        }
        self.session = None;
        Navigation::Replace(Route::Login)
    }

    async fn upload_photo(&self, session: &Session, path: &Path) -> Result<String, AppError> {
        let bytes = tokio::fs::read(path).await?;
        let key = photo_key(session.user_id());

        self.objects
            .upload(session, &key, PHOTO_CONTENT_TYPE, bytes)
            .await?;

        Ok(self.objects.public_url(&key))
    }
}

fn upload_error_notice(err: &AppError) -> Notice {
    let message = err.to_string();
    if message.trim().is_empty() {
        Notice::new(messages::ERROR_TITLE, messages::UPLOAD_FAILED)
    } else {
        Notice::new(messages::ERROR_TITLE, message)
    }
}
