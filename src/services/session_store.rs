// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Current-session holder with optional on-disk persistence.
//!
//! Persistence is best effort: a session that cannot be written or read back
//! only costs the user another login.

use crate::models::Session;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Session files hold refresh tokens: owner read/write only.
#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Single-slot store for the signed-in session.
#[derive(Debug, Default)]
pub struct SessionStore {
    slot: RwLock<Option<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// In-memory store; the session is lost when the process exits.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Store persisted to `path`, seeded from the file if it holds a session.
    pub async fn persistent(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let session = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Session>(&bytes) {
                Ok(session) => {
                    tracing::debug!(user_id = %session.user.id, "Restored persisted session");
                    Some(session)
                }
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "Ignoring unreadable session file");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "Failed to read session file");
                None
            }
        };

        Self {
            slot: RwLock::new(session),
            path: Some(path),
        }
    }

    pub async fn get(&self) -> Option<Session> {
        self.slot.read().await.clone()
    }

    pub async fn set(&self, session: Session) {
        self.persist(Some(&session)).await;
        *self.slot.write().await = Some(session);
    }

    pub async fn clear(&self) {
        self.persist(None).await;
        *self.slot.write().await = None;
    }

    async fn persist(&self, session: Option<&Session>) {
        let Some(path) = &self.path else {
            return;
        };

        let result = match session {
            Some(session) => match serde_json::to_vec(session) {
                Ok(bytes) => write_private(path, &bytes).await,
                Err(e) => Err(std::io::Error::other(e)),
            },
            None => match tokio::fs::remove_file(path).await {
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, path = %path.display(), "Failed to persist session, continuing anyway");
        }
    }
}

/// Write `bytes` to `path`, readable by the owner only.
async fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(SESSION_FILE_MODE);

    let mut file = options.open(path).await?;

    // The mode above only applies to newly created files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(SESSION_FILE_MODE))
            .await?;
    }

    file.write_all(bytes).await?;
    file.flush().await
}
