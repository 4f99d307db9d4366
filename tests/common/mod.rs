// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory backend fakes that record every call in one shared log.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use profile_app::config::Config;
use profile_app::db::ProfileStore;
use profile_app::error::AppError;
use profile_app::models::{AuthUser, Credentials, Profile, ProfileUpsert, Session};
use profile_app::screens::{Notice, Notifier};
use profile_app::services::{AuthService, MediaLibrary, ObjectStore, PermissionStatus};
use profile_app::App;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub const PUBLIC_BASE: &str = "https://proj.supabase.co/storage/v1/object/public/profiles";

/// One backend call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SignUp(String),
    SignIn(String),
    CurrentSession,
    SignOut,
    Fetch(String),
    Upsert(ProfileUpsert),
    Upload {
        key: String,
        content_type: String,
        len: usize,
    },
    PublicUrl(String),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn session(user_id: &str) -> Session {
    Session {
        access_token: format!("access-{}", user_id),
        refresh_token: format!("refresh-{}", user_id),
        expires_at: Utc::now() + Duration::hours(1),
        user: AuthUser {
            id: user_id.to_string(),
            email: Some(format!("{}@x.com", user_id)),
        },
    }
}

pub struct FakeAuth {
    log: CallLog,
    pub session: Mutex<Option<Session>>,
    /// Message returned by sign-in, if it should fail
    pub sign_in_error: Option<String>,
    pub sign_up_error: Option<String>,
    pub sign_out_error: Option<String>,
    pub lookup_fails: bool,
}

impl FakeAuth {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            session: Mutex::new(None),
            sign_in_error: None,
            sign_up_error: None,
            sign_out_error: None,
            lookup_fails: false,
        }
    }

    pub fn signed_in(log: CallLog, user_id: &str) -> Self {
        let auth = Self::new(log);
        *auth.session.lock().unwrap() = Some(session(user_id));
        auth
    }
}

impl AuthService for FakeAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<(), AppError> {
        self.log
            .lock()
            .unwrap()
            .push(Call::SignUp(credentials.email.clone()));
        match &self.sign_up_error {
            Some(msg) => Err(AppError::Auth(msg.clone())),
            None => Ok(()),
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AppError> {
        self.log
            .lock()
            .unwrap()
            .push(Call::SignIn(credentials.email.clone()));
        if let Some(msg) = &self.sign_in_error {
            return Err(AppError::Auth(msg.clone()));
        }
        let session = session("u1");
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<Session>, AppError> {
        self.log.lock().unwrap().push(Call::CurrentSession);
        if self.lookup_fails {
            return Err(AppError::Auth("network down".to_string()));
        }
        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        self.log.lock().unwrap().push(Call::SignOut);
        *self.session.lock().unwrap() = None;
        match &self.sign_out_error {
            Some(msg) => Err(AppError::Auth(msg.clone())),
            None => Ok(()),
        }
    }
}

pub struct FakeProfiles {
    log: CallLog,
    pub row: Mutex<Option<Profile>>,
    pub fetch_fails: bool,
    pub upsert_error: Option<String>,
}

impl FakeProfiles {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            row: Mutex::new(None),
            fetch_fails: false,
            upsert_error: None,
        }
    }
}

impl ProfileStore for FakeProfiles {
    async fn fetch(&self, session: &Session) -> Result<Option<Profile>, AppError> {
        self.log
            .lock()
            .unwrap()
            .push(Call::Fetch(session.user_id().to_string()));
        if self.fetch_fails {
            return Err(AppError::Database("permission denied for table profiles".to_string()));
        }
        Ok(self.row.lock().unwrap().clone())
    }

    async fn upsert(&self, _session: &Session, row: &ProfileUpsert) -> Result<(), AppError> {
        self.log.lock().unwrap().push(Call::Upsert(row.clone()));
        match &self.upsert_error {
            Some(msg) => Err(AppError::Database(msg.clone())),
            None => Ok(()),
        }
    }
}

pub struct FakeObjects {
    log: CallLog,
    pub upload_error: Option<String>,
}

impl FakeObjects {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            upload_error: None,
        }
    }
}

impl ObjectStore for FakeObjects {
    async fn upload(
        &self,
        _session: &Session,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), AppError> {
        self.log.lock().unwrap().push(Call::Upload {
            key: key.to_string(),
            content_type: content_type.to_string(),
            len: bytes.len(),
        });
        match &self.upload_error {
            Some(msg) => Err(AppError::Storage(msg.clone())),
            None => Ok(()),
        }
    }

    fn public_url(&self, key: &str) -> String {
        self.log
            .lock()
            .unwrap()
            .push(Call::PublicUrl(key.to_string()));
        format!("{}/{}", PUBLIC_BASE, key)
    }
}

/// Notifier that keeps every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn taken(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Media library with a fixed permission answer and pick result.
pub struct ScriptedMedia {
    pub permission: PermissionStatus,
    pub pick: Option<PathBuf>,
    pub picker_opened: Mutex<usize>,
}

impl ScriptedMedia {
    pub fn new(permission: PermissionStatus, pick: Option<PathBuf>) -> Self {
        Self {
            permission,
            pick,
            picker_opened: Mutex::new(0),
        }
    }
}

impl MediaLibrary for ScriptedMedia {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn pick_image(&self) -> Option<PathBuf> {
        *self.picker_opened.lock().unwrap() += 1;
        self.pick.clone()
    }
}

pub type FakeApp = App<FakeAuth, FakeProfiles, FakeObjects>;

/// Wire fakes into an app. All of them share `log`.
pub fn create_test_app(auth: FakeAuth, profiles: FakeProfiles, objects: FakeObjects) -> FakeApp {
    App::new(
        Config::test_default(),
        Arc::new(auth),
        Arc::new(profiles),
        Arc::new(objects),
    )
}

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}
