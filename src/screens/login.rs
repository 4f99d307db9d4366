// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login screen.

use std::sync::Arc;

use crate::models::Credentials;
use crate::screens::{Navigation, Notice, Notifier, Route};
use crate::services::AuthService;

/// Email/password sign-in form.
pub struct LoginScreen<A: AuthService> {
    auth: Arc<A>,
    pub email: String,
    pub password: String,
}

impl<A: AuthService> LoginScreen<A> {
    pub fn new(auth: Arc<A>) -> Self {
        Self {
            auth,
            email: String::new(),
            password: String::new(),
        }
    }

    /// Try to sign in with the typed credentials.
    ///
    /// On success the profile screen replaces this one. On failure the
    /// service's message is shown and the screen stays.
    pub async fn submit(&mut self, notifier: &impl Notifier) -> Option<Navigation> {
        let credentials = Credentials::new(self.email.clone(), self.password.clone());

        match self.auth.sign_in(&credentials).await {
            Ok(session) => {
                tracing::debug!(user_id = %session.user_id(), "Login succeeded");
                Some(Navigation::Replace(Route::Profile))
            }
            Err(e) => {
                tracing::info!(error = %e, "Login failed");
                notifier.notify(Notice::error(&e));
                None
            }
        }
    }

    /// Open the registration screen.
    pub fn go_to_register(&self) -> Navigation {
        Navigation::Push(Route::Register)
    }
}
