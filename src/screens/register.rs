// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration screen.

use std::sync::Arc;

use crate::models::Credentials;
use crate::screens::{messages, Navigation, Notice, Notifier, Route};
use crate::services::AuthService;

/// Account creation form. Validation is left to the auth service.
pub struct RegisterScreen<A: AuthService> {
    auth: Arc<A>,
    pub email: String,
    pub password: String,
}

impl<A: AuthService> RegisterScreen<A> {
    pub fn new(auth: Arc<A>) -> Self {
        Self {
            auth,
            email: String::new(),
            password: String::new(),
        }
    }

    pub async fn submit(&mut self, notifier: &impl Notifier) -> Option<Navigation> {
        let credentials = Credentials::new(self.email.clone(), self.password.clone());

        match self.auth.sign_up(&credentials).await {
            Ok(()) => {
                notifier.notify(Notice::success(messages::CONFIRM_EMAIL));
                Some(Navigation::Replace(Route::Login))
            }
            Err(e) => {
                tracing::info!(error = %e, "Registration failed");
                notifier.notify(Notice::error(&e));
                None
            }
        }
    }

    pub fn back_to_login(&self) -> Navigation {
        Navigation::Replace(Route::Login)
    }
}
