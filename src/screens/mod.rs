// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Screen controllers: form state plus the backend calls each action makes.
//!
//! Actions report to the user through a [`Notifier`] and return the
//! [`Navigation`] the frontend should apply, if any. Every action borrows its
//! screen mutably for its whole duration, so one screen never has two
//! requests in flight.

pub mod login;
pub mod profile;
pub mod register;

pub use login::LoginScreen;
pub use profile::{ProfileScreen, SaveOutcome};
pub use register::RegisterScreen;

use crate::error::AppError;
use std::fmt;

/// User-facing texts.
pub mod messages {
    pub const ERROR_TITLE: &str = "Erro";
    pub const SUCCESS_TITLE: &str = "Sucesso";
    pub const PERMISSION_TITLE: &str = "Permissão necessária";

    pub const CONFIRM_EMAIL: &str = "Verifique seu email para confirmar a conta!";
    pub const PROFILE_UPDATED: &str = "Perfil atualizado!";
    pub const GALLERY_ACCESS_NEEDED: &str = "Precisamos de acesso à galeria!";
    pub const UPLOAD_FAILED: &str = "Falha ao enviar a imagem";
}

/// Addressable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Profile,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Route::Login => "login",
            Route::Register => "register",
            Route::Profile => "profile",
        };
        f.write_str(name)
    }
}

/// Route change requested by a screen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Open `Route` on top of the current screen
    Push(Route),
    /// Swap the current screen for `Route`
    Replace(Route),
}

/// Route stack. Starts at the login screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> Route {
        // The stack is never empty: replace swaps the top, push only grows it.
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Push(route) => self.stack.push(route),
            Navigation::Replace(route) => {
                self.stack.pop();
                self.stack.push(route);
            }
        }
        tracing::debug!(route = %self.current(), depth = self.stack.len(), "Navigated");
    }
}

/// Blocking notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(messages::SUCCESS_TITLE, message)
    }

    /// Error notice carrying the service-reported message verbatim.
    pub fn error(err: &AppError) -> Self {
        Self::new(messages::ERROR_TITLE, err.to_string())
    }
}

/// Something that can show a [`Notice`] (an alert dialog, a terminal line).
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
