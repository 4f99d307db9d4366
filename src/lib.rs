// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Profile app: account registration, login and profile editing on Supabase.
//!
//! Identity, row storage and photo storage are all delegated to a Supabase
//! project. This crate holds the client-side workflow of the three screens
//! and a terminal frontend to drive them.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod screens;
pub mod services;
pub mod terminal;

use std::sync::Arc;

use config::Config;
use db::{ProfileStore, ProfileTable};
use screens::{LoginScreen, ProfileScreen, RegisterScreen};
use services::{
    AuthService, ObjectStore, SessionStore, SupabaseAuth, SupabaseClient, SupabaseStorage,
};

/// Shared application state: configuration plus the backend capabilities.
pub struct App<A, P, O> {
    pub config: Config,
    pub auth: Arc<A>,
    pub profiles: Arc<P>,
    pub objects: Arc<O>,
}

/// The app wired to a real Supabase project.
pub type SupabaseApp = App<SupabaseAuth, ProfileTable, SupabaseStorage>;

impl SupabaseApp {
    /// Build the Supabase-backed services, restoring a persisted session if configured.
    pub async fn connect(config: Config) -> Self {
        let client = SupabaseClient::from_config(&config);

        let store = match &config.session_file {
            Some(path) => SessionStore::persistent(path).await,
            None => SessionStore::in_memory(),
        };

        Self {
            auth: Arc::new(SupabaseAuth::new(client.clone(), Arc::new(store))),
            profiles: Arc::new(ProfileTable::new(client.clone(), &config.profiles_table)),
            objects: Arc::new(SupabaseStorage::new(client, &config.profiles_bucket)),
            config,
        }
    }
}

impl<A, P, O> App<A, P, O>
where
    A: AuthService,
    P: ProfileStore,
    O: ObjectStore,
{
    pub fn new(config: Config, auth: Arc<A>, profiles: Arc<P>, objects: Arc<O>) -> Self {
        Self {
            config,
            auth,
            profiles,
            objects,
        }
    }

    pub fn login_screen(&self) -> LoginScreen<A> {
        LoginScreen::new(self.auth.clone())
    }

    pub fn register_screen(&self) -> RegisterScreen<A> {
        RegisterScreen::new(self.auth.clone())
    }

    pub fn profile_screen(&self) -> ProfileScreen<A, P, O> {
        ProfileScreen::new(
            self.auth.clone(),
            self.profiles.clone(),
            self.objects.clone(),
        )
    }
}
