// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Supabase PostgREST).

pub mod postgrest;

pub use postgrest::ProfileTable;

use crate::error::Result;
use crate::models::{Profile, ProfileUpsert, Session};

/// Columns read back by profile fetches.
pub const PROFILE_COLUMNS: &str = "nome,descricao,foto";

/// Profile record storage, keyed by account ID.
#[trait_variant::make(ProfileStore: Send)]
pub trait LocalProfileStore {
    /// Fetch the signed-in user's profile. `None` when no row exists yet.
    async fn fetch(&self, session: &Session) -> Result<Option<Profile>>;

    /// Insert or wholly replace the row with `row.id`.
    async fn upsert(&self, session: &Session, row: &ProfileUpsert) -> Result<()>;
}
