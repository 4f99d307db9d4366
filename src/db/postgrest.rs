// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PostgREST access to the profiles table.

use crate::db::{ProfileStore, PROFILE_COLUMNS};
use crate::error::AppError;
use crate::models::{Profile, ProfileUpsert, Session};
use crate::services::supabase::{check_response, check_response_json, SupabaseClient};
use reqwest::{Method, StatusCode};

/// Media type asking PostgREST for exactly one row as a bare object.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Profiles table client.
#[derive(Clone)]
pub struct ProfileTable {
    client: SupabaseClient,
    table: String,
}

impl ProfileTable {
    pub fn new(client: SupabaseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    fn table_path(&self) -> String {
        format!("/rest/v1/{}", urlencoding::encode(&self.table))
    }
}

impl ProfileStore for ProfileTable {
    async fn fetch(&self, session: &Session) -> Result<Option<Profile>, AppError> {
        let id_filter = format!("eq.{}", session.user_id());
        let response = self
            .client
            .request_as(Method::GET, &self.table_path(), session)
            .query(&[("select", PROFILE_COLUMNS), ("id", id_filter.as_str())])
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT)
            .send()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        // Zero rows under the single-object media type
        if response.status() == StatusCode::NOT_ACCEPTABLE {
            tracing::debug!(user_id = %session.user_id(), "No profile row yet");
            return Ok(None);
        }

        check_response_json(response, AppError::Database)
            .await
            .map(Some)
    }

    async fn upsert(&self, session: &Session, row: &ProfileUpsert) -> Result<(), AppError> {
        let response = self
            .client
            .request_as(Method::POST, &self.table_path(), session)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        check_response(response, AppError::Database).await?;
        tracing::info!(user_id = %row.id, "Profile row upserted");
        Ok(())
    }
}
