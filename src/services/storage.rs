// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase Storage client for profile photos.

use crate::error::AppError;
use crate::models::Session;
use crate::services::supabase::{check_response, SupabaseClient};
use crate::services::ObjectStore;
use reqwest::Method;

/// Object store backed by one Supabase Storage bucket.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn object_path(&self, key: &str) -> String {
        format!(
            "/storage/v1/object/{}/{}",
            urlencoding::encode(&self.bucket),
            urlencoding::encode(key)
        )
    }
}

impl ObjectStore for SupabaseStorage {
    async fn upload(
        &self,
        session: &Session,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), AppError> {
        let size = bytes.len();
        let response = self
            .client
            .request_as(Method::POST, &self.object_path(key), session)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        check_response(response, AppError::Storage).await?;
        tracing::info!(bucket = %self.bucket, key, size, "Object uploaded");
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.client.base_url(),
            urlencoding::encode(&self.bucket),
            urlencoding::encode(key)
        )
    }
}
