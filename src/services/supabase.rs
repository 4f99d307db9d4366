// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared HTTP plumbing for the Supabase REST APIs.
//!
//! Every request carries the project's anon key in `apikey`. The bearer token
//! is the anon key unless a user session is attached, in which case row-level
//! security sees the signed-in user.

use crate::config::Config;
use crate::error::AppError;
use crate::models::Session;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Deserialize;

/// Low-level Supabase client shared by the auth, database and storage services.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the project URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request authorized with the anon key only.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Request authorized as the session's user.
    pub fn request_as(&self, method: Method, path: &str, session: &Session) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
    }
}

/// Error body shapes returned by GoTrue, PostgREST and Storage.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl ServiceErrorBody {
    /// Human-readable message, preferring the most specific field present.
    pub(crate) fn into_message(self) -> Option<String> {
        let error = self.error.and_then(|v| match v {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        });
        [self.msg, self.error_description, self.message, error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

/// Extract the service-reported message from an error response body.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(ServiceErrorBody::into_message)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// Check response status and map a failure through `to_error`.
pub(crate) async fn check_response(
    response: reqwest::Response,
    to_error: fn(String) -> AppError,
) -> Result<reqwest::Response, AppError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    tracing::debug!(status = %status, message = %message, "Supabase request failed");

    Err(to_error(message))
}

/// Check response and parse JSON body.
pub(crate) async fn check_response_json<T: for<'de> Deserialize<'de>>(
    response: reqwest::Response,
    to_error: fn(String) -> AppError,
) -> Result<T, AppError> {
    let response = check_response(response, to_error).await?;
    response
        .json()
        .await
        .map_err(|e| to_error(format!("JSON parse error: {}", e)))
}
