// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

/// Avatar shown when a profile has no photo yet.
pub const DEFAULT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/847/847969.png";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL, without trailing slash
    pub supabase_url: String,
    /// Supabase anonymous (public) API key
    pub supabase_anon_key: String,
    /// Table holding profile records
    pub profiles_table: String,
    /// Storage bucket holding profile photos
    pub profiles_bucket: String,
    /// Where the current session is persisted between runs (optional)
    pub session_file: Option<PathBuf>,
    /// Image shown for profiles without a photo
    pub default_avatar_url: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let supabase_url = env::var("SUPABASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .map_err(|_| ConfigError::Missing("SUPABASE_URL"))?;
        if supabase_url.is_empty() {
            return Err(ConfigError::Missing("SUPABASE_URL"));
        }

        Ok(Self {
            supabase_url,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            profiles_table: env::var("PROFILES_TABLE").unwrap_or_else(|_| "profiles".to_string()),
            profiles_bucket: env::var("PROFILES_BUCKET")
                .unwrap_or_else(|_| "profiles".to_string()),
            session_file: env::var("SESSION_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            default_avatar_url: env::var("DEFAULT_AVATAR_URL")
                .unwrap_or_else(|_| DEFAULT_AVATAR_URL.to_string()),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        })
    }

    /// Config pointing at a local Supabase stack, for tests only.
    pub fn test_default() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            profiles_table: "profiles".to_string(),
            profiles_bucket: "profiles".to_string(),
            session_file: None,
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
