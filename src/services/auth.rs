// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase Auth (GoTrue) client.
//!
//! Handles:
//! - Account creation and password sign-in
//! - Keeping the current session, refreshing it shortly before expiry
//! - Validating the session against the server on lookup
//! - Sign-out (local session is always dropped)

use crate::error::AppError;
use crate::models::{AuthUser, Credentials, Session};
use crate::services::session_store::SessionStore;
use crate::services::supabase::{check_response, check_response_json, SupabaseClient};
use crate::services::AuthService;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

/// Refresh the access token when it expires within this margin (1 minute).
const SESSION_REFRESH_MARGIN_SECS: i64 = 60;

/// Session lifetime assumed when the server reports neither expiry field.
const DEFAULT_SESSION_LIFETIME_SECS: i64 = 3600;

/// Auth service backed by Supabase GoTrue.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: SupabaseClient,
    store: Arc<SessionStore>,
}

impl SupabaseAuth {
    pub fn new(client: SupabaseClient, store: Arc<SessionStore>) -> Self {
        Self { client, store }
    }

    /// The session store this client reads and writes.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Exchange a refresh token for a new session.
    ///
    /// Returns `Ok(None)` when the server rejects the refresh token (400/401/403).
    /// Any other failure, such as rate limiting, is an error and keeps the session.
    async fn refresh(&self, refresh_token: &str) -> Result<Option<Session>, AppError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "refresh_token")])
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Session refresh request failed: {}", e)))?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            tracing::info!(status = %status, "Refresh token rejected");
            return Ok(None);
        }

        let tokens: TokenResponse = check_response_json(response, AppError::Auth).await?;
        Ok(Some(tokens.into_session(Utc::now())))
    }

    /// Fetch the account behind a session's access token.
    async fn get_user(&self, session: &Session) -> Result<AuthUser, AppError> {
        let response = self
            .client
            .request_as(Method::GET, "/auth/v1/user", session)
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Err(AppError::Unauthorized);
        }

        check_response_json(response, AppError::Auth).await
    }
}

impl AuthService for SupabaseAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<(), AppError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/signup")
            .json(credentials)
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        check_response(response, AppError::Auth).await?;
        tracing::info!(email = %credentials.email, "Account created, confirmation pending");
        Ok(())
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AppError> {
        let response = self
            .client
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(credentials)
            .send()
            .await
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let tokens: TokenResponse = check_response_json(response, AppError::Auth).await?;
        let session = tokens.into_session(Utc::now());
        self.store.set(session.clone()).await;

        tracing::info!(user_id = %session.user.id, "Signed in");
        Ok(session)
    }

    async fn current_session(&self) -> Result<Option<Session>, AppError> {
        let Some(mut session) = self.store.get().await else {
            return Ok(None);
        };

        if session.expires_within(Utc::now(), Duration::seconds(SESSION_REFRESH_MARGIN_SECS)) {
            tracing::debug!(user_id = %session.user.id, "Access token expiring, refreshing");
            match self.refresh(&session.refresh_token).await? {
                Some(fresh) => {
                    self.store.set(fresh.clone()).await;
                    session = fresh;
                }
                None => {
                    self.store.clear().await;
                    return Ok(None);
                }
            }
        }

        match self.get_user(&session).await {
            Ok(user) => {
                if session.user != user {
                    session.user = user;
                    self.store.set(session.clone()).await;
                }
                Ok(Some(session))
            }
            Err(e) if e.is_session_rejected() => {
                tracing::info!(user_id = %session.user.id, "Session rejected by server");
                self.store.clear().await;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        let session = self.store.get().await;
        self.store.clear().await;

        let Some(session) = session else {
            return Ok(());
        };

        let response = self
            .client
            .request_as(Method::POST, "/auth/v1/logout", &session)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Sign-out request failed: {}", e)))?;

        check_response(response, AppError::Auth).await?;
        tracing::info!(user_id = %session.user.id, "Signed out");
        Ok(())
    }
}

/// Token grant response from GoTrue.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl TokenResponse {
    /// Build a session, preferring the absolute expiry when the server sends one.
    pub fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(|| {
                now + Duration::seconds(self.expires_in.unwrap_or(DEFAULT_SESSION_LIFETIME_SECS))
            });

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_json(expires_at: Option<i64>) -> String {
        serde_json::json!({
            "access_token": "at",
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": expires_at,
            "refresh_token": "rt",
            "user": {"id": "u1", "email": "a@x.com", "aud": "authenticated"}
        })
        .to_string()
    }

    #[test]
    fn absolute_expiry_wins() {
        let tokens: TokenResponse = serde_json::from_str(&token_json(Some(1_700_000_000))).unwrap();
        let session = tokens.into_session(Utc::now());
        assert_eq!(session.expires_at.timestamp(), 1_700_000_000);
        assert_eq!(session.user_id(), "u1");
    }

    #[test]
    fn relative_expiry_fallback() {
        let now = Utc::now();
        let tokens: TokenResponse = serde_json::from_str(&token_json(None)).unwrap();
        let session = tokens.into_session(now);
        assert_eq!(session.expires_at, now + Duration::seconds(3600));
    }
}
