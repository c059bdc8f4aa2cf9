// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the admin surface.
//!
//! Provides an Axum extractor that validates the `Authorization:
//! Bearer <token>` header against the session store and hands the
//! verified admin identity to the handler.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use maru_api::{AdminIdentity, ApiError, AuthenticationService};

use crate::AppState;

/// Extractor for authenticated admins.
///
/// Authentication flow:
/// 1. Extract the `Authorization: Bearer <token>` header
/// 2. Validate the session token against the store
/// 3. Reject expired sessions and disabled accounts
pub struct SessionAdmin(pub AdminIdentity);

impl FromRequestParts<AppState> for SessionAdmin {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let mut store = state.store.lock().await;
        let identity = AuthenticationService::verify_token(&mut store, token).map_err(|e| {
            warn!(error = %e, "Session validation failed");
            match e {
                ApiError::AuthenticationFailed { message } => SessionError::InvalidSession(message),
                _ => SessionError::VerificationError,
            }
        })?;
        drop(store);

        debug!(login_name = %identity.login_name, "Session validated");

        Ok(Self(identity))
    }
}

/// Session extraction errors, rendered in the standard response
/// envelope with HTTP 401.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// The session token was rejected.
    InvalidSession(String),
    /// Verification failed for a non-authentication reason.
    VerificationError,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingAuthorizationHeader | Self::InvalidAuthorizationHeader => {
                String::from("인증이 필요합니다.")
            }
            Self::InvalidSession(message) => message,
            Self::VerificationError => String::from("인증에 실패했습니다."),
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "errors": [message] })),
        )
            .into_response()
    }
}
