// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication types and services.

use time::{Duration, OffsetDateTime};

use maru_persistence::{AdminData, SessionData, Store};

use crate::error::ApiError;

/// A verified admin identity.
///
/// Obtained by validating a bearer token; every admin operation is
/// keyed by this identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    /// The admin account ID.
    pub admin_id: i64,
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
}

impl AdminIdentity {
    fn from_admin(admin: &AdminData) -> Self {
        Self {
            admin_id: admin.admin_id,
            login_name: admin.login_name.clone(),
            display_name: admin.display_name.clone(),
        }
    }
}

/// Session-based authentication for the admin surface.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session expiration duration (30 days).
    const SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Authenticates an admin by login name and password and creates a
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an authentication error for unknown accounts, wrong
    /// passwords, and disabled accounts; the message does not reveal
    /// which of the first two failed.
    pub fn login(
        store: &mut Store,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AdminIdentity), ApiError> {
        let admin: AdminData = store
            .get_admin_by_login(login_name)?
            .ok_or_else(|| ApiError::AuthenticationFailed {
                message: String::from("아이디 또는 비밀번호가 올바르지 않습니다."),
            })?;

        if admin.is_disabled {
            return Err(ApiError::AuthenticationFailed {
                message: String::from("비활성화된 계정입니다."),
            });
        }

        if !store.verify_password(admin.admin_id, password)? {
            return Err(ApiError::AuthenticationFailed {
                message: String::from("아이디 또는 비밀번호가 올바르지 않습니다."),
            });
        }

        let session_token: String = Self::generate_session_token();
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + Self::SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to format expiration time: {e}"),
            })?;

        store.create_session(&session_token, admin.admin_id, &expires_at_str)?;
        store.update_last_login(admin.admin_id)?;

        Ok((session_token, AdminIdentity::from_admin(&admin)))
    }

    /// Validates a bearer token and returns the verified identity.
    ///
    /// # Errors
    ///
    /// Returns an authentication error for unknown tokens, expired
    /// sessions, and disabled or deleted accounts. The failure is
    /// terminal; it is never retried.
    pub fn verify_token(store: &mut Store, session_token: &str) -> Result<AdminIdentity, ApiError> {
        let invalid = || ApiError::AuthenticationFailed {
            message: String::from("유효하지 않은 토큰입니다."),
        };

        let session: SessionData = store
            .get_session_by_token(session_token)?
            .ok_or_else(invalid)?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|_| invalid())?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(invalid());
        }

        let admin: AdminData = store.get_admin_by_id(session.admin_id)?.ok_or_else(invalid)?;

        if admin.is_disabled {
            return Err(invalid());
        }

        store.update_session_activity(session.session_id)?;

        Ok(AdminIdentity::from_admin(&admin))
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn logout(store: &mut Store, session_token: &str) -> Result<(), ApiError> {
        store.delete_session(session_token)?;
        Ok(())
    }

    /// Generates an opaque session token.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }
}
