// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin account and session queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::{AdminData, SessionData};
use crate::diesel_schema::{admins, sessions};
use crate::error::StoreError;

/// Diesel Queryable struct for admin rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admins)]
#[diesel(check_for_backend(Sqlite))]
struct AdminRow {
    admin_id: i64,
    login_name: String,
    display_name: String,
    password_hash: String,
    is_disabled: i32,
    created_at: String,
    last_login_at: Option<String>,
}

impl AdminRow {
    fn into_data(self) -> AdminData {
        AdminData {
            admin_id: self.admin_id,
            login_name: self.login_name,
            display_name: self.display_name,
            is_disabled: self.is_disabled != 0,
            created_at: self.created_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(Sqlite))]
struct SessionRow {
    session_id: i64,
    session_token: String,
    admin_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

/// Retrieves an admin account by login name (case-insensitive).
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// no account matches.
pub fn get_admin_by_login(
    conn: &mut SqliteConnection,
    login_name: &str,
) -> Result<Option<AdminData>, StoreError> {
    debug!("Looking up admin by login_name: {}", login_name);

    let row: Option<AdminRow> = admins::table
        .filter(admins::login_name.eq(login_name))
        .select(AdminRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AdminRow::into_data))
}

/// Retrieves an admin account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// no account matches.
pub fn get_admin_by_id(
    conn: &mut SqliteConnection,
    admin_id: i64,
) -> Result<Option<AdminData>, StoreError> {
    let row: Option<AdminRow> = admins::table
        .find(admin_id)
        .select(AdminRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(AdminRow::into_data))
}

/// Verifies a password against the stored bcrypt hash for an admin.
///
/// # Errors
///
/// Returns an error if the database query fails, the admin does not
/// exist, or the hash cannot be checked.
pub fn verify_password(
    conn: &mut SqliteConnection,
    admin_id: i64,
    password: &str,
) -> Result<bool, StoreError> {
    let password_hash: String = admins::table
        .find(admin_id)
        .select(admins::password_hash)
        .first(conn)?;

    bcrypt::verify(password, &password_hash)
        .map_err(|e| StoreError::Other(format!("Failed to verify password: {e}")))
}

/// Retrieves a session by its token.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// no session matches.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, StoreError> {
    let row: Option<SessionRow> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| SessionData {
        session_id: row.session_id,
        session_token: row.session_token,
        admin_id: row.admin_id,
        created_at: row.created_at,
        last_activity_at: row.last_activity_at,
        expires_at: row.expires_at,
    }))
}
