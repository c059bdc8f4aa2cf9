// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin account and session mutations.

use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema::{admins, sessions};
use crate::error::StoreError;
use crate::{now_utc_iso, sqlite};

/// Creates a new admin account with a bcrypt-hashed password.
///
/// # Errors
///
/// Returns an error if the account cannot be created, the login name
/// already exists, or the password cannot be hashed.
pub fn create_admin(
    conn: &mut SqliteConnection,
    login_name: &str,
    display_name: &str,
    password: &str,
) -> Result<i64, StoreError> {
    info!(login_name, display_name, "Creating admin account");

    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| StoreError::Other(format!("Failed to hash password: {e}")))?;

    diesel::insert_into(admins::table)
        .values((
            admins::login_name.eq(login_name),
            admins::display_name.eq(display_name),
            admins::password_hash.eq(&password_hash),
        ))
        .execute(conn)?;

    let admin_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(admin_id, "Admin account created");

    Ok(admin_id)
}

/// Updates the last-login timestamp for an admin.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_last_login(conn: &mut SqliteConnection, admin_id: i64) -> Result<(), StoreError> {
    let now: String = now_utc_iso()?;
    diesel::update(admins::table.find(admin_id))
        .set(admins::last_login_at.eq(now))
        .execute(conn)?;
    Ok(())
}

/// Enables or disables an admin account.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_admin_disabled(
    conn: &mut SqliteConnection,
    admin_id: i64,
    disabled: bool,
) -> Result<(), StoreError> {
    diesel::update(admins::table.find(admin_id))
        .set(admins::is_disabled.eq(i32::from(disabled)))
        .execute(conn)?;
    info!(admin_id, disabled, "Admin disabled flag updated");
    Ok(())
}

/// Creates a session for an admin.
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    admin_id: i64,
    expires_at: &str,
) -> Result<(), StoreError> {
    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::admin_id.eq(admin_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    info!(admin_id, "Session created");
    Ok(())
}

/// Bumps the last-activity timestamp of a session.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), StoreError> {
    let now: String = now_utc_iso()?;
    diesel::update(sessions::table.find(session_id))
        .set(sessions::last_activity_at.eq(now))
        .execute(conn)?;
    Ok(())
}

/// Deletes a session by its token.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(conn: &mut SqliteConnection, session_token: &str) -> Result<(), StoreError> {
    diesel::delete(sessions::table.filter(sessions::session_token.eq(session_token)))
        .execute(conn)?;
    Ok(())
}
