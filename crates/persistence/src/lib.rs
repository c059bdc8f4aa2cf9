// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Maru venue-rental backend.
//!
//! Built on Diesel over `SQLite`. The [`Store`] adapter owns the
//! connection and exposes the filter/sort/paginate/insert/update
//! primitives the API layer composes; queries live in `queries/` and
//! mutations in `mutations/`, both using Diesel DSL only.
//!
//! In-memory databases receive a unique shared-cache name per call so
//! tests are isolated without time-based collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{
    AdminData, AdminSettingsRecord, ListFilter, NewReservation, NewSettlement, NewSiteVisit,
    ReservationRecord, ReservationStatRow, ReservationSummary, ScheduleEntry, SessionData,
    SettlementRecord, SettlementStatRow, SettlementSummary, SiteVisitRecord, SiteVisitStatRow,
    SiteVisitSummary,
};
pub use error::StoreError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Formats the current UTC time as an ISO-8601 string, the storage
/// representation for every timestamp column.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub(crate) fn now_utc_iso() -> Result<String, StoreError> {
    OffsetDateTime::now_utc()
        .format(&Iso8601::DEFAULT)
        .map_err(|e| StoreError::Other(format!("Failed to format timestamp: {e}")))
}

/// Persistence adapter for all record kinds.
pub struct Store {
    conn: SqliteConnection,
}

impl Store {
    /// Creates a store backed by an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, StoreError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:maru_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path_str: &str = path
            .as_ref()
            .to_str()
            .ok_or_else(|| StoreError::InitializationError("Invalid database path".to_string()))?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Reservations
    // ========================================================================

    /// Inserts a reservation and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the read-back fails.
    pub fn insert_reservation(
        &mut self,
        new: &NewReservation,
    ) -> Result<ReservationRecord, StoreError> {
        let id: i64 = mutations::reservations::insert_reservation(&mut self.conn, new)?;
        queries::reservations::get_reservation(&mut self.conn, id)?
            .ok_or_else(|| StoreError::Other(String::from("Reservation missing after insert")))
    }

    /// Lists reservations matching the filter with the total match count.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations(
        &mut self,
        filter: &ListFilter,
    ) -> Result<(Vec<ReservationRecord>, i64), StoreError> {
        queries::reservations::list_reservations(&mut self.conn, filter)
    }

    /// Retrieves a reservation by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` when the
    /// ID has no matching record.
    pub fn get_reservation(&mut self, id: i64) -> Result<Option<ReservationRecord>, StoreError> {
        queries::reservations::get_reservation(&mut self.conn, id)
    }

    /// Updates a reservation's status and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails. Returns `Ok(None)` when the
    /// ID has no matching record.
    pub fn update_reservation_status(
        &mut self,
        id: i64,
        status: &str,
    ) -> Result<Option<ReservationRecord>, StoreError> {
        if mutations::reservations::update_reservation_status(&mut self.conn, id, status)? {
            queries::reservations::get_reservation(&mut self.conn, id)
        } else {
            Ok(None)
        }
    }

    /// Searches reservations by free text, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_reservations(
        &mut self,
        term: &str,
        limit: i64,
    ) -> Result<Vec<ReservationSummary>, StoreError> {
        queries::reservations::search_reservations(&mut self.conn, term, limit)
    }

    /// Fetches the reservation statistics projection, optionally bounded
    /// by a submission-time lower bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservation_stats(
        &mut self,
        since: Option<&str>,
    ) -> Result<Vec<ReservationStatRow>, StoreError> {
        queries::reservations::reservation_stats(&mut self.conn, since)
    }

    /// Lists confirmed reservations inside an inclusive rental-date
    /// range, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn monthly_schedule(
        &mut self,
        first_day: &str,
        last_day: &str,
    ) -> Result<Vec<ScheduleEntry>, StoreError> {
        queries::reservations::monthly_schedule(&mut self.conn, first_day, last_day)
    }

    // ========================================================================
    // Site visits
    // ========================================================================

    /// Inserts a site visit and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the read-back fails.
    pub fn insert_site_visit(&mut self, new: &NewSiteVisit) -> Result<SiteVisitRecord, StoreError> {
        let id: i64 = mutations::site_visits::insert_site_visit(&mut self.conn, new)?;
        queries::site_visits::get_site_visit(&mut self.conn, id)?
            .ok_or_else(|| StoreError::Other(String::from("Site visit missing after insert")))
    }

    /// Lists site visits matching the filter with the total match count.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_site_visits(
        &mut self,
        filter: &ListFilter,
    ) -> Result<(Vec<SiteVisitRecord>, i64), StoreError> {
        queries::site_visits::list_site_visits(&mut self.conn, filter)
    }

    /// Retrieves a site visit by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` when the
    /// ID has no matching record.
    pub fn get_site_visit(&mut self, id: i64) -> Result<Option<SiteVisitRecord>, StoreError> {
        queries::site_visits::get_site_visit(&mut self.conn, id)
    }

    /// Updates a site visit's status and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails. Returns `Ok(None)` when the
    /// ID has no matching record.
    pub fn update_site_visit_status(
        &mut self,
        id: i64,
        status: &str,
    ) -> Result<Option<SiteVisitRecord>, StoreError> {
        if mutations::site_visits::update_site_visit_status(&mut self.conn, id, status)? {
            queries::site_visits::get_site_visit(&mut self.conn, id)
        } else {
            Ok(None)
        }
    }

    /// Searches site visits by free text, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_site_visits(
        &mut self,
        term: &str,
        limit: i64,
    ) -> Result<Vec<SiteVisitSummary>, StoreError> {
        queries::site_visits::search_site_visits(&mut self.conn, term, limit)
    }

    /// Fetches the site-visit statistics projection, optionally bounded
    /// by a submission-time lower bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn site_visit_stats(
        &mut self,
        since: Option<&str>,
    ) -> Result<Vec<SiteVisitStatRow>, StoreError> {
        queries::site_visits::site_visit_stats(&mut self.conn, since)
    }

    // ========================================================================
    // Settlements
    // ========================================================================

    /// Inserts a settlement and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the read-back fails.
    pub fn insert_settlement(
        &mut self,
        new: &NewSettlement,
    ) -> Result<SettlementRecord, StoreError> {
        let id: i64 = mutations::settlements::insert_settlement(&mut self.conn, new)?;
        queries::settlements::get_settlement(&mut self.conn, id)?
            .ok_or_else(|| StoreError::Other(String::from("Settlement missing after insert")))
    }

    /// Lists settlements matching the filter with the total match count.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_settlements(
        &mut self,
        filter: &ListFilter,
    ) -> Result<(Vec<SettlementRecord>, i64), StoreError> {
        queries::settlements::list_settlements(&mut self.conn, filter)
    }

    /// Retrieves a settlement by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails. Returns `Ok(None)` when the
    /// ID has no matching record.
    pub fn get_settlement(&mut self, id: i64) -> Result<Option<SettlementRecord>, StoreError> {
        queries::settlements::get_settlement(&mut self.conn, id)
    }

    /// Updates a settlement's refund status and returns the updated
    /// record.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails. Returns `Ok(None)` when the
    /// ID has no matching record.
    pub fn update_settlement_refund_status(
        &mut self,
        id: i64,
        refund_status: &str,
    ) -> Result<Option<SettlementRecord>, StoreError> {
        if mutations::settlements::update_settlement_refund_status(
            &mut self.conn,
            id,
            refund_status,
        )? {
            queries::settlements::get_settlement(&mut self.conn, id)
        } else {
            Ok(None)
        }
    }

    /// Searches settlements by free text, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn search_settlements(
        &mut self,
        term: &str,
        limit: i64,
    ) -> Result<Vec<SettlementSummary>, StoreError> {
        queries::settlements::search_settlements(&mut self.conn, term, limit)
    }

    /// Fetches the settlement statistics projection, optionally bounded
    /// by a submission-time lower bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn settlement_stats(
        &mut self,
        since: Option<&str>,
    ) -> Result<Vec<SettlementStatRow>, StoreError> {
        queries::settlements::settlement_stats(&mut self.conn, since)
    }

    // ========================================================================
    // Admin accounts & sessions
    // ========================================================================

    /// Creates an admin account with a bcrypt-hashed password.
    ///
    /// # Errors
    ///
    /// Returns an error if the account cannot be created.
    pub fn create_admin(
        &mut self,
        login_name: &str,
        display_name: &str,
        password: &str,
    ) -> Result<i64, StoreError> {
        mutations::admins::create_admin(&mut self.conn, login_name, display_name, password)
    }

    /// Retrieves an admin account by login name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_admin_by_login(&mut self, login_name: &str) -> Result<Option<AdminData>, StoreError> {
        queries::admins::get_admin_by_login(&mut self.conn, login_name)
    }

    /// Retrieves an admin account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_admin_by_id(&mut self, admin_id: i64) -> Result<Option<AdminData>, StoreError> {
        queries::admins::get_admin_by_id(&mut self.conn, admin_id)
    }

    /// Verifies an admin's password against the stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the admin does not exist.
    pub fn verify_password(&mut self, admin_id: i64, password: &str) -> Result<bool, StoreError> {
        queries::admins::verify_password(&mut self.conn, admin_id, password)
    }

    /// Updates the last-login timestamp for an admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&mut self, admin_id: i64) -> Result<(), StoreError> {
        mutations::admins::update_last_login(&mut self.conn, admin_id)
    }

    /// Enables or disables an admin account.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_admin_disabled(&mut self, admin_id: i64, disabled: bool) -> Result<(), StoreError> {
        mutations::admins::set_admin_disabled(&mut self.conn, admin_id, disabled)
    }

    /// Creates a session for an admin.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        admin_id: i64,
        expires_at: &str,
    ) -> Result<(), StoreError> {
        mutations::admins::create_session(&mut self.conn, session_token, admin_id, expires_at)
    }

    /// Retrieves a session by its token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, StoreError> {
        queries::admins::get_session_by_token(&mut self.conn, session_token)
    }

    /// Bumps the last-activity timestamp of a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), StoreError> {
        mutations::admins::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by its token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), StoreError> {
        mutations::admins::delete_session(&mut self.conn, session_token)
    }

    // ========================================================================
    // Admin settings
    // ========================================================================

    /// Retrieves the stored settings for an admin, or `None` if the
    /// admin has never saved any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_admin_settings(
        &mut self,
        admin_id: i64,
    ) -> Result<Option<AdminSettingsRecord>, StoreError> {
        queries::settings::get_admin_settings(&mut self.conn, admin_id)
    }

    /// Upserts the settings row for an admin, keyed by identity.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_admin_settings(
        &mut self,
        admin_id: i64,
        settings: &AdminSettingsRecord,
    ) -> Result<AdminSettingsRecord, StoreError> {
        mutations::settings::upsert_admin_settings(&mut self.conn, admin_id, settings)
    }
}
