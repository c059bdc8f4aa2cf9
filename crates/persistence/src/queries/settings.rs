// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin settings queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::data_models::AdminSettingsRecord;
use crate::diesel_schema::admin_settings;
use crate::error::StoreError;

/// Diesel Queryable struct for the settings columns the record carries.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admin_settings)]
#[diesel(check_for_backend(Sqlite))]
pub(crate) struct SettingsRow {
    phone_number: String,
    notification_reservation: i32,
    notification_site_visit: i32,
    notification_settlement: i32,
    updated_at: String,
}

impl SettingsRow {
    pub(crate) fn into_record(self) -> AdminSettingsRecord {
        AdminSettingsRecord {
            phone_number: self.phone_number,
            notification_reservation: self.notification_reservation != 0,
            notification_site_visit: self.notification_site_visit != 0,
            notification_settlement: self.notification_settlement != 0,
            updated_at: Some(self.updated_at),
        }
    }
}

/// Retrieves the stored settings for an admin.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// the admin has never saved settings.
pub fn get_admin_settings(
    conn: &mut SqliteConnection,
    admin_id: i64,
) -> Result<Option<AdminSettingsRecord>, StoreError> {
    let row: Option<SettingsRow> = admin_settings::table
        .filter(admin_settings::admin_id.eq(admin_id))
        .select(SettingsRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(SettingsRow::into_record))
}
