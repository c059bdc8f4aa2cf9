// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin settings mutations.

use diesel::prelude::*;
use tracing::info;

use crate::data_models::AdminSettingsRecord;
use crate::diesel_schema::admin_settings;
use crate::error::StoreError;
use crate::now_utc_iso;
use crate::queries::settings::get_admin_settings;

/// Upserts the settings row for an admin, stamping `updated_at`.
///
/// Creates the row on first write, updates it thereafter, keyed by the
/// admin identity.
///
/// # Errors
///
/// Returns an error if the write fails or the stored row cannot be read
/// back.
pub fn upsert_admin_settings(
    conn: &mut SqliteConnection,
    admin_id: i64,
    settings: &AdminSettingsRecord,
) -> Result<AdminSettingsRecord, StoreError> {
    let now: String = now_utc_iso()?;

    let existing: Option<i64> = admin_settings::table
        .filter(admin_settings::admin_id.eq(admin_id))
        .select(admin_settings::settings_id)
        .first(conn)
        .optional()?;

    if let Some(settings_id) = existing {
        diesel::update(admin_settings::table.find(settings_id))
            .set((
                admin_settings::phone_number.eq(&settings.phone_number),
                admin_settings::notification_reservation
                    .eq(i32::from(settings.notification_reservation)),
                admin_settings::notification_site_visit
                    .eq(i32::from(settings.notification_site_visit)),
                admin_settings::notification_settlement
                    .eq(i32::from(settings.notification_settlement)),
                admin_settings::updated_at.eq(&now),
            ))
            .execute(conn)?;
        info!(admin_id, "Admin settings updated");
    } else {
        diesel::insert_into(admin_settings::table)
            .values((
                admin_settings::admin_id.eq(admin_id),
                admin_settings::phone_number.eq(&settings.phone_number),
                admin_settings::notification_reservation
                    .eq(i32::from(settings.notification_reservation)),
                admin_settings::notification_site_visit
                    .eq(i32::from(settings.notification_site_visit)),
                admin_settings::notification_settlement
                    .eq(i32::from(settings.notification_settlement)),
                admin_settings::updated_at.eq(&now),
            ))
            .execute(conn)?;
        info!(admin_id, "Admin settings created");
    }

    get_admin_settings(conn, admin_id)?
        .ok_or_else(|| StoreError::Other(String::from("Settings row missing after upsert")))
}
