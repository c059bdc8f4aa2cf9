// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Site-visit mutations.

use diesel::prelude::*;
use tracing::info;

use crate::data_models::NewSiteVisit;
use crate::diesel_schema::site_visits;
use crate::error::StoreError;
use crate::sqlite;

/// Diesel Insertable struct for site-visit rows.
#[derive(Insertable)]
#[diesel(table_name = site_visits)]
struct NewSiteVisitRow<'a> {
    name: &'a str,
    organization: Option<&'a str>,
    phone: &'a str,
    rental_date: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    purposes: String,
    purpose_detail: &'a str,
    has_rental: i32,
    submitted_at: &'a str,
}

/// Inserts a site visit and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails or the purposes list cannot be
/// encoded.
pub fn insert_site_visit(
    conn: &mut SqliteConnection,
    new: &NewSiteVisit,
) -> Result<i64, StoreError> {
    let row: NewSiteVisitRow<'_> = NewSiteVisitRow {
        name: &new.name,
        organization: new.organization.as_deref(),
        phone: &new.phone,
        rental_date: &new.rental_date,
        start_time: &new.start_time,
        end_time: &new.end_time,
        purposes: serde_json::to_string(&new.purposes)?,
        purpose_detail: &new.purpose_detail,
        has_rental: i32::from(new.has_rental),
        submitted_at: &new.submitted_at,
    };

    diesel::insert_into(site_visits::table)
        .values(&row)
        .execute(conn)?;

    let visit_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(visit_id, "Site visit inserted");

    Ok(visit_id)
}

/// Updates the status of a site visit.
///
/// # Errors
///
/// Returns an error if the update fails. Returns `Ok(false)` when no
/// site visit has the given ID.
pub fn update_site_visit_status(
    conn: &mut SqliteConnection,
    id: i64,
    status: &str,
) -> Result<bool, StoreError> {
    let updated: usize = diesel::update(site_visits::table.find(id))
        .set(site_visits::status.eq(status))
        .execute(conn)?;

    if updated > 0 {
        info!(visit_id = id, status, "Site visit status updated");
    }

    Ok(updated > 0)
}
