// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation mutations.

use diesel::prelude::*;
use tracing::info;

use crate::data_models::NewReservation;
use crate::diesel_schema::reservations;
use crate::error::StoreError;
use crate::sqlite;

/// Diesel Insertable struct for reservation rows.
#[derive(Insertable)]
#[diesel(table_name = reservations)]
struct NewReservationRow<'a> {
    name: &'a str,
    organization: Option<&'a str>,
    phone: &'a str,
    rental_date: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    rental_hours: f64,
    num_performers: i32,
    description: Option<&'a str>,
    referral_sources: String,
    venue_type: Option<&'a str>,
    opt_extra_capacity: i32,
    opt_multitrack: i32,
    opt_personal_monitor: i32,
    opt_extra_operator: i32,
    opt_extra_operator_hours: i32,
    opt_bar_operation: i32,
    opt_prompter: i32,
    opt_tax_invoice: i32,
    additional_price: i64,
    total_price: i64,
    submitted_at: &'a str,
}

/// Inserts a reservation and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails or the referral list cannot be
/// encoded.
pub fn insert_reservation(
    conn: &mut SqliteConnection,
    new: &NewReservation,
) -> Result<i64, StoreError> {
    let row: NewReservationRow<'_> = NewReservationRow {
        name: &new.name,
        organization: new.organization.as_deref(),
        phone: &new.phone,
        rental_date: &new.rental_date,
        start_time: &new.start_time,
        end_time: &new.end_time,
        rental_hours: new.rental_hours,
        num_performers: new.num_performers,
        description: new.description.as_deref(),
        referral_sources: serde_json::to_string(&new.referral_sources)?,
        venue_type: new.venue_type.as_deref(),
        opt_extra_capacity: i32::from(new.opt_extra_capacity),
        opt_multitrack: i32::from(new.opt_multitrack),
        opt_personal_monitor: i32::from(new.opt_personal_monitor),
        opt_extra_operator: i32::from(new.opt_extra_operator),
        opt_extra_operator_hours: new.opt_extra_operator_hours,
        opt_bar_operation: i32::from(new.opt_bar_operation),
        opt_prompter: i32::from(new.opt_prompter),
        opt_tax_invoice: i32::from(new.opt_tax_invoice),
        additional_price: new.additional_price,
        total_price: new.total_price,
        submitted_at: &new.submitted_at,
    };

    diesel::insert_into(reservations::table)
        .values(&row)
        .execute(conn)?;

    let reservation_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(reservation_id, "Reservation inserted");

    Ok(reservation_id)
}

/// Updates the status of a reservation.
///
/// # Errors
///
/// Returns an error if the update fails. Returns `Ok(false)` when no
/// reservation has the given ID.
pub fn update_reservation_status(
    conn: &mut SqliteConnection,
    id: i64,
    status: &str,
) -> Result<bool, StoreError> {
    let updated: usize = diesel::update(reservations::table.find(id))
        .set(reservations::status.eq(status))
        .execute(conn)?;

    if updated > 0 {
        info!(reservation_id = id, status, "Reservation status updated");
    }

    Ok(updated > 0)
}
