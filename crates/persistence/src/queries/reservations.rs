// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::{
    ListFilter, ReservationRecord, ReservationStatRow, ReservationSummary, ScheduleEntry,
};
use crate::diesel_schema::reservations;
use crate::error::StoreError;

/// Diesel Queryable struct for full reservation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(Sqlite))]
pub(crate) struct ReservationRow {
    reservation_id: i64,
    name: String,
    organization: Option<String>,
    phone: String,
    rental_date: String,
    start_time: String,
    end_time: String,
    rental_hours: f64,
    num_performers: i32,
    description: Option<String>,
    referral_sources: String,
    venue_type: Option<String>,
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
    status: String,
    submitted_at: String,
}

pub(crate) fn row_to_record(row: ReservationRow) -> Result<ReservationRecord, StoreError> {
    Ok(ReservationRecord {
        id: row.reservation_id,
        name: row.name,
        organization: row.organization,
        phone: row.phone,
        rental_date: row.rental_date,
        start_time: row.start_time,
        end_time: row.end_time,
        rental_hours: row.rental_hours,
        num_performers: row.num_performers,
        description: row.description,
        referral_sources: serde_json::from_str(&row.referral_sources)?,
        venue_type: row.venue_type,
        opt_extra_capacity: row.opt_extra_capacity != 0,
        opt_multitrack: row.opt_multitrack != 0,
        opt_personal_monitor: row.opt_personal_monitor != 0,
        opt_extra_operator: row.opt_extra_operator != 0,
        opt_extra_operator_hours: row.opt_extra_operator_hours,
        opt_bar_operation: row.opt_bar_operation != 0,
        opt_prompter: row.opt_prompter != 0,
        opt_tax_invoice: row.opt_tax_invoice != 0,
        additional_price: row.additional_price,
        total_price: row.total_price,
        status: row.status,
        submitted_at: row.submitted_at,
    })
}

/// Applies the admin list filters to a boxed reservation query.
///
/// The free-text search is OR-combined over name, organization, and
/// phone; date bounds are inclusive on the rental date.
fn filtered(filter: &ListFilter) -> reservations::BoxedQuery<'static, Sqlite> {
    let mut query = reservations::table.into_boxed();

    if let Some(term) = &filter.search {
        let pattern: String = format!("%{term}%");
        query = query.filter(
            reservations::name
                .like(pattern.clone())
                .nullable()
                .or(reservations::organization.like(pattern.clone()))
                .or(reservations::phone.like(pattern).nullable()),
        );
    }
    if let Some(start_date) = &filter.start_date {
        query = query.filter(reservations::rental_date.ge(start_date.clone()));
    }
    if let Some(end_date) = &filter.end_date {
        query = query.filter(reservations::rental_date.le(end_date.clone()));
    }
    if let Some(status) = &filter.status {
        query = query.filter(reservations::status.eq(status.clone()));
    }

    query
}

/// Lists reservations matching the filter, newest submissions first,
/// together with the total match count before pagination.
///
/// # Errors
///
/// Returns an error if a database query fails or a stored JSON column
/// cannot be decoded.
pub fn list_reservations(
    conn: &mut SqliteConnection,
    filter: &ListFilter,
) -> Result<(Vec<ReservationRecord>, i64), StoreError> {
    debug!(?filter, "Listing reservations");

    let total: i64 = filtered(filter).count().get_result(conn)?;

    let rows: Vec<ReservationRow> = filtered(filter)
        .select(ReservationRow::as_select())
        .order(reservations::submitted_at.desc())
        .offset(filter.offset)
        .limit(filter.limit)
        .load(conn)?;

    let records: Vec<ReservationRecord> = rows
        .into_iter()
        .map(row_to_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((records, total))
}

/// Retrieves a single reservation by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// no reservation has the given ID.
pub fn get_reservation(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<ReservationRecord>, StoreError> {
    let row: Option<ReservationRow> = reservations::table
        .find(id)
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?;

    row.map(row_to_record).transpose()
}

/// Searches reservations by free text over name, organization, and
/// phone, newest first, bounded by `limit`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_reservations(
    conn: &mut SqliteConnection,
    term: &str,
    limit: i64,
) -> Result<Vec<ReservationSummary>, StoreError> {
    let pattern: String = format!("%{term}%");

    let rows: Vec<(
        i64,
        String,
        Option<String>,
        String,
        String,
        Option<String>,
        String,
        String,
    )> = reservations::table
        .filter(
            reservations::name
                .like(pattern.clone())
                .nullable()
                .or(reservations::organization.like(pattern.clone()))
                .or(reservations::phone.like(pattern).nullable()),
        )
        .order(reservations::submitted_at.desc())
        .limit(limit)
        .select((
            reservations::reservation_id,
            reservations::name,
            reservations::organization,
            reservations::phone,
            reservations::rental_date,
            reservations::venue_type,
            reservations::status,
            reservations::submitted_at,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, name, organization, phone, rental_date, venue_type, status, submitted_at)| {
                ReservationSummary {
                    id,
                    name,
                    organization,
                    phone,
                    rental_date,
                    venue_type,
                    status,
                    submitted_at,
                }
            },
        )
        .collect())
}

/// Fetches the statistics projection (status, venue type, submission
/// time) for reservations submitted on or after `since`, or for the
/// whole table when `since` is `None`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn reservation_stats(
    conn: &mut SqliteConnection,
    since: Option<&str>,
) -> Result<Vec<ReservationStatRow>, StoreError> {
    let mut query = reservations::table.into_boxed();
    if let Some(since) = since {
        query = query.filter(reservations::submitted_at.ge(since.to_string()));
    }

    let rows: Vec<(String, Option<String>, String)> = query
        .select((
            reservations::status,
            reservations::venue_type,
            reservations::submitted_at,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(status, venue_type, submitted_at)| ReservationStatRow {
            status,
            venue_type,
            submitted_at,
        })
        .collect())
}

/// Lists confirmed reservations whose rental date falls inside the
/// inclusive `[first_day, last_day]` range, ascending by date.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn monthly_schedule(
    conn: &mut SqliteConnection,
    first_day: &str,
    last_day: &str,
) -> Result<Vec<ScheduleEntry>, StoreError> {
    let rows: Vec<(
        i64,
        String,
        Option<String>,
        String,
        Option<String>,
        String,
        String,
        String,
    )> = reservations::table
        .filter(reservations::status.eq("confirmed"))
        .filter(reservations::rental_date.ge(first_day.to_string()))
        .filter(reservations::rental_date.le(last_day.to_string()))
        .order(reservations::rental_date.asc())
        .select((
            reservations::reservation_id,
            reservations::name,
            reservations::organization,
            reservations::rental_date,
            reservations::venue_type,
            reservations::start_time,
            reservations::end_time,
            reservations::status,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, name, organization, rental_date, venue_type, start_time, end_time, status)| {
                ScheduleEntry {
                    id,
                    name,
                    organization,
                    rental_date,
                    venue_type,
                    start_time,
                    end_time,
                    status,
                }
            },
        )
        .collect())
}
