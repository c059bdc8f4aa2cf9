// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Settlement mutations.

use diesel::prelude::*;
use tracing::info;

use crate::data_models::NewSettlement;
use crate::diesel_schema::settlements;
use crate::error::StoreError;
use crate::sqlite;

/// Diesel Insertable struct for settlement rows.
#[derive(Insertable)]
#[diesel(table_name = settlements)]
struct NewSettlementRow<'a> {
    name: &'a str,
    rental_date: &'a str,
    bank_name: &'a str,
    account_holder: &'a str,
    account_number: &'a str,
    rating: i32,
    good_points: Option<&'a str>,
    improvements: Option<&'a str>,
    media_urls: String,
    instagram_consent: i32,
    instagram_request: Option<&'a str>,
    submitted_at: &'a str,
}

/// Inserts a settlement and returns its assigned ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_settlement(
    conn: &mut SqliteConnection,
    new: &NewSettlement,
) -> Result<i64, StoreError> {
    let row: NewSettlementRow<'_> = NewSettlementRow {
        name: &new.name,
        rental_date: &new.rental_date,
        bank_name: &new.bank_name,
        account_holder: &new.account_holder,
        account_number: &new.account_number,
        rating: new.rating,
        good_points: new.good_points.as_deref(),
        improvements: new.improvements.as_deref(),
        media_urls: String::from("[]"),
        instagram_consent: i32::from(new.instagram_consent),
        instagram_request: new.instagram_request.as_deref(),
        submitted_at: &new.submitted_at,
    };

    diesel::insert_into(settlements::table)
        .values(&row)
        .execute(conn)?;

    let settlement_id: i64 = sqlite::get_last_insert_rowid(conn)?;
    info!(settlement_id, "Settlement inserted");

    Ok(settlement_id)
}

/// Updates the refund status of a settlement.
///
/// # Errors
///
/// Returns an error if the update fails. Returns `Ok(false)` when no
/// settlement has the given ID.
pub fn update_settlement_refund_status(
    conn: &mut SqliteConnection,
    id: i64,
    refund_status: &str,
) -> Result<bool, StoreError> {
    let updated: usize = diesel::update(settlements::table.find(id))
        .set(settlements::refund_status.eq(refund_status))
        .execute(conn)?;

    if updated > 0 {
        info!(
            settlement_id = id,
            refund_status, "Settlement refund status updated"
        );
    }

    Ok(updated > 0)
}
