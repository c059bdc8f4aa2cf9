// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Settlement queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::{ListFilter, SettlementRecord, SettlementStatRow, SettlementSummary};
use crate::diesel_schema::settlements;
use crate::error::StoreError;

/// Diesel Queryable struct for full settlement rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = settlements)]
#[diesel(check_for_backend(Sqlite))]
pub(crate) struct SettlementRow {
    settlement_id: i64,
    name: String,
    rental_date: String,
    bank_name: String,
    account_holder: String,
    account_number: String,
    rating: i32,
    good_points: Option<String>,
    improvements: Option<String>,
    media_urls: String,
    instagram_consent: i32,
    instagram_request: Option<String>,
    refund_status: String,
    submitted_at: String,
}

pub(crate) fn row_to_record(row: SettlementRow) -> Result<SettlementRecord, StoreError> {
    Ok(SettlementRecord {
        id: row.settlement_id,
        name: row.name,
        rental_date: row.rental_date,
        bank_name: row.bank_name,
        account_holder: row.account_holder,
        account_number: row.account_number,
        rating: row.rating,
        good_points: row.good_points,
        improvements: row.improvements,
        media_urls: serde_json::from_str(&row.media_urls)?,
        instagram_consent: row.instagram_consent != 0,
        instagram_request: row.instagram_request,
        refund_status: row.refund_status,
        submitted_at: row.submitted_at,
    })
}

fn filtered(filter: &ListFilter) -> settlements::BoxedQuery<'static, Sqlite> {
    let mut query = settlements::table.into_boxed();

    if let Some(term) = &filter.search {
        let pattern: String = format!("%{term}%");
        query = query.filter(
            settlements::name
                .like(pattern.clone())
                .or(settlements::bank_name.like(pattern)),
        );
    }
    if let Some(start_date) = &filter.start_date {
        query = query.filter(settlements::rental_date.ge(start_date.clone()));
    }
    if let Some(end_date) = &filter.end_date {
        query = query.filter(settlements::rental_date.le(end_date.clone()));
    }
    if let Some(status) = &filter.status {
        query = query.filter(settlements::refund_status.eq(status.clone()));
    }

    query
}

/// Lists settlements matching the filter, newest submissions first,
/// together with the total match count before pagination.
///
/// # Errors
///
/// Returns an error if a database query fails or a stored JSON column
/// cannot be decoded.
pub fn list_settlements(
    conn: &mut SqliteConnection,
    filter: &ListFilter,
) -> Result<(Vec<SettlementRecord>, i64), StoreError> {
    debug!(?filter, "Listing settlements");

    let total: i64 = filtered(filter).count().get_result(conn)?;

    let rows: Vec<SettlementRow> = filtered(filter)
        .select(SettlementRow::as_select())
        .order(settlements::submitted_at.desc())
        .offset(filter.offset)
        .limit(filter.limit)
        .load(conn)?;

    let records: Vec<SettlementRecord> = rows
        .into_iter()
        .map(row_to_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((records, total))
}

/// Retrieves a single settlement by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// no settlement has the given ID.
pub fn get_settlement(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<SettlementRecord>, StoreError> {
    let row: Option<SettlementRow> = settlements::table
        .find(id)
        .select(SettlementRow::as_select())
        .first(conn)
        .optional()?;

    row.map(row_to_record).transpose()
}

/// Searches settlements by free text over name and bank name, newest
/// first, bounded by `limit`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_settlements(
    conn: &mut SqliteConnection,
    term: &str,
    limit: i64,
) -> Result<Vec<SettlementSummary>, StoreError> {
    let pattern: String = format!("%{term}%");

    let rows: Vec<(i64, String, String, String, String, String, String)> = settlements::table
        .filter(
            settlements::name
                .like(pattern.clone())
                .or(settlements::bank_name.like(pattern)),
        )
        .order(settlements::submitted_at.desc())
        .limit(limit)
        .select((
            settlements::settlement_id,
            settlements::name,
            settlements::rental_date,
            settlements::bank_name,
            settlements::account_number,
            settlements::refund_status,
            settlements::submitted_at,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, name, rental_date, bank_name, account_number, refund_status, submitted_at)| {
                SettlementSummary {
                    id,
                    name,
                    rental_date,
                    bank_name,
                    account_number,
                    refund_status,
                    submitted_at,
                }
            },
        )
        .collect())
}

/// Fetches the statistics projection (refund status, submission time)
/// for settlements submitted on or after `since`, or for the whole
/// table when `since` is `None`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn settlement_stats(
    conn: &mut SqliteConnection,
    since: Option<&str>,
) -> Result<Vec<SettlementStatRow>, StoreError> {
    let mut query = settlements::table.into_boxed();
    if let Some(since) = since {
        query = query.filter(settlements::submitted_at.ge(since.to_string()));
    }

    let rows: Vec<(String, String)> = query
        .select((settlements::refund_status, settlements::submitted_at))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(refund_status, submitted_at)| SettlementStatRow {
            refund_status,
            submitted_at,
        })
        .collect())
}
