// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Site-visit queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::{ListFilter, SiteVisitRecord, SiteVisitStatRow, SiteVisitSummary};
use crate::diesel_schema::site_visits;
use crate::error::StoreError;

/// Diesel Queryable struct for full site-visit rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = site_visits)]
#[diesel(check_for_backend(Sqlite))]
pub(crate) struct SiteVisitRow {
    visit_id: i64,
    name: String,
    organization: Option<String>,
    phone: String,
    rental_date: String,
    start_time: String,
    end_time: String,
    purposes: String,
    purpose_detail: String,
    has_rental: i32,
    status: String,
    submitted_at: String,
}

pub(crate) fn row_to_record(row: SiteVisitRow) -> Result<SiteVisitRecord, StoreError> {
    Ok(SiteVisitRecord {
        id: row.visit_id,
        name: row.name,
        organization: row.organization,
        phone: row.phone,
        rental_date: row.rental_date,
        start_time: row.start_time,
        end_time: row.end_time,
        purposes: serde_json::from_str(&row.purposes)?,
        purpose_detail: row.purpose_detail,
        has_rental: row.has_rental != 0,
        status: row.status,
        submitted_at: row.submitted_at,
    })
}

fn filtered(filter: &ListFilter) -> site_visits::BoxedQuery<'static, Sqlite> {
    let mut query = site_visits::table.into_boxed();

    if let Some(term) = &filter.search {
        let pattern: String = format!("%{term}%");
        query = query.filter(
            site_visits::name
                .like(pattern.clone())
                .nullable()
                .or(site_visits::organization.like(pattern.clone()))
                .or(site_visits::phone.like(pattern).nullable()),
        );
    }
    if let Some(start_date) = &filter.start_date {
        query = query.filter(site_visits::rental_date.ge(start_date.clone()));
    }
    if let Some(end_date) = &filter.end_date {
        query = query.filter(site_visits::rental_date.le(end_date.clone()));
    }
    if let Some(status) = &filter.status {
        query = query.filter(site_visits::status.eq(status.clone()));
    }

    query
}

/// Lists site visits matching the filter, newest submissions first,
/// together with the total match count before pagination.
///
/// # Errors
///
/// Returns an error if a database query fails or a stored JSON column
/// cannot be decoded.
pub fn list_site_visits(
    conn: &mut SqliteConnection,
    filter: &ListFilter,
) -> Result<(Vec<SiteVisitRecord>, i64), StoreError> {
    debug!(?filter, "Listing site visits");

    let total: i64 = filtered(filter).count().get_result(conn)?;

    let rows: Vec<SiteVisitRow> = filtered(filter)
        .select(SiteVisitRow::as_select())
        .order(site_visits::submitted_at.desc())
        .offset(filter.offset)
        .limit(filter.limit)
        .load(conn)?;

    let records: Vec<SiteVisitRecord> = rows
        .into_iter()
        .map(row_to_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((records, total))
}

/// Retrieves a single site visit by ID.
///
/// # Errors
///
/// Returns an error if the database query fails. Returns `Ok(None)` if
/// no site visit has the given ID.
pub fn get_site_visit(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<SiteVisitRecord>, StoreError> {
    let row: Option<SiteVisitRow> = site_visits::table
        .find(id)
        .select(SiteVisitRow::as_select())
        .first(conn)
        .optional()?;

    row.map(row_to_record).transpose()
}

/// Searches site visits by free text over name, organization, and
/// phone, newest first, bounded by `limit`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_site_visits(
    conn: &mut SqliteConnection,
    term: &str,
    limit: i64,
) -> Result<Vec<SiteVisitSummary>, StoreError> {
    let pattern: String = format!("%{term}%");

    let rows: Vec<(
        i64,
        String,
        Option<String>,
        String,
        String,
        i32,
        String,
        String,
    )> = site_visits::table
        .filter(
            site_visits::name
                .like(pattern.clone())
                .nullable()
                .or(site_visits::organization.like(pattern.clone()))
                .or(site_visits::phone.like(pattern).nullable()),
        )
        .order(site_visits::submitted_at.desc())
        .limit(limit)
        .select((
            site_visits::visit_id,
            site_visits::name,
            site_visits::organization,
            site_visits::phone,
            site_visits::rental_date,
            site_visits::has_rental,
            site_visits::status,
            site_visits::submitted_at,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, name, organization, phone, rental_date, has_rental, status, submitted_at)| {
                SiteVisitSummary {
                    id,
                    name,
                    organization,
                    phone,
                    rental_date,
                    has_rental: has_rental != 0,
                    status,
                    submitted_at,
                }
            },
        )
        .collect())
}

/// Fetches the statistics projection (status, submission time) for site
/// visits submitted on or after `since`, or for the whole table when
/// `since` is `None`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn site_visit_stats(
    conn: &mut SqliteConnection,
    since: Option<&str>,
) -> Result<Vec<SiteVisitStatRow>, StoreError> {
    let mut query = site_visits::table.into_boxed();
    if let Some(since) = since {
        query = query.filter(site_visits::submitted_at.ge(since.to_string()));
    }

    let rows: Vec<(String, String)> = query
        .select((site_visits::status, site_visits::submitted_at))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(status, submitted_at)| SiteVisitStatRow {
            status,
            submitted_at,
        })
        .collect())
}
