// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin query services: listing, fetching, status updates, the
//! cross-entity search term handling, and per-admin settings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

use maru_domain::{BookingStatus, RefundStatus, is_valid_phone};
use maru_persistence::{
    AdminSettingsRecord, ListFilter, ReservationRecord, ReservationSummary, SettlementRecord,
    SettlementSummary, SiteVisitRecord, SiteVisitSummary, Store,
};

use crate::error::ApiError;
use crate::request_response::{ListQuery, Pagination, SettingsUpdateRequest};

/// Default page size for admin list endpoints.
const DEFAULT_PAGE_SIZE: i64 = 20;

/// Default per-kind row bound for the cross-entity search.
pub const SEARCH_DEFAULT_LIMIT: i64 = 10;

/// Per-kind result sets of the cross-entity search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Matching reservations, newest first.
    pub reservations: Vec<ReservationSummary>,
    /// Matching site visits, newest first.
    pub site_visits: Vec<SiteVisitSummary>,
    /// Matching settlements, newest first.
    pub settlements: Vec<SettlementSummary>,
}

/// Builds the storage filter from the list query, applying page-window
/// defaults. `status` picks the given status column value.
fn build_filter(query: &ListQuery, status: Option<&String>) -> (ListFilter, i64, i64) {
    let page: i64 = query.page.unwrap_or(1).max(1);
    let limit: i64 = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);

    let filter = ListFilter {
        search: query.search.clone().filter(|s| !s.is_empty()),
        start_date: query.start_date.clone().filter(|s| !s.is_empty()),
        end_date: query.end_date.clone().filter(|s| !s.is_empty()),
        status: status.cloned().filter(|s| !s.is_empty()),
        offset: (page - 1) * limit,
        limit,
    };

    (filter, page, limit)
}

/// Lists reservations with search/date/status filters and pagination.
///
/// # Errors
///
/// Returns an error if the storage query fails.
pub fn list_reservations(
    store: &mut Store,
    query: &ListQuery,
) -> Result<(Vec<ReservationRecord>, Pagination), ApiError> {
    let (filter, page, limit) = build_filter(query, query.status.as_ref());
    let (records, total) = store.list_reservations(&filter)?;
    Ok((records, Pagination::new(page, limit, total)))
}

/// Retrieves one reservation.
///
/// # Errors
///
/// Returns `NotFound` if no reservation has the given ID.
pub fn get_reservation(store: &mut Store, id: i64) -> Result<ReservationRecord, ApiError> {
    store.get_reservation(id)?.ok_or_else(|| ApiError::NotFound {
        message: String::from("예약을 찾을 수 없습니다."),
    })
}

/// Updates a reservation's status after parsing it through the closed
/// status enum; invalid values are rejected before touching storage.
///
/// # Errors
///
/// Returns `InvalidInput` for a value outside the enum and `NotFound`
/// if no reservation has the given ID.
pub fn update_reservation_status(
    store: &mut Store,
    id: i64,
    status: &str,
) -> Result<ReservationRecord, ApiError> {
    let status: BookingStatus =
        BookingStatus::from_str(status).map_err(|_| ApiError::InvalidInput {
            message: String::from("유효하지 않은 상태입니다."),
        })?;

    info!(reservation_id = id, status = %status, "Updating reservation status");

    store
        .update_reservation_status(id, status.as_str())?
        .ok_or_else(|| ApiError::NotFound {
            message: String::from("예약을 찾을 수 없습니다."),
        })
}

/// Lists site visits with search/date/status filters and pagination.
///
/// # Errors
///
/// Returns an error if the storage query fails.
pub fn list_site_visits(
    store: &mut Store,
    query: &ListQuery,
) -> Result<(Vec<SiteVisitRecord>, Pagination), ApiError> {
    let (filter, page, limit) = build_filter(query, query.status.as_ref());
    let (records, total) = store.list_site_visits(&filter)?;
    Ok((records, Pagination::new(page, limit, total)))
}

/// Retrieves one site visit.
///
/// # Errors
///
/// Returns `NotFound` if no site visit has the given ID.
pub fn get_site_visit(store: &mut Store, id: i64) -> Result<SiteVisitRecord, ApiError> {
    store.get_site_visit(id)?.ok_or_else(|| ApiError::NotFound {
        message: String::from("답사 예약을 찾을 수 없습니다."),
    })
}

/// Updates a site visit's status.
///
/// # Errors
///
/// Returns `InvalidInput` for a value outside the enum and `NotFound`
/// if no site visit has the given ID.
pub fn update_site_visit_status(
    store: &mut Store,
    id: i64,
    status: &str,
) -> Result<SiteVisitRecord, ApiError> {
    let status: BookingStatus =
        BookingStatus::from_str(status).map_err(|_| ApiError::InvalidInput {
            message: String::from("유효하지 않은 상태입니다."),
        })?;

    info!(visit_id = id, status = %status, "Updating site visit status");

    store
        .update_site_visit_status(id, status.as_str())?
        .ok_or_else(|| ApiError::NotFound {
            message: String::from("답사 예약을 찾을 수 없습니다."),
        })
}

/// Lists settlements with search/date/refund-status filters and
/// pagination.
///
/// # Errors
///
/// Returns an error if the storage query fails.
pub fn list_settlements(
    store: &mut Store,
    query: &ListQuery,
) -> Result<(Vec<SettlementRecord>, Pagination), ApiError> {
    let (filter, page, limit) = build_filter(query, query.refund_status.as_ref());
    let (records, total) = store.list_settlements(&filter)?;
    Ok((records, Pagination::new(page, limit, total)))
}

/// Retrieves one settlement.
///
/// # Errors
///
/// Returns `NotFound` if no settlement has the given ID.
pub fn get_settlement(store: &mut Store, id: i64) -> Result<SettlementRecord, ApiError> {
    store.get_settlement(id)?.ok_or_else(|| ApiError::NotFound {
        message: String::from("정산 요청을 찾을 수 없습니다."),
    })
}

/// Updates a settlement's refund status.
///
/// # Errors
///
/// Returns `InvalidInput` for a value outside the enum and `NotFound`
/// if no settlement has the given ID.
pub fn update_settlement_refund_status(
    store: &mut Store,
    id: i64,
    refund_status: &str,
) -> Result<SettlementRecord, ApiError> {
    let refund_status: RefundStatus =
        RefundStatus::from_str(refund_status).map_err(|_| ApiError::InvalidInput {
            message: String::from("유효하지 않은 상태입니다."),
        })?;

    info!(
        settlement_id = id,
        refund_status = %refund_status,
        "Updating settlement refund status"
    );

    store
        .update_settlement_refund_status(id, refund_status.as_str())?
        .ok_or_else(|| ApiError::NotFound {
            message: String::from("정산 요청을 찾을 수 없습니다."),
        })
}

/// Normalizes the cross-entity search term.
///
/// Returns `None` for terms under two characters after trimming; the
/// caller then short-circuits to empty results without issuing any
/// query.
#[must_use]
pub fn normalize_search_term(query: &str) -> Option<String> {
    let trimmed: &str = query.trim();
    if trimmed.chars().count() < 2 {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Fetches an admin's settings, or the defaults when none are stored.
///
/// # Errors
///
/// Returns an error if the storage query fails.
pub fn get_settings(store: &mut Store, admin_id: i64) -> Result<AdminSettingsRecord, ApiError> {
    Ok(store.get_admin_settings(admin_id)?.unwrap_or_default())
}

/// Validates and upserts an admin's settings.
///
/// A non-empty phone number must match the Korean mobile pattern;
/// absent fields reset to their defaults (empty phone, notifications
/// on).
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed phone number (nothing is
/// written) or an internal error when the write fails.
pub fn update_settings(
    store: &mut Store,
    admin_id: i64,
    request: &SettingsUpdateRequest,
) -> Result<AdminSettingsRecord, ApiError> {
    if let Some(phone) = request.phone_number.as_deref() {
        if !phone.is_empty() && !is_valid_phone(phone) {
            return Err(ApiError::InvalidInput {
                message: String::from("유효하지 않은 전화번호 형식입니다."),
            });
        }
    }

    let settings: AdminSettingsRecord = AdminSettingsRecord {
        phone_number: request.phone_number.clone().unwrap_or_default(),
        notification_reservation: request.notification_reservation.unwrap_or(true),
        notification_site_visit: request.notification_site_visit.unwrap_or(true),
        notification_settlement: request.notification_settlement.unwrap_or(true),
        updated_at: None,
    };

    info!(admin_id, "Updating admin settings");
    Ok(store.upsert_admin_settings(admin_id, &settings)?)
}
