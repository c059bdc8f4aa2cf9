// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the admin list endpoints.
///
/// `status` filters reservations and site visits; `refundStatus`
/// filters settlements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    /// Free-text search over the kind's text columns.
    pub search: Option<String>,
    /// Inclusive lower bound on the rental date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive upper bound on the rental date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// Exact status match for reservations and site visits.
    pub status: Option<String>,
    /// Exact refund-status match for settlements.
    pub refund_status: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<i64>,
    /// Page size (default 20).
    pub limit: Option<i64>,
}

/// Pagination metadata returned alongside list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// The 1-based page number.
    pub page: i64,
    /// The page size.
    pub limit: i64,
    /// Total records matching the filter.
    pub total: i64,
    /// Total page count: `ceil(total / limit)`.
    pub total_pages: i64,
}

impl Pagination {
    /// Builds pagination metadata for a page window.
    #[must_use]
    pub const fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        }
    }
}

/// A successful submission with its created-record projection and the
/// confirmation message shown to the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome<T> {
    /// The minimal created-record projection.
    pub record: T,
    /// The Korean confirmation message.
    pub message: String,
}

/// Created-record projection for reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationCreated {
    /// The assigned record ID.
    pub id: i64,
    /// The derived total price.
    pub total_price: i64,
    /// The server-assigned submission timestamp.
    pub submitted_at: String,
}

/// Created-record projection for site visits and settlements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCreated {
    /// The assigned record ID.
    pub id: i64,
    /// The server-assigned submission timestamp.
    pub submitted_at: String,
}

/// Request body for admin login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// The admin login name.
    pub login_name: String,
    /// The plain-text password, verified against the stored hash.
    pub password: String,
}

/// Response for a successful admin login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The bearer token for subsequent admin requests.
    pub token: String,
    /// The admin display name.
    pub display_name: String,
}

/// Request body for updating admin settings. Field names follow the
/// stored columns; absent fields reset to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsUpdateRequest {
    /// Notification phone number; empty disables SMS notifications.
    pub phone_number: Option<String>,
    /// Notify on new reservations (default true).
    pub notification_reservation: Option<bool>,
    /// Notify on new site visits (default true).
    pub notification_site_visit: Option<bool>,
    /// Notify on new settlements (default true).
    pub notification_settlement: Option<bool>,
}
