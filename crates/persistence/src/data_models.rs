// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public record types returned by the store.
//!
//! Field names follow the storage columns so that serialized records
//! match the shape the existing admin clients consume.

use serde::{Deserialize, Serialize};

/// A persisted reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ReservationRecord {
    pub id: i64,
    pub name: String,
    pub organization: Option<String>,
    pub phone: String,
    pub rental_date: String,
    pub start_time: String,
    pub end_time: String,
    pub rental_hours: f64,
    pub num_performers: i32,
    pub description: Option<String>,
    pub referral_sources: Vec<String>,
    pub venue_type: Option<String>,
    pub opt_extra_capacity: bool,
    pub opt_multitrack: bool,
    pub opt_personal_monitor: bool,
    pub opt_extra_operator: bool,
    pub opt_extra_operator_hours: i32,
    pub opt_bar_operation: bool,
    pub opt_prompter: bool,
    pub opt_tax_invoice: bool,
    pub additional_price: i64,
    pub total_price: i64,
    pub status: String,
    pub submitted_at: String,
}

/// Input for inserting a reservation. All derived fields are already
/// computed and all strings already normalized by the caller.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct NewReservation {
    pub name: String,
    pub organization: Option<String>,
    pub phone: String,
    pub rental_date: String,
    pub start_time: String,
    pub end_time: String,
    pub rental_hours: f64,
    pub num_performers: i32,
    pub description: Option<String>,
    pub referral_sources: Vec<String>,
    pub venue_type: Option<String>,
    pub opt_extra_capacity: bool,
    pub opt_multitrack: bool,
    pub opt_personal_monitor: bool,
    pub opt_extra_operator: bool,
    pub opt_extra_operator_hours: i32,
    pub opt_bar_operation: bool,
    pub opt_prompter: bool,
    pub opt_tax_invoice: bool,
    pub additional_price: i64,
    pub total_price: i64,
    pub submitted_at: String,
}

/// A persisted site visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteVisitRecord {
    pub id: i64,
    pub name: String,
    pub organization: Option<String>,
    pub phone: String,
    pub rental_date: String,
    pub start_time: String,
    pub end_time: String,
    pub purposes: Vec<String>,
    pub purpose_detail: String,
    pub has_rental: bool,
    pub status: String,
    pub submitted_at: String,
}

/// Input for inserting a site visit.
#[derive(Debug, Clone)]
pub struct NewSiteVisit {
    pub name: String,
    pub organization: Option<String>,
    pub phone: String,
    pub rental_date: String,
    pub start_time: String,
    pub end_time: String,
    pub purposes: Vec<String>,
    pub purpose_detail: String,
    pub has_rental: bool,
    pub submitted_at: String,
}

/// A persisted settlement (refund) request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRecord {
    pub id: i64,
    pub name: String,
    pub rental_date: String,
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub rating: i32,
    pub good_points: Option<String>,
    pub improvements: Option<String>,
    pub media_urls: Vec<String>,
    pub instagram_consent: bool,
    pub instagram_request: Option<String>,
    pub refund_status: String,
    pub submitted_at: String,
}

/// Input for inserting a settlement. `media_urls` is always persisted
/// empty; settlement media is handled by a separate storage flow.
#[derive(Debug, Clone)]
pub struct NewSettlement {
    pub name: String,
    pub rental_date: String,
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub rating: i32,
    pub good_points: Option<String>,
    pub improvements: Option<String>,
    pub instagram_consent: bool,
    pub instagram_request: Option<String>,
    pub submitted_at: String,
}

/// Filter, ordering, and page window for admin list queries.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Case-insensitive substring matched across the kind's text columns.
    pub search: Option<String>,
    /// Inclusive lower bound on the rental date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive upper bound on the rental date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
    /// Exact status match (refund status for settlements).
    pub status: Option<String>,
    /// Row offset of the requested page.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
}

/// Reservation projection returned by the cross-entity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub id: i64,
    pub name: String,
    pub organization: Option<String>,
    pub phone: String,
    pub rental_date: String,
    pub venue_type: Option<String>,
    pub status: String,
    pub submitted_at: String,
}

/// Site-visit projection returned by the cross-entity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteVisitSummary {
    pub id: i64,
    pub name: String,
    pub organization: Option<String>,
    pub phone: String,
    pub rental_date: String,
    pub has_rental: bool,
    pub status: String,
    pub submitted_at: String,
}

/// Settlement projection returned by the cross-entity search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementSummary {
    pub id: i64,
    pub name: String,
    pub rental_date: String,
    pub bank_name: String,
    pub account_number: String,
    pub refund_status: String,
    pub submitted_at: String,
}

/// Reservation projection for statistics aggregation.
#[derive(Debug, Clone)]
pub struct ReservationStatRow {
    pub status: String,
    pub venue_type: Option<String>,
    pub submitted_at: String,
}

/// Site-visit projection for statistics aggregation.
#[derive(Debug, Clone)]
pub struct SiteVisitStatRow {
    pub status: String,
    pub submitted_at: String,
}

/// Settlement projection for statistics aggregation.
#[derive(Debug, Clone)]
pub struct SettlementStatRow {
    pub refund_status: String,
    pub submitted_at: String,
}

/// Confirmed reservation projection for the monthly schedule view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: i64,
    pub name: String,
    pub organization: Option<String>,
    pub rental_date: String,
    pub venue_type: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

/// A stored admin account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminData {
    pub admin_id: i64,
    pub login_name: String,
    pub display_name: String,
    pub is_disabled: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// A stored admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub admin_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Per-admin notification settings.
///
/// `Default` mirrors the values returned when an admin has never saved
/// settings: empty phone number and every notification enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSettingsRecord {
    pub phone_number: String,
    pub notification_reservation: bool,
    pub notification_site_visit: bool,
    pub notification_settlement: bool,
    pub updated_at: Option<String>,
}

impl Default for AdminSettingsRecord {
    fn default() -> Self {
        Self {
            phone_number: String::new(),
            notification_reservation: true,
            notification_site_visit: true,
            notification_settlement: true,
            updated_at: None,
        }
    }
}
