// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod admin;
mod auth;
mod error;
mod request_response;
mod statistics;
mod submission;

#[cfg(test)]
mod tests;

pub use admin::{
    SEARCH_DEFAULT_LIMIT, SearchResults, get_reservation, get_settings, get_settlement,
    get_site_visit, list_reservations, list_settlements, list_site_visits, normalize_search_term,
    update_reservation_status, update_settings, update_settlement_refund_status,
    update_site_visit_status,
};
pub use auth::{AdminIdentity, AuthenticationService};
pub use error::ApiError;
pub use request_response::{
    ListQuery, LoginRequest, LoginResponse, Pagination, ReservationCreated, SettingsUpdateRequest,
    SubmissionCreated, SubmissionOutcome,
};
pub use statistics::{
    DashboardStats, KindStats, PeriodCount, StatisticsData, StatisticsSummary, StatusCount,
    StatusDistribution, VenueTypeCount, compute_dashboard_stats, compute_statistics,
    current_month_bounds, window_start_string,
};
pub use submission::{submit_reservation, submit_settlement, submit_site_visit};
