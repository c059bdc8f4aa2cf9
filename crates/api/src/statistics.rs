// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Statistics aggregation.
//!
//! Every computation here is a pure in-memory reduction over the three
//! already-fetched projection sets. The caller issues exactly three
//! concurrent fetches bounded by the period's window start; nothing in
//! this module goes back to storage, regardless of period length.

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

use maru_domain::{BookingStatus, RefundStatus, StatsPeriod, VenueType};
use maru_persistence::{ReservationStatRow, SettlementStatRow, SiteVisitStatRow};

use crate::error::ApiError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// TODO: derive the *Change summary fields from the preceding period
// instead of the placeholder values the dashboard currently expects.
const RESERVATIONS_CHANGE: i64 = 12;
const SITE_VISITS_CHANGE: i64 = 8;
const SETTLEMENTS_CHANGE: i64 = 5;
const CONVERSION_CHANGE: i64 = 3;

/// One labeled period bucket of reservation counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCount {
    /// Bucket display label (`M/D` for weekly, `N월` otherwise).
    pub label: String,
    /// Reservations submitted inside the bucket.
    pub count: usize,
}

/// Reservation count for one venue-type category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueTypeCount {
    /// The venue-type tag.
    #[serde(rename = "type")]
    pub venue_type: String,
    /// Reservations in the category.
    pub count: usize,
}

/// Record count for one status of a kind's enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// The storage status tag.
    pub status: String,
    /// The Korean display label.
    pub status_label: String,
    /// Records currently in the status.
    pub count: usize,
}

/// Status distributions per record kind, each covering the kind's full
/// enum in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistribution {
    pub reservations: Vec<StatusCount>,
    pub site_visits: Vec<StatusCount>,
    pub settlements: Vec<StatusCount>,
}

/// Dashboard summary figures for the selected window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub total_reservations: usize,
    pub total_site_visits: usize,
    pub total_settlements: usize,
    /// `round(100 × confirmed site visits / total site visits)`, zero
    /// when no visits exist.
    pub conversion_rate: i64,
    pub reservations_change: i64,
    pub site_visits_change: i64,
    pub settlements_change: i64,
    pub conversion_change: i64,
}

/// The full statistics payload for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsData {
    pub summary: StatisticsSummary,
    pub reservations_by_period: Vec<PeriodCount>,
    pub venue_type_distribution: Vec<VenueTypeCount>,
    pub status_distribution: StatusDistribution,
}

/// Global totals for one record kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindStats {
    /// All records of the kind.
    pub total: usize,
    /// Records still pending (refund-pending for settlements).
    pub pending: usize,
    /// Records submitted within the trailing 30 days.
    pub recent: usize,
}

/// Global dashboard totals across the three record kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub reservations: KindStats,
    pub site_visits: KindStats,
    pub settlements: KindStats,
}

fn internal(message: String) -> ApiError {
    ApiError::Internal { message }
}

fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value, &Iso8601::DEFAULT).ok()
}

/// Shifts a calendar (year, month) pair by a signed month delta.
fn shift_months(year: i32, month: Month, delta: i32) -> (i32, Month) {
    let zero_based: i32 = year * 12 + i32::from(u8::from(month)) - 1 + delta;
    let shifted_year: i32 = zero_based.div_euclid(12);
    let shifted_month: Month = u8::try_from(zero_based.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .unwrap_or(Month::January);
    (shifted_year, shifted_month)
}

fn window_start(period: StatsPeriod, now: OffsetDateTime) -> Result<Date, ApiError> {
    match period {
        StatsPeriod::Weekly => Ok((now - Duration::days(7)).date()),
        StatsPeriod::Yearly => Date::from_calendar_date(now.year(), Month::January, 1)
            .map_err(|e| internal(format!("Failed to derive window start: {e}"))),
        StatsPeriod::Monthly => {
            let (year, month) = shift_months(now.year(), now.month(), -5);
            Date::from_calendar_date(year, month, 1)
                .map_err(|e| internal(format!("Failed to derive window start: {e}")))
        }
    }
}

/// Derives the fetch bound (`YYYY-MM-DD`) for a statistics period.
///
/// # Errors
///
/// Returns an error if the window start cannot be derived or formatted.
pub fn window_start_string(period: StatsPeriod, now: OffsetDateTime) -> Result<String, ApiError> {
    window_start(period, now)?
        .format(DATE_FORMAT)
        .map_err(|e| internal(format!("Failed to format window start: {e}")))
}

/// Derives the inclusive first/last day (`YYYY-MM-DD`) of the current
/// calendar month, for the monthly schedule view.
///
/// # Errors
///
/// Returns an error if the bounds cannot be derived or formatted.
pub fn current_month_bounds(now: OffsetDateTime) -> Result<(String, String), ApiError> {
    let first: Date = Date::from_calendar_date(now.year(), now.month(), 1)
        .map_err(|e| internal(format!("Failed to derive month bounds: {e}")))?;
    let last: Date = Date::from_calendar_date(
        now.year(),
        now.month(),
        now.month().length(now.year()),
    )
    .map_err(|e| internal(format!("Failed to derive month bounds: {e}")))?;

    let first_str: String = first
        .format(DATE_FORMAT)
        .map_err(|e| internal(format!("Failed to format month bounds: {e}")))?;
    let last_str: String = last
        .format(DATE_FORMAT)
        .map_err(|e| internal(format!("Failed to format month bounds: {e}")))?;

    Ok((first_str, last_str))
}

/// Rounded integer percentage of `part` in `total`, zero when `total`
/// is zero. Rounds half away from zero like the dashboard expects.
fn rounded_percentage(part: usize, total: usize) -> i64 {
    if total == 0 {
        0
    } else {
        i64::try_from((part * 200 + total) / (2 * total)).unwrap_or(0)
    }
}

/// Buckets reservation submission times by the period's boundary rule:
/// 24-hour windows for weekly, month index for yearly, and (year,
/// month) equality for monthly.
fn reservations_by_period(
    period: StatsPeriod,
    now: OffsetDateTime,
    times: &[Option<OffsetDateTime>],
) -> Vec<PeriodCount> {
    match period {
        StatsPeriod::Weekly => {
            let start: OffsetDateTime = now - Duration::days(7);
            (0..7)
                .map(|i| {
                    let day_start: OffsetDateTime = start + Duration::days(i);
                    let day_end: OffsetDateTime = day_start + Duration::days(1);
                    PeriodCount {
                        label: format!("{}/{}", u8::from(day_start.month()), day_start.day()),
                        count: times
                            .iter()
                            .flatten()
                            .filter(|t| **t >= day_start && **t < day_end)
                            .count(),
                    }
                })
                .collect()
        }
        StatsPeriod::Yearly => (1..=12)
            .map(|month| PeriodCount {
                label: format!("{month}월"),
                count: times
                    .iter()
                    .flatten()
                    .filter(|t| u8::from(t.month()) == month)
                    .count(),
            })
            .collect(),
        StatsPeriod::Monthly => (0..6)
            .map(|i| {
                let (year, month) = shift_months(now.year(), now.month(), i - 5);
                PeriodCount {
                    label: format!("{}월", u8::from(month)),
                    count: times
                        .iter()
                        .flatten()
                        .filter(|t| t.year() == year && t.month() == month)
                        .count(),
                }
            })
            .collect(),
    }
}

/// Reduces the three fetched projection sets into the statistics
/// payload for the selected period.
///
/// # Errors
///
/// Returns an error if the period window cannot be derived.
pub fn compute_statistics(
    period: StatsPeriod,
    now: OffsetDateTime,
    reservations: &[ReservationStatRow],
    site_visits: &[SiteVisitStatRow],
    settlements: &[SettlementStatRow],
) -> Result<StatisticsData, ApiError> {
    let reservation_times: Vec<Option<OffsetDateTime>> = reservations
        .iter()
        .map(|r| parse_timestamp(&r.submitted_at))
        .collect();

    let by_period: Vec<PeriodCount> = reservations_by_period(period, now, &reservation_times);

    let venue_type_distribution: Vec<VenueTypeCount> = VenueType::ALL
        .iter()
        .map(|venue_type| VenueTypeCount {
            venue_type: venue_type.as_str().to_string(),
            count: reservations
                .iter()
                .filter(|r| r.venue_type.as_deref() == Some(venue_type.as_str()))
                .count(),
        })
        .collect();

    let status_distribution: StatusDistribution = StatusDistribution {
        reservations: BookingStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.as_str().to_string(),
                status_label: status.label().to_string(),
                count: reservations
                    .iter()
                    .filter(|r| r.status == status.as_str())
                    .count(),
            })
            .collect(),
        site_visits: BookingStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.as_str().to_string(),
                status_label: status.label().to_string(),
                count: site_visits
                    .iter()
                    .filter(|v| v.status == status.as_str())
                    .count(),
            })
            .collect(),
        settlements: RefundStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.as_str().to_string(),
                status_label: status.label().to_string(),
                count: settlements
                    .iter()
                    .filter(|s| s.refund_status == status.as_str())
                    .count(),
            })
            .collect(),
    };

    let confirmed_visits: usize = site_visits
        .iter()
        .filter(|v| v.status == BookingStatus::Confirmed.as_str())
        .count();

    let summary: StatisticsSummary = StatisticsSummary {
        total_reservations: reservations.len(),
        total_site_visits: site_visits.len(),
        total_settlements: settlements.len(),
        conversion_rate: rounded_percentage(confirmed_visits, site_visits.len()),
        reservations_change: RESERVATIONS_CHANGE,
        site_visits_change: SITE_VISITS_CHANGE,
        settlements_change: SETTLEMENTS_CHANGE,
        conversion_change: CONVERSION_CHANGE,
    };

    Ok(StatisticsData {
        summary,
        reservations_by_period: by_period,
        venue_type_distribution,
        status_distribution,
    })
}

/// Reduces three full-table projection fetches into the global
/// dashboard totals: per kind, the total count, pending count, and the
/// count submitted within the trailing 30 days.
#[must_use]
pub fn compute_dashboard_stats(
    now: OffsetDateTime,
    reservations: &[ReservationStatRow],
    site_visits: &[SiteVisitStatRow],
    settlements: &[SettlementStatRow],
) -> DashboardStats {
    let cutoff: OffsetDateTime = now - Duration::days(30);
    let is_recent = |submitted_at: &str| parse_timestamp(submitted_at).is_some_and(|t| t >= cutoff);
    let pending: &str = BookingStatus::Pending.as_str();

    DashboardStats {
        reservations: KindStats {
            total: reservations.len(),
            pending: reservations.iter().filter(|r| r.status == pending).count(),
            recent: reservations
                .iter()
                .filter(|r| is_recent(&r.submitted_at))
                .count(),
        },
        site_visits: KindStats {
            total: site_visits.len(),
            pending: site_visits.iter().filter(|v| v.status == pending).count(),
            recent: site_visits
                .iter()
                .filter(|v| is_recent(&v.submitted_at))
                .count(),
        },
        settlements: KindStats {
            total: settlements.len(),
            pending: settlements
                .iter()
                .filter(|s| s.refund_status == RefundStatus::Pending.as_str())
                .count(),
            recent: settlements
                .iter()
                .filter(|s| is_recent(&s.submitted_at))
                .count(),
        },
    }
}
