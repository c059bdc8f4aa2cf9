// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use maru_domain::StatsPeriod;
use maru_persistence::{ReservationStatRow, SettlementStatRow, SiteVisitStatRow};

use crate::tests::helpers::{reservation_stat, settlement_stat, site_visit_stat};
use crate::{
    StatisticsData, compute_dashboard_stats, compute_statistics, current_month_bounds,
    window_start_string,
};

const NOW: OffsetDateTime = datetime!(2026-08-15 12:00:00 UTC);

/// One reservation per month from January through August 2026. The
/// trailing six-month window covers March through August.
fn eight_months_of_reservations() -> Vec<ReservationStatRow> {
    (1..=8)
        .map(|month| {
            reservation_stat(
                "pending",
                Some("performance"),
                &format!("2026-{month:02}-10T09:00:00Z"),
            )
        })
        .collect()
}

#[test]
fn test_window_start_strings() {
    assert_eq!(
        window_start_string(StatsPeriod::Monthly, NOW).expect("derivation should succeed"),
        "2026-03-01"
    );
    assert_eq!(
        window_start_string(StatsPeriod::Yearly, NOW).expect("derivation should succeed"),
        "2026-01-01"
    );
    assert_eq!(
        window_start_string(StatsPeriod::Weekly, NOW).expect("derivation should succeed"),
        "2026-08-08"
    );
}

#[test]
fn test_monthly_window_start_crosses_year_boundary() {
    let now: OffsetDateTime = datetime!(2026-02-15 12:00:00 UTC);
    assert_eq!(
        window_start_string(StatsPeriod::Monthly, now).expect("derivation should succeed"),
        "2025-09-01"
    );
}

#[test]
fn test_monthly_buckets_are_exhaustive_over_the_window() {
    let reservations: Vec<ReservationStatRow> = eight_months_of_reservations();

    let data: StatisticsData =
        compute_statistics(StatsPeriod::Monthly, NOW, &reservations, &[], &[])
            .expect("aggregation should succeed");

    let labels: Vec<&str> = data
        .reservations_by_period
        .iter()
        .map(|b| b.label.as_str())
        .collect();
    assert_eq!(labels, vec!["3월", "4월", "5월", "6월", "7월", "8월"]);

    // Six of the eight records fall inside the trailing six months;
    // January and February land in no bucket.
    let sum: usize = data.reservations_by_period.iter().map(|b| b.count).sum();
    assert_eq!(sum, 6);
    assert!(data.reservations_by_period.iter().all(|b| b.count == 1));
}

#[test]
fn test_weekly_buckets_cover_trailing_seven_days() {
    let reservations: Vec<ReservationStatRow> = vec![
        reservation_stat("pending", None, "2026-08-09T09:00:00Z"),
        reservation_stat("pending", None, "2026-08-09T10:00:00Z"),
        reservation_stat("pending", None, "2026-08-14T23:00:00Z"),
        // Before the window start (2026-08-08T12:00:00Z).
        reservation_stat("pending", None, "2026-08-08T09:00:00Z"),
        // After `now`.
        reservation_stat("pending", None, "2026-08-15T13:00:00Z"),
    ];

    let data: StatisticsData = compute_statistics(StatsPeriod::Weekly, NOW, &reservations, &[], &[])
        .expect("aggregation should succeed");

    assert_eq!(data.reservations_by_period.len(), 7);
    assert_eq!(data.reservations_by_period[0].label, "8/8");
    assert_eq!(data.reservations_by_period[6].label, "8/14");

    let sum: usize = data.reservations_by_period.iter().map(|b| b.count).sum();
    assert_eq!(sum, 3);
}

#[test]
fn test_yearly_buckets_count_by_calendar_month() {
    let reservations: Vec<ReservationStatRow> = eight_months_of_reservations();

    let data: StatisticsData = compute_statistics(StatsPeriod::Yearly, NOW, &reservations, &[], &[])
        .expect("aggregation should succeed");

    assert_eq!(data.reservations_by_period.len(), 12);
    assert_eq!(data.reservations_by_period[0].label, "1월");
    assert_eq!(data.reservations_by_period[11].label, "12월");

    let sum: usize = data.reservations_by_period.iter().map(|b| b.count).sum();
    assert_eq!(sum, 8);
    assert_eq!(data.reservations_by_period[11].count, 0);
}

#[test]
fn test_venue_type_distribution_covers_fixed_categories() {
    let reservations: Vec<ReservationStatRow> = vec![
        reservation_stat("pending", Some("performance"), "2026-08-10T09:00:00Z"),
        reservation_stat("pending", Some("performance"), "2026-08-10T10:00:00Z"),
        reservation_stat("pending", Some("studio"), "2026-08-10T11:00:00Z"),
        reservation_stat("pending", None, "2026-08-10T12:00:00Z"),
    ];

    let data: StatisticsData =
        compute_statistics(StatsPeriod::Monthly, NOW, &reservations, &[], &[])
            .expect("aggregation should succeed");

    assert_eq!(data.venue_type_distribution.len(), 3);
    assert_eq!(data.venue_type_distribution[0].venue_type, "performance");
    assert_eq!(data.venue_type_distribution[0].count, 2);
    assert_eq!(data.venue_type_distribution[1].venue_type, "event");
    assert_eq!(data.venue_type_distribution[1].count, 0);
    assert_eq!(data.venue_type_distribution[2].venue_type, "studio");
    assert_eq!(data.venue_type_distribution[2].count, 1);
}

#[test]
fn test_status_distribution_carries_korean_labels() {
    let site_visits: Vec<SiteVisitStatRow> = vec![
        site_visit_stat("pending", "2026-08-10T09:00:00Z"),
        site_visit_stat("confirmed", "2026-08-10T10:00:00Z"),
    ];
    let settlements: Vec<SettlementStatRow> =
        vec![settlement_stat("processing", "2026-08-10T09:00:00Z")];

    let data: StatisticsData =
        compute_statistics(StatsPeriod::Monthly, NOW, &[], &site_visits, &settlements)
            .expect("aggregation should succeed");

    let visit_statuses: Vec<(&str, &str, usize)> = data
        .status_distribution
        .site_visits
        .iter()
        .map(|s| (s.status.as_str(), s.status_label.as_str(), s.count))
        .collect();
    assert_eq!(
        visit_statuses,
        vec![
            ("pending", "대기", 1),
            ("confirmed", "확정", 1),
            ("cancelled", "취소", 0),
            ("completed", "완료", 0),
        ]
    );

    let settlement_statuses: Vec<(&str, usize)> = data
        .status_distribution
        .settlements
        .iter()
        .map(|s| (s.status_label.as_str(), s.count))
        .collect();
    assert_eq!(
        settlement_statuses,
        vec![("대기", 0), ("처리중", 1), ("완료", 0)]
    );
}

#[test]
fn test_conversion_rate_is_zero_without_visits() {
    let data: StatisticsData = compute_statistics(StatsPeriod::Monthly, NOW, &[], &[], &[])
        .expect("aggregation should succeed");
    assert_eq!(data.summary.conversion_rate, 0);
}

#[test]
fn test_conversion_rate_rounds_to_whole_percent() {
    let mut site_visits: Vec<SiteVisitStatRow> = Vec::new();
    for _ in 0..3 {
        site_visits.push(site_visit_stat("confirmed", "2026-08-10T09:00:00Z"));
    }
    for _ in 0..7 {
        site_visits.push(site_visit_stat("pending", "2026-08-10T09:00:00Z"));
    }

    let data: StatisticsData =
        compute_statistics(StatsPeriod::Monthly, NOW, &[], &site_visits, &[])
            .expect("aggregation should succeed");

    assert_eq!(data.summary.total_site_visits, 10);
    assert_eq!(data.summary.conversion_rate, 30);
}

#[test]
fn test_summary_totals_count_every_passed_row() {
    let reservations: Vec<ReservationStatRow> = eight_months_of_reservations();
    let site_visits: Vec<SiteVisitStatRow> = vec![site_visit_stat("pending", "2026-08-10T09:00:00Z")];
    let settlements: Vec<SettlementStatRow> =
        vec![settlement_stat("pending", "2026-08-10T09:00:00Z")];

    let data: StatisticsData = compute_statistics(
        StatsPeriod::Monthly,
        NOW,
        &reservations,
        &site_visits,
        &settlements,
    )
    .expect("aggregation should succeed");

    assert_eq!(data.summary.total_reservations, 8);
    assert_eq!(data.summary.total_site_visits, 1);
    assert_eq!(data.summary.total_settlements, 1);
}

#[test]
fn test_dashboard_stats_honor_thirty_day_recent_bound() {
    let reservations: Vec<ReservationStatRow> = vec![
        reservation_stat("pending", None, "2026-08-10T09:00:00Z"),
        reservation_stat("confirmed", None, "2026-05-01T09:00:00Z"),
    ];
    let site_visits: Vec<SiteVisitStatRow> = vec![site_visit_stat("pending", "2026-08-01T09:00:00Z")];
    let settlements: Vec<SettlementStatRow> = vec![
        settlement_stat("pending", "2026-08-14T09:00:00Z"),
        settlement_stat("completed", "2026-01-01T09:00:00Z"),
    ];

    let stats = compute_dashboard_stats(NOW, &reservations, &site_visits, &settlements);

    assert_eq!(stats.reservations.total, 2);
    assert_eq!(stats.reservations.pending, 1);
    assert_eq!(stats.reservations.recent, 1);

    assert_eq!(stats.site_visits.total, 1);
    assert_eq!(stats.site_visits.recent, 1);

    assert_eq!(stats.settlements.total, 2);
    assert_eq!(stats.settlements.pending, 1);
    assert_eq!(stats.settlements.recent, 1);
}

#[test]
fn test_current_month_bounds() {
    let now: OffsetDateTime = datetime!(2026-02-10 09:00:00 UTC);
    let (first, last) = current_month_bounds(now).expect("derivation should succeed");
    assert_eq!(first, "2026-02-01");
    assert_eq!(last, "2026-02-28");
}

#[test]
fn test_current_month_bounds_in_leap_year() {
    let now: OffsetDateTime = datetime!(2028-02-10 09:00:00 UTC);
    let (first, last) = current_month_bounds(now).expect("derivation should succeed");
    assert_eq!(first, "2028-02-01");
    assert_eq!(last, "2028-02-29");
}
