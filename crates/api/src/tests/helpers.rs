// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use maru_domain::{ReservationSubmission, SettlementSubmission, SiteVisitSubmission};
use maru_persistence::{ReservationStatRow, SettlementStatRow, SiteVisitStatRow, Store};

pub fn create_test_store() -> Store {
    Store::new_in_memory().expect("Failed to create in-memory store")
}

/// A reservation submission that passes every validation rule. The
/// rental date is far in the future so the strictly-after-today rule
/// holds regardless of when the test runs.
pub fn valid_reservation_submission() -> ReservationSubmission {
    ReservationSubmission {
        name: Some(String::from("김민수")),
        organization: Some(String::from("민수 밴드")),
        phone: Some(String::from("010-1234-5678")),
        rental_date: Some(String::from("2099-04-01")),
        start_time: Some(String::from("09:00")),
        end_time: Some(String::from("14:00")),
        num_performers: Some(5),
        description: Some(String::from("정기 공연")),
        referral_sources: Some(vec![String::from("네이버")]),
        venue_type: Some(String::from("performance")),
        options: None,
    }
}

pub fn valid_site_visit_submission() -> SiteVisitSubmission {
    SiteVisitSubmission {
        name: Some(String::from("김민수")),
        organization: None,
        phone: Some(String::from("010-1234-5678")),
        rental_date: Some(String::from("2099-04-01")),
        start_time: Some(String::from("10:00")),
        end_time: Some(String::from("12:00")),
        purposes: Some(vec![String::from("공연")]),
        purpose_detail: Some(String::from("정기 공연 장소 답사")),
        has_rental: Some(false),
    }
}

pub fn valid_settlement_submission() -> SettlementSubmission {
    SettlementSubmission {
        name: Some(String::from("김민수")),
        rental_date: Some(String::from("2026-02-01")),
        bank_name: Some(String::from("국민은행")),
        account_holder: Some(String::from("김민수")),
        account_number: Some(String::from("12345678901234")),
        rating: Some(5),
        good_points: None,
        improvements: None,
        instagram_consent: Some(false),
        instagram_request: None,
    }
}

pub fn reservation_stat(status: &str, venue_type: Option<&str>, submitted_at: &str) -> ReservationStatRow {
    ReservationStatRow {
        status: status.to_string(),
        venue_type: venue_type.map(ToString::to_string),
        submitted_at: submitted_at.to_string(),
    }
}

pub fn site_visit_stat(status: &str, submitted_at: &str) -> SiteVisitStatRow {
    SiteVisitStatRow {
        status: status.to_string(),
        submitted_at: submitted_at.to_string(),
    }
}

pub fn settlement_stat(refund_status: &str, submitted_at: &str) -> SettlementStatRow {
    SettlementStatRow {
        refund_status: refund_status.to_string(),
        submitted_at: submitted_at.to_string(),
    }
}
