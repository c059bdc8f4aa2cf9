// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{NewReservation, NewSettlement, NewSiteVisit, Store};

pub fn create_test_store() -> Store {
    Store::new_in_memory().expect("Failed to create in-memory store")
}

/// Builds a reservation input with sensible defaults. Tests override
/// individual fields with struct update syntax.
pub fn new_reservation(name: &str, submitted_at: &str) -> NewReservation {
    NewReservation {
        name: name.to_string(),
        organization: Some(String::from("민수 밴드")),
        phone: String::from("01012345678"),
        rental_date: String::from("2026-04-01"),
        start_time: String::from("09:00"),
        end_time: String::from("14:00"),
        rental_hours: 5.0,
        num_performers: 5,
        description: None,
        referral_sources: vec![String::from("네이버")],
        venue_type: Some(String::from("performance")),
        opt_extra_capacity: false,
        opt_multitrack: false,
        opt_personal_monitor: false,
        opt_extra_operator: false,
        opt_extra_operator_hours: 0,
        opt_bar_operation: false,
        opt_prompter: false,
        opt_tax_invoice: false,
        additional_price: 0,
        total_price: 0,
        submitted_at: submitted_at.to_string(),
    }
}

pub fn new_site_visit(name: &str, submitted_at: &str) -> NewSiteVisit {
    NewSiteVisit {
        name: name.to_string(),
        organization: None,
        phone: String::from("01012345678"),
        rental_date: String::from("2026-04-01"),
        start_time: String::from("10:00"),
        end_time: String::from("12:00"),
        purposes: vec![String::from("공연")],
        purpose_detail: String::from("정기 공연 장소 답사"),
        has_rental: false,
        submitted_at: submitted_at.to_string(),
    }
}

pub fn new_settlement(name: &str, submitted_at: &str) -> NewSettlement {
    NewSettlement {
        name: name.to_string(),
        rental_date: String::from("2026-02-01"),
        bank_name: String::from("국민은행"),
        account_holder: name.to_string(),
        account_number: String::from("12345678901234"),
        rating: 5,
        good_points: None,
        improvements: None,
        instagram_consent: false,
        instagram_request: None,
        submitted_at: submitted_at.to_string(),
    }
}

/// Produces an ISO timestamp inside 2026 with an ordering-friendly
/// sequence number.
pub fn timestamp(seq: u32) -> String {
    format!("2026-01-01T00:00:{:02}.{:03}000000Z", seq / 1000, seq % 1000)
}
