// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{BookingStatus, DomainError, RefundStatus, ReservationSubmission, StatsPeriod, VenueType};

#[test]
fn test_booking_status_round_trips_through_storage_form() {
    for status in BookingStatus::ALL {
        assert_eq!(BookingStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_booking_status_rejects_unknown_value() {
    let result: Result<BookingStatus, DomainError> = BookingStatus::from_str("archived");
    assert!(matches!(result, Err(DomainError::InvalidStatus(_))));
}

#[test]
fn test_refund_status_round_trips_through_storage_form() {
    for status in RefundStatus::ALL {
        assert_eq!(RefundStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_refund_status_rejects_booking_only_value() {
    let result: Result<RefundStatus, DomainError> = RefundStatus::from_str("confirmed");
    assert!(matches!(result, Err(DomainError::InvalidRefundStatus(_))));
}

#[test]
fn test_venue_type_round_trips_through_storage_form() {
    for venue_type in VenueType::ALL {
        assert_eq!(VenueType::from_str(venue_type.as_str()), Ok(venue_type));
    }
}

#[test]
fn test_status_labels_are_korean_display_strings() {
    assert_eq!(BookingStatus::Pending.label(), "대기");
    assert_eq!(BookingStatus::Confirmed.label(), "확정");
    assert_eq!(RefundStatus::Processing.label(), "처리중");
}

#[test]
fn test_stats_period_falls_back_to_monthly() {
    assert_eq!(StatsPeriod::from_query(Some("weekly")), StatsPeriod::Weekly);
    assert_eq!(StatsPeriod::from_query(Some("yearly")), StatsPeriod::Yearly);
    assert_eq!(StatsPeriod::from_query(Some("daily")), StatsPeriod::Monthly);
    assert_eq!(StatsPeriod::from_query(None), StatsPeriod::Monthly);
}

#[test]
fn test_reservation_submission_deserializes_camel_case() {
    let json = r#"{
        "name": "김민수",
        "rentalDate": "2026-04-01",
        "startTime": "09:00",
        "endTime": "14:00",
        "numPerformers": 5,
        "options": { "extraOperator": true, "extraOperatorHours": 3 }
    }"#;

    let submission: ReservationSubmission =
        serde_json::from_str(json).expect("submission should deserialize");
    assert_eq!(submission.rental_date.as_deref(), Some("2026-04-01"));
    assert_eq!(submission.num_performers, Some(5));
    let options = submission.options.expect("options should be present");
    assert!(options.extra_operator);
    assert_eq!(options.extra_operator_hours, Some(3));
    assert!(!options.multitrack);
}
