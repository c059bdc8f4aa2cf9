// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maru_domain::{ReservationOptions, ReservationSubmission};
use maru_persistence::{ListFilter, Store};

use crate::tests::helpers::{
    create_test_store, valid_reservation_submission, valid_settlement_submission,
    valid_site_visit_submission,
};
use crate::{ApiError, submit_reservation, submit_settlement, submit_site_visit};

#[test]
fn test_submit_reservation_persists_normalized_record() {
    let mut store: Store = create_test_store();

    let outcome = submit_reservation(&mut store, &valid_reservation_submission())
        .expect("submission should succeed");

    assert_eq!(outcome.message, "예약 신청이 완료되었습니다.");
    assert!(outcome.record.id > 0);
    assert_eq!(outcome.record.total_price, 0);

    let record = store
        .get_reservation(outcome.record.id)
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.phone, "01012345678");
    assert_eq!(record.status, "pending");
    assert!((record.rental_hours - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_submit_reservation_derives_price_from_options() {
    let mut store: Store = create_test_store();

    let submission: ReservationSubmission = ReservationSubmission {
        options: Some(ReservationOptions {
            extra_capacity: true,
            multitrack: true,
            extra_operator: true,
            extra_operator_hours: Some(3),
            ..ReservationOptions::default()
        }),
        ..valid_reservation_submission()
    };

    let outcome = submit_reservation(&mut store, &submission).expect("submission should succeed");

    // 100,000 + 100,000 + 20,000 × 3
    assert_eq!(outcome.record.total_price, 260_000);

    let record = store
        .get_reservation(outcome.record.id)
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.additional_price, 260_000);
    assert_eq!(record.total_price, record.additional_price);
    assert_eq!(record.opt_extra_operator_hours, 3);
}

#[test]
fn test_submit_reservation_zeroes_hours_without_operator_flag() {
    let mut store: Store = create_test_store();

    let submission: ReservationSubmission = ReservationSubmission {
        options: Some(ReservationOptions {
            extra_operator: false,
            extra_operator_hours: Some(6),
            ..ReservationOptions::default()
        }),
        ..valid_reservation_submission()
    };

    let outcome = submit_reservation(&mut store, &submission).expect("submission should succeed");

    let record = store
        .get_reservation(outcome.record.id)
        .expect("query should succeed")
        .expect("record should exist");
    assert!(!record.opt_extra_operator);
    assert_eq!(record.opt_extra_operator_hours, 0);
    assert_eq!(record.total_price, 0);
}

#[test]
fn test_submit_reservation_reports_all_violations_without_writing() {
    let mut store: Store = create_test_store();

    let submission: ReservationSubmission = ReservationSubmission {
        name: None,
        phone: Some(String::from("1234")),
        num_performers: Some(0),
        ..valid_reservation_submission()
    };

    let error = submit_reservation(&mut store, &submission).expect_err("submission should fail");

    match error {
        ApiError::ValidationFailed { errors } => assert_eq!(errors.len(), 3),
        other => panic!("expected validation failure, got {other:?}"),
    }

    let (_, total) = store
        .list_reservations(&ListFilter {
            limit: 20,
            ..ListFilter::default()
        })
        .expect("list should succeed");
    assert_eq!(total, 0, "no write should happen on validation failure");
}

#[test]
fn test_submit_site_visit_persists_record() {
    let mut store: Store = create_test_store();

    let outcome = submit_site_visit(&mut store, &valid_site_visit_submission())
        .expect("submission should succeed");

    assert_eq!(outcome.message, "답사 예약이 완료되었습니다.");

    let record = store
        .get_site_visit(outcome.record.id)
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.purposes, vec![String::from("공연")]);
    assert!(!record.has_rental);
    assert_eq!(record.status, "pending");
}

#[test]
fn test_submit_site_visit_rejects_incomplete_input() {
    let mut store: Store = create_test_store();

    let error = submit_site_visit(&mut store, &maru_domain::SiteVisitSubmission::default())
        .expect_err("submission should fail");

    match error {
        ApiError::ValidationFailed { errors } => assert_eq!(errors.len(), 7),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_submit_settlement_persists_record_with_empty_media() {
    let mut store: Store = create_test_store();

    let outcome = submit_settlement(&mut store, &valid_settlement_submission())
        .expect("submission should succeed");

    assert_eq!(outcome.message, "정산 요청이 완료되었습니다.");

    let record = store
        .get_settlement(outcome.record.id)
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.refund_status, "pending");
    assert!(record.media_urls.is_empty());
}

#[test]
fn test_submit_settlement_rejects_out_of_range_rating() {
    let mut store: Store = create_test_store();

    let submission = maru_domain::SettlementSubmission {
        rating: Some(6),
        ..valid_settlement_submission()
    };

    let error = submit_settlement(&mut store, &submission).expect_err("submission should fail");

    match error {
        ApiError::ValidationFailed { errors } => {
            assert_eq!(errors, vec![String::from("만족도를 선택해주세요.")]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}
