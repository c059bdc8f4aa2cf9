// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maru_persistence::Store;

use crate::tests::helpers::{create_test_store, valid_reservation_submission};
use crate::{
    ApiError, ListQuery, SettingsUpdateRequest, get_reservation, get_settings, list_reservations,
    normalize_search_term, submit_reservation, update_reservation_status, update_settings,
    update_settlement_refund_status,
};

fn seed_reservations(store: &mut Store, count: usize) {
    for _ in 0..count {
        submit_reservation(store, &valid_reservation_submission())
            .expect("submission should succeed");
    }
}

#[test]
fn test_list_reservations_page_two_of_forty_five() {
    let mut store: Store = create_test_store();
    seed_reservations(&mut store, 45);

    let query: ListQuery = ListQuery {
        page: Some(2),
        limit: Some(20),
        ..ListQuery::default()
    };
    let (records, pagination) =
        list_reservations(&mut store, &query).expect("list should succeed");

    assert_eq!(records.len(), 20);
    assert_eq!(pagination.page, 2);
    assert_eq!(pagination.limit, 20);
    assert_eq!(pagination.total, 45);
    assert_eq!(pagination.total_pages, 3);
}

#[test]
fn test_list_reservations_defaults_page_and_limit() {
    let mut store: Store = create_test_store();
    seed_reservations(&mut store, 3);

    let (records, pagination) =
        list_reservations(&mut store, &ListQuery::default()).expect("list should succeed");

    assert_eq!(records.len(), 3);
    assert_eq!(pagination.page, 1);
    assert_eq!(pagination.limit, 20);
    assert_eq!(pagination.total_pages, 1);
}

#[test]
fn test_empty_result_set_has_zero_pages() {
    let mut store: Store = create_test_store();

    let (records, pagination) =
        list_reservations(&mut store, &ListQuery::default()).expect("list should succeed");

    assert!(records.is_empty());
    assert_eq!(pagination.total, 0);
    assert_eq!(pagination.total_pages, 0);
}

#[test]
fn test_get_reservation_not_found_message() {
    let mut store: Store = create_test_store();

    let error = get_reservation(&mut store, 999).expect_err("lookup should fail");
    assert_eq!(
        error,
        ApiError::NotFound {
            message: String::from("예약을 찾을 수 없습니다.")
        }
    );
}

#[test]
fn test_update_reservation_status_round_trip() {
    let mut store: Store = create_test_store();
    let outcome = submit_reservation(&mut store, &valid_reservation_submission())
        .expect("submission should succeed");

    let updated = update_reservation_status(&mut store, outcome.record.id, "confirmed")
        .expect("update should succeed");
    assert_eq!(updated.status, "confirmed");
}

#[test]
fn test_update_reservation_status_rejects_unknown_value_before_storage() {
    let mut store: Store = create_test_store();
    let outcome = submit_reservation(&mut store, &valid_reservation_submission())
        .expect("submission should succeed");

    let error = update_reservation_status(&mut store, outcome.record.id, "archived")
        .expect_err("update should fail");
    assert_eq!(
        error,
        ApiError::InvalidInput {
            message: String::from("유효하지 않은 상태입니다.")
        }
    );

    // The record is untouched.
    let record = get_reservation(&mut store, outcome.record.id).expect("lookup should succeed");
    assert_eq!(record.status, "pending");
}

#[test]
fn test_update_settlement_rejects_booking_only_status() {
    let mut store: Store = create_test_store();

    // "confirmed" belongs to the booking enum, not the refund enum, so
    // it must be rejected before the not-found check even runs.
    let error = update_settlement_refund_status(&mut store, 1, "confirmed")
        .expect_err("update should fail");
    assert_eq!(
        error,
        ApiError::InvalidInput {
            message: String::from("유효하지 않은 상태입니다.")
        }
    );
}

#[test]
fn test_normalize_search_term_short_circuits_under_two_characters() {
    assert_eq!(normalize_search_term(""), None);
    assert_eq!(normalize_search_term(" 김 "), None);
    assert_eq!(normalize_search_term("김민"), Some(String::from("김민")));
    assert_eq!(normalize_search_term("  김민수  "), Some(String::from("김민수")));
}

#[test]
fn test_get_settings_returns_defaults_when_unsaved() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    let settings = get_settings(&mut store, admin_id).expect("get should succeed");

    assert_eq!(settings.phone_number, "");
    assert!(settings.notification_reservation);
    assert!(settings.notification_site_visit);
    assert!(settings.notification_settlement);
    assert!(settings.updated_at.is_none());
}

#[test]
fn test_update_settings_rejects_malformed_phone() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    let request: SettingsUpdateRequest = SettingsUpdateRequest {
        phone_number: Some(String::from("02-123-4567")),
        ..SettingsUpdateRequest::default()
    };

    let error = update_settings(&mut store, admin_id, &request).expect_err("update should fail");
    assert_eq!(
        error,
        ApiError::InvalidInput {
            message: String::from("유효하지 않은 전화번호 형식입니다.")
        }
    );

    // Nothing was written.
    assert!(
        store
            .get_admin_settings(admin_id)
            .expect("lookup should succeed")
            .is_none()
    );
}

#[test]
fn test_update_settings_upserts_and_stamps_timestamp() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    let request: SettingsUpdateRequest = SettingsUpdateRequest {
        phone_number: Some(String::from("010-1234-5678")),
        notification_settlement: Some(false),
        ..SettingsUpdateRequest::default()
    };

    let saved = update_settings(&mut store, admin_id, &request).expect("update should succeed");
    assert_eq!(saved.phone_number, "010-1234-5678");
    assert!(saved.notification_reservation);
    assert!(!saved.notification_settlement);
    assert!(saved.updated_at.is_some());

    // Absent fields reset to their defaults on the next write.
    let reset = update_settings(&mut store, admin_id, &SettingsUpdateRequest::default())
        .expect("update should succeed");
    assert_eq!(reset.phone_number, "");
    assert!(reset.notification_settlement);
}
