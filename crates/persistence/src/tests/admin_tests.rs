// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Store;
use crate::tests::helpers::create_test_store;

#[test]
fn test_create_admin_and_lookup_by_login() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    let admin = store
        .get_admin_by_login("admin")
        .expect("lookup should succeed")
        .expect("admin should exist");

    assert_eq!(admin.admin_id, admin_id);
    assert_eq!(admin.display_name, "관리자");
    assert!(!admin.is_disabled);
    assert!(admin.last_login_at.is_none());
}

#[test]
fn test_admin_login_lookup_is_case_insensitive() {
    let mut store: Store = create_test_store();
    store
        .create_admin("Admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    assert!(
        store
            .get_admin_by_login("ADMIN")
            .expect("lookup should succeed")
            .is_some()
    );
}

#[test]
fn test_verify_password_accepts_correct_and_rejects_wrong() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    assert!(
        store
            .verify_password(admin_id, "correct horse battery")
            .expect("verify should succeed")
    );
    assert!(
        !store
            .verify_password(admin_id, "wrong password")
            .expect("verify should succeed")
    );
}

#[test]
fn test_session_lifecycle() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    store
        .create_session("token-abc", admin_id, "2027-01-01T00:00:00.000000000Z")
        .expect("session create should succeed");

    let session = store
        .get_session_by_token("token-abc")
        .expect("lookup should succeed")
        .expect("session should exist");
    assert_eq!(session.admin_id, admin_id);
    assert_eq!(session.expires_at, "2027-01-01T00:00:00.000000000Z");

    store
        .update_session_activity(session.session_id)
        .expect("activity bump should succeed");

    store
        .delete_session("token-abc")
        .expect("delete should succeed");
    assert!(
        store
            .get_session_by_token("token-abc")
            .expect("lookup should succeed")
            .is_none()
    );
}

#[test]
fn test_update_last_login_stamps_timestamp() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed");

    store
        .update_last_login(admin_id)
        .expect("update should succeed");

    let admin = store
        .get_admin_by_id(admin_id)
        .expect("lookup should succeed")
        .expect("admin should exist");
    assert!(admin.last_login_at.is_some());
}
