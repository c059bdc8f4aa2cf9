// Copyright (C) 2026 Studio Maru
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maru_persistence::Store;

use crate::tests::helpers::create_test_store;
use crate::{AdminIdentity, ApiError, AuthenticationService};

fn create_admin(store: &mut Store) -> i64 {
    store
        .create_admin("admin", "관리자", "correct horse battery")
        .expect("create should succeed")
}

#[test]
fn test_login_issues_verifiable_token() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = create_admin(&mut store);

    let (token, identity) =
        AuthenticationService::login(&mut store, "admin", "correct horse battery")
            .expect("login should succeed");

    assert_eq!(identity.admin_id, admin_id);
    assert_eq!(identity.display_name, "관리자");

    let verified: AdminIdentity =
        AuthenticationService::verify_token(&mut store, &token).expect("token should verify");
    assert_eq!(verified.admin_id, admin_id);
}

#[test]
fn test_login_rejects_wrong_password() {
    let mut store: Store = create_test_store();
    create_admin(&mut store);

    let error = AuthenticationService::login(&mut store, "admin", "wrong password")
        .expect_err("login should fail");
    assert!(matches!(error, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_login_rejects_unknown_account() {
    let mut store: Store = create_test_store();

    let error = AuthenticationService::login(&mut store, "nobody", "password")
        .expect_err("login should fail");
    assert!(matches!(error, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_login_rejects_disabled_account() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = create_admin(&mut store);
    store
        .set_admin_disabled(admin_id, true)
        .expect("disable should succeed");

    let error = AuthenticationService::login(&mut store, "admin", "correct horse battery")
        .expect_err("login should fail");
    assert!(matches!(error, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_verify_token_rejects_unknown_token() {
    let mut store: Store = create_test_store();

    let error = AuthenticationService::verify_token(&mut store, "bogus")
        .expect_err("verification should fail");
    assert_eq!(
        error,
        ApiError::AuthenticationFailed {
            message: String::from("유효하지 않은 토큰입니다.")
        }
    );
}

#[test]
fn test_verify_token_rejects_expired_session() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = create_admin(&mut store);
    store
        .create_session("stale-token", admin_id, "2020-01-01T00:00:00.000000000Z")
        .expect("session create should succeed");

    let error = AuthenticationService::verify_token(&mut store, "stale-token")
        .expect_err("verification should fail");
    assert!(matches!(error, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_verify_token_rejects_disabled_admin_session() {
    let mut store: Store = create_test_store();
    let admin_id: i64 = create_admin(&mut store);

    let (token, _) = AuthenticationService::login(&mut store, "admin", "correct horse battery")
        .expect("login should succeed");
    store
        .set_admin_disabled(admin_id, true)
        .expect("disable should succeed");

    let error = AuthenticationService::verify_token(&mut store, &token)
        .expect_err("verification should fail");
    assert!(matches!(error, ApiError::AuthenticationFailed { .. }));
}

#[test]
fn test_logout_invalidates_token() {
    let mut store: Store = create_test_store();
    create_admin(&mut store);

    let (token, _) = AuthenticationService::login(&mut store, "admin", "correct horse battery")
        .expect("login should succeed");

    AuthenticationService::logout(&mut store, &token).expect("logout should succeed");

    let error = AuthenticationService::verify_token(&mut store, &token)
        .expect_err("verification should fail");
    assert!(matches!(error, ApiError::AuthenticationFailed { .. }));
}
