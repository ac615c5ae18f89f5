use client::actions::auth::{DOCTORS_ONLY, INVALID_CREDENTIALS, SERVER_ERROR, SERVER_UNREACHABLE};
use client::actions::{landing, sign_out, submit_login};
use client::{Redirect, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, LoginResponse, FIELDS_REQUIRED, INVALID_EMAIL};

use crate::common::{doctor_session, signed_in_store, MockApi};

#[tokio::test]
async fn login_stores_session_for_doctor() {
    let api = MockApi::new();
    let store = SessionStore::in_memory();

    let session = submit_login(&api, &store, "dr.ali@example.com", "secret123")
        .await
        .expect("login succeeds");

    assert_eq!(session, doctor_session());
    assert_eq!(store.read(), Some(doctor_session()));
    assert_eq!(landing(&store), Some(Redirect::Dashboard));

    let sent = api.last_login.borrow().clone().expect("login request recorded");
    assert_eq!(sent.login_id, "dr.ali@example.com");
    assert_eq!(sent.password_or_otp, "secret123");
    assert_eq!(api.login_calls.get(), 1);
}

#[tokio::test]
async fn empty_fields_never_reach_the_backend() {
    let api = MockApi::new();
    let store = SessionStore::in_memory();

    for (identifier, secret) in [("", ""), ("dr.ali@example.com", ""), ("", "secret123")] {
        let err = submit_login(&api, &store, identifier, secret).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.user_message(), FIELDS_REQUIRED);
    }

    assert_eq!(api.calls(), 0);
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn malformed_identifier_never_reaches_the_backend() {
    let api = MockApi::new();
    let store = SessionStore::in_memory();

    for identifier in ["dr.ali", "dr.ali@clinic", "@example.com", "dr ali@example.com"] {
        let err = submit_login(&api, &store, identifier, "secret123").await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("email"), Some(INVALID_EMAIL));
    }

    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn rejected_credentials_show_invalid_message() {
    let api = MockApi::new().with_login(Err(AppError::from_status(401, "rejected")));
    let store = SessionStore::in_memory();

    let err = submit_login(&api, &store, "dr.ali@example.com", "wrong").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.user_message(), INVALID_CREDENTIALS);
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn network_failure_shows_connectivity_message() {
    let api = MockApi::new().with_login(Err(AppError::network("connection refused")));
    let store = SessionStore::in_memory();

    let err = submit_login(&api, &store, "dr.ali@example.com", "secret123").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NetworkError);
    assert_eq!(err.user_message(), SERVER_UNREACHABLE);
}

#[tokio::test]
async fn server_error_prefers_backend_detail() {
    let with_detail = MockApi::new().with_login(Err(
        AppError::from_status(500, "boom").with_detail(Some("Account locked".to_string())),
    ));
    let without_detail = MockApi::new().with_login(Err(AppError::from_status(503, "boom")));
    let store = SessionStore::in_memory();

    let err = submit_login(&with_detail, &store, "dr.ali@example.com", "x").await.unwrap_err();
    assert_eq!(err.user_message(), "Account locked");

    let err = submit_login(&without_detail, &store, "dr.ali@example.com", "x").await.unwrap_err();
    assert_eq!(err.user_message(), SERVER_ERROR);
    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn non_doctor_accounts_are_turned_away() {
    let api = MockApi::new().with_login(Ok(LoginResponse {
        access_token: "T9".to_string(),
        user_id: "7".to_string(),
        role: "patient".to_string(),
    }));
    let store = SessionStore::in_memory();

    let err = submit_login(&api, &store, "pat@example.com", "secret").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.user_message(), DOCTORS_ONLY);
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn incomplete_login_response_is_an_error() {
    let api = MockApi::new().with_login(Ok(LoginResponse {
        access_token: String::new(),
        user_id: "42".to_string(),
        role: "doctor".to_string(),
    }));
    let store = SessionStore::in_memory();

    let err = submit_login(&api, &store, "dr.ali@example.com", "secret123").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(store.read(), None);
}

#[test]
fn sign_out_clears_everything() {
    let store = signed_in_store();
    assert_eq!(landing(&store), Some(Redirect::Dashboard));

    sign_out(&store);

    assert_eq!(store.read(), None);
    assert_eq!(landing(&store), None);
}
