use client::actions::cases::LOAD_CASES_FAILED;
use client::actions::load_cases;
use client::{ActionOutcome, Redirect, SessionStore};
use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, CaseCounts};

use crate::common::{sample_cases, signed_in_store, MockApi};

#[tokio::test]
async fn cases_arrive_in_backend_order() {
    let api = MockApi::new();
    let store = signed_in_store();

    let outcome = load_cases(&api, &store).await;

    let ActionOutcome::Ready(cases) = outcome else {
        panic!("expected cases");
    };
    let ids: Vec<i64> = cases.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![7, 3, 9, 1, 4]);
    assert_eq!(api.list_calls.get(), 1);
}

#[tokio::test]
async fn request_carries_the_stored_token() {
    let api = MockApi::new();
    let store = signed_in_store();

    load_cases(&api, &store).await;

    assert_eq!(api.last_token.borrow().as_deref(), Some("T1"));
}

#[tokio::test]
async fn counts_follow_the_loaded_cases() {
    let api = MockApi::new();
    let store = signed_in_store();

    let ActionOutcome::Ready(cases) = load_cases(&api, &store).await else {
        panic!("expected cases");
    };
    let counts = CaseCounts::from_cases(&cases);

    assert_eq!(
        counts,
        CaseCounts {
            total: 5,
            pending: 2,
            in_progress: 1,
            completed: 2,
        }
    );
    assert_eq!(CaseCounts::from_cases(&cases), counts);
}

#[tokio::test]
async fn empty_list_is_ready_not_an_error() {
    let api = MockApi::new().with_cases(Ok(Vec::new()));
    let store = signed_in_store();

    let outcome = load_cases(&api, &store).await;

    assert_eq!(outcome, ActionOutcome::Ready(Vec::new()));
    assert_eq!(CaseCounts::from_cases(&[]), CaseCounts::default());
}

#[tokio::test]
async fn without_session_no_request_is_made() {
    let api = MockApi::new();
    let store = SessionStore::in_memory();

    let outcome = load_cases(&api, &store).await;

    assert_eq!(outcome.redirect(), Some(Redirect::Login));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn unauthorized_clears_session_and_redirects() {
    let api = MockApi::new().with_cases(Err(AppError::from_status(401, "expired")));
    let store = signed_in_store();

    let outcome = load_cases(&api, &store).await;

    assert_eq!(outcome.redirect(), Some(Redirect::Login));
    assert_eq!(store.read(), None);
}

#[tokio::test]
async fn other_failures_are_retryable_and_keep_session() {
    let api = MockApi::new().with_cases(Err(AppError::from_status(500, "boom")));
    let store = signed_in_store();

    let outcome = load_cases(&api, &store).await;

    let err = outcome.error().expect("failure");
    assert_eq!(err.user_message(), LOAD_CASES_FAILED);
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert!(store.read().is_some());
}

#[tokio::test]
async fn refresh_after_failure_loads_again() {
    let store = signed_in_store();

    let failing = MockApi::new().with_cases(Err(AppError::network("offline")));
    assert!(load_cases(&failing, &store).await.error().is_some());

    let recovered = MockApi::new().with_cases(Ok(sample_cases()));
    let outcome = load_cases(&recovered, &store).await;
    assert!(outcome.is_ready());
}
