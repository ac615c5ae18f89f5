use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use client::actions::{submit_login, submit_report};
use client::{ActionOutcome, PortalApi, SessionStore};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{CaseStatus, ReportAck};

use crate::common::{case_json, doctor_session, http_api, signed_in_store, spawn_stub};

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    authorization: Option<String>,
    body: Option<Value>,
}

/// Every request the stub backend has seen, in arrival order.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn capture(&self, method: Method, uri: &Uri, headers: &HeaderMap, body: &str) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.0.lock().expect("recorder lock").push(Recorded {
            method,
            path: uri.path().to_string(),
            authorization,
            body: serde_json::from_str(body).ok(),
        });
    }

    fn single(&self) -> Recorded {
        let seen = self.0.lock().expect("recorder lock");
        assert_eq!(seen.len(), 1, "expected exactly one request, saw {seen:?}");
        seen[0].clone()
    }
}

/// Stub of the doctor backend answering every endpoint successfully.
fn backend(recorder: Recorder) -> Router {
    Router::new()
        .route(
            "/auth/login",
            post(
                |State(rec): State<Recorder>, method: Method, uri: Uri, headers: HeaderMap, body: String| async move {
                    rec.capture(method, &uri, &headers, &body);
                    Json(json!({ "access_token": "T1", "user_id": 42, "role": "doctor" }))
                },
            ),
        )
        .route(
            "/doctor/cases",
            get(
                |State(rec): State<Recorder>, method: Method, uri: Uri, headers: HeaderMap| async move {
                    rec.capture(method, &uri, &headers, "");
                    Json(json!([case_json(2, "completed"), case_json(1, "pending")]))
                },
            ),
        )
        .route(
            "/doctor/cases/{id}",
            get(
                |State(rec): State<Recorder>,
                 Path(id): Path<i64>,
                 method: Method,
                 uri: Uri,
                 headers: HeaderMap| async move {
                    rec.capture(method, &uri, &headers, "");
                    Json(case_json(id, "in_progress"))
                },
            ),
        )
        .route(
            "/doctor/cases/{id}/report",
            post(
                |State(rec): State<Recorder>, method: Method, uri: Uri, headers: HeaderMap, body: String| async move {
                    rec.capture(method, &uri, &headers, &body);
                    Json(json!({ "message": "Report saved", "status": "completed" }))
                },
            ),
        )
        .route(
            "/files/{*path}",
            get(|Path(path): Path<String>| async move { format!("file:{path}") }),
        )
        .with_state(recorder)
}

#[tokio::test]
async fn login_end_to_end_over_http() {
    let recorder = Recorder::default();
    let base = spawn_stub(backend(recorder.clone())).await;
    let api = http_api(&base);
    let store = SessionStore::in_memory();

    let session = submit_login(&api, &store, "dr.ali@example.com", "secret123")
        .await
        .expect("login succeeds");

    assert_eq!(session, doctor_session());
    assert_eq!(store.read(), Some(doctor_session()));

    let request = recorder.single();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/auth/login");
    assert_eq!(
        request.body,
        Some(json!({ "login_id": "dr.ali@example.com", "password_or_otp": "secret123" }))
    );
}

#[tokio::test]
async fn case_list_sends_bearer_and_keeps_order() {
    let recorder = Recorder::default();
    let base = spawn_stub(backend(recorder.clone())).await;
    let api = http_api(&base);
    let session = doctor_session();

    let cases = api.list_cases(&session).await.expect("cases");

    let ids: Vec<i64> = cases.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(cases[0].status, CaseStatus::Completed);
    assert_eq!(cases[0].patient_id, "1002");

    let request = recorder.single();
    assert_eq!(request.path, "/doctor/cases");
    assert_eq!(request.authorization, Some(session.bearer()));
}

#[tokio::test]
async fn case_list_accepts_wrapped_envelope() {
    let router = Router::new().route(
        "/doctor/cases",
        get(|| async { Json(json!({ "cases": [case_json(5, "pending")] })) }),
    );
    let base = spawn_stub(router).await;

    let cases = http_api(&base)
        .list_cases(&doctor_session())
        .await
        .expect("cases");

    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].id, 5);
}

#[tokio::test]
async fn single_case_is_fetched_by_path_id() {
    let recorder = Recorder::default();
    let base = spawn_stub(backend(recorder.clone())).await;

    let case = http_api(&base)
        .get_case(&doctor_session(), 17)
        .await
        .expect("case");

    assert_eq!(case.id, 17);
    assert_eq!(case.status, CaseStatus::InProgress);
    assert_eq!(recorder.single().path, "/doctor/cases/17");
}

#[tokio::test]
async fn report_body_trims_text_and_nulls_blank_diagnosis() {
    let recorder = Recorder::default();
    let base = spawn_stub(backend(recorder.clone())).await;
    let api = http_api(&base);
    let store = signed_in_store();

    let outcome = submit_report(&api, &store, 8, "  Rest and fluids.  ", "  ").await;

    assert_eq!(
        outcome,
        ActionOutcome::Ready(ReportAck {
            message: Some("Report saved".to_string()),
            status: Some("completed".to_string()),
        })
    );
    let request = recorder.single();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/doctor/cases/8/report");
    assert_eq!(request.authorization.as_deref(), Some("Bearer T1"));
    assert_eq!(
        request.body,
        Some(json!({ "report_text": "Rest and fluids.", "diagnosis": null }))
    );
}

#[tokio::test]
async fn report_without_ack_body_still_succeeds() {
    let router = Router::new().route(
        "/doctor/cases/{id}/report",
        post(|| async { StatusCode::NO_CONTENT }),
    );
    let base = spawn_stub(router).await;
    let store = signed_in_store();

    let outcome = submit_report(&http_api(&base), &store, 3, "Stable", "").await;

    assert_eq!(outcome, ActionOutcome::Ready(ReportAck::default()));
}

#[tokio::test]
async fn attachment_links_resolve_against_the_backend() {
    let base = spawn_stub(backend(Recorder::default())).await;
    let api = http_api(&base);

    let url = api.config().file_url("/uploads/12/scan result.pdf");
    assert_eq!(url, format!("{base}/files/uploads/12/scan%20result.pdf"));

    let body = reqwest::get(&url)
        .await
        .expect("file request")
        .text()
        .await
        .expect("file body");
    assert_eq!(body, "file:uploads/12/scan result.pdf");
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_ignored() {
    let recorder = Recorder::default();
    let base = spawn_stub(backend(recorder.clone())).await;

    http_api(&format!("{base}/"))
        .list_cases(&doctor_session())
        .await
        .expect("cases");

    assert_eq!(recorder.single().path, "/doctor/cases");
}
