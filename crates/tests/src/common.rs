use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use axum::Router;
use client::{HttpPortalApi, PortalApi, SessionStore};
use serde_json::{json, Value};
use shared_types::{
    AppError, CaseRecord, LoginRequest, LoginResponse, PortalConfig, ReportAck, ReportSubmission,
    Session,
};

/// Scripted, call-counting stand-in for the backend.
///
/// Every method records its arguments and returns the canned result set
/// with the matching `with_*` builder.
pub struct MockApi {
    login_result: RefCell<Result<LoginResponse, AppError>>,
    cases_result: RefCell<Result<Vec<CaseRecord>, AppError>>,
    case_result: RefCell<Result<CaseRecord, AppError>>,
    report_result: RefCell<Result<ReportAck, AppError>>,
    pub login_calls: Cell<usize>,
    pub list_calls: Cell<usize>,
    pub get_calls: Cell<usize>,
    pub report_calls: Cell<usize>,
    pub last_login: RefCell<Option<LoginRequest>>,
    pub last_report: RefCell<Option<(i64, ReportSubmission)>>,
    pub last_token: RefCell<Option<String>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            login_result: RefCell::new(Ok(doctor_login_response())),
            cases_result: RefCell::new(Ok(sample_cases())),
            case_result: RefCell::new(Ok(case_with_status(1, "pending"))),
            report_result: RefCell::new(Ok(ReportAck::default())),
            login_calls: Cell::new(0),
            list_calls: Cell::new(0),
            get_calls: Cell::new(0),
            report_calls: Cell::new(0),
            last_login: RefCell::new(None),
            last_report: RefCell::new(None),
            last_token: RefCell::new(None),
        }
    }

    pub fn with_login(self, result: Result<LoginResponse, AppError>) -> Self {
        *self.login_result.borrow_mut() = result;
        self
    }

    pub fn with_cases(self, result: Result<Vec<CaseRecord>, AppError>) -> Self {
        *self.cases_result.borrow_mut() = result;
        self
    }

    pub fn with_case(self, result: Result<CaseRecord, AppError>) -> Self {
        *self.case_result.borrow_mut() = result;
        self
    }

    pub fn with_report(self, result: Result<ReportAck, AppError>) -> Self {
        *self.report_result.borrow_mut() = result;
        self
    }

    /// Total number of backend calls of any kind.
    pub fn calls(&self) -> usize {
        self.login_calls.get() + self.list_calls.get() + self.get_calls.get() + self.report_calls.get()
    }

    fn record_token(&self, session: &Session) {
        *self.last_token.borrow_mut() = Some(session.access_token.clone());
    }
}

#[async_trait(?Send)]
impl PortalApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.login_calls.set(self.login_calls.get() + 1);
        *self.last_login.borrow_mut() = Some(request.clone());
        self.login_result.borrow().clone()
    }

    async fn list_cases(&self, session: &Session) -> Result<Vec<CaseRecord>, AppError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.record_token(session);
        self.cases_result.borrow().clone()
    }

    async fn get_case(&self, session: &Session, _case_id: i64) -> Result<CaseRecord, AppError> {
        self.get_calls.set(self.get_calls.get() + 1);
        self.record_token(session);
        self.case_result.borrow().clone()
    }

    async fn submit_report(
        &self,
        session: &Session,
        case_id: i64,
        report: &ReportSubmission,
    ) -> Result<ReportAck, AppError> {
        self.report_calls.set(self.report_calls.get() + 1);
        self.record_token(session);
        *self.last_report.borrow_mut() = Some((case_id, report.clone()));
        self.report_result.borrow().clone()
    }
}

pub fn doctor_session() -> Session {
    Session::new("T1", "42", "doctor").expect("valid session")
}

pub fn doctor_login_response() -> LoginResponse {
    LoginResponse {
        access_token: "T1".to_string(),
        user_id: "42".to_string(),
        role: "doctor".to_string(),
    }
}

/// In-memory store holding the default doctor session.
pub fn signed_in_store() -> SessionStore {
    let store = SessionStore::in_memory();
    store.write(&doctor_session());
    store
}

/// JSON for a case as the backend sends it.
pub fn case_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "patient_id": 1000 + id,
        "status": status,
        "priority": "High",
        "created_at": "2026-01-20T21:35:00Z",
        "description": format!("Case {id} history"),
    })
}

pub fn case_with_status(id: i64, status: &str) -> CaseRecord {
    serde_json::from_value(case_json(id, status)).expect("case fixture")
}

/// Five cases in a deliberately unsorted order.
pub fn sample_cases() -> Vec<CaseRecord> {
    vec![
        case_with_status(7, "pending"),
        case_with_status(3, "completed"),
        case_with_status(9, "in_progress"),
        case_with_status(1, "pending"),
        case_with_status(4, "report_submitted"),
    ]
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend crashed");
    });
    format!("http://{addr}")
}

pub fn http_api(base_url: &str) -> HttpPortalApi {
    HttpPortalApi::new(PortalConfig::default().with_base_url(base_url))
}
