//! The backend HTTP contract as an async trait.

mod http;

pub use http::HttpPortalApi;

use async_trait::async_trait;
use shared_types::{AppError, CaseRecord, LoginRequest, LoginResponse, ReportAck, ReportSubmission, Session};

/// Remote operations the portal performs.
///
/// Implementations report failures as classified [`AppError`]s; status
/// codes never leak past this seam.
#[async_trait(?Send)]
pub trait PortalApi {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    /// `GET /doctor/cases`, in backend order.
    async fn list_cases(&self, session: &Session) -> Result<Vec<CaseRecord>, AppError>;

    /// `GET /doctor/cases/{id}`.
    async fn get_case(&self, session: &Session, case_id: i64) -> Result<CaseRecord, AppError>;

    /// `POST /doctor/cases/{id}/report`.
    async fn submit_report(
        &self,
        session: &Session,
        case_id: i64,
        report: &ReportSubmission,
    ) -> Result<ReportAck, AppError>;
}
