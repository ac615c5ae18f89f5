use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, CaseListResponse, CaseRecord, LoginRequest, LoginResponse, PortalConfig, ReportAck,
    ReportSubmission, Session,
};

use super::PortalApi;

/// `reqwest`-backed implementation of [`PortalApi`].
#[derive(Clone)]
pub struct HttpPortalApi {
    client: Client,
    config: PortalConfig,
}

impl HttpPortalApi {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Send a request and hand back the successful response.
    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request did not reach the backend");
            AppError::network(format!("Network error: {e}"))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = AppError::parse_detail(&body);
        tracing::warn!(status = status.as_u16(), detail = ?detail, "backend rejected request");
        Err(
            AppError::from_status(status.as_u16(), format!("Request failed with status {status}"))
                .with_detail(detail),
        )
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::internal(format!("Unexpected response from server: {e}")))
    }
}

#[async_trait(?Send)]
impl PortalApi for HttpPortalApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        tracing::debug!("POST /auth/login");
        self.send_json(self.client.post(self.url("/auth/login")).json(request))
            .await
    }

    async fn list_cases(&self, session: &Session) -> Result<Vec<CaseRecord>, AppError> {
        tracing::debug!("GET /doctor/cases");
        let body: CaseListResponse = self
            .send_json(
                self.client
                    .get(self.url("/doctor/cases"))
                    .bearer_auth(&session.access_token),
            )
            .await?;
        Ok(body.into_cases())
    }

    async fn get_case(&self, session: &Session, case_id: i64) -> Result<CaseRecord, AppError> {
        tracing::debug!(case_id, "GET /doctor/cases/{{id}}");
        self.send_json(
            self.client
                .get(self.url(&format!("/doctor/cases/{case_id}")))
                .bearer_auth(&session.access_token),
        )
        .await
    }

    async fn submit_report(
        &self,
        session: &Session,
        case_id: i64,
        report: &ReportSubmission,
    ) -> Result<ReportAck, AppError> {
        tracing::debug!(case_id, "POST /doctor/cases/{{id}}/report");
        let response = self
            .send(
                self.client
                    .post(self.url(&format!("/doctor/cases/{case_id}/report")))
                    .bearer_auth(&session.access_token)
                    .json(report),
            )
            .await?;
        // Acknowledgment bodies vary between backends; a 2xx is what counts.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
