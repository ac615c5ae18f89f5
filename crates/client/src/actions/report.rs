use shared_types::{AppErrorKind, ReportAck, ReportSubmission};

use super::{reject_session, ActionOutcome, Redirect};
use crate::api::PortalApi;
use crate::session::SessionStore;

pub const REPORT_SUBMITTED: &str = "Medical report submitted successfully!";
pub const REPORT_CASE_MISSING: &str = "Case not found. It may have been deleted or moved.";
pub const REPORT_FAILED: &str = "Failed to submit report. Please try again.";

/// Validate and send a report for `case_id`.
///
/// A blank report fails locally without a request. The caller keeps its
/// submit control disabled until this resolves.
pub async fn submit_report(
    api: &dyn PortalApi,
    store: &SessionStore,
    case_id: i64,
    report_text: &str,
    diagnosis: &str,
) -> ActionOutcome<ReportAck> {
    let report = match ReportSubmission::from_form(report_text, diagnosis) {
        Ok(report) => report,
        Err(err) => return ActionOutcome::Failed(err),
    };
    let Some(session) = store.read_doctor() else {
        return ActionOutcome::Redirect(Redirect::Login);
    };

    match api.submit_report(&session, case_id, &report).await {
        Ok(ack) => {
            tracing::info!(case_id, "medical report submitted");
            ActionOutcome::Ready(ack)
        }
        Err(err) if err.is_unauthorized() => reject_session(store, "submit_report"),
        Err(err) if err.kind == AppErrorKind::NotFound => {
            ActionOutcome::Failed(err.with_message(REPORT_CASE_MISSING))
        }
        Err(err) => ActionOutcome::Failed(err.with_message(REPORT_FAILED)),
    }
}
