use shared_types::{find_case, parse_case_id, AppError, AppErrorKind, CaseLookup, CaseRecord};

use super::{reject_session, ActionOutcome, Redirect};
use crate::api::PortalApi;
use crate::session::SessionStore;

pub const LOAD_CASES_FAILED: &str = "Failed to load cases. Please try refreshing the page.";
pub const CASE_ACCESS_DENIED: &str = "Access denied. You are not authorized to view this case.";
pub const CASE_NOT_ON_SERVER: &str = "Case not found on the server.";
pub const LOAD_CASE_FAILED: &str = "Failed to load case details. Please check your connection.";

/// Message for an id that matches nothing the doctor can see.
pub fn case_not_accessible(raw_id: &str) -> String {
    format!("Case #{raw_id} not found or you do not have access.")
}

/// Fetch the signed-in doctor's cases in backend order.
pub async fn load_cases(api: &dyn PortalApi, store: &SessionStore) -> ActionOutcome<Vec<CaseRecord>> {
    let Some(session) = store.read_doctor() else {
        return ActionOutcome::Redirect(Redirect::Login);
    };

    match api.list_cases(&session).await {
        Ok(cases) => {
            tracing::debug!(count = cases.len(), "cases loaded");
            ActionOutcome::Ready(cases)
        }
        Err(err) if err.is_unauthorized() => reject_session(store, "list_cases"),
        Err(err) => ActionOutcome::Failed(err.with_message(LOAD_CASES_FAILED)),
    }
}

/// Fetch one case for the detail screen using the configured strategy.
///
/// `raw_id` is the path segment as typed; an id that is not an integer is
/// reported as not found without contacting the backend.
pub async fn load_case(
    api: &dyn PortalApi,
    store: &SessionStore,
    lookup: CaseLookup,
    raw_id: &str,
) -> ActionOutcome<CaseRecord> {
    let Some(session) = store.read_doctor() else {
        return ActionOutcome::Redirect(Redirect::Login);
    };
    let Some(case_id) = parse_case_id(raw_id) else {
        return ActionOutcome::Failed(AppError::not_found(case_not_accessible(raw_id)));
    };

    let result = match lookup {
        CaseLookup::ById => api.get_case(&session, case_id).await.map(Some),
        CaseLookup::List => api
            .list_cases(&session)
            .await
            .map(|cases| find_case(cases, case_id)),
    };

    match result {
        Ok(Some(case)) => ActionOutcome::Ready(case),
        Ok(None) => ActionOutcome::Failed(AppError::not_found(case_not_accessible(raw_id))),
        Err(err) if err.is_unauthorized() => reject_session(store, "load_case"),
        Err(err) => ActionOutcome::Failed(case_failure(err)),
    }
}

fn case_failure(err: AppError) -> AppError {
    match err.kind {
        AppErrorKind::Forbidden => err.with_message(CASE_ACCESS_DENIED),
        AppErrorKind::NotFound => err.with_message(CASE_NOT_ON_SERVER),
        _ => err.with_message(LOAD_CASE_FAILED),
    }
}
