use shared_types::{validate_login, AppError, AppErrorKind, Session};

use super::Redirect;
use crate::api::PortalApi;
use crate::session::SessionStore;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please check your credentials.";
pub const SERVER_UNREACHABLE: &str =
    "Unable to connect to server. Please check your internet connection.";
pub const SERVER_ERROR: &str = "Server error occurred";
pub const DOCTORS_ONLY: &str = "This portal is available to doctors only.";

/// Validate the form, authenticate and persist the session.
///
/// Validation failures return before any request is made. On success the
/// stored session is returned and the caller performs a full navigation to
/// the dashboard.
pub async fn submit_login(
    api: &dyn PortalApi,
    store: &SessionStore,
    identifier: &str,
    secret: &str,
) -> Result<Session, AppError> {
    let request = validate_login(identifier, secret)?;

    let response = api.login(&request).await.map_err(login_failure)?;
    let session = response.into_session()?;
    if !session.is_doctor() {
        tracing::warn!(role = %session.role, "non-doctor account tried to sign in");
        return Err(AppError::forbidden(DOCTORS_ONLY));
    }

    store.write(&session);
    tracing::info!(user_id = %session.user_id, "doctor signed in");
    Ok(session)
}

/// Where a visitor of the sign-in screen belongs: already signed-in
/// doctors go straight to the dashboard.
pub fn landing(store: &SessionStore) -> Option<Redirect> {
    store.read_doctor().map(|_| Redirect::Dashboard)
}

/// Clear the stored session unconditionally.
pub fn sign_out(store: &SessionStore) {
    store.clear();
    tracing::info!("doctor signed out");
}

fn login_failure(err: AppError) -> AppError {
    match err.kind {
        AppErrorKind::Unauthorized => AppError::unauthorized(INVALID_CREDENTIALS),
        AppErrorKind::NetworkError => AppError::network(SERVER_UNREACHABLE),
        _ => {
            let message = err.detail.clone().unwrap_or_else(|| SERVER_ERROR.to_string());
            err.with_message(message)
        }
    }
}
