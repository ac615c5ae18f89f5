//! Screen operations, independent of any rendering layer.
//!
//! Each action checks the session before touching the network, maps a 401
//! from any endpoint to a cleared session plus a login redirect, and turns
//! every other failure into a message the screen can show.

pub mod auth;
pub mod cases;
pub mod report;

pub use auth::{landing, sign_out, submit_login};
pub use cases::{load_case, load_cases};
pub use report::submit_report;

use shared_types::AppError;

use crate::session::SessionStore;

/// Where an action wants the user to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Dashboard,
}

/// Result of a session-protected action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T> {
    Ready(T),
    Redirect(Redirect),
    Failed(AppError),
}

impl<T> ActionOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, ActionOutcome::Ready(_))
    }

    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            ActionOutcome::Redirect(target) => Some(*target),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            ActionOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Shared 401 handling: drop the session wholesale and go back to login.
pub(crate) fn reject_session<T>(store: &SessionStore, origin: &str) -> ActionOutcome<T> {
    tracing::warn!(origin, "session rejected by backend; signing out");
    store.clear();
    ActionOutcome::Redirect(Redirect::Login)
}
