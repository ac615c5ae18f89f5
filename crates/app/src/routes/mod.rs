pub mod case_detail;
pub mod dashboard;
pub mod login;
pub mod not_found;

use client::SessionStore;
use dioxus::prelude::*;

use crate::session::use_session;
use case_detail::CaseDetail;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[layout(RequireSession)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/case/:id")]
        CaseDetail { id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Leave the current page entirely so the next screen starts from a fresh
/// mount and reads the session store again.
///
/// Off the web there is no page to reload, so the route is replaced in place.
pub fn full_navigation(to: Route) {
    if cfg!(feature = "web") {
        navigator().push(NavigationTarget::<Route>::External(to.to_string()));
    } else {
        navigator().replace(to);
    }
}

/// Mark a form busy. Returns `false` when it already was, so a second click
/// landing before the spawned request starts is dropped.
pub fn try_begin(mut busy: Signal<bool>) -> bool {
    if *busy.peek() {
        return false;
    }
    busy.set(true);
    true
}

/// Where a visitor is sent instead of a protected screen, if anywhere.
fn guard_redirect(store: &SessionStore) -> Option<Route> {
    store.read_doctor().is_none().then_some(Route::Login {})
}

/// Session guard for the protected screens.
///
/// Runs before any child mounts, so a visitor without a doctor session never
/// triggers a case fetch.
#[component]
fn RequireSession() -> Element {
    let session = use_session();

    let Some(target) = guard_redirect(&session.store) else {
        return rsx! { Outlet::<Route> {} };
    };

    tracing::debug!("no doctor session; redirecting to login");
    navigator().replace(target);
    rsx! { RedirectNotice {} }
}

/// Placeholder rendered while a login redirect is in flight.
#[component]
pub fn RedirectNotice() -> Element {
    rsx! {
        div { class: "guard-redirect",
            p { "Redirecting to login..." }
        }
    }
}
