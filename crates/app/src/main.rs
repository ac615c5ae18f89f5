use std::rc::Rc;

use client::{HttpPortalApi, PortalApi, SessionStore};
use dioxus::prelude::*;
use shared_types::PortalConfig;

mod format_helpers;
mod routes;
mod session;
use routes::Route;
use session::SessionState;

const PORTAL_TOML: &str = include_str!("../../../portal.toml");

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend handle and configuration shared by every screen.
#[derive(Clone)]
pub struct PortalContext {
    pub api: Rc<dyn PortalApi>,
    pub config: PortalConfig,
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = client::config::load_config(PORTAL_TOML, option_env!("PORTAL_API_BASE_URL")).clone();
        PortalContext {
            api: Rc::new(HttpPortalApi::new(config.clone())),
            config,
        }
    });

    use_context_provider(|| SessionState::new(SessionStore::platform_default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
