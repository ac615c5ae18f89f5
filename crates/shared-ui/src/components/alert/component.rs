use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo};
use dioxus_free_icons::Icon;

/// Severity of an inline alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertSeverity {
    #[default]
    Error,
    Info,
    Success,
}

impl AlertSeverity {
    fn class(&self) -> &'static str {
        match self {
            AlertSeverity::Error => "error",
            AlertSeverity::Info => "info",
            AlertSeverity::Success => "success",
        }
    }
}

/// Inline banner for validation and request failures.
///
/// `action` renders on the right, typically a "Retry" button.
#[component]
pub fn Alert(
    #[props(default)] severity: AlertSeverity,
    #[props(default)] action: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "alert",
            role: "alert",
            "data-severity": severity.class(),
            AlertIcon { severity }
            div { class: "alert-message", {children} }
            if let Some(action) = action {
                div { class: "alert-action", {action} }
            }
        }
    }
}

#[component]
fn AlertIcon(severity: AlertSeverity) -> Element {
    match severity {
        AlertSeverity::Error => rsx! {
            Icon::<FaCircleExclamation> { icon: FaCircleExclamation, width: 16, height: 16 }
        },
        AlertSeverity::Info => rsx! {
            Icon::<FaCircleInfo> { icon: FaCircleInfo, width: 16, height: 16 }
        },
        AlertSeverity::Success => rsx! {
            Icon::<FaCircleCheck> { icon: FaCircleCheck, width: 16, height: 16 }
        },
    }
}
