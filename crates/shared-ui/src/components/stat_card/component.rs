use dioxus::prelude::*;

use crate::components::card::{Card, CardContent};

/// Tone of the figure in a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Default,
    Warning,
    Info,
    Success,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Default => "default",
            StatTone::Warning => "warning",
            StatTone::Info => "info",
            StatTone::Success => "success",
        }
    }
}

/// A single summary figure with its caption.
#[component]
pub fn StatCard(title: String, value: String, #[props(default)] tone: StatTone) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        Card {
            CardContent {
                StatFigure { title, value, tone }
            }
        }
    }
}

#[component]
fn StatFigure(title: String, value: String, tone: StatTone) -> Element {
    rsx! {
        p { class: "stat-title", "{title}" }
        span { class: "stat-value", "data-tone": tone.class(), "{value}" }
    }
}

/// Responsive grid for a row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
