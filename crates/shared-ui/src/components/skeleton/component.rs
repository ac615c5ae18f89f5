use dioxus::prelude::*;

/// Pulsing placeholder bar.
#[component]
fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-hidden": "true",
            ..merged,
        }
    }
}

/// Full-width loading state: a caption above `lines` skeleton bars.
#[component]
pub fn LoadingBlock(#[props(default)] caption: String, #[props(default = 3)] lines: usize) -> Element {
    rsx! {
        div { class: "loading-block", role: "status",
            if !caption.is_empty() {
                p { class: "loading-caption", "{caption}" }
            }
            for _ in 0..lines {
                Skeleton {}
            }
        }
    }
}
