use dioxus::prelude::*;

/// Horizontal alignment of a column and its cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CellAlign {
    #[default]
    Start,
    End,
}

impl CellAlign {
    fn class(&self) -> &'static str {
        match self {
            CellAlign::Start => "align-start",
            CellAlign::End => "align-end",
        }
    }
}

/// Scrollable table wrapper. `label` becomes the table's accessible name.
#[component]
pub fn DataTable(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table { "aria-label": "{label}",
                {children}
            }
        }
    }
}

/// Wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(#[props(default)] align: CellAlign, children: Element) -> Element {
    rsx! {
        th { class: align.class(), scope: "col", {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(#[props(default)] align: CellAlign, children: Element) -> Element {
    rsx! {
        td { class: align.class(), {children} }
    }
}
