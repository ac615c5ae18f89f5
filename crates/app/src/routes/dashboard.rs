use client::actions::load_cases;
use client::ActionOutcome;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdRefreshCw, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::{CaseCounts, CaseRecord, Session};
use shared_ui::{
    Alert, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    LoadingBlock, PageHeader, PageTitle, StatCard, StatGrid, StatTone,
};

use crate::format_helpers::{format_date_human, status_badge};
use crate::routes::{full_navigation, Route};
use crate::session::use_session;
use crate::PortalContext;

/// Case list screen: summary counts plus the assigned cases in backend order.
#[component]
pub fn Dashboard() -> Element {
    let portal = use_context::<PortalContext>();
    let session = use_session();
    let nav = navigator();

    let mut cases = use_signal(|| Option::<Vec<CaseRecord>>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let session_for_fetch = session.clone();
    let mut fetch = use_resource(move || {
        let api = portal.api.clone();
        let mut session = session_for_fetch.clone();
        async move {
            error.set(None);
            match load_cases(api.as_ref(), &session.store).await {
                ActionOutcome::Ready(list) => cases.set(Some(list)),
                ActionOutcome::Redirect(_) => {
                    session.forget();
                    nav.replace(Route::Login {});
                }
                ActionOutcome::Failed(err) => error.set(Some(err.user_message().to_string())),
            }
        }
    });

    let doctor = signed_in_label(session.current.read().as_ref());
    let loading = !fetch.finished();
    let loaded = cases();

    let mut session_for_logout = session.clone();
    let handle_logout = move |_: MouseEvent| {
        session_for_logout.sign_out();
        full_navigation(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "portal-shell",
            header { class: "portal-bar",
                div { class: "portal-bar-brand",
                    Icon::<LdStethoscope> { icon: LdStethoscope, width: 20, height: 20 }
                    span { "Global Clinic - Doctor Dashboard" }
                }
                if let Some(label) = doctor {
                    span { class: "portal-bar-user", "{label}" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: handle_logout,
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Logout"
                }
            }

            main { class: "dashboard-page",
                PageHeader {
                    PageTitle {
                        subtitle: "Review and manage your assigned patient consultations",
                        "Patient Cases"
                    }
                }

                if let Some(message) = error() {
                    Alert {
                        action: rsx! {
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: loading,
                                onclick: move |_| fetch.restart(),
                                "Retry"
                            }
                        },
                        "{message}"
                    }
                }

                match loaded {
                    None if loading => rsx! {
                        LoadingBlock { caption: "Loading cases...", lines: 4 }
                    },
                    None => rsx! {},
                    Some(list) => rsx! {
                        CaseSummary { counts: CaseCounts::from_cases(&list) }
                        Card {
                            CardHeader {
                                CardTitle { "Case Management" }
                                Button {
                                    variant: ButtonVariant::Outline,
                                    loading: loading,
                                    loading_label: "Refreshing...",
                                    onclick: move |_| fetch.restart(),
                                    Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 14, height: 14 }
                                    "Refresh"
                                }
                            }
                            CardContent {
                                if list.is_empty() {
                                    EmptyCases {}
                                } else {
                                    CaseTable { cases: list }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

/// Header label for the signed-in doctor.
fn signed_in_label(current: Option<&Session>) -> Option<String> {
    current.map(|s| format!("Doctor #{}", s.user_id))
}

#[component]
fn CaseSummary(counts: CaseCounts) -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Total Cases", value: "{counts.total}" }
            StatCard { title: "Pending Review", value: "{counts.pending}", tone: StatTone::Warning }
            StatCard { title: "In Progress", value: "{counts.in_progress}", tone: StatTone::Info }
            StatCard { title: "Completed", value: "{counts.completed}", tone: StatTone::Success }
        }
    }
}

#[component]
fn EmptyCases() -> Element {
    rsx! {
        div { class: "dashboard-empty",
            h3 { "No Cases Assigned" }
            p {
                "You currently have no patient cases assigned to you. New cases will appear here when assigned."
            }
        }
    }
}

#[component]
fn CaseTable(cases: Vec<CaseRecord>) -> Element {
    rsx! {
        DataTable { label: "Assigned cases",
            DataTableHeader {
                DataTableColumn { "Case ID" }
                DataTableColumn { "Patient ID" }
                DataTableColumn { "Status" }
                DataTableColumn { "Priority" }
                DataTableColumn { "Created" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                for case in cases {
                    CaseRow { key: "{case.id}", case: case.clone() }
                }
            }
        }
    }
}

#[component]
fn CaseRow(case: CaseRecord) -> Element {
    let detail = Route::CaseDetail { id: case.id.to_string() };
    let (label, variant) = status_badge(case.status);
    let priority = case.priority_label().to_string();
    let created = format_date_human(&case.created_at);

    rsx! {
        DataTableRow {
            DataTableCell { "{case.id}" }
            DataTableCell { "{case.patient_id}" }
            DataTableCell {
                Badge { variant, "{label}" }
            }
            DataTableCell {
                Badge { variant: BadgeVariant::Outline, "{priority}" }
            }
            DataTableCell { "{created}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        navigator().push(detail.clone());
                    },
                    "View Case"
                }
            }
        }
    }
}
