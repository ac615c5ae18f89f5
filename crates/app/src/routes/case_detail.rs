use client::actions::report::REPORT_SUBMITTED;
use client::actions::{load_case, submit_report};
use client::ActionOutcome;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdCalendar, LdFileText, LdSend, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{CaseRecord, PortalConfig};
use shared_ui::{
    use_toast, Alert, AlertSeverity, Badge, Button, ButtonVariant, Card, CardContent,
    CardDescription, CardFooter, CardHeader, CardTitle, CardVariant, Input, LoadingBlock,
    Textarea, ToastOptions,
};

use crate::format_helpers::{file_name, format_date_human, status_badge};
use crate::routes::{try_begin, RedirectNotice, Route};
use crate::session::use_session;
use crate::PortalContext;

/// Case detail screen, keyed on the path id. Changing the id drops the
/// in-flight fetch and starts a new one.
#[component]
pub fn CaseDetail(id: String) -> Element {
    let portal = use_context::<PortalContext>();
    let session = use_session();
    let nav = navigator();
    let lookup = portal.config.api.case_lookup;
    let config = portal.config.clone();

    let case = use_resource(use_reactive!(|(id,)| {
        let api = portal.api.clone();
        let mut session = session.clone();
        async move {
            tracing::debug!(case_id = %id, "loading case");
            let outcome = load_case(api.as_ref(), &session.store, lookup, &id).await;
            if outcome.redirect().is_some() {
                session.forget();
                nav.replace(Route::Login {});
            }
            outcome
        }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./case_detail.css") }

        match &*case.read() {
            None => rsx! {
                div { class: "case-page",
                    LoadingBlock { caption: "Loading case...", lines: 6 }
                }
            },
            Some(ActionOutcome::Ready(record)) => rsx! {
                CaseView { record: record.clone(), config: config.clone() }
            },
            Some(ActionOutcome::Failed(err)) => rsx! {
                div { class: "case-page",
                    Alert { {err.user_message().to_string()} }
                    BackToDashboard {}
                }
            },
            Some(ActionOutcome::Redirect(_)) => rsx! { RedirectNotice {} },
        }
    }
}

#[component]
fn BackToDashboard() -> Element {
    rsx! {
        div { class: "case-back",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    navigator().push(Route::Dashboard {});
                },
                "Back to Dashboard"
            }
        }
    }
}

#[component]
fn CaseView(record: CaseRecord, config: PortalConfig) -> Element {
    let (status_label, status_variant) = status_badge(record.status);
    let title = format!("Case #{} - Patient {}", record.id, record.patient_id);
    let locked = record.status.is_report_locked();

    rsx! {
        div { class: "case-shell",
            header { class: "portal-bar",
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Back to dashboard",
                    onclick: move |_| {
                        navigator().push(Route::Dashboard {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 18, height: 18 }
                }
                h1 { class: "case-bar-title", "{title}" }
                Badge { variant: status_variant, "{status_label}" }
            }

            main { class: "case-page case-grid",
                div { class: "case-main",
                    CaseInformation { record: record.clone() }
                    ReportForm { key: "{record.id}", case_id: record.id, locked }
                }
                aside { class: "case-side",
                    PatientFiles { record: record.clone(), config }
                }
            }
        }
    }
}

#[component]
fn CaseInformation(record: CaseRecord) -> Element {
    let created = format_date_human(&record.created_at);
    let description = record
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description provided".to_string());
    let questions = record.ai_questions().to_vec();
    let priority = record.priority_label().to_string();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Case Information" }
            }
            CardContent {
                div { class: "case-facts",
                    div { class: "case-fact",
                        span { class: "case-fact-label",
                            Icon::<LdUser> { icon: LdUser, width: 14, height: 14 }
                            "Patient ID:"
                        }
                        strong { "{record.patient_id}" }
                    }
                    div { class: "case-fact",
                        span { class: "case-fact-label",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                            "Created:"
                        }
                        span { "{created}" }
                    }
                    div { class: "case-fact",
                        span { class: "case-fact-label", "Priority:" }
                        span { "{priority}" }
                    }
                }

                h4 { class: "case-section-title", "Medical History" }
                Card { variant: CardVariant::Muted,
                    CardContent { p { "{description}" } }
                }

                if let Some(transcript) = record.audio_transcript.clone().filter(|t| !t.trim().is_empty()) {
                    h4 { class: "case-section-title", "Audio Transcript" }
                    Card { variant: CardVariant::Muted,
                        CardContent { p { "{transcript}" } }
                    }
                }

                if !questions.is_empty() {
                    h4 { class: "case-section-title", "AI-Suggested Questions" }
                    ol { class: "case-questions",
                        for question in questions {
                            li { "{question}" }
                        }
                    }
                }
            }
        }
    }
}

/// Report form. Disabled while a submission is outstanding and for cases
/// whose report is already complete.
#[component]
fn ReportForm(case_id: i64, locked: bool) -> Element {
    let portal = use_context::<PortalContext>();
    let session = use_session();
    let toast = use_toast();
    let nav = navigator();

    let mut report_text = use_signal(String::new);
    let mut diagnosis = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |_: MouseEvent| {
        if locked || !try_begin(submitting) {
            return;
        }
        error.set(None);

        let api = portal.api.clone();
        let mut session = session.clone();
        spawn(async move {
            let outcome = submit_report(
                api.as_ref(),
                &session.store,
                case_id,
                &report_text(),
                &diagnosis(),
            )
            .await;

            match outcome {
                ActionOutcome::Ready(_) => {
                    toast.success(REPORT_SUBMITTED.to_string(), ToastOptions::new());
                    nav.push(Route::Dashboard {});
                }
                ActionOutcome::Redirect(_) => {
                    session.forget();
                    nav.replace(Route::Login {});
                }
                ActionOutcome::Failed(err) => {
                    error.set(Some(err.user_message().to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        ReportFields {
            report_text: report_text(),
            diagnosis: diagnosis(),
            locked,
            submitting: submitting(),
            error: error(),
            on_report_input: move |value: String| report_text.set(value),
            on_diagnosis_input: move |value: String| diagnosis.set(value),
            on_submit: handle_submit,
        }
    }
}

/// Markup of the report form, driven entirely by its props.
#[component]
fn ReportFields(
    report_text: String,
    diagnosis: String,
    locked: bool,
    submitting: bool,
    error: Option<String>,
    on_report_input: EventHandler<String>,
    on_diagnosis_input: EventHandler<String>,
    on_submit: EventHandler<MouseEvent>,
) -> Element {
    let fields_disabled = submitting || locked;
    let can_submit = !fields_disabled && !report_text.trim().is_empty();

    rsx! {
        Card { class: "case-report",
            CardHeader {
                div {
                    CardTitle { "Medical Report" }
                    if locked {
                        CardDescription { "A report has already been submitted for this case." }
                    }
                }
            }
            CardContent {
                if let Some(message) = error {
                    Alert { "{message}" }
                }
                Input {
                    id: "diagnosis",
                    label: "Diagnosis (Optional)",
                    placeholder: "Primary diagnosis or condition",
                    disabled: fields_disabled,
                    value: diagnosis,
                    on_input: move |e: FormEvent| on_diagnosis_input.call(e.value()),
                }
                Textarea {
                    id: "report",
                    label: "Medical Report",
                    placeholder: "Please provide your detailed assessment...",
                    rows: 8,
                    required: true,
                    disabled: fields_disabled,
                    value: report_text,
                    on_input: move |e: FormEvent| on_report_input.call(e.value()),
                }
            }
            CardFooter {
                span { "* Required field" }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !can_submit,
                    loading: submitting,
                    loading_label: "Submitting...",
                    onclick: move |e: MouseEvent| on_submit.call(e),
                    Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                    "Submit Report"
                }
            }
        }
    }
}

#[component]
fn PatientFiles(record: CaseRecord, config: PortalConfig) -> Element {
    let files: Vec<(String, String)> = record
        .attachment_paths()
        .into_iter()
        .map(|path| (file_name(path).to_string(), config.file_url(path)))
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Patient Files" }
            }
            CardContent {
                if files.is_empty() {
                    Alert { severity: AlertSeverity::Info, "No files attached to this case." }
                } else {
                    ul { class: "case-files",
                        for (name, url) in files {
                            li { key: "{url}",
                                a {
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                                    "{name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
