use serde::{Deserialize, Serialize};

use crate::common::string_or_number;

// ── Status vocabulary ───────────────────────────────────────────────

/// Lifecycle status of a patient case.
///
/// A missing status is treated as `Pending`. Statuses the portal does not
/// know about deserialize as `Unknown` instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    #[default]
    Pending,
    InProgress,
    #[serde(alias = "report_submitted")]
    Completed,
    #[serde(other)]
    Unknown,
}

/// Canonical status strings accepted by the backend.
pub const CASE_STATUSES: &[&str] = &["pending", "in_progress", "completed"];

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::Completed => "completed",
            CaseStatus::Unknown => "unknown",
        }
    }

    /// Human-readable label for badges and headers.
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Completed => "Completed",
            CaseStatus::Unknown => "Unknown",
        }
    }

    /// Display tone used to color the status badge.
    pub fn tone(&self) -> StatusTone {
        match self {
            CaseStatus::Pending => StatusTone::Warning,
            CaseStatus::InProgress => StatusTone::Info,
            CaseStatus::Completed => StatusTone::Success,
            CaseStatus::Unknown => StatusTone::Neutral,
        }
    }

    /// A report has already been filed; the report form is read-only.
    pub fn is_report_locked(&self) -> bool {
        matches!(self, CaseStatus::Completed)
    }
}

/// Color family for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Warning,
    Info,
    Success,
    Neutral,
}

// ── Case record ─────────────────────────────────────────────────────

/// Priority label shown when the backend leaves it empty.
pub const DEFAULT_PRIORITY: &str = "Normal";

/// A patient consultation assigned to the signed-in doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub patient_id: String,
    #[serde(default, deserialize_with = "nullable_status")]
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, alias = "medical_history", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_questions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_file_paths: Option<Vec<String>>,
}

fn nullable_status<'de, D>(deserializer: D) -> Result<CaseStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<CaseStatus>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CaseRecord {
    pub fn priority_label(&self) -> &str {
        self.priority
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_PRIORITY)
    }

    /// Attachment paths in display order: audio first, then documents.
    pub fn attachment_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        if let Some(audio) = self.audio_file_path.as_deref().filter(|p| !p.is_empty()) {
            paths.push(audio);
        }
        if let Some(docs) = &self.document_file_paths {
            paths.extend(docs.iter().map(String::as_str).filter(|p| !p.is_empty()));
        }
        paths
    }

    pub fn ai_questions(&self) -> &[String] {
        self.ai_questions.as_deref().unwrap_or(&[])
    }
}

/// Body of the case-list endpoint: a bare array or `{ "cases": [...] }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CaseListResponse {
    Bare(Vec<CaseRecord>),
    Wrapped { cases: Vec<CaseRecord> },
}

impl CaseListResponse {
    pub fn into_cases(self) -> Vec<CaseRecord> {
        match self {
            CaseListResponse::Bare(cases) => cases,
            CaseListResponse::Wrapped { cases } => cases,
        }
    }
}

/// Parse the case identifier embedded in a `/case/:id` path.
pub fn parse_case_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Select a case by id from a loaded list.
pub fn find_case(cases: Vec<CaseRecord>, id: i64) -> Option<CaseRecord> {
    cases.into_iter().find(|c| c.id == id)
}

// ── Aggregate counts ────────────────────────────────────────────────

/// Summary numbers shown above the case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl CaseCounts {
    /// One linear pass over the loaded cases.
    pub fn from_cases(cases: &[CaseRecord]) -> Self {
        cases.iter().fold(
            CaseCounts {
                total: cases.len(),
                ..CaseCounts::default()
            },
            |mut counts, c| {
                match c.status {
                    CaseStatus::Pending => counts.pending += 1,
                    CaseStatus::InProgress => counts.in_progress += 1,
                    CaseStatus::Completed => counts.completed += 1,
                    CaseStatus::Unknown => {}
                }
                counts
            },
        )
    }
}
