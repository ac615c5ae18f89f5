use serde::{Deserialize, Serialize};

use crate::common::trimmed_or_none;
use crate::error::AppError;

pub const REPORT_REQUIRED: &str = "Please provide a medical report before submitting.";

/// A doctor's report for one case, validated and ready to send.
///
/// Serializes to the body of `POST /doctor/cases/{id}/report`; an empty
/// diagnosis goes out as `null`, never as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub report_text: String,
    pub diagnosis: Option<String>,
}

impl ReportSubmission {
    /// Validate raw form input. Both fields are trimmed.
    pub fn from_form(report_text: &str, diagnosis: &str) -> Result<Self, AppError> {
        let report_text =
            trimmed_or_none(report_text).ok_or_else(|| AppError::field("report_text", REPORT_REQUIRED))?;
        Ok(Self {
            report_text,
            diagnosis: trimmed_or_none(diagnosis),
        })
    }
}

/// Acknowledgment returned after a report is stored. Every field is optional
/// because backends differ in what they echo back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
