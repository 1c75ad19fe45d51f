use crate::style::TextRange;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic emitted while encoding or decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// The direction of the codec that produced the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticPhase {
    /// Styles -> native spans.
    Encode,
    /// Native spans -> styles.
    Decode,
}

/// A structured diagnostic describing a span or style the codec had to skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<DiagnosticPhase>,

    /// A stable identifier like `category.malformed_target`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Human readable message.
    pub message: String,

    /// The text range this diagnostic refers to, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<TextRange>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// A warning for a span whose styles were dropped during decoding.
    pub fn skipped_span(range: TextRange, index: usize, err: &Error) -> Self {
        Self {
            severity: Severity::Warning,
            phase: Some(DiagnosticPhase::Decode),
            code: Some(err.code().to_string()),
            message: err.to_string(),
            range: Some(range),
            notes: vec![format!("span #{index} in the group was skipped")],
        }
    }

    /// An info note for a style that had nothing to attach to.
    pub fn empty_range(range: TextRange) -> Self {
        Self {
            severity: Severity::Info,
            phase: Some(DiagnosticPhase::Encode),
            code: Some("range.empty".to_string()),
            message: format!("style at {range} covers no text and was not attached"),
            range: Some(range),
            notes: vec![],
        }
    }
}
