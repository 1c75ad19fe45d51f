use crate::style::{Diagnostic, Style, TextRange};
use crate::wire::SpanRecord;
use serde::{Deserialize, Serialize};

/// JSON file holding text together with its abstract styles.
///
/// This is both the input of `encode` and the output of `decode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleFile {
    pub schema_version: u32,

    pub codec: CodecInfo,

    pub text: String,

    #[serde(default)]
    pub styles: Vec<Style>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// JSON file holding text together with the native spans attached to it.
///
/// Native spans have no value equality, so neither does this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanFile {
    pub schema_version: u32,

    pub codec: CodecInfo,

    /// How to interpret all `TextRange` values contained in this file.
    pub range_encoding: RangeEncoding,

    pub text: String,

    /// Spans in application order.
    #[serde(default)]
    pub spans: Vec<SpanEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// A native span and the range it is attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpanEntry {
    pub range: TextRange,

    #[serde(flatten)]
    pub span: SpanRecord,
}

/// Identifies the program that produced a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecInfo {
    pub name: String,
    pub version: String,
}

impl Default for CodecInfo {
    fn default() -> Self {
        Self {
            name: crate::style::CODEC_NAME.to_string(),
            version: crate::style::CODEC_VERSION.to_string(),
        }
    }
}

/// Captures how `TextRange` offsets should be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEncoding {
    pub unit: RangeUnit,
}

impl Default for RangeEncoding {
    fn default() -> Self {
        Self {
            unit: RangeUnit::Char,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeUnit {
    /// Unicode scalar value offsets.
    Char,
}
