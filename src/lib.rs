//! Styled text codec.
//!
//! Converts between platform-independent [`Style`]s and the native spans of
//! a text rendering engine. Link-like decorations the engine cannot express
//! are carried in a small category language written into a span's metadata
//! string; see [`category`].

pub mod category;
pub mod config;
mod error;
pub mod extract;
pub mod group;
pub mod realize;
pub mod span;
pub mod style;
pub mod wire;

pub use config::CodecOptions;
pub use error::Error;
pub use style::{Style, StyledText, TextRange};

use span::AttachedSpan;
use std::fs;
use std::path::Path;
use style::{CodecInfo, RangeEncoding, SCHEMA_VERSION, SpanEntry, SpanFile, StyleFile};
use tracing::{debug, warn};
use wire::SpanRecord;

/// Encodes `text` into the native spans that render it.
pub fn encode(text: &StyledText, opts: &CodecOptions) -> Result<SpanFile, Error> {
    let (attached, diagnostics) = realize::realize(text, opts)?;
    let mut spans = Vec::with_capacity(attached.len());
    for a in attached {
        match SpanRecord::from_span(&*a.span) {
            Some(span) => spans.push(SpanEntry {
                range: a.range,
                span,
            }),
            // realization only produces built-in kinds.
            None => warn!(range = %a.range, span = ?a.span, "span kind has no record"),
        }
    }
    Ok(SpanFile {
        schema_version: SCHEMA_VERSION,
        codec: CodecInfo::default(),
        range_encoding: RangeEncoding::default(),
        text: text.text.clone(),
        spans,
        diagnostics,
    })
}

/// Recovers the styled text described by a span file.
pub fn decode(file: &SpanFile, opts: &CodecOptions) -> Result<StyleFile, Error> {
    let len = file.text.chars().count();
    let mut attached = Vec::with_capacity(file.spans.len());
    for entry in &file.spans {
        let range = TextRange::try_new(entry.range.start, entry.range.end)?;
        if range.end > len {
            return Err(Error::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        attached.push(AttachedSpan {
            range,
            span: entry.span.clone().into_span(),
        });
    }

    let parts = group::partition(len, &attached);
    let (styles, diagnostics) = group::decode_parts(&parts, opts.decode_options())?;
    debug!(
        spans = attached.len(),
        styles = styles.len(),
        skipped = diagnostics.len(),
        "decoded span file"
    );
    Ok(StyleFile {
        schema_version: SCHEMA_VERSION,
        codec: CodecInfo::default(),
        text: file.text.clone(),
        styles,
        diagnostics,
    })
}

/// Reads a styled text JSON file and returns the pretty JSON span file.
///
/// Any JSON object with `text` and `styles` is accepted, including the
/// output of [`decode_file`].
pub fn encode_file(input: &Path, opts: &CodecOptions) -> Result<String, Box<dyn std::error::Error>> {
    let json_text = fs::read_to_string(input)?;
    let text: StyledText = serde_json::from_str(&json_text)?;
    let out = encode(&text, opts)?;
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Reads a span JSON file and returns the pretty JSON styled text file.
pub fn decode_file(input: &Path, opts: &CodecOptions) -> Result<String, Box<dyn std::error::Error>> {
    let json_text = fs::read_to_string(input)?;
    let file: SpanFile = serde_json::from_str(&json_text)?;
    if file.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "unsupported schema_version {} (expected {SCHEMA_VERSION})",
            file.schema_version
        )
        .into());
    }
    let out = decode(&file, opts)?;
    Ok(serde_json::to_string_pretty(&out)?)
}
