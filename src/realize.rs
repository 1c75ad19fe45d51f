//! `Style` -> native span realization.
//!
//! This is the encoding direction of the codec: every abstract style becomes
//! one native span, and styles the engine cannot express directly get their
//! meaning written into a category string.

use crate::Error;
use crate::category::Category;
use crate::config::CodecOptions;
use crate::span::{AttachedSpan, SpanRef, StyleSpan, TextAppearanceSpan};
use crate::style::{Diagnostic, Style, StyledText};
use std::sync::Arc;
use tracing::debug;

/// The native span that renders `style`.
pub fn realize_style(style: &Style, opts: &CodecOptions) -> Result<SpanRef, Error> {
    let category = match style {
        Style::Bold { .. } => return Ok(Arc::new(StyleSpan::bold())),
        Style::Italic { .. } => return Ok(Arc::new(StyleSpan::italic())),
        Style::Hashtag { .. } => Category::hashtag(),
        Style::Email { .. } => Category::email(),
        Style::Link { target, .. } => Category::link(target.clone()),
        Style::Mention { target, .. } => Category::mention(target.clone()),
    };
    Ok(Arc::new(TextAppearanceSpan::categorized(
        opts.link_color,
        category.encode()?,
    )))
}

/// Realizes every style of `text`, in order.
///
/// Ranges are checked against the text first. Styles with an empty range
/// have nothing to attach to; they are skipped and reported.
pub fn realize(
    text: &StyledText,
    opts: &CodecOptions,
) -> Result<(Vec<AttachedSpan>, Vec<Diagnostic>), Error> {
    text.validate()?;

    let mut attached = Vec::with_capacity(text.styles.len());
    let mut diagnostics = Vec::new();
    for style in &text.styles {
        let range = style.range();
        if range.is_empty() {
            debug!(range = %range, kind = ?style.kind(), "skipping empty style");
            diagnostics.push(Diagnostic::empty_range(range));
            continue;
        }
        attached.push(AttachedSpan {
            range,
            span: realize_style(style, opts)?,
        });
    }
    Ok((attached, diagnostics))
}
