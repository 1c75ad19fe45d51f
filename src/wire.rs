//! JSON representation of the built-in span kinds.

use crate::span::{
    BackgroundColorSpan, ForegroundColorSpan, NativeSpan, SpanRef, StrikethroughSpan, StyleSpan,
    TextAppearanceSpan, TypefaceSpan, UnderlineSpan, UrlSpan,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A built-in native span, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanRecord {
    Style(StyleSpan),
    Typeface(TypefaceSpan),
    ForegroundColor(ForegroundColorSpan),
    BackgroundColor(BackgroundColorSpan),
    Underline,
    Strikethrough,
    Url(UrlSpan),
    TextAppearance(TextAppearanceSpan),
}

impl SpanRecord {
    /// A fresh native span with this record's fields.
    pub fn into_span(self) -> SpanRef {
        match self {
            SpanRecord::Style(s) => Arc::new(s),
            SpanRecord::Typeface(s) => Arc::new(s),
            SpanRecord::ForegroundColor(s) => Arc::new(s),
            SpanRecord::BackgroundColor(s) => Arc::new(s),
            SpanRecord::Underline => Arc::new(UnderlineSpan),
            SpanRecord::Strikethrough => Arc::new(StrikethroughSpan),
            SpanRecord::Url(s) => Arc::new(s),
            SpanRecord::TextAppearance(s) => Arc::new(s),
        }
    }

    /// The record for `span`, or `None` if it is not a built-in kind.
    pub fn from_span(span: &dyn NativeSpan) -> Option<SpanRecord> {
        let any = span.as_any();
        if let Some(s) = any.downcast_ref::<StyleSpan>() {
            return Some(SpanRecord::Style(*s));
        }
        if let Some(s) = any.downcast_ref::<TypefaceSpan>() {
            return Some(SpanRecord::Typeface(*s));
        }
        if let Some(s) = any.downcast_ref::<ForegroundColorSpan>() {
            return Some(SpanRecord::ForegroundColor(*s));
        }
        if let Some(s) = any.downcast_ref::<BackgroundColorSpan>() {
            return Some(SpanRecord::BackgroundColor(*s));
        }
        if any.is::<UnderlineSpan>() {
            return Some(SpanRecord::Underline);
        }
        if any.is::<StrikethroughSpan>() {
            return Some(SpanRecord::Strikethrough);
        }
        if let Some(s) = any.downcast_ref::<UrlSpan>() {
            return Some(SpanRecord::Url(s.clone()));
        }
        any.downcast_ref::<TextAppearanceSpan>()
            .map(|s| SpanRecord::TextAppearance(s.clone()))
    }
}
