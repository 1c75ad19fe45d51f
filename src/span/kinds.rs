//! Span kinds of the host rendering engine.
//!
//! These mirror the engine's decoration objects field for field. Like the
//! engine's own objects they have no value equality; two instances are only
//! comparable through a [`SpanEquality`](super::SpanEquality) registry.

use super::{Color, NativeSpan};
use serde::{Deserialize, Serialize};

/// Typeface style bits (bold and/or italic).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StyleSpan {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl StyleSpan {
    pub fn bold() -> Self {
        Self {
            bold: true,
            italic: false,
        }
    }

    pub fn italic() -> Self {
        Self {
            bold: false,
            italic: true,
        }
    }
}

impl NativeSpan for StyleSpan {
    fn is_bold(&self) -> bool {
        self.bold
    }

    fn is_italic(&self) -> bool {
        self.italic
    }
}

/// A typeface with an explicit numeric weight (1..=1000).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypefaceSpan {
    pub weight: u16,
}

impl NativeSpan for TypefaceSpan {
    fn is_bold(&self) -> bool {
        // weights are bucketed to the nearest named weight rounding up, and
        // only the 700 bucket is "bold".
        (601..=700).contains(&self.weight)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForegroundColorSpan {
    pub color: Color,
}

impl NativeSpan for ForegroundColorSpan {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BackgroundColorSpan {
    pub color: Color,
}

impl NativeSpan for BackgroundColorSpan {}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnderlineSpan;

impl NativeSpan for UnderlineSpan {}

#[derive(Debug, Clone, Copy, Default)]
pub struct StrikethroughSpan;

impl NativeSpan for StrikethroughSpan {}

/// A clickable URL handled by the engine itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlSpan {
    pub url: String,
}

impl NativeSpan for UrlSpan {}

/// A bundle of text appearance attributes.
///
/// Its font feature settings are the only free-form string a span exposes,
/// which is why category strings are written there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextAppearanceSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_feature_settings: Option<String>,
}

impl TextAppearanceSpan {
    /// A link-coloured span carrying `category`.
    pub fn categorized(color: Color, category: String) -> Self {
        Self {
            color: Some(color),
            font_feature_settings: Some(category),
        }
    }
}

impl NativeSpan for TextAppearanceSpan {
    fn metadata(&self) -> Option<&str> {
        self.font_feature_settings.as_deref()
    }
}
