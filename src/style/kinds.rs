use crate::style::TextRange;
use crate::Error;
use serde::{Deserialize, Serialize};
use url::Url;

/// A platform-independent decoration applied to a range of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Style {
    Bold { range: TextRange },
    Italic { range: TextRange },
    Hashtag { range: TextRange },
    Email { range: TextRange },

    /// A generic hyperlink.
    Link { range: TextRange, target: Url },

    /// A hyperlink that also identifies the profile being mentioned.
    Mention { range: TextRange, target: Url },
}

/// The payload-free discriminant of a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    Bold,
    Italic,
    Hashtag,
    Email,
    Link,
    Mention,
}

impl Style {
    pub fn range(&self) -> TextRange {
        match self {
            Style::Bold { range }
            | Style::Italic { range }
            | Style::Hashtag { range }
            | Style::Email { range }
            | Style::Link { range, .. }
            | Style::Mention { range, .. } => *range,
        }
    }

    pub fn kind(&self) -> StyleKind {
        match self {
            Style::Bold { .. } => StyleKind::Bold,
            Style::Italic { .. } => StyleKind::Italic,
            Style::Hashtag { .. } => StyleKind::Hashtag,
            Style::Email { .. } => StyleKind::Email,
            Style::Link { .. } => StyleKind::Link,
            Style::Mention { .. } => StyleKind::Mention,
        }
    }

    /// The URL a link or mention leads to.
    pub fn target(&self) -> Option<&Url> {
        match self {
            Style::Link { target, .. } | Style::Mention { target, .. } => Some(target),
            _ => None,
        }
    }

    /// The same decoration moved to `range`.
    pub fn at(&self, range: TextRange) -> Style {
        match self {
            Style::Bold { .. } => Style::Bold { range },
            Style::Italic { .. } => Style::Italic { range },
            Style::Hashtag { .. } => Style::Hashtag { range },
            Style::Email { .. } => Style::Email { range },
            Style::Link { target, .. } => Style::Link {
                range,
                target: target.clone(),
            },
            Style::Mention { target, .. } => Style::Mention {
                range,
                target: target.clone(),
            },
        }
    }

    /// Whether both styles decorate text the same way, ignoring where.
    pub fn same_decoration(&self, other: &Style) -> bool {
        self.kind() == other.kind() && self.target() == other.target()
    }
}

/// Coalesces styles with the same decoration whose ranges touch or overlap.
///
/// Decoding a text run by run splits a style at every span transition; this
/// puts the pieces back together. Relative order of first appearance is kept.
pub fn merge_adjacent(styles: Vec<Style>) -> Vec<Style> {
    let mut merged: Vec<Style> = Vec::with_capacity(styles.len());
    for style in styles {
        let range = style.range();
        let joinable = merged.iter_mut().find(|m| {
            let r = m.range();
            m.same_decoration(&style) && r.start <= range.end && range.start <= r.end
        });
        match joinable {
            Some(m) => *m = m.at(m.range().cover(range)),
            None => merged.push(style),
        }
    }
    merged
}

/// Text together with the styles that annotate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StyledText {
    pub text: String,

    #[serde(default)]
    pub styles: Vec<Style>,
}

impl StyledText {
    pub fn new(text: impl Into<String>, styles: Vec<Style>) -> Self {
        Self {
            text: text.into(),
            styles,
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Checks that every style lies within the text.
    pub fn validate(&self) -> Result<(), Error> {
        let len = self.char_len();
        for style in &self.styles {
            let r = style.range();
            if r.start > r.end {
                return Err(Error::InvalidRange {
                    start: r.start,
                    end: r.end,
                });
            }
            if r.end > len {
                return Err(Error::RangeOutOfBounds {
                    start: r.start,
                    end: r.end,
                    len,
                });
            }
        }
        Ok(())
    }

    /// Replaces the text, keeping styles that still fit.
    ///
    /// Styles entirely inside the new text are kept as-is, styles chopped by
    /// its end are clipped, and styles past the end are dropped.
    pub fn with_text(&self, text: impl Into<String>) -> StyledText {
        let text = text.into();
        let bounds = TextRange::new(0, text.chars().count());
        let styles = self
            .styles
            .iter()
            .filter_map(|s| {
                let r = s.range();
                if bounds.encloses(r) {
                    Some(s.clone())
                } else {
                    r.intersect(bounds).map(|clipped| s.at(clipped))
                }
            })
            .collect();
        StyledText { text, styles }
    }

    /// Whether both texts are equal and carry the same styles, in any order.
    pub fn same_styles_as(&self, other: &StyledText) -> bool {
        self.text == other.text
            && self.styles.len() == other.styles.len()
            && self.styles.iter().all(|s| other.styles.contains(s))
    }
}
