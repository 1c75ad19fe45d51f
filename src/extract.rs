//! Native span -> `Style` extraction.
//!
//! Extraction is driven by a fixed, ordered table with one rule per style
//! kind. Every rule whose predicate matches contributes a style, so a single
//! span can yield several (a bold mention, for instance).

use crate::Error;
use crate::category::{self, Category, Tag};
use crate::span::NativeSpan;
use crate::style::{Style, StyleKind, TextRange};

/// What a rule can see of a native span.
#[derive(Debug, Clone, Default)]
pub struct SpanTraits {
    pub bold: bool,
    pub italic: bool,
    pub category: Option<Category>,
}

impl SpanTraits {
    /// Reads the visual flags of `span` and decodes its category, if any.
    pub fn read(span: &dyn NativeSpan) -> Result<Self, Error> {
        let category = match span.metadata() {
            Some(raw) => category::decode(raw)?,
            None => None,
        };
        Ok(Self {
            bold: span.is_bold(),
            italic: span.is_italic(),
            category,
        })
    }

    fn has_tag(&self, tag: Tag) -> bool {
        self.category.as_ref().is_some_and(|c| c.has_tag(&tag))
    }

    fn untagged_url(&self) -> Option<&url::Url> {
        self.category
            .as_ref()
            .filter(|c| c.tag.is_none())
            .and_then(|c| c.url.as_ref())
    }

    fn mention_url(&self) -> Option<&url::Url> {
        self.category
            .as_ref()
            .filter(|c| c.has_tag(&Tag::Mention))
            .and_then(|c| c.url.as_ref())
    }
}

/// One row of the extractor table.
#[derive(Clone, Copy)]
pub struct Extractor {
    pub kind: StyleKind,
    matches: fn(&SpanTraits) -> bool,
    build: fn(&SpanTraits, TextRange) -> Option<Style>,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor").field("kind", &self.kind).finish()
    }
}

/// Rules in evaluation order.
pub static EXTRACTORS: [Extractor; 6] = [
    Extractor {
        kind: StyleKind::Bold,
        matches: |t| t.bold,
        build: |_, range| Some(Style::Bold { range }),
    },
    Extractor {
        kind: StyleKind::Email,
        matches: |t| t.has_tag(Tag::Email),
        build: |_, range| Some(Style::Email { range }),
    },
    Extractor {
        kind: StyleKind::Hashtag,
        matches: |t| t.has_tag(Tag::Hashtag),
        build: |_, range| Some(Style::Hashtag { range }),
    },
    Extractor {
        kind: StyleKind::Italic,
        matches: |t| t.italic,
        build: |_, range| Some(Style::Italic { range }),
    },
    // tagged categories belong to their own rule; only a bare target is a link.
    Extractor {
        kind: StyleKind::Link,
        matches: |t| t.untagged_url().is_some(),
        build: |t, range| {
            t.untagged_url().map(|target| Style::Link {
                range,
                target: target.clone(),
            })
        },
    },
    Extractor {
        kind: StyleKind::Mention,
        matches: |t| t.mention_url().is_some(),
        build: |t, range| {
            t.mention_url().map(|target| Style::Mention {
                range,
                target: target.clone(),
            })
        },
    },
];

impl Extractor {
    /// The rule for `kind`.
    pub fn of(kind: StyleKind) -> &'static Extractor {
        EXTRACTORS
            .iter()
            .find(|e| e.kind == kind)
            .unwrap_or_else(|| unreachable!("every style kind has an extractor"))
    }

    pub fn is_extractable(&self, traits: &SpanTraits) -> bool {
        (self.matches)(traits)
    }

    /// Applies this rule alone to `span`.
    pub fn extract(&self, span: &dyn NativeSpan, range: TextRange) -> Result<Option<Style>, Error> {
        let traits = SpanTraits::read(span)?;
        Ok(self.apply(&traits, range))
    }

    fn apply(&self, traits: &SpanTraits, range: TextRange) -> Option<Style> {
        if self.is_extractable(traits) {
            (self.build)(traits, range)
        } else {
            None
        }
    }
}

/// Applies every rule to `span`, in table order.
///
/// A span whose category cannot be decoded yields an error and no styles at
/// all, even if its visual flags would have matched.
pub fn extract_all(span: &dyn NativeSpan, range: TextRange) -> Result<Vec<Style>, Error> {
    let traits = SpanTraits::read(span)?;
    Ok(EXTRACTORS
        .iter()
        .filter_map(|e| e.apply(&traits, range))
        .collect())
}
