use thiserror::Error;

/// Errors produced while encoding or decoding styled text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A category was requested with neither a tag nor a target.
    #[error("a category needs a tag, a target, or both")]
    EmptyCategory,

    /// The target of a category is missing its `url(...)` delimiters or is
    /// not a valid URL.
    #[error("malformed target {target:?} in category {raw:?}")]
    MalformedTarget {
        raw: String,
        target: String,
        #[source]
        source: Option<url::ParseError>,
    },

    /// A tag name that cannot be written as the first token of a category.
    #[error("invalid tag {tag:?}")]
    InvalidTag { tag: String },

    #[error("range {start}..{end} out of bounds for text of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("invalid range {start}..{end}: start > end")]
    InvalidRange { start: usize, end: usize },
}

impl Error {
    /// Whether the error is scoped to a single span, so the caller can skip
    /// that span and keep decoding its siblings.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MalformedTarget { .. })
    }

    /// A stable identifier used in diagnostics, like `category.malformed_target`.
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyCategory => "category.empty",
            Error::MalformedTarget { .. } => "category.malformed_target",
            Error::InvalidTag { .. } => "category.invalid_tag",
            Error::RangeOutOfBounds { .. } => "range.out_of_bounds",
            Error::InvalidRange { .. } => "range.invalid",
        }
    }
}
