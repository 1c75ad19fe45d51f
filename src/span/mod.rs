//! Native spans.
//!
//! A native span is the rendering engine's own decoration object. The codec
//! sees it only through [`NativeSpan`]: whether it makes text bold or italic,
//! and what metadata string it carries. Concrete span types do not implement
//! value equality; see [`SpanEquality`] for how two spans are compared.

mod color;
mod equality;
mod kinds;

pub use color::Color;
pub use equality::SpanEquality;
pub use kinds::*;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a native span.
///
/// The host engine reports the same span object for every run it covers, so
/// spans are reference counted rather than owned by a single group.
pub type SpanRef = Arc<dyn NativeSpan>;

/// Access to the concrete type behind a `dyn NativeSpan`.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The capabilities the codec reads from a native span.
pub trait NativeSpan: AsAny + fmt::Debug + Send + Sync {
    /// Whether the span renders its text with a bold weight.
    fn is_bold(&self) -> bool {
        false
    }

    /// Whether the span renders its text with an italic slant.
    fn is_italic(&self) -> bool {
        false
    }

    /// Free-form metadata string, used as the carrier of category strings.
    fn metadata(&self) -> Option<&str> {
        None
    }
}

/// A native span attached to a range of text.
#[derive(Debug, Clone)]
pub struct AttachedSpan {
    pub range: crate::style::TextRange,
    pub span: SpanRef,
}

impl AttachedSpan {
    pub fn new(range: crate::style::TextRange, span: impl NativeSpan) -> Self {
        Self {
            range,
            span: Arc::new(span),
        }
    }
}
