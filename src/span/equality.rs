use super::{
    BackgroundColorSpan, ForegroundColorSpan, NativeSpan, SpanRef, StrikethroughSpan, StyleSpan,
    TextAppearanceSpan, TypefaceSpan, UnderlineSpan, UrlSpan,
};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

type Comparator = Box<dyn Fn(&dyn Any, &dyn Any) -> bool + Send + Sync>;

static BUILTIN: LazyLock<SpanEquality> = LazyLock::new(SpanEquality::with_builtin_kinds);

/// Structural equality for native spans, registered per concrete span type.
///
/// Two spans are equal only if they are of the same concrete type and that
/// type's comparator says their fields match. Spans of different types, or
/// of a type nothing was registered for, are never equal.
pub struct SpanEquality {
    comparators: HashMap<TypeId, Comparator>,
}

impl SpanEquality {
    /// A registry with no kinds; every comparison is `false`.
    pub fn empty() -> Self {
        Self {
            comparators: HashMap::new(),
        }
    }

    /// The shared registry covering every span kind in [`crate::span`].
    pub fn builtin() -> &'static SpanEquality {
        &BUILTIN
    }

    /// A fresh registry covering every span kind in [`crate::span`], which
    /// hosts can extend with their own kinds.
    pub fn with_builtin_kinds() -> Self {
        Self::empty()
            .with_kind(|a: &StyleSpan, b: &StyleSpan| a.bold == b.bold && a.italic == b.italic)
            .with_kind(|a: &TypefaceSpan, b: &TypefaceSpan| a.weight == b.weight)
            .with_kind(|a: &ForegroundColorSpan, b: &ForegroundColorSpan| a.color == b.color)
            .with_kind(|a: &BackgroundColorSpan, b: &BackgroundColorSpan| a.color == b.color)
            .with_kind(|_: &UnderlineSpan, _: &UnderlineSpan| true)
            .with_kind(|_: &StrikethroughSpan, _: &StrikethroughSpan| true)
            .with_kind(|a: &UrlSpan, b: &UrlSpan| a.url == b.url)
            .with_kind(|a: &TextAppearanceSpan, b: &TextAppearanceSpan| {
                a.color == b.color && a.font_feature_settings == b.font_feature_settings
            })
    }

    /// Registers (or replaces) the comparator for spans of type `T`.
    pub fn with_kind<T: NativeSpan>(
        mut self,
        eq: impl Fn(&T, &T) -> bool + Send + Sync + 'static,
    ) -> Self {
        let cmp = move |a: &dyn Any, b: &dyn Any| {
            match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
                (Some(a), Some(b)) => eq(a, b),
                _ => false,
            }
        };
        self.comparators.insert(TypeId::of::<T>(), Box::new(cmp));
        self
    }

    /// Whether a comparator is registered for the concrete type of `span`.
    pub fn knows(&self, span: &dyn NativeSpan) -> bool {
        self.comparators.contains_key(&Any::type_id(span.as_any()))
    }

    /// Compares two spans field by field.
    pub fn span_eq(&self, a: &dyn NativeSpan, b: &dyn NativeSpan) -> bool {
        let (a, b) = (a.as_any(), b.as_any());
        let kind = Any::type_id(a);
        if kind != Any::type_id(b) {
            return false;
        }
        self.comparators.get(&kind).is_some_and(|cmp| cmp(a, b))
    }

    /// Compares two span lists pairwise, in order.
    pub fn spans_eq(&self, a: &[SpanRef], b: &[SpanRef]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.span_eq(&**x, &**y))
    }
}

impl fmt::Debug for SpanEquality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanEquality")
            .field("kinds", &self.comparators.len())
            .finish()
    }
}
