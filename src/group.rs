//! Indexed span groups and text partitioning.
//!
//! The host engine reports styled text as a sequence of contiguous runs, each
//! with the spans that cover it. An [`IndexedSpanGroup`] is one such run;
//! [`partition`] reproduces that report from a flat list of attached spans.

use crate::Error;
use crate::extract::extract_all;
use crate::span::{AttachedSpan, SpanEquality, SpanRef};
use crate::style::{Diagnostic, Style, TextRange, merge_adjacent};
use tracing::{debug, warn};

/// A range of text together with the spans applied to it, in application order.
#[derive(Debug, Clone)]
pub struct IndexedSpanGroup {
    range: TextRange,
    spans: Vec<SpanRef>,
}

impl IndexedSpanGroup {
    pub fn new(range: TextRange, spans: Vec<SpanRef>) -> Self {
        Self { range, spans }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn spans(&self) -> &[SpanRef] {
        &self.spans
    }

    /// The same range with a different set of spans.
    pub fn with_spans(&self, spans: Vec<SpanRef>) -> Self {
        Self {
            range: self.range,
            spans,
        }
    }

    /// Extracts the styles of each span separately, in order.
    ///
    /// A span that fails to decode does not affect the results of the others.
    pub fn extract_each(&self) -> impl Iterator<Item = Result<Vec<Style>, Error>> + '_ {
        self.spans.iter().map(|span| extract_all(&**span, self.range))
    }

    /// Converts every span into styles, stopping at the first span that fails.
    pub fn to_styles(&self) -> Result<Vec<Style>, Error> {
        let mut styles = Vec::new();
        for result in self.extract_each() {
            styles.extend(result?);
        }
        Ok(styles)
    }

    /// Converts every span into styles, skipping spans that fail to decode.
    ///
    /// Each skipped span is reported as a diagnostic.
    pub fn to_styles_lossy(&self) -> (Vec<Style>, Vec<Diagnostic>) {
        let mut styles = Vec::new();
        let mut diagnostics = Vec::new();
        for (index, result) in self.extract_each().enumerate() {
            match result {
                Ok(extracted) => styles.extend(extracted),
                Err(err) => {
                    warn!(range = %self.range, span = index, error = %err, "skipping undecodable span");
                    diagnostics.push(Diagnostic::skipped_span(self.range, index, &err));
                }
            }
        }
        (styles, diagnostics)
    }

    /// Compares two groups using `equality` for the spans.
    pub fn structurally_eq(&self, other: &IndexedSpanGroup, equality: &SpanEquality) -> bool {
        self.range == other.range && equality.spans_eq(&self.spans, &other.spans)
    }
}

impl PartialEq for IndexedSpanGroup {
    /// Structural equality over the built-in span kinds.
    fn eq(&self, other: &Self) -> bool {
        self.structurally_eq(other, SpanEquality::builtin())
    }
}

/// A contiguous run of text, with or without spans.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Plain(TextRange),
    Spanned(IndexedSpanGroup),
}

impl Part {
    pub fn range(&self) -> TextRange {
        match self {
            Part::Plain(range) => *range,
            Part::Spanned(group) => group.range(),
        }
    }

    pub fn group(&self) -> Option<&IndexedSpanGroup> {
        match self {
            Part::Plain(_) => None,
            Part::Spanned(group) => Some(group),
        }
    }
}

/// Splits `[0, len)` into runs at every span boundary.
///
/// Each spanned run lists the spans covering all of it, in the order they
/// were attached. Empty spans are ignored and spans are clipped to `len`.
pub fn partition(len: usize, attached: &[AttachedSpan]) -> Vec<Part> {
    let bounds = TextRange::new(0, len);
    let live: Vec<(TextRange, &SpanRef)> = attached
        .iter()
        .filter_map(|a| a.range.intersect(bounds).map(|r| (r, &a.span)))
        .collect();

    let mut cuts: Vec<usize> = Vec::with_capacity(live.len() * 2 + 2);
    cuts.push(0);
    cuts.push(len);
    for (r, _) in &live {
        cuts.push(r.start);
        cuts.push(r.end);
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut parts: Vec<Part> = Vec::with_capacity(cuts.len());
    for w in cuts.windows(2) {
        let run = TextRange::new(w[0], w[1]);
        if run.is_empty() {
            continue;
        }
        let spans: Vec<SpanRef> = live
            .iter()
            .filter(|(r, _)| r.encloses(run))
            .map(|(_, span)| SpanRef::clone(span))
            .collect();
        if spans.is_empty() {
            parts.push(Part::Plain(run));
        } else {
            parts.push(Part::Spanned(IndexedSpanGroup::new(run, spans)));
        }
    }
    debug!(len, spans = attached.len(), parts = parts.len(), "partitioned text");
    parts
}

/// How [`decode_parts`] treats spans it cannot decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    /// Fail on the first undecodable span instead of skipping it.
    pub strict: bool,

    /// Join touching runs that carry the same decoration.
    pub merge_adjacent: bool,
}

/// Recovers the styles of a whole text from its parts.
pub fn decode_parts(
    parts: &[Part],
    opts: DecodeOptions,
) -> Result<(Vec<Style>, Vec<Diagnostic>), Error> {
    let mut styles = Vec::new();
    let mut diagnostics = Vec::new();
    for group in parts.iter().filter_map(Part::group) {
        if opts.strict {
            styles.extend(group.to_styles()?);
        } else {
            let (extracted, skipped) = group.to_styles_lossy();
            styles.extend(extracted);
            diagnostics.extend(skipped);
        }
    }
    if opts.merge_adjacent {
        styles = merge_adjacent(styles);
    }
    Ok((styles, diagnostics))
}
