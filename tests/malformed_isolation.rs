//! A span with a broken category only loses its own styles.

use std::sync::Arc;
use styled_spans::group::{DecodeOptions, IndexedSpanGroup, decode_parts, partition};
use styled_spans::span::{AttachedSpan, Color, SpanRef, StyleSpan, TextAppearanceSpan};
use styled_spans::style::{DiagnosticPhase, Severity, StyleKind};
use styled_spans::{Error, Style, TextRange};

fn categorized(raw: &str) -> TextAppearanceSpan {
    TextAppearanceSpan::categorized(Color(0xFF1E_88E5), raw.to_string())
}

#[test]
fn broken_sibling_does_not_affect_the_others() {
    let range = TextRange::new(0, 4);
    let spans: Vec<SpanRef> = vec![
        Arc::new(StyleSpan::bold()),
        Arc::new(categorized("category: url(")),
        Arc::new(categorized("category: hashtag")),
    ];
    let group = IndexedSpanGroup::new(range, spans);

    let results: Vec<_> = group.extract_each().collect();
    assert_eq!(results[0], Ok(vec![Style::Bold { range }]));
    assert!(matches!(results[1], Err(Error::MalformedTarget { .. })));
    assert_eq!(results[2], Ok(vec![Style::Hashtag { range }]));

    let (styles, diagnostics) = group.to_styles_lossy();
    assert_eq!(
        styles,
        vec![Style::Bold { range }, Style::Hashtag { range }]
    );
    assert_eq!(diagnostics.len(), 1);
    let d = &diagnostics[0];
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!(d.phase, Some(DiagnosticPhase::Decode));
    assert_eq!(d.notes, vec!["span #1 in the group was skipped".to_string()]);
}

#[derive(Debug)]
struct BoldWithMetadata(&'static str);

impl styled_spans::span::NativeSpan for BoldWithMetadata {
    fn is_bold(&self) -> bool {
        true
    }

    fn metadata(&self) -> Option<&str> {
        Some(self.0)
    }
}

#[test]
fn unknown_tag_keeps_the_visual_flags() {
    let range = TextRange::new(0, 1);
    let group = IndexedSpanGroup::new(range, vec![Arc::new(BoldWithMetadata("category: nonsense"))]);
    let (styles, diagnostics) = group.to_styles_lossy();
    assert_eq!(styles, vec![Style::Bold { range }]);
    assert!(diagnostics.is_empty());
}

#[test]
fn broken_span_loses_its_own_visual_flags_too() {
    // a bold span whose target cannot be decoded yields nothing at all.
    let range = TextRange::new(0, 1);
    let group = IndexedSpanGroup::new(
        range,
        vec![Arc::new(BoldWithMetadata("category: url(https://a.example/) junk"))],
    );
    let (styles, diagnostics) = group.to_styles_lossy();
    assert!(styles.is_empty());
    assert_eq!(diagnostics[0].code.as_deref(), Some("category.malformed_target"));
}

#[test]
fn lossy_decoding_of_a_whole_text_reports_each_broken_run() {
    let attached = vec![
        AttachedSpan::new(TextRange::new(0, 10), StyleSpan::italic()),
        AttachedSpan::new(TextRange::new(2, 6), categorized("category: mention url(@bob)")),
    ];
    let parts = partition(10, &attached);

    let (styles, diagnostics) = decode_parts(
        &parts,
        DecodeOptions {
            strict: false,
            merge_adjacent: true,
        },
    )
    .unwrap();
    assert_eq!(
        styles,
        vec![Style::Italic {
            range: TextRange::new(0, 10)
        }]
    );
    // the broken span covers exactly one run.
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range, Some(TextRange::new(2, 6)));

    let strict = DecodeOptions {
        strict: true,
        merge_adjacent: true,
    };
    assert!(decode_parts(&parts, strict).is_err());
}

#[test]
fn decoding_never_fails_on_well_formed_categories() {
    let raws = [
        "category: hashtag",
        "category: email",
        "category: url(https://example.com/a_(b))",
        "category: mention url(https://social.example/@bob)",
        "not a category",
    ];
    for raw in raws {
        let span = categorized(raw);
        let group = IndexedSpanGroup::new(TextRange::new(0, 1), vec![Arc::new(span)]);
        assert!(group.to_styles().is_ok(), "{raw}");
        assert!(group.to_styles().unwrap().iter().all(|s| s.kind() != StyleKind::Bold));
    }
}
