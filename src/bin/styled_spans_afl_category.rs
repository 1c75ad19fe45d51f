//! AFL++ fuzz target for category strings.
//!
//! Stdin-driven so it can be used with AFL++. Build and run it via `cargo-afl`:
//!
//! ```bash
//! cargo install cargo-afl
//!
//! cargo afl build --release --features afl_fuzz --bin styled_spans_afl_category
//!
//! mkdir -p fuzz/afl/out
//!
//! cargo afl fuzz \
//!   -i fuzz/afl/in \
//!   -o fuzz/afl/out \
//!   target/release/styled_spans_afl_category
//! ```
//!
//! AFL++ only treats signals/aborts as crashes, so any unwind is turned into
//! `abort()`.

use std::io::Read;

use styled_spans::category;
use styled_spans::extract::extract_all;
use styled_spans::span::{Color, TextAppearanceSpan};
use styled_spans::{Error, TextRange};

const MAX_INPUT_LEN: usize = 64 * 1024;

fn run_one_input(data: &[u8]) {
    if data.len() > MAX_INPUT_LEN {
        return;
    }

    // metadata strings are UTF-8; lossy conversion keeps the harness total.
    let raw = String::from_utf8_lossy(data).to_string();

    match category::decode(&raw) {
        // a decoded category must survive encoding and decoding again.
        Ok(Some(decoded)) => {
            let encoded = decoded.encode().unwrap();
            let again = category::decode(&encoded).unwrap();
            assert_eq!(again.as_ref(), Some(&decoded), "round trip changed {raw:?}");
        }
        Ok(None) => {
            let rest = raw.strip_prefix(category::PREFIX).unwrap_or_default();
            assert!(rest.trim().is_empty(), "category {raw:?} decoded to nothing");
        }
        Err(err) => assert!(err.is_recoverable(), "unexpected error for {raw:?}: {err}"),
    }

    // extraction must agree with decoding and never panic.
    let span = TextAppearanceSpan::categorized(Color(0xFF1E_88E5), raw.clone());
    let range = TextRange::new(0, raw.chars().count());
    match extract_all(&span, range) {
        Ok(styles) => assert!(styles.iter().all(|s| s.range() == range)),
        Err(Error::MalformedTarget { .. }) => {}
        Err(err) => panic!("unexpected extraction error: {err}"),
    }
}

fn main() {
    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data).unwrap();

    // convert any panic into an abort().
    if std::panic::catch_unwind(|| run_one_input(&data)).is_err() {
        std::process::abort();
    }
}
