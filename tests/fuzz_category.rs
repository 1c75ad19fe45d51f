//! Lightweight fuzz-style tests; no external fuzz harness required.

use styled_spans::category::{self, PREFIX};
use styled_spans::extract::extract_all;
use styled_spans::span::{Color, TextAppearanceSpan};
use styled_spans::TextRange;

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    fn gen_range(&mut self, hi: usize) -> usize {
        (self.next_u64() as usize) % hi
    }
}

const DICT: &[&str] = &[
    "category: ",
    "hashtag",
    "email",
    "mention",
    "url(",
    ")",
    "(",
    " ",
    "https://",
    "example.com",
    "/",
    "@alice",
    "?q=1",
    "#top",
    "é",
    "x",
];

fn gen_category_like(rng: &mut XorShift64, tokens: usize) -> String {
    // most inputs should get past the prefix check.
    let mut out = if rng.gen_range(4) == 0 {
        String::new()
    } else {
        PREFIX.to_string()
    };
    for _ in 0..tokens {
        out.push_str(DICT[rng.gen_range(DICT.len())]);
    }
    out
}

#[test]
fn fuzz_decode_is_total_and_round_trips() {
    let mut rng = XorShift64::new(0xC0FFEE);
    let mut decoded_some = 0;
    for _ in 0..5_000 {
        let tokens = rng.gen_range(8);
        let raw = gen_category_like(&mut rng, tokens);
        match category::decode(&raw) {
            Ok(Some(c)) => {
                decoded_some += 1;
                let again = category::decode(&c.encode().unwrap()).unwrap();
                assert_eq!(again, Some(c), "{raw:?}");
            }
            Ok(None) => {}
            Err(err) => assert!(err.is_recoverable(), "{raw:?}: {err}"),
        }
    }
    // the generator must actually exercise the decoder.
    assert!(decoded_some > 0);
}

#[test]
fn fuzz_extraction_never_panics_and_stays_in_range() {
    let mut rng = XorShift64::new(0xBADC0DE);
    for _ in 0..2_000 {
        let tokens = rng.gen_range(6);
        let raw = gen_category_like(&mut rng, tokens);
        let span = TextAppearanceSpan::categorized(Color(0xFF1E_88E5), raw.clone());
        let range = TextRange::new(1, 3);
        if let Ok(styles) = extract_all(&span, range) {
            assert!(styles.len() <= 1, "{raw:?}: {styles:?}");
            assert!(styles.iter().all(|s| s.range() == range));
        }
    }
}

#[test]
fn fuzz_long_unterminated_calls_do_not_hang() {
    let raw = format!("{PREFIX}mention {}", "url(".repeat(10_000));
    assert!(category::decode(&raw).is_err());
}
