//! Abstract style model and JSON envelopes.
//!
//! This module defines the **contract** between:
//! 1) the upstream markup parser, which produces `Style` values, and
//! 2) the codec, which realizes them as native spans and recovers them again.
//!
//! Ranges are measured in characters against the annotated text, and every
//! value here is immutable once built.

mod diagnostic;
mod envelope;
mod kinds;
mod range;

pub use diagnostic::*;
pub use envelope::*;
pub use kinds::*;
pub use range::*;

/// JSON schema version for the style and span envelopes.
///
/// Bump this when making non-backwards-compatible changes to the JSON structure.
pub const SCHEMA_VERSION: u32 = 1;

/// The codec name stored in the JSON envelopes.
pub const CODEC_NAME: &str = "styled-spans";

/// The codec version stored in the JSON envelopes.
pub const CODEC_VERSION: &str = env!("CARGO_PKG_VERSION");
