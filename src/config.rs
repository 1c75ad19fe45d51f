//! Codec configuration.
//!
//! Options can come from a YAML file; every field is optional there and
//! falls back to its default.

use crate::group::DecodeOptions;
use crate::span::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The colour link-like styles are painted with when none is configured.
pub const DEFAULT_LINK_COLOR: Color = Color(0xFF1E_88E5);

/// Options shared by both directions of the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Colour of the spans realized for links, mentions, hashtags and emails.
    pub link_color: Color,

    /// If true, decoding fails on the first span whose category is malformed
    /// instead of skipping that span.
    pub strict: bool,

    /// If true, touching runs with the same decoration are joined after
    /// decoding.
    pub merge_adjacent: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            link_color: DEFAULT_LINK_COLOR,
            strict: false,
            merge_adjacent: true,
        }
    }
}

impl CodecOptions {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document deserializes as null, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let yaml = fs::read_to_string(path)?;
        Ok(Self::from_yaml_str(&yaml)?)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict: self.strict,
            merge_adjacent: self.merge_adjacent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(CodecOptions::from_yaml_str("").unwrap(), CodecOptions::default());
        assert_eq!(CodecOptions::from_yaml_str("\n  \n").unwrap(), CodecOptions::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let opts = CodecOptions::from_yaml_str("strict: true\nlink_color: \"#80FF0000\"\n").unwrap();
        assert!(opts.strict);
        assert!(opts.merge_adjacent);
        assert_eq!(opts.link_color, Color(0x80FF_0000));
    }

    #[test]
    fn bad_colour_is_rejected() {
        assert!(CodecOptions::from_yaml_str("link_color: blue\n").is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(CodecOptions::from_yaml_str("strikt: true\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codec.yaml");
        fs::write(&path, "merge_adjacent: false\n").unwrap();
        let opts = CodecOptions::load(&path).unwrap();
        assert!(!opts.merge_adjacent);
        assert_eq!(opts.decode_options(), DecodeOptions::default());
    }
}
