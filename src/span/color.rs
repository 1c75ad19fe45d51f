use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit ARGB colour, written as `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("colour {s:?} must start with '#'"))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid colour {s:?}: expected hex digits"));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| format!("invalid colour {s:?}: {e}"))?;
        match hex.len() {
            8 => Ok(Color(value)),
            // `#RRGGBB` is opaque.
            6 => Ok(Color(0xFF00_0000 | value)),
            _ => Err(format!("colour {s:?} must be #RRGGBB or #AARRGGBB")),
        }
    }
}
