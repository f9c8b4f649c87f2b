use std::fmt;

use crate::foundation::error::{TreemapError, TreemapResult};

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black, used for blocks without a color.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale the color channels by `factor` (clamped to `[0, 1]`), keeping alpha.
    pub fn shade(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (f64::from(c) * f).round() as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }
}

/// Block color as written in the tree description: `0x` followed by hex digits,
/// most significant channel first (`0xff00ff` is magenta).
///
/// Stored undecoded so that the description round-trips verbatim; call
/// [`Color::decode`] to get pixels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    /// Wrap a color string without validating it.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The raw color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no color was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode into an opaque RGBA color.
    ///
    /// Anything shorter than three bytes (empty, `0x`, a stray digit) is opaque black.
    /// Missing trailing channels are zero and digits past the third byte are ignored.
    /// A missing `0x` prefix, non-hex characters and an odd number of digits are errors.
    pub fn decode(&self) -> TreemapResult<Rgba8> {
        let s = self.0.as_str();
        if s.len() < 3 {
            return Ok(Rgba8::BLACK);
        }
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| TreemapError::color(format!("\"{s}\" does not start with 0x")))?;

        let bytes = decode_hex(digits)
            .map_err(|msg| TreemapError::color(format!("\"{s}\": {msg}")))?;

        let channel = |i: usize| bytes.get(i).copied().unwrap_or(0);
        Ok(Rgba8::opaque(channel(0), channel(1), channel(2)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

fn decode_hex(digits: &str) -> Result<Vec<u8>, String> {
    let mut nibbles = Vec::with_capacity(digits.len());
    for (offset, ch) in digits.char_indices() {
        let v = ch
            .to_digit(16)
            .ok_or_else(|| format!("invalid hex character {ch:?} at offset {offset}"))?;
        nibbles.push(v as u8);
    }
    if nibbles.len() % 2 == 1 {
        return Err(format!("odd number of hex digits ({})", nibbles.len()));
    }
    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/model/color.rs"]
mod tests;
