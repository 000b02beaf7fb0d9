use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use smallvec::SmallVec;

/// Codepoints of a single emoji sequence, most of which fit inline
pub type Codepoints = SmallVec<[char; 4]>;

/// Canonical registry key, the ordered codepoint sequence of one emoji variant.
///
/// Never empty. Displays as uppercase hexidecimal codepoints joined by `-`,
/// such as `1F44D-1F3FB` or `0031-FE0F-20E3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EmojiKey(Codepoints);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("Empty Key")]
    Empty,

    #[error("Invalid Hexidecimal Codepoint: {0:?}")]
    InvalidHex(String),

    #[error("Not a Unicode Scalar Value: {0:#X}")]
    InvalidCodepoint(u32),
}

impl EmojiKey {
    pub fn new(codepoints: impl IntoIterator<Item = char>) -> Option<EmojiKey> {
        let codepoints: Codepoints = codepoints.into_iter().collect();

        match codepoints.is_empty() {
            true => None,
            false => Some(EmojiKey(codepoints)),
        }
    }

    /// Derives the key spelled by a literal glyph, e.g. `"👍🏻"` becomes `1F44D-1F3FB`
    #[inline]
    pub fn from_glyph(glyph: &str) -> Option<EmojiKey> {
        EmojiKey::new(glyph.chars())
    }

    #[inline]
    pub fn codepoints(&self) -> &[char] {
        &self.0
    }

    /// Number of codepoints, always at least one
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_glyph(&self) -> String {
        self.0.iter().collect()
    }

    /// Checks if `glyph` consists of exactly the codepoints of this key
    pub fn matches_glyph(&self, glyph: &str) -> bool {
        self.0.iter().copied().eq(glyph.chars())
    }
}

impl Borrow<[char]> for EmojiKey {
    #[inline]
    fn borrow(&self) -> &[char] {
        &self.0
    }
}

fn parse_codepoint(part: &str) -> Result<char, KeyParseError> {
    let hex = match part.get(..2) {
        Some("U+" | "u+") => &part[2..],
        _ => part,
    };

    // from_str_radix would accept a leading sign
    if hex.is_empty() || hex.len() > 8 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(KeyParseError::InvalidHex(part.to_owned()));
    }

    let value = match u32::from_str_radix(hex, 16) {
        Ok(value) => value,
        Err(_) => return Err(KeyParseError::InvalidHex(part.to_owned())),
    };

    char::from_u32(value).ok_or(KeyParseError::InvalidCodepoint(value))
}

impl FromStr for EmojiKey {
    type Err = KeyParseError;

    /// Parses hexidecimal codepoints delimited by any of `-`, `_`, `,` or spaces,
    /// optionally prefixed with `U+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut codepoints = Codepoints::new();

        for part in s.split(|c: char| matches!(c, '-' | '_' | ',') || c.is_ascii_whitespace()) {
            if !part.is_empty() {
                codepoints.push(parse_codepoint(part)?);
            }
        }

        EmojiKey::new(codepoints).ok_or(KeyParseError::Empty)
    }
}

impl Display for EmojiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char('-')?;
            }

            write!(f, "{:04X}", *c as u32)?;
        }

        Ok(())
    }
}
