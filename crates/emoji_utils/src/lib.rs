//! Emoji sequence detection and removal
//!
//! Emoji are matched against a [`Registry`] of known sequences rather than by
//! Unicode properties, so skin tones, ZWJ compositions, flags and keycaps are
//! each found as a single unit.
//!
//! ```
//! let registry = emoji_utils::bundled().unwrap();
//!
//! assert_eq!(emoji_utils::find_distinct("abc🙏🙏🙏🙏🙏", &registry).len(), 1);
//! assert_eq!(emoji_utils::strip("abc 🙏 def", &registry), "abc def");
//! ```

#![allow(clippy::len_without_is_empty)]

pub mod config;
pub mod distinct;
pub mod error;
pub mod key;
pub mod registry;
pub mod scan;
pub mod source;
pub mod strip;

pub use config::{Configuration, RegistryConfig};
pub use distinct::{collect_distinct, find_distinct, find_distinct_keys, Distinct, Found};
pub use error::RegistryLoadError;
pub use key::{EmojiKey, KeyParseError};
pub use registry::{Entry, Registry, RegistryBuilder};
pub use scan::{contains_emoji, count, scan, scan_bytes, Match};
pub use strip::{normalize_whitespace, strip, strip_bytes};

/// Registry data embedded at compile time
#[cfg(feature = "bundled")]
pub static BUNDLED_DATA: &str = include_str!("../data/emoji.json");

/// Parses the bundled registry data
#[cfg(feature = "bundled")]
pub fn bundled() -> Result<Registry, RegistryLoadError> {
    Registry::from_slice(BUNDLED_DATA.as_bytes())
}

/// Loads a registry from a file path or from raw bytes
pub fn load_registry<'a>(source: impl Into<RegistrySource<'a>>) -> Result<Registry, RegistryLoadError> {
    match source.into() {
        RegistrySource::Path(path) => Registry::load(path),
        RegistrySource::Bytes(data) => Registry::from_slice(data),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RegistrySource<'a> {
    Path(&'a std::path::Path),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a std::path::Path> for RegistrySource<'a> {
    fn from(path: &'a std::path::Path) -> Self {
        RegistrySource::Path(path)
    }
}

impl<'a> From<&'a std::path::PathBuf> for RegistrySource<'a> {
    fn from(path: &'a std::path::PathBuf) -> Self {
        RegistrySource::Path(path)
    }
}

impl<'a> From<&'a [u8]> for RegistrySource<'a> {
    fn from(data: &'a [u8]) -> Self {
        RegistrySource::Bytes(data)
    }
}
