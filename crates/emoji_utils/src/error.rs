use crate::key::{EmojiKey, KeyParseError};

#[derive(Debug, thiserror::Error)]
pub enum RegistryLoadError {
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Parse Error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid Key {key:?}: {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: KeyParseError,
    },

    #[error("Duplicate Key: {0}")]
    DuplicateKey(EmojiKey),

    #[error("Glyph {glyph:?} does not match key {key}")]
    GlyphMismatch { key: EmojiKey, glyph: String },

    #[error("No registry source configured")]
    MissingSource,
}

impl RegistryLoadError {
    /// Checks if the error was caused by an empty registry key
    pub fn is_empty_key(&self) -> bool {
        matches!(
            self,
            RegistryLoadError::InvalidKey {
                source: KeyParseError::Empty,
                ..
            }
        )
    }
}
