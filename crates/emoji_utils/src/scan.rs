//! Greedy leftmost-longest emoji matching
//!
//! At each position the longest registry key starting there is consumed whole,
//! otherwise the cursor advances by a single codepoint. Matches are therefore
//! yielded in order and never overlap, and repeated emoji each match on their own.

use std::iter::FusedIterator;
use std::ops::Range;
use std::str::Utf8Chunks;

use crate::registry::{Entry, Registry};

/// By definition, these are all non-overlapping spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'r> {
    /// Byte offset of the first codepoint
    pub start: usize,
    /// Byte offset one past the last codepoint
    pub end: usize,
    pub entry: &'r Entry,
}

impl<'r> Match<'r> {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The matched slice of the text this match was found in
    #[inline]
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range()]
    }
}

/// Iterator over the emoji occurrences in a string, created by [`scan`]
#[derive(Debug, Clone)]
pub struct Matches<'r, 't> {
    registry: &'r Registry,
    text: &'t str,
    position: usize,
}

impl<'r, 't> Matches<'r, 't> {
    pub(crate) fn new(registry: &'r Registry, text: &'t str) -> Self {
        Matches {
            registry,
            text,
            position: 0,
        }
    }
}

impl<'r, 't> Iterator for Matches<'r, 't> {
    type Item = Match<'r>;

    fn next(&mut self) -> Option<Match<'r>> {
        // position is always on a char boundary
        while let Some(rest) = self.text.get(self.position..) {
            let c = rest.chars().next()?;

            if let Some((entry, len)) = self.registry.longest_prefix(rest) {
                let start = self.position;
                self.position += len;

                return Some(Match {
                    start,
                    end: self.position,
                    entry,
                });
            }

            self.position += c.len_utf8();
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len().saturating_sub(self.position)))
    }
}

impl FusedIterator for Matches<'_, '_> {}

/// Finds every emoji occurrence in `text`, in order
#[inline]
pub fn scan<'r, 't>(text: &'t str, registry: &'r Registry) -> Matches<'r, 't> {
    Matches::new(registry, text)
}

/// Iterator over the emoji occurrences in possibly-invalid UTF-8, created by [`scan_bytes`]
#[derive(Debug, Clone)]
pub struct ByteMatches<'r, 't> {
    chunks: Utf8Chunks<'t>,
    current: Matches<'r, 't>,
    /// Offset of the current chunk within the whole buffer
    offset: usize,
    /// Offset of the next chunk
    next_offset: usize,
}

impl<'r> Iterator for ByteMatches<'r, '_> {
    type Item = Match<'r>;

    fn next(&mut self) -> Option<Match<'r>> {
        loop {
            if let Some(mut m) = self.current.next() {
                m.start += self.offset;
                m.end += self.offset;

                return Some(m);
            }

            // invalid sequences split the input, so no emoji can span them
            let chunk = self.chunks.next()?;

            self.offset = self.next_offset;
            self.next_offset += chunk.valid().len() + chunk.invalid().len();
            self.current = Matches::new(self.current.registry, chunk.valid());
        }
    }
}

impl FusedIterator for ByteMatches<'_, '_> {}

/// Finds every emoji occurrence in a byte buffer that may not be valid UTF-8.
///
/// Invalid sequences never match and are skipped over. Offsets are into `bytes`.
pub fn scan_bytes<'r, 't>(bytes: &'t [u8], registry: &'r Registry) -> ByteMatches<'r, 't> {
    ByteMatches {
        chunks: bytes.utf8_chunks(),
        current: Matches::new(registry, ""),
        offset: 0,
        next_offset: 0,
    }
}

/// Counts emoji occurrences, not distinct emoji
pub fn count(text: &str, registry: &Registry) -> usize {
    scan(text, registry).count()
}

pub fn contains_emoji(text: &str, registry: &Registry) -> bool {
    scan(text, registry).next().is_some()
}
