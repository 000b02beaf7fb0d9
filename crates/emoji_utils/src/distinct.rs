use std::ops::Range;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use crate::key::EmojiKey;
use crate::registry::{Entry, Registry};
use crate::scan::{scan, Match};

/// One distinct emoji found in a text, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found<'r> {
    pub entry: &'r Entry,
    /// Byte ranges of every occurrence, in order
    pub locations: SmallVec<[Range<usize>; 2]>,
}

impl<'r> Found<'r> {
    #[inline]
    pub fn occurrences(&self) -> usize {
        self.locations.len()
    }
}

/// Distinct emoji keyed by registry key, ordered by first appearance
pub type Distinct<'r> = IndexMap<&'r EmojiKey, Found<'r>>;

/// Folds matches into one [`Found`] per distinct registry key
pub fn collect_distinct<'r>(matches: impl IntoIterator<Item = Match<'r>>) -> Distinct<'r> {
    let mut distinct = Distinct::default();

    for m in matches {
        distinct
            .entry(m.entry.key())
            .or_insert_with(|| Found {
                entry: m.entry,
                locations: SmallVec::new(),
            })
            .locations
            .push(m.range());
    }

    distinct
}

/// Finds the distinct emoji in `text`, regardless of how often each occurs
pub fn find_distinct<'r>(text: &str, registry: &'r Registry) -> Distinct<'r> {
    collect_distinct(scan(text, registry))
}

/// Like [`find_distinct`], keeping only the registry keys
pub fn find_distinct_keys<'r>(text: &str, registry: &'r Registry) -> IndexSet<&'r EmojiKey> {
    scan(text, registry).map(|m| m.entry.key()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::test_registry;

    #[test]
    fn test_distinct_repeated() {
        let registry = test_registry();
        let text = "abc🙏🙏🙏🙏🙏";

        let distinct = find_distinct(text, &registry);
        assert_eq!(distinct.len(), 1);

        let found = &distinct[0];
        assert_eq!(found.entry.glyph(), "🙏");
        assert_eq!(found.occurrences(), 5);
        assert_eq!(found.locations[0], 3..7);
        assert_eq!(found.locations[4], 19..23);

        assert_eq!(scan(text, &registry).count(), 5);
    }

    #[test]
    fn test_distinct_order_and_variants() {
        let registry = test_registry();

        let distinct = find_distinct("👍 👍🏻 🙏 👍 👨‍👩‍👦 👍🏻", &registry);

        let glyphs: Vec<_> = distinct.values().map(|f| f.entry.glyph()).collect();
        assert_eq!(glyphs, ["👍", "👍🏻", "🙏", "👨‍👩‍👦"]);

        let counts: Vec<_> = distinct.values().map(Found::occurrences).collect();
        assert_eq!(counts, [2, 2, 1, 1]);

        let keys = find_distinct_keys("👍 👍🏻 🙏 👍 👨‍👩‍👦 👍🏻", &registry);
        assert_eq!(keys.len(), 4);
        assert!(keys.contains(&"1F44D-1F3FB".parse::<EmojiKey>().unwrap()));
    }

    #[test]
    fn test_distinct_empty() {
        let registry = test_registry();

        assert!(find_distinct("", &registry).is_empty());
        assert!(find_distinct("no emoji here", &registry).is_empty());
        assert!(collect_distinct(Vec::new()).is_empty());
    }
}
