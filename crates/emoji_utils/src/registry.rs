use std::borrow::Cow;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use hashbrown::HashMap;
use indexmap::map::{Entry as MapEntry, IndexMap};
use smol_str::SmolStr;

use crate::config::RegistryConfig;
use crate::error::RegistryLoadError;
use crate::key::EmojiKey;
use crate::scan::Matches;
use crate::source::Records;

/// One registered emoji variant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    key: EmojiKey,
    glyph: SmolStr,
    descriptor: SmolStr,
}

impl Entry {
    #[inline]
    pub fn key(&self) -> &EmojiKey {
        &self.key
    }

    /// The literal emoji, spelling exactly the codepoints of [`Entry::key`]
    #[inline]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Human-readable name, such as "Thumbs Up: Light Skin Tone"
    #[inline]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyph)
    }
}

/// Removes any `\u{FE0F}` variation selectors for a more compact representation
///
/// ZWJ sequences are left alone, as their selectors are part of the sequence.
pub fn minimize(s: &str) -> Cow<'_, str> {
    if s.contains('\u{FE0F}') && !s.contains('\u{200D}') {
        s.replace('\u{FE0F}', "").into()
    } else {
        s.into()
    }
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, u32>,
    /// Index of the entry whose key ends at this node
    entry: Option<u32>,
}

/// Codepoint trie, `nodes[0]` being the root
#[derive(Debug)]
struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Trie {
            nodes: vec![Node::default()],
        }
    }
}

impl Trie {
    /// Returns the index of the existing entry on conflict
    fn insert(&mut self, key: &[char], entry: u32) -> Result<(), u32> {
        let mut node = 0;

        for &c in key {
            let next = self.nodes.len() as u32;

            node = *self.nodes[node].children.entry(c).or_insert(next) as usize;

            if node == next as usize {
                self.nodes.push(Node::default());
            }
        }

        match self.nodes[node].entry {
            Some(existing) => Err(existing),
            None => {
                self.nodes[node].entry = Some(entry);
                Ok(())
            }
        }
    }

    /// Walks the trie along `s`, returning the deepest entry found and its length in bytes
    fn longest_prefix(&self, s: &str) -> Option<(u32, usize)> {
        let mut node = &self.nodes[0];
        let mut longest = None;

        for (i, c) in s.char_indices() {
            node = match node.children.get(&c) {
                Some(&next) => &self.nodes[next as usize],
                None => break,
            };

            if let Some(entry) = node.entry {
                longest = Some((entry, i + c.len_utf8()));
            }
        }

        longest
    }
}

/// Incrementally builds a [`Registry`], rejecting duplicate keys as they are inserted
#[derive(Debug)]
pub struct RegistryBuilder {
    verify_glyphs: bool,
    entries: IndexMap<EmojiKey, Entry>,
    index: Trie,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        RegistryBuilder {
            verify_glyphs: true,
            entries: IndexMap::new(),
            index: Trie::default(),
        }
    }
}

impl RegistryBuilder {
    /// When disabled, a glyph that doesn't spell its key is logged and replaced
    /// by the key's own glyph instead of failing the load.
    pub fn verify_glyphs(mut self, verify: bool) -> Self {
        self.verify_glyphs = verify;
        self
    }

    pub fn insert(&mut self, key: EmojiKey, glyph: &str, descriptor: &str) -> Result<&mut Self, RegistryLoadError> {
        let glyph = match key.matches_glyph(glyph) {
            true => SmolStr::new(glyph),
            false if self.verify_glyphs => {
                return Err(RegistryLoadError::GlyphMismatch {
                    key,
                    glyph: glyph.to_owned(),
                })
            }
            false => {
                tracing::warn!("Glyph {glyph:?} does not match key {key}, using the key instead");

                SmolStr::from(key.to_glyph())
            }
        };

        let idx = self.entries.len() as u32;

        if self.index.insert(key.codepoints(), idx).is_err() {
            return Err(RegistryLoadError::DuplicateKey(key));
        }

        match self.entries.entry(key) {
            // unreachable, the trie rejects duplicates first
            MapEntry::Occupied(o) => Err(RegistryLoadError::DuplicateKey(o.key().clone())),
            MapEntry::Vacant(v) => {
                let key = v.key().clone();

                v.insert(Entry {
                    key,
                    glyph,
                    descriptor: SmolStr::new(descriptor),
                });

                Ok(self)
            }
        }
    }

    /// Parses the textual key and inserts the record
    pub fn insert_record(&mut self, key: &str, glyph: &str, descriptor: &str) -> Result<&mut Self, RegistryLoadError> {
        match key.parse() {
            Ok(parsed) => self.insert(parsed, glyph, descriptor),
            Err(source) => Err(RegistryLoadError::InvalidKey {
                key: key.to_owned(),
                source,
            }),
        }
    }

    pub fn build(self) -> Registry {
        let RegistryBuilder { entries, index, .. } = self;

        let mut forms = HashMap::with_capacity(entries.len());

        for (idx, entry) in entries.values().enumerate() {
            if let Cow::Owned(form) = minimize(&entry.glyph) {
                // an entry registered in exactly that form takes priority at lookup
                forms.entry(SmolStr::from(form)).or_insert(idx as u32);
            }
        }

        tracing::debug!("Built emoji registry with {} entries, {} trie nodes", entries.len(), index.nodes.len());

        Registry { entries, index, forms }
    }
}

/// Immutable mapping of emoji keys to entries, indexed for longest-prefix lookup.
///
/// Never mutated after construction, so it may be shared freely between threads.
#[derive(Debug)]
pub struct Registry {
    entries: IndexMap<EmojiKey, Entry>,
    index: Trie,
    /// Minimized forms of entries containing variation selectors
    forms: HashMap<SmolStr, u32>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    fn from_records(records: Records, verify_glyphs: bool) -> Result<Registry, RegistryLoadError> {
        let mut builder = RegistryBuilder::default().verify_glyphs(verify_glyphs);

        for (key, record) in &records.0 {
            builder.insert_record(key, &record.glyph, &record.descriptor)?;
        }

        Ok(builder.build())
    }

    pub fn from_slice(data: &[u8]) -> Result<Registry, RegistryLoadError> {
        Registry::from_records(Records::from_slice(data)?, true)
    }

    pub fn from_reader(reader: impl Read) -> Result<Registry, RegistryLoadError> {
        Registry::from_records(Records::from_reader(reader)?, true)
    }

    /// Loads a registry file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Registry, RegistryLoadError> {
        Registry::from_slice(&std::fs::read(path)?)
    }

    /// Loads the registry described by `config`, falling back to the bundled data if no path is given
    pub fn load_with(config: &RegistryConfig) -> Result<Registry, RegistryLoadError> {
        let data: Cow<[u8]> = match config.path {
            Some(ref path) => {
                tracing::info!("Loading emoji registry from {}", path.display());

                std::fs::read(path)?.into()
            }
            #[cfg(feature = "bundled")]
            None => crate::BUNDLED_DATA.as_bytes().into(),
            #[cfg(not(feature = "bundled"))]
            None => return Err(RegistryLoadError::MissingSource),
        };

        Registry::from_records(Records::from_slice(&data)?, config.verify_glyphs)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates through all entries in load order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Entry> {
        self.entries.values()
    }

    #[inline]
    pub fn get(&self, key: &EmojiKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &EmojiKey) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    fn get_index(&self, idx: u32) -> Option<&Entry> {
        self.entries.get_index(idx as usize).map(|(_, entry)| entry)
    }

    /// Takes any form of an emoji, with or without variation selectors, and returns the registered entry
    pub fn find(&self, form: &str) -> Option<&Entry> {
        let codepoints: smallvec::SmallVec<[char; 8]> = form.chars().collect();

        if let Some(entry) = self.entries.get(codepoints.as_slice()) {
            return Some(entry);
        }

        let minimized = minimize(form);

        // a bare base emoji may be registered as such
        if let Cow::Owned(ref form) = minimized {
            let codepoints: smallvec::SmallVec<[char; 8]> = form.chars().collect();

            if let Some(entry) = self.entries.get(codepoints.as_slice()) {
                return Some(entry);
            }
        }

        self.forms.get(minimized.as_ref()).and_then(|&idx| self.get_index(idx))
    }

    /// Finds the entry with the longest key that `s` starts with, along with that key's length in bytes
    pub fn longest_prefix(&self, s: &str) -> Option<(&Entry, usize)> {
        let (idx, len) = self.index.longest_prefix(s)?;

        Some((self.get_index(idx)?, len))
    }

    /// Like [`Registry::longest_prefix`], but starting at byte position `at` of `text`.
    ///
    /// Positions out of bounds or not on a character boundary find nothing.
    pub fn lookup_longest_prefix(&self, text: &str, at: usize) -> Option<(&Entry, usize)> {
        self.longest_prefix(text.get(at..)?)
    }

    /// Scans `text` for every emoji occurrence, see [`crate::scan::scan`]
    #[inline]
    pub fn scan<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        Matches::new(self, text)
    }
}

impl FromStr for Registry {
    type Err = RegistryLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Registry::from_slice(s.as_bytes())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Entry;
    type IntoIter = indexmap::map::Values<'a, EmojiKey, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
