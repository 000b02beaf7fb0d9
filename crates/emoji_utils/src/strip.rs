use crate::registry::Registry;
use crate::scan::{contains_emoji, scan};

/// Appends text while collapsing whitespace runs into single spaces,
/// dropping any whitespace at the start or end of the output.
///
/// Runs are tracked across calls, so whitespace on either side of a removed span merges.
struct Collapse {
    out: String,
    pending_space: bool,
}

impl Collapse {
    fn with_capacity(capacity: usize) -> Self {
        Collapse {
            out: String::with_capacity(capacity),
            pending_space: false,
        }
    }

    fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            if c.is_whitespace() {
                self.pending_space = !self.out.is_empty();
                continue;
            }

            if self.pending_space {
                self.out.push(' ');
                self.pending_space = false;
            }

            self.out.push(c);
        }
    }

    fn push_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.push_str(c.encode_utf8(&mut buf));
    }

    /// Copies the parts of `text` outside of any emoji
    fn push_stripped(&mut self, text: &str, registry: &Registry) {
        let mut last = 0;

        for m in scan(text, registry) {
            self.push_str(&text[last..m.start]);
            last = m.end;
        }

        self.push_str(&text[last..]);
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Collapses every run of Unicode whitespace into a single ASCII space and trims both ends
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = Collapse::with_capacity(text.len());
    out.push_str(text);
    out.finish()
}

/// Deleting a span can join its neighbours into a new sequence, such as the two
/// halves of a flag around another emoji, so strip again until nothing matches.
///
/// Every pass that runs removes at least one codepoint.
fn strip_rejoined(mut text: String, registry: &Registry) -> String {
    while contains_emoji(&text, registry) {
        let mut out = Collapse::with_capacity(text.len());
        out.push_stripped(&text, registry);
        text = out.finish();
    }

    text
}

/// Removes every emoji occurrence from `text`, then normalizes whitespace
/// as in [`normalize_whitespace`]. The result never contains an emoji.
///
/// The result is never longer than `text`.
pub fn strip(text: &str, registry: &Registry) -> String {
    let mut out = Collapse::with_capacity(text.len());
    out.push_stripped(text, registry);
    strip_rejoined(out.finish(), registry)
}

/// Like [`strip`], but for bytes that may not be valid UTF-8.
///
/// Invalid sequences are content rather than emoji, and are kept as `U+FFFD`.
pub fn strip_bytes(bytes: &[u8], registry: &Registry) -> String {
    let mut out = Collapse::with_capacity(bytes.len());

    for chunk in bytes.utf8_chunks() {
        out.push_stripped(chunk.valid(), registry);

        if !chunk.invalid().is_empty() {
            out.push_char(char::REPLACEMENT_CHARACTER);
        }
    }

    strip_rejoined(out.finish(), registry)
}
