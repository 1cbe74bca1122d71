//! Preprocessing over raw input text, producing a processed character
//! buffer plus an origin index for every processed character.

use memchr::{memchr, memchr3};

use crate::entities;
use crate::glyphs;

/// Preprocessing knobs consulted while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug)]
pub struct PreprocessOptions {
    pub replace_composite_glyphs: bool,
    pub replace_html_escapes: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        PreprocessOptions {
            replace_composite_glyphs: true,
            replace_html_escapes: false,
        }
    }
}

/// A text buffer after preprocessing, with origin tracking back to the
/// pristine input. `processed[i]` derives from `original` starting at
/// character index `origin[i]`, for `origin[i]..next_origin` characters
/// (entity/glyph expansions collapse several original characters into
/// one processed character; the removed zero-width characters simply
/// vanish, with surrounding processed characters still correctly
/// anchored on either side).
pub struct SourceBuffer {
    original: Vec<char>,
    processed: Vec<char>,
    origin: Vec<u32>,
}

impl SourceBuffer {
    #[must_use]
    pub fn new(text: &str, opts: PreprocessOptions) -> Self {
        let original: Vec<char> = text.chars().collect();

        if Self::skips_all_preprocessing(text, opts) {
            let origin: Vec<u32> = (0..original.len() as u32).collect();
            let processed = original.clone();
            return SourceBuffer { original, processed, origin };
        }

        let mut processed = Vec::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());

        let mut i = 0usize;
        while i < original.len() {
            let c = original[i];

            if glyphs::is_always_stripped(c) {
                i += 1;
                continue;
            }

            if opts.replace_html_escapes && c == '&' {
                if let Some((replacement, len)) = entities::match_entity(&original, i) {
                    processed.push(replacement);
                    origin.push(i as u32);
                    i += len;
                    continue;
                }
            }

            if opts.replace_composite_glyphs && i + 1 < original.len() {
                if let Some(replacement) = glyphs::composite_replacement(c, original[i + 1]) {
                    processed.push(replacement);
                    origin.push(i as u32);
                    i += 2;
                    continue;
                }
            }

            processed.push(c);
            origin.push(i as u32);
            i += 1;
        }

        SourceBuffer { original, processed, origin }
    }

    /// `memchr`-accelerated check for whether any byte the slow path
    /// below cares about is present, so plain prose (the overwhelming
    /// majority of input) skips the per-character special-casing
    /// entirely. A positive match from any needle here only ever sends
    /// well-behaved text down the slow path too eagerly, never the other
    /// way around, since every needle is a strict superset of the
    /// characters its corresponding check fires on.
    fn skips_all_preprocessing(text: &str, opts: PreprocessOptions) -> bool {
        let bytes = text.as_bytes();
        if opts.replace_html_escapes && memchr(b'&', bytes).is_some() {
            return false;
        }
        // 0xCC is the shared lead byte of U+0301 (combining acute) and
        // U+0308 (combining diaeresis); irrelevant when composite-glyph
        // collapsing is off.
        if opts.replace_composite_glyphs && memchr(0xCC, bytes).is_some() {
            return false;
        }
        // Lead bytes of the three always-stripped marks: U+00AD (soft
        // hyphen, 0xC2), U+200B (zero-width space, 0xE2), U+FEFF
        // (zero-width no-break space, 0xEF). memchr3 only takes three
        // needles, which is exactly enough here.
        memchr3(0xC2, 0xE2, 0xEF, bytes).is_none()
    }

    #[must_use]
    pub fn processed(&self) -> &[char] {
        &self.processed
    }

    #[must_use]
    pub fn original(&self) -> &[char] {
        &self.original
    }

    /// Origin index (into `original`) of `processed[i]`.
    #[must_use]
    pub fn origin_of(&self, i: usize) -> u32 {
        self.origin[i]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.processed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }

    /// The substring of `original` spanned by processed indices
    /// `[start, end)`, suitable as a `Tok::original` value. Includes
    /// every original character consumed by any processed character in
    /// the range, up to (but not including) the origin of the character
    /// one past the range.
    #[must_use]
    pub fn original_slice(&self, start: usize, end: usize) -> String {
        if start >= end {
            return String::new();
        }
        let from = self.origin[start] as usize;
        let to = if end < self.origin.len() {
            self.origin[end] as usize
        } else {
            self.original.len()
        };
        self.original[from..to].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_zero_width_chars() {
        let buf = SourceBuffer::new("a\u{200B}b", PreprocessOptions::default());
        assert_eq!(buf.processed(), &['a', 'b']);
    }

    #[test]
    fn composite_glyphs_collapse_by_default() {
        let buf = SourceBuffer::new("a\u{0301}", PreprocessOptions::default());
        assert_eq!(buf.processed(), &['á']);
        assert_eq!(buf.origin_of(0), 0);
    }

    #[test]
    fn composite_glyphs_left_alone_when_disabled() {
        let opts = PreprocessOptions { replace_composite_glyphs: false, ..Default::default() };
        let buf = SourceBuffer::new("a\u{0301}", opts);
        assert_eq!(buf.processed(), &['a', '\u{0301}']);
    }

    #[test]
    fn html_entities_expand_when_enabled() {
        let opts = PreprocessOptions { replace_html_escapes: true, ..Default::default() };
        let buf = SourceBuffer::new("A&amp;B", opts);
        assert_eq!(buf.processed(), &['A', '&', 'B']);
        assert_eq!(buf.original_slice(0, 2), "A&amp;");
    }

    #[test]
    fn html_entities_untouched_when_disabled() {
        let buf = SourceBuffer::new("A&amp;B", PreprocessOptions::default());
        let collected: String = buf.processed().iter().collect();
        assert_eq!(collected, "A&amp;B");
    }

    #[test]
    fn original_slice_round_trips_plain_text() {
        let buf = SourceBuffer::new("hello world", PreprocessOptions::default());
        assert_eq!(buf.original_slice(0, buf.len()), "hello world");
    }

    #[test]
    fn fast_path_taken_for_plain_icelandic_prose() {
        let text = "Þótt Ólafur ætti önnur ráð, gekk hann út í blíðuna.";
        assert!(SourceBuffer::skips_all_preprocessing(text, PreprocessOptions::default()));
        let buf = SourceBuffer::new(text, PreprocessOptions::default());
        let collected: String = buf.processed().iter().collect();
        assert_eq!(collected, text);
        assert_eq!(buf.origin_of(0), 0);
    }

    #[test]
    fn fast_path_rejected_when_combining_marks_present() {
        assert!(!SourceBuffer::skips_all_preprocessing(
            "a\u{0301}",
            PreprocessOptions::default()
        ));
    }

    #[test]
    fn fast_path_ignores_combining_marks_when_collapsing_disabled() {
        let opts = PreprocessOptions { replace_composite_glyphs: false, ..Default::default() };
        assert!(SourceBuffer::skips_all_preprocessing("a\u{0301}", opts));
    }

    #[test]
    fn fast_path_rejected_when_ampersand_present_and_entities_enabled() {
        let opts = PreprocessOptions { replace_html_escapes: true, ..Default::default() };
        assert!(!SourceBuffer::skips_all_preprocessing("A&amp;B", opts));
    }

    #[test]
    fn fast_path_ignores_ampersand_when_entities_disabled() {
        assert!(SourceBuffer::skips_all_preprocessing(
            "A&amp;B",
            PreprocessOptions::default()
        ));
    }
}
