//! The origin-tracked token record and its edit operations.

use crate::{Kind, Val};

/// A classified token with a bit-exact mapping from every `txt` character
/// back to the source character it derives from.
///
/// `origin_spans[i]` is the character offset in `original` that `txt`'s
/// `i`-th character derives from. The vector is always the same length as
/// `txt` (measured in `char`s, not bytes) and is non-decreasing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tok {
    pub kind: Kind,
    pub txt: String,
    pub val: Val,
    pub original: String,
    pub origin_spans: Vec<u32>,
}

impl Tok {
    /// Construct a token, checking the origin-span invariant in debug
    /// builds (length match, monotonicity, bounds).
    #[must_use]
    pub fn new(kind: Kind, txt: impl Into<String>, val: Val, original: impl Into<String>, origin_spans: Vec<u32>) -> Self {
        let tok = Tok {
            kind,
            txt: txt.into(),
            val,
            original: original.into(),
            origin_spans,
        };
        tok.debug_check_invariant();
        tok
    }

    /// A structural marker token (paragraph/sentence boundary, sentinel)
    /// carrying no source text of its own.
    #[must_use]
    pub fn structural(kind: Kind) -> Self {
        debug_assert!(kind.is_structural());
        Tok {
            kind,
            txt: String::new(),
            val: Val::None,
            original: String::new(),
            origin_spans: Vec::new(),
        }
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariant(&self) {
        let txt_len = self.txt.chars().count();
        debug_assert_eq!(
            self.origin_spans.len(),
            txt_len,
            "origin_spans length must equal txt char length"
        );
        let original_len = self.original.chars().count() as u32;
        let mut prev = 0u32;
        for (i, &span) in self.origin_spans.iter().enumerate() {
            if original_len > 0 {
                debug_assert!(
                    span < original_len,
                    "origin_spans[{i}] = {span} out of bounds of original (len {original_len})"
                );
            }
            debug_assert!(span >= prev, "origin_spans must be non-decreasing");
            prev = span;
        }
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariant(&self) {}

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.txt.chars().count()
    }

    fn txt_chars(&self) -> Vec<char> {
        self.txt.chars().collect()
    }

    fn original_chars(&self) -> Vec<char> {
        self.original.chars().collect()
    }

    /// Splits this token into `(left, right)` at the `k`-th `txt` character.
    ///
    /// `k == 0` yields an empty left half; `k == txt.len()` yields an empty
    /// right half. Negative `k` counts from the right (`-1` splits before
    /// the last character). `val` is not carried across a split — callers
    /// that split a kind-specific value must recompute it (the pipeline
    /// only ever splits `WORD`/`PUNCTUATION`/`RAW` tokens whose `val` is
    /// `Val::None` or recomputed by the caller).
    #[must_use]
    pub fn split(&self, k: i64) -> (Tok, Tok) {
        let txt_chars = self.txt_chars();
        let n = txt_chars.len() as i64;
        let k = if k < 0 { (n + k).max(0) } else { k.min(n) } as usize;

        if k == 0 {
            let left = Tok {
                kind: self.kind,
                txt: String::new(),
                val: Val::None,
                original: String::new(),
                origin_spans: Vec::new(),
            };
            let right = self.clone();
            return (left, right);
        }
        if k == txt_chars.len() {
            let left = self.clone();
            let right = Tok {
                kind: self.kind,
                txt: String::new(),
                val: Val::None,
                original: String::new(),
                origin_spans: Vec::new(),
            };
            return (left, right);
        }

        let original_chars = self.original_chars();
        let split_origin_idx = self.origin_spans[k] as usize;

        let left = Tok {
            kind: self.kind,
            txt: txt_chars[..k].iter().collect(),
            val: Val::None,
            original: original_chars[..split_origin_idx].iter().collect(),
            origin_spans: self.origin_spans[..k].to_vec(),
        };
        let right = Tok {
            kind: self.kind,
            txt: txt_chars[k..].iter().collect(),
            val: Val::None,
            original: original_chars[split_origin_idx..].iter().collect(),
            origin_spans: self.origin_spans[k..]
                .iter()
                .map(|&s| s - split_origin_idx as u32)
                .collect(),
        };
        (left, right)
    }

    /// Replaces `txt[lo..hi]` (char indices) with `replacement`. `original`
    /// is unchanged; the replacement's origin spans all point at the last
    /// original index covered by the removed slice, so later parts of
    /// `original` keep somewhere to attach. An empty
    /// `replacement` removes the slice outright.
    pub fn substitute(&mut self, range: (usize, usize), replacement: &str) {
        let (lo, hi) = range;
        let mut txt_chars = self.txt_chars();
        debug_assert!(lo <= hi && hi <= txt_chars.len());

        let anchor = if hi > 0 {
            self.origin_spans[hi - 1]
        } else if !self.origin_spans.is_empty() {
            self.origin_spans[0]
        } else {
            0
        };

        let replacement_chars: Vec<char> = replacement.chars().collect();
        let mut new_spans = self.origin_spans[..lo].to_vec();
        new_spans.extend(std::iter::repeat(anchor).take(replacement_chars.len()));
        new_spans.extend_from_slice(&self.origin_spans[hi..]);

        txt_chars.splice(lo..hi, replacement_chars);
        self.txt = txt_chars.into_iter().collect();
        self.origin_spans = new_spans;
        self.debug_check_invariant();
    }

    /// Same as [`Tok::substitute`]; kept as a distinct name for callers
    /// that want to flag a replacement longer than the removed slice.
    /// The anchoring scheme handles any replacement length uniformly, so
    /// this is a thin alias.
    pub fn substitute_longer(&mut self, range: (usize, usize), replacement: &str) {
        self.substitute(range, replacement);
    }

    /// Repeatedly applies [`Tok::substitute`] over non-overlapping, left to
    /// right matches of `needle` in `txt`.
    pub fn substitute_all(&mut self, needle: &str, replacement: &str) {
        if needle.is_empty() {
            return;
        }
        loop {
            let txt_chars = self.txt_chars();
            let needle_chars: Vec<char> = needle.chars().collect();
            let Some(start) = find_char_slice(&txt_chars, &needle_chars) else {
                break;
            };
            self.substitute((start, start + needle_chars.len()), replacement);
        }
    }

    /// Appends `other.txt` (with an optional separator) to this token,
    /// concatenating `original` and shifting `other`'s origin spans to
    /// account for `self.original`'s length. Separator characters that do
    /// not correspond to source input are pinned to the last source index
    /// of `self`.
    #[must_use]
    pub fn concatenate(&self, other: &Tok, separator: &str) -> Tok {
        let self_original_len = self.original.chars().count() as u32;
        let anchor = self.origin_spans.last().copied().unwrap_or(0);

        let mut txt = self.txt.clone();
        txt.push_str(separator);
        txt.push_str(&other.txt);

        let mut original = self.original.clone();
        original.push_str(&other.original);

        let mut origin_spans = self.origin_spans.clone();
        origin_spans.extend(std::iter::repeat(anchor).take(separator.chars().count()));
        origin_spans.extend(other.origin_spans.iter().map(|&s| s + self_original_len));

        Tok {
            kind: self.kind,
            txt,
            val: Val::None,
            original,
            origin_spans,
        }
    }
}

fn find_char_slice(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn simple(txt: &str) -> Tok {
        let spans: Vec<u32> = (0..txt.chars().count() as u32).collect();
        Tok::new(Kind::Word, txt, Val::None, txt, spans)
    }

    #[test]
    fn split_basic() {
        let t = simple("helloworld");
        let (l, r) = t.split(5);
        assert_eq!(l.txt, "hello");
        assert_eq!(r.txt, "world");
        assert_eq!(l.original, "hello");
        assert_eq!(r.original, "world");
        assert_eq!(r.origin_spans, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn split_zero_and_full() {
        let t = simple("abc");
        let (l, r) = t.split(0);
        assert_eq!(l.txt, "");
        assert_eq!(r.txt, "abc");

        let (l, r) = t.split(3);
        assert_eq!(l.txt, "abc");
        assert_eq!(r.txt, "");
    }

    #[test]
    fn split_negative_counts_from_right() {
        let t = simple("abcdef");
        let (l, r) = t.split(-2);
        assert_eq!(l.txt, "abcd");
        assert_eq!(r.txt, "ef");
    }

    #[test]
    fn split_preserves_original_with_whitespace() {
        // "Einar." -> original "Einar ." after a hypothetical normalization,
        // spans: E=0 i=1 n=2 a=3 r=4 .=6 (skipping a space at index 5)
        let spans = vec![0, 1, 2, 3, 4, 6];
        let t = Tok::new(Kind::Word, "Einar.", Val::None, "Einar .", spans);
        let (l, r) = t.split(5);
        assert_eq!(l.txt, "Einar");
        assert_eq!(l.original, "Einar ");
        assert_eq!(r.txt, ".");
        assert_eq!(r.original, ".");
    }

    #[test]
    fn substitute_basic() {
        let mut t = simple("foobar");
        t.substitute((0, 3), "baz");
        assert_eq!(t.txt, "bazbar");
        assert_eq!(t.origin_spans, vec![2, 2, 2, 3, 4, 5]);
    }

    #[test]
    fn substitute_empty_replacement_removes_slice() {
        let mut t = simple("foobar");
        t.substitute((3, 6), "");
        assert_eq!(t.txt, "foo");
        assert_eq!(t.origin_spans, vec![0, 1, 2]);
    }

    #[test]
    fn substitute_longer_repeats_anchor() {
        let mut t = simple("a.b");
        t.substitute_longer((1, 2), "...");
        assert_eq!(t.txt, "a...b");
        assert_eq!(t.origin_spans, vec![0, 1, 1, 1, 2]);
    }

    #[test]
    fn substitute_all_non_overlapping() {
        let mut t = simple("a.b.c.");
        t.substitute_all(".", ",,");
        assert_eq!(t.txt, "a,,b,,c,,");
        assert_eq!(t.txt.chars().count(), t.origin_spans.len());
    }

    #[test]
    fn concatenate_no_separator() {
        let a = simple("foo");
        let b = simple("bar");
        let c = a.concatenate(&b, "");
        assert_eq!(c.txt, "foobar");
        assert_eq!(c.original, "foobar");
        assert_eq!(c.origin_spans, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn concatenate_with_separator_pins_to_last_source_index() {
        let a = simple("og");
        let b = simple("eda");
        let c = a.concatenate(&b, "-");
        assert_eq!(c.txt, "og-eda");
        // separator '-' pinned to a's last origin index (1)
        assert_eq!(c.origin_spans[2], 1);
        // b's spans shifted by len(a.original) == 2
        assert_eq!(&c.origin_spans[3..], &[2, 3, 4]);
    }

    #[test]
    fn structural_token_has_no_text() {
        let t = Tok::structural(Kind::SBegin);
        assert_eq!(t.txt, "");
        assert!(t.origin_spans.is_empty());
    }
}
