//! Composite-Unicode-glyph replacement table.
//!
//! Enumerates exactly the Icelandic `vowel + COMBINING ACUTE ACCENT
//! (U+0301)` / `vowel + COMBINING DIAERESIS (U+0308)` pairs that collapse
//! to a single precomposed code point when
//! `Options::replace_composite_glyphs` is enabled. All other combining
//! sequences are left untouched.

const ACCENT: char = '\u{0301}';
const UMLAUT: char = '\u{0308}';

/// `(base, combining_mark, precomposed)` triples.
const REPLACEMENTS: &[(char, char, char)] = &[
    ('a', ACCENT, 'á'),
    ('a', UMLAUT, 'ä'),
    ('e', ACCENT, 'é'),
    ('e', UMLAUT, 'ë'),
    ('i', ACCENT, 'í'),
    ('o', ACCENT, 'ó'),
    ('u', ACCENT, 'ú'),
    ('u', UMLAUT, 'ü'),
    ('y', ACCENT, 'ý'),
    ('o', UMLAUT, 'ö'),
    ('A', UMLAUT, 'Ä'),
    ('A', ACCENT, 'Á'),
    ('E', ACCENT, 'É'),
    ('E', UMLAUT, 'Ë'),
    ('I', ACCENT, 'Í'),
    ('O', ACCENT, 'Ó'),
    ('U', ACCENT, 'Ú'),
    ('U', UMLAUT, 'Ü'),
    ('Y', ACCENT, 'Ý'),
    ('O', UMLAUT, 'Ö'),
];

/// If `base, mark` is a recognized composite pair, returns the
/// precomposed replacement character.
#[must_use]
pub fn composite_replacement(base: char, mark: char) -> Option<char> {
    REPLACEMENTS
        .iter()
        .find(|&&(b, m, _)| b == base && m == mark)
        .map(|&(_, _, r)| r)
}

/// Soft hyphen, zero-width space, zero-width no-break space — stripped
/// unconditionally during preprocessing regardless of
/// `replace_composite_glyphs`.
#[must_use]
pub fn is_always_stripped(c: char) -> bool {
    matches!(c, '\u{00AD}' | '\u{200B}' | '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pairs_resolve() {
        assert_eq!(composite_replacement('a', ACCENT), Some('á'));
        assert_eq!(composite_replacement('o', UMLAUT), Some('ö'));
        assert_eq!(composite_replacement('O', UMLAUT), Some('Ö'));
    }

    #[test]
    fn unknown_pair_is_none() {
        assert_eq!(composite_replacement('x', ACCENT), None);
        assert_eq!(composite_replacement('a', 'b'), None);
    }

    #[test]
    fn zero_width_chars_stripped() {
        assert!(is_always_stripped('\u{00AD}'));
        assert!(is_always_stripped('\u{200B}'));
        assert!(is_always_stripped('\u{FEFF}'));
        assert!(!is_always_stripped('a'));
    }
}
