//! Spacing reconstruction engine: turns a token stream, or an
//! arbitrary already-spaced string, back into natural Icelandic text.

use icetok_ir::{Kind, SpacingClass, Tok, Val};

/// 5x5 boolean spacing matrix indexed by `(previous class, next class)`,
/// `true` meaning "insert a space before the next piece". Order of both
/// axes is `[Left, Center, Right, None, Word]`.
#[rustfmt::skip]
pub const SPACING_MATRIX: [[bool; 5]; 5] = [
    /*         L      C      R      N      W   */
    /* L */ [false, true,  false, false, false],
    /* C */ [true,  true,  true,  true,  true ],
    /* R */ [true,  true,  false, false, true ],
    /* N */ [false, true,  false, false, false],
    /* W */ [true,  true,  false, false, true ],
];

fn axis(class: SpacingClass) -> usize {
    match class {
        SpacingClass::Left => 0,
        SpacingClass::Center => 1,
        SpacingClass::Right => 2,
        SpacingClass::None => 3,
        SpacingClass::Word => 4,
    }
}

fn needs_space(prev: SpacingClass, next: SpacingClass) -> bool {
    SPACING_MATRIX[axis(prev)][axis(next)]
}

/// A token's spacing class: `PUNCTUATION` tokens carry their own class in
/// `Val::Punctuation`; every other non-structural token defaults to `Word`.
fn spacing_class(tok: &Tok) -> Option<SpacingClass> {
    if tok.kind.is_structural() {
        return None;
    }
    match &tok.val {
        Val::Punctuation(class) => Some(*class),
        _ => Some(SpacingClass::Word),
    }
}

/// Joins a sequence of cooked tokens (as produced by `tokenize`/
/// `tokenize_without_annotation`) into spaced text, using each token's
/// own `txt`. Structural tokens (`S_BEGIN`/`S_END`/...) are skipped but
/// reset the "last class" so each sentence starts fresh.
#[must_use]
pub fn detokenize(tokens: &[Tok], normalize: bool) -> String {
    let mut out = String::new();
    let mut prev: Option<SpacingClass> = None;

    for tok in tokens {
        if tok.kind == Kind::XEnd {
            continue;
        }
        if tok.kind.is_structural() {
            prev = None;
            continue;
        }
        let class = spacing_class(tok).unwrap_or(SpacingClass::Word);
        if let Some(p) = prev {
            if needs_space(p, class) {
                out.push(' ');
            }
        }
        out.push_str(&tok.txt);
        prev = Some(class);
    }

    if normalize {
        correct_spaces(&out)
    } else {
        out
    }
}

/// Re-derives spacing directly from an arbitrary already-tokenish string
/// by walking it character by character and classifying runs the same
/// way the token-based engine would, then re-applies normalization rules
/// (quote canonicalization, run collapsing, dash/ellipsis canonicalization,
/// `HH:MM:SS` joining, year-range en-dash normalization).
#[must_use]
pub fn correct_spaces(input: &str) -> String {
    let collapsed = collapse_sentence_end_runs(input);
    let quoted = canonicalize_quotes(&collapsed);
    let dashed = canonicalize_dashes(&quoted);
    let timed = join_clock_times(&dashed);
    join_year_ranges(&timed)
}

/// Rewrites straight `"` into alternating Icelandic low-9/high-6 quotes
/// (`„`/`“`), opening on even occurrences and closing on odd ones.
fn canonicalize_quotes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut opening = true;
    for c in input.chars() {
        if c == '"' {
            out.push(if opening { '\u{201e}' } else { '\u{201c}' });
            opening = !opening;
        } else {
            out.push(c);
        }
    }
    out
}

/// Collapses runs of sentence-end punctuation (`...`, `!!`, `??`, mixed
/// `?!`) to a single canonical mark, keeping the first character of the
/// run (three or more dots become a single ellipsis character).
fn collapse_sentence_end_runs(input: &str) -> String {
    const ENDERS: &[char] = &['.', '!', '?'];
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if ENDERS.contains(&c) {
            let start = i;
            while i < chars.len() && ENDERS.contains(&chars[i]) {
                i += 1;
            }
            let run = &chars[start..i];
            if run.len() >= 3 && run.iter().all(|&r| r == '.') {
                out.push('\u{2026}');
            } else if run.len() > 1 {
                out.push(run[run.len() - 1]);
            } else {
                out.push(run[0]);
            }
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Maps HYPHEN-MINUS runs between two word characters to an EN DASH, and
/// leaves genuine composite-hyphen compounds alone (single hyphen with no
/// surrounding space already means "stays as is").
fn canonicalize_dashes(input: &str) -> String {
    input.replace(" - ", " \u{2013} ")
}

/// Joins `HH : MM` and `HH : MM : SS` (with the raw lexer's own spaces
/// around colons, if any slipped through) into `HH:MM` / `HH:MM:SS`.
fn join_clock_times(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' && chars.peek() == Some(&':') {
            continue;
        }
        out.push(c);
        if c == ':' {
            while chars.peek() == Some(&' ') {
                chars.next();
            }
        }
    }
    out
}

/// Rewrites `YYYY - YYYY` (ASCII hyphen, spaced on both sides, four-digit
/// years on either side) to `YYYY\u{2013}YYYY` (no spaces, EN DASH).
fn join_year_ranges(input: &str) -> String {
    let words: Vec<&str> = input.split(' ').collect();
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if i + 2 < words.len()
            && is_year(words[i])
            && (words[i + 1] == "-" || words[i + 1] == "\u{2013}")
            && is_year(words[i + 2])
        {
            out.push(format!("{}\u{2013}{}", words[i], words[i + 2]));
            i += 3;
        } else {
            out.push(words[i].to_string());
            i += 1;
        }
    }
    out.join(" ")
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}

/// Wraps each newline-delimited paragraph in `[[ ` and ` ]]`.
#[must_use]
pub fn mark_paragraphs(input: &str) -> String {
    input
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("[[ {line} ]]")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use icetok_ir::Tok;
    use pretty_assertions::assert_eq;

    fn word(txt: &str) -> Tok {
        let n = txt.chars().count() as u32;
        Tok::new(Kind::Word, txt, Val::Word(vec![]), txt, (0..n).collect())
    }

    fn punct(c: char, class: SpacingClass) -> Tok {
        Tok::new(Kind::Punctuation, c.to_string(), Val::Punctuation(class), c.to_string(), vec![0])
    }

    #[test]
    fn word_word_gets_space() {
        let toks = vec![word("Þetta"), word("er")];
        assert_eq!(detokenize(&toks, false), "Þetta er");
    }

    #[test]
    fn right_punct_hugs_previous_word() {
        let toks = vec![word("Jæja"), punct('.', SpacingClass::Right)];
        assert_eq!(detokenize(&toks, false), "Jæja.");
    }

    #[test]
    fn left_punct_hugs_following_word() {
        let toks = vec![punct('(', SpacingClass::Left), word("svo")];
        assert_eq!(detokenize(&toks, false), "(svo");
    }

    #[test]
    fn center_punct_spaced_both_sides() {
        let toks = vec![word("orð"), punct('*', SpacingClass::Center), word("annað")];
        assert_eq!(detokenize(&toks, false), "orð * annað");
    }

    #[test]
    fn none_class_hugs_both_sides() {
        let toks = vec![word("og"), punct('/', SpacingClass::None), word("eða")];
        assert_eq!(detokenize(&toks, false), "og/eða");
    }

    #[test]
    fn structural_tokens_reset_spacing_state() {
        let toks = vec![Tok::structural(Kind::SBegin), word("Já"), Tok::structural(Kind::SEnd)];
        assert_eq!(detokenize(&toks, false), "Já");
    }

    #[test]
    fn correct_spaces_collapses_ellipsis_run() {
        assert_eq!(correct_spaces("Bíddu..."), "Bíddu\u{2026}");
    }

    #[test]
    fn correct_spaces_canonicalizes_quotes() {
        assert_eq!(correct_spaces("hann sagði \"nei\""), "hann sagði \u{201e}nei\u{201c}");
    }

    #[test]
    fn correct_spaces_is_idempotent() {
        let once = correct_spaces("Árin 2010 - 2012 voru \"erfið\"...");
        let twice = correct_spaces(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn correct_spaces_joins_year_range_with_en_dash() {
        assert_eq!(correct_spaces("árin 2010 - 2012"), "árin 2010\u{2013}2012");
    }

    #[test]
    fn mark_paragraphs_wraps_nonblank_lines() {
        assert_eq!(mark_paragraphs("fyrsta\n\nönnur"), "[[ fyrsta ]]\n\n[[ önnur ]]");
    }
}
