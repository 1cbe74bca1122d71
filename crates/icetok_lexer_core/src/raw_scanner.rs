//! Per-chunk raw scanner.
//!
//! Dispatch runs once per whitespace-delimited chunk of the preprocessed
//! source. A handful of rules look at the whole chunk up front (bare word,
//! symmetric quoting, paragraph markers, the bracketed ellipsis); everything
//! else is scanned left to right, one sub-lexer decision at a time.

use icetok_ir::{Kind, SpacingClass, Tok, Val};

use crate::cursor::Cursor;
use crate::digit;
use crate::punctuation;
use crate::source_buffer::SourceBuffer;

const DOUBLE_QUOTE_OPEN: char = '„';
const DOUBLE_QUOTE_CLOSE: char = '“';
const SINGLE_QUOTE_OPEN: char = '‚';
const SINGLE_QUOTE_CLOSE: char = '‘';

/// Pull-based view over the raw tokens of a [`SourceBuffer`]. The full scan
/// runs eagerly in [`RawScanner::new`]; this type exists so callers get the
/// familiar `Iterator` surface rather than a bare `Vec`.
pub struct RawScanner {
    tokens: std::vec::IntoIter<Tok>,
}

impl RawScanner {
    #[must_use]
    pub fn new(buf: &SourceBuffer, is_si_symbol: impl Fn(&str) -> bool) -> Self {
        RawScanner { tokens: scan_all(buf, is_si_symbol).into_iter() }
    }
}

impl Iterator for RawScanner {
    type Item = Tok;

    fn next(&mut self) -> Option<Tok> {
        self.tokens.next()
    }
}

/// Scans the entire buffer and returns every raw token in source order.
#[must_use]
pub fn scan_all(buf: &SourceBuffer, is_si_symbol: impl Fn(&str) -> bool) -> Vec<Tok> {
    let chars = buf.processed();
    let n = chars.len();
    let mut out = Vec::new();
    let mut i = 0;
    while i < n {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        let chunk_start = i;
        let mut j = i;
        while j < n && !chars[j].is_whitespace() {
            j += 1;
        }
        scan_chunk(buf, chunk_start, &chars[chunk_start..j], &is_si_symbol, &mut out);
        i = j;
    }
    out
}

fn scan_chunk(buf: &SourceBuffer, chunk_start: usize, chunk: &[char], is_si_symbol: &impl Fn(&str) -> bool, out: &mut Vec<Tok>) {
    if chunk.is_empty() {
        return;
    }

    if chunk == ['[', '['] {
        out.push(Tok::structural(Kind::PBegin));
        return;
    }
    if chunk == [']', ']'] {
        out.push(Tok::structural(Kind::PEnd));
        return;
    }
    if matches_literal(chunk, "[...]") || matches_literal(chunk, "[…]") {
        out.push(make_tok_with_txt(buf, Kind::Punctuation, Val::Punctuation(SpacingClass::Right), chunk_start, chunk.len(), "…".to_string()));
        return;
    }

    if chunk.len() >= 2 && is_whole_chunk_word(chunk, is_si_symbol) {
        out.push(make_tok(buf, Kind::Word, Val::None, chunk_start, chunk.len()));
        return;
    }
    if chunk.len() == 1 && chunk[0].is_alphabetic() {
        out.push(make_tok(buf, Kind::Word, Val::None, chunk_start, 1));
        return;
    }

    if let Some((open, close)) = symmetric_quote_pair(chunk) {
        out.push(make_tok_with_txt(buf, Kind::Punctuation, Val::Punctuation(SpacingClass::Left), chunk_start, 1, open.to_string()));
        if chunk.len() > 2 {
            scan_chunk(buf, chunk_start + 1, &chunk[1..chunk.len() - 1], is_si_symbol, out);
        }
        out.push(make_tok_with_txt(
            buf,
            Kind::Punctuation,
            Val::Punctuation(SpacingClass::Right),
            chunk_start + chunk.len() - 1,
            1,
            close.to_string(),
        ));
        return;
    }

    scan_chunk_body(buf, chunk_start, chunk, is_si_symbol, out);
}

fn is_whole_chunk_word(chunk: &[char], is_si_symbol: &impl Fn(&str) -> bool) -> bool {
    if chunk.iter().all(|c| c.is_alphabetic()) {
        return true;
    }
    let s: String = chunk.iter().collect();
    is_si_symbol(&s)
}

fn symmetric_quote_pair(chunk: &[char]) -> Option<(char, char)> {
    if chunk.len() < 2 {
        return None;
    }
    let first = chunk[0];
    let last = chunk[chunk.len() - 1];
    if first == '"' && last == '"' {
        Some((DOUBLE_QUOTE_OPEN, DOUBLE_QUOTE_CLOSE))
    } else if first == '\'' && last == '\'' {
        Some((SINGLE_QUOTE_OPEN, SINGLE_QUOTE_CLOSE))
    } else {
        None
    }
}

fn matches_literal(chunk: &[char], literal: &str) -> bool {
    chunk.iter().collect::<String>() == literal
}

fn scan_chunk_body(buf: &SourceBuffer, chunk_start: usize, chunk: &[char], is_si_symbol: &impl Fn(&str) -> bool, out: &mut Vec<Tok>) {
    let n = chunk.len();
    let mut k = 0;
    while k < n {
        let c = chunk[k];

        if c.is_ascii_digit() {
            if let Some(m) = digit::lex_digit_chunk(&chunk[k..], is_si_symbol) {
                out.push(make_tok(buf, m.kind, m.val, chunk_start + k, m.consumed));
                k += m.consumed;
                continue;
            }
        }

        // Degree sign: a unit symbol in its own right (bare "°", scale
        // factor 1) or joined with its scale letter ("°C"/"°F"), never
        // plain punctuation — stage 2's degree composition (§4.5) needs a
        // WORD token here to pair with a preceding NUMBER/YEAR, whether
        // the source wrote "32°C", "33° C", or "37 °C".
        if c == '°' {
            let len = if matches!(chunk.get(k + 1), Some('C') | Some('F')) { 2 } else { 1 };
            out.push(make_tok(buf, Kind::Word, Val::None, chunk_start + k, len));
            k += len;
            continue;
        }

        if starts_with(chunk, k, "http://") || starts_with(chunk, k, "https://") || starts_with(chunk, k, "www.") {
            let mut end = n;
            while end > k + 1 && punctuation::classify(chunk[end - 1]) == Some(SpacingClass::Right) {
                end -= 1;
            }
            out.push(make_tok(buf, Kind::Url, Val::None, chunk_start + k, end - k));
            k = end;
            continue;
        }

        if let Some(len) = try_email(chunk, k) {
            out.push(make_tok(buf, Kind::Email, Val::None, chunk_start + k, len));
            k += len;
            continue;
        }

        if c.is_alphabetic() {
            let len = scan_alpha_run(chunk, k);
            let word = make_tok(buf, Kind::Word, Val::None, chunk_start + k, len);
            for piece in split_run_together(word) {
                out.push(piece);
            }
            k += len;
            continue;
        }

        if let Some(value) = digit::vulgar_fraction_value(c) {
            out.push(make_tok(buf, Kind::Number, Val::Number { value, cases: None, genders: None }, chunk_start + k, 1));
            k += 1;
            continue;
        }

        if punctuation::is_dash(c) {
            let mut end = k;
            while end < n && punctuation::is_dash(chunk[end]) {
                end += 1;
            }
            out.push(make_tok_with_txt(
                buf,
                Kind::Punctuation,
                Val::Punctuation(SpacingClass::None),
                chunk_start + k,
                end - k,
                "-".to_string(),
            ));
            k = end;
            continue;
        }

        if let Some(class) = punctuation::classify(c) {
            out.push(make_tok(buf, Kind::Punctuation, Val::Punctuation(class), chunk_start + k, 1));
            k += 1;
            continue;
        }

        out.push(make_tok(buf, Kind::Unknown, Val::None, chunk_start + k, 1));
        k += 1;
    }
}

fn starts_with(chunk: &[char], k: usize, prefix: &str) -> bool {
    let prefix_chars: Vec<char> = prefix.chars().collect();
    if k + prefix_chars.len() > chunk.len() {
        return false;
    }
    chunk[k..k + prefix_chars.len()]
        .iter()
        .zip(prefix_chars.iter())
        .all(|(a, b)| a.eq_ignore_ascii_case(b))
}

/// `[^@\s]+@[^@\s]+(\.[^@\s]+)+`, simplified to the chunk (which already
/// excludes whitespace) and trimmed of trailing sentence punctuation.
fn try_email(chunk: &[char], k: usize) -> Option<usize> {
    let at_offset = chunk[k..].iter().position(|&c| c == '@')?;
    if at_offset == 0 {
        return None;
    }
    let domain_start = k + at_offset + 1;
    if domain_start >= chunk.len() {
        return None;
    }
    let mut end = domain_start;
    while end < chunk.len() && chunk[end] != '@' {
        end += 1;
    }
    let domain = &chunk[domain_start..end];
    if !domain.contains(&'.') {
        return None;
    }
    while end > domain_start + 1 && punctuation::classify(chunk[end - 1]) == Some(SpacingClass::Right) {
        end -= 1;
    }
    Some(end - k)
}

/// Letters, plus `.`/`'`/`´`/`‘`/`’` when immediately followed by another
/// letter (`O'Malley`, `mbl.is`).
fn scan_alpha_run(chunk: &[char], start: usize) -> usize {
    let mut cur = Cursor::new(&chunk[start..]);
    loop {
        match cur.peek() {
            Some(c) if c.is_alphabetic() => {
                cur.advance();
            }
            Some('.' | '\'' | '´' | '‘' | '’') if cur.peek_at(1).is_some_and(char::is_alphabetic) => {
                cur.advance();
            }
            _ => break,
        }
    }
    cur.pos()
}

/// Detects a run-together sentence boundary (`sjávarútvegi.Það`) inside a
/// word that the greedy alpha-run consumer swallowed whole, and splits it
/// into WORD, `.`, WORD (recursing in case of more than one boundary).
fn split_run_together(tok: Tok) -> Vec<Tok> {
    let chars: Vec<char> = tok.txt.chars().collect();
    for i in 1..chars.len().saturating_sub(1) {
        if chars[i] == '.' && chars[i + 1].is_uppercase() {
            let (left, rest) = tok.split(i as i64);
            let (mut dot, mut right) = rest.split(1);
            dot.kind = Kind::Punctuation;
            dot.val = Val::Punctuation(SpacingClass::Right);
            right.kind = Kind::Word;
            let mut out = vec![left, dot];
            out.extend(split_run_together(right));
            return out;
        }
    }
    vec![tok]
}

fn make_tok(buf: &SourceBuffer, kind: Kind, val: Val, start: usize, len: usize) -> Tok {
    let txt: String = buf.processed()[start..start + len].iter().collect();
    make_tok_with_txt(buf, kind, val, start, len, txt)
}

fn make_tok_with_txt(buf: &SourceBuffer, kind: Kind, val: Val, start: usize, len: usize, txt: String) -> Tok {
    let original = buf.original_slice(start, start + len);
    let base = if len == 0 { 0 } else { buf.origin_of(start) };
    let origin_spans: Vec<u32> = if txt.chars().count() == len {
        (0..len).map(|o| buf.origin_of(start + o) - base).collect()
    } else {
        vec![0; txt.chars().count()]
    };
    Tok::new(kind, txt, val, original, origin_spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_buffer::PreprocessOptions;
    use pretty_assertions::assert_eq;

    fn scan(s: &str) -> Vec<Tok> {
        let buf = SourceBuffer::new(s, PreprocessOptions::default());
        scan_all(&buf, crate::si_units::is_si_symbol)
    }

    #[test]
    fn plain_word() {
        let toks = scan("hestur");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, Kind::Word);
        assert_eq!(toks[0].txt, "hestur");
    }

    #[test]
    fn two_words_separated_by_space() {
        let toks = scan("Einar Örn");
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0].txt, "Einar");
        assert_eq!(toks[1].txt, "Örn");
    }

    #[test]
    fn apostrophe_word_stays_together() {
        let toks = scan("O'Malley");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].txt, "O'Malley");
    }

    #[test]
    fn run_together_sentence_splits() {
        let toks = scan("sjávarútvegi.Það");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].txt, "sjávarútvegi");
        assert_eq!(toks[1].kind, Kind::Punctuation);
        assert_eq!(toks[1].txt, ".");
        assert_eq!(toks[2].txt, "Það");
    }

    #[test]
    fn domain_like_word_stays_together() {
        let toks = scan("mbl.is");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].txt, "mbl.is");
    }

    #[test]
    fn symmetric_double_quotes() {
        let toks = scan("\"hestur\"");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].txt, "„");
        assert_eq!(toks[1].txt, "hestur");
        assert_eq!(toks[2].txt, "“");
    }

    #[test]
    fn dash_run_collapses() {
        let toks = scan("a---b");
        // 'a', normalized dash, 'b'
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[1].txt, "-");
    }

    #[test]
    fn url_trims_trailing_period() {
        let toks = scan("www.mbl.is.");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, Kind::Url);
        assert_eq!(toks[0].txt, "www.mbl.is");
    }

    #[test]
    fn email_detected() {
        let toks = scan("jon@example.com");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, Kind::Email);
    }

    #[test]
    fn paragraph_markers() {
        let toks = scan("[[ hestur ]]");
        assert_eq!(toks[0].kind, Kind::PBegin);
        assert_eq!(toks.last().unwrap().kind, Kind::PEnd);
    }

    #[test]
    fn bracketed_ellipsis() {
        let toks = scan("hestur [...] folald");
        assert_eq!(toks[1].txt, "…");
    }

    #[test]
    fn vulgar_fraction_alone() {
        let toks = scan("sjá ½ bolla");
        assert_eq!(toks[1].kind, Kind::Number);
        assert_eq!(toks[1].val, Val::Number { value: 0.5, cases: None, genders: None });
    }

    #[test]
    fn year_digit_chunk() {
        let toks = scan("árið 2007 kom");
        assert_eq!(toks[1].kind, Kind::Year);
    }

    #[test]
    fn joined_degree_letter_is_one_word_token() {
        let toks = scan("32°C");
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0].kind, Kind::Number);
        assert_eq!(toks[1].kind, Kind::Word);
        assert_eq!(toks[1].txt, "°C");
    }

    #[test]
    fn bare_degree_sign_is_its_own_word_token() {
        let toks = scan("33°");
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[1].kind, Kind::Word);
        assert_eq!(toks[1].txt, "°");
    }

    #[test]
    fn degree_sign_chunk_keeps_trailing_period_separate() {
        let toks = scan("37 °C.");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[1].kind, Kind::Word);
        assert_eq!(toks[1].txt, "°C");
        assert_eq!(toks[2].kind, Kind::Punctuation);
        assert_eq!(toks[2].txt, ".");
    }
}
