//! Public entry points for the icetok Icelandic tokenizer.
//!
//! This crate wires the raw lexer (`icetok_lexer_core`) to the cooking
//! pipeline (`icetok_lexer`) behind the process-wide abbreviation table
//! (`icetok_abbrev::global`) and adds the pieces that only make sense once
//! a full token stream exists: the detokenizer, paragraph grouping, and
//! index calculation.

pub mod detokenize;
pub mod options;
pub mod prelude;

use icetok_abbrev::AbbrevTable;
use icetok_ir::{Kind, Tok};

pub use detokenize::{correct_spaces, detokenize, mark_paragraphs};
pub use icetok_lexer_core::generate_raw_tokens;
pub use options::Options;

/// Runs the full pipeline (raw lexer + all six cooking stages) against
/// the process-wide abbreviation table, filtering out `X_END` sentinels
/// ("with X_END filtered out").
#[must_use]
pub fn tokenize(input: &str, opts: Options) -> Vec<Tok> {
    tokenize_with_table(input, opts, icetok_abbrev::initialize())
}

/// Same as [`tokenize`] but against an explicitly supplied abbreviation
/// table, for callers that don't want the process-wide singleton (tests,
/// or a process hosting more than one Icelandic configuration at once).
#[must_use]
pub fn tokenize_with_table(input: &str, opts: Options, table: &AbbrevTable) -> Vec<Tok> {
    let raw = generate_raw_tokens(input, opts.preprocess());
    icetok_lexer::cook(raw.into_iter(), table, opts.cook())
        .filter(|t| t.kind != Kind::XEnd)
        .collect()
}

/// Stops after stage 5 (particle coalescing, sentence segmentation, and
/// date/time composition), skipping the number/currency/composite-hyphen
/// phrase composer.
#[must_use]
pub fn tokenize_without_annotation(input: &str, opts: Options) -> Vec<Tok> {
    let table = icetok_abbrev::initialize();
    let raw = generate_raw_tokens(input, opts.preprocess());
    icetok_lexer::cook_without_annotation(raw.into_iter(), table, opts.cook())
        .filter(|t| t.kind != Kind::XEnd)
        .collect()
}

/// Tokenizes `input`, then re-joins each sentence's tokens with single
/// spaces, yielding one string per sentence. When
/// `opts.original` is set, each token's `original` surface is used
/// instead of its cooked `txt`.
#[must_use]
pub fn split_into_sentences(input: &str, opts: Options) -> Vec<String> {
    let tokens = tokenize(input, opts);
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for tok in &tokens {
        match tok.kind {
            Kind::SBegin => current.clear(),
            Kind::SEnd => {
                sentences.push(current.join(" "));
                current.clear();
            }
            _ if tok.kind.is_structural() => {}
            _ => current.push(if opts.original { &tok.original } else { &tok.txt }),
        }
    }
    if !current.is_empty() {
        sentences.push(current.join(" "));
    }
    sentences
}

/// Groups a cooked token stream into paragraphs, each a list of
/// `(sentence_start_index, tokens)` pairs where `sentence_start_index` is
/// the index (within the paragraph's own flattened token list) of each
/// `S_BEGIN`.
#[must_use]
pub fn paragraphs(tokens: &[Tok]) -> Vec<Vec<(usize, Vec<Tok>)>> {
    let mut result = Vec::new();
    let mut current_paragraph: Vec<(usize, Vec<Tok>)> = Vec::new();
    let mut current_sentence: Vec<Tok> = Vec::new();
    let mut sentence_start = 0usize;
    let mut flat_index = 0usize;
    let mut in_paragraph = false;

    for tok in tokens {
        match tok.kind {
            Kind::PBegin => {
                current_paragraph.clear();
                flat_index = 0;
                in_paragraph = true;
            }
            Kind::PEnd => {
                if in_paragraph {
                    result.push(std::mem::take(&mut current_paragraph));
                }
                in_paragraph = false;
            }
            Kind::SBegin => {
                sentence_start = flat_index;
                current_sentence.clear();
            }
            Kind::SEnd => {
                current_paragraph.push((sentence_start, std::mem::take(&mut current_sentence)));
            }
            Kind::XEnd => {}
            _ => {
                current_sentence.push(tok.clone());
                flat_index += 1;
            }
        }
    }
    if !current_paragraph.is_empty() {
        result.push(current_paragraph);
    }
    result
}

/// Starting char offset and starting byte offset in the original source
/// for each token, found by walking the stream and accumulating the
/// length of each token's `original` field in order. When `last_is_end`
/// is set, an extra trailing entry holds the offset one past the end of
/// the last token, so ranges
/// can always be read as `indexes[i]..indexes[i + 1]`.
#[must_use]
pub fn calculate_indexes(tokens: &[Tok], last_is_end: bool) -> (Vec<usize>, Vec<usize>) {
    let mut char_indexes = Vec::with_capacity(tokens.len() + 1);
    let mut byte_indexes = Vec::with_capacity(tokens.len() + 1);
    let mut char_pos = 0usize;
    let mut byte_pos = 0usize;

    for tok in tokens {
        char_indexes.push(char_pos);
        byte_indexes.push(byte_pos);
        char_pos += tok.original.chars().count();
        byte_pos += tok.original.len();
    }
    if last_is_end {
        char_indexes.push(char_pos);
        byte_indexes.push(byte_pos);
    }
    (char_indexes, byte_indexes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use icetok_ir::SpacingClass;
    use pretty_assertions::assert_eq;

    #[test]
    fn tokenize_wraps_sentence_and_filters_xend() {
        let toks = tokenize("Jón kom.", Options::default());
        assert_eq!(toks.first().unwrap().kind, Kind::SBegin);
        assert_eq!(toks.last().unwrap().kind, Kind::SEnd);
        assert!(toks.iter().all(|t| t.kind != Kind::XEnd));
    }

    #[test]
    fn split_into_sentences_joins_with_single_spaces() {
        let sentences = split_into_sentences("Jón kom. Síðan fór hann.", Options::default());
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("Jón kom"));
    }

    #[test]
    fn paragraphs_groups_sentences_under_paragraph_markers() {
        let marked = mark_paragraphs("Fyrsta setning.\nÖnnur setning.");
        let toks = tokenize(&marked, Options::default());
        let paras = paragraphs(&toks);
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].len(), 1);
        assert_eq!(paras[1].len(), 1);
    }

    #[test]
    fn calculate_indexes_tracks_cumulative_original_length() {
        let toks = vec![
            Tok::new(Kind::Word, "Jón", icetok_ir::Val::None, "Jón", vec![0, 1, 2]),
            Tok::new(Kind::Punctuation, ".", icetok_ir::Val::Punctuation(SpacingClass::Right), ".", vec![0]),
        ];
        let (chars, bytes) = calculate_indexes(&toks, true);
        assert_eq!(chars, vec![0, 3, 4]);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[2], "Jón.".len());
    }

    #[test]
    fn tokenize_with_explicit_table_matches_default() {
        let table = AbbrevTable::default_table();
        let a = tokenize_with_table("Halló heimur.", Options::default(), &table);
        let b = tokenize("Halló heimur.", Options::default());
        assert_eq!(a.len(), b.len());
    }
}
