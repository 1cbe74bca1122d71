//! Stages 2-6 of the icetok pipeline: the "cooking"
//! pipeline that turns stage 1's coarse `RAW`/`WORD`/`PUNCTUATION`/...
//! tokens into the fully classified stream the public crate exposes.
//!
//! Each stage is a small `Iterator` adapter with at most one token of
//! look-ahead, composed here in pipeline order:
//!
//! ```text
//! raw lexer -> particle coalescer -> sentence segmenter
//!           -> phrase composer 1 -> date/time refiner -> phrase composer 2
//! ```

pub mod options;
pub mod roman;
pub mod stage2_particles;
pub mod stage3_sentences;
pub mod stage4_dates;
pub mod stage5_refine;
pub mod stage6_numbers;
pub mod tables;
pub mod util;

use icetok_abbrev::AbbrevTable;
use icetok_ir::{Kind, Tok, Val};

pub use options::Options;
pub use tables::KludgyOrdinals;

use stage2_particles::ParticleCoalescer;
use stage3_sentences::SentenceSegmenter;
use stage4_dates::PhraseComposer1;
use stage5_refine::DateTimeRefiner;
use stage6_numbers::PhraseComposer2;

/// Runs stages 2 through 5: particle coalescing, sentence segmentation,
/// and date/time composition, but not the number/currency/composite-hyphen
/// phrase composer. Backs `icetok::tokenize_without_annotation`.
pub fn cook_without_annotation<'a>(
    raw: impl Iterator<Item = Tok> + 'a,
    table: &'a AbbrevTable,
    opts: Options,
) -> impl Iterator<Item = Tok> + 'a {
    let stage2 = ParticleCoalescer::new(raw, table, opts.handle_kludgy_ordinals);
    let stage3 = SentenceSegmenter::new(stage2, opts.one_sent_per_line);
    let stage4 = PhraseComposer1::new(stage3);
    let stage5 = DateTimeRefiner::new(stage4);
    stage5.map(move |t| apply_surface_options(t, opts))
}

/// Runs the full cooking pipeline (stages 2-6). Backs `icetok::tokenize`.
pub fn cook<'a>(raw: impl Iterator<Item = Tok> + 'a, table: &'a AbbrevTable, opts: Options) -> impl Iterator<Item = Tok> + 'a {
    let stage6 = PhraseComposer2::new(cook_without_annotation(raw, table, opts), opts.coalesce_percent);
    stage6.map(move |t| apply_surface_options(t, opts))
}

/// `convert_telnos`/`convert_numbers`/`convert_measurements`: surface-text
/// normalizations that never touch a token's `val`, applied after all
/// composition so they see the final token kinds. Run once more in `cook`
/// since stage 6 can produce fresh AMOUNT/PERCENT tokens that stage 5
/// never saw.
fn apply_surface_options(mut tok: Tok, opts: Options) -> Tok {
    if opts.convert_telnos && tok.kind == Kind::Telno {
        if let Val::Telno { normalized, .. } = &tok.val {
            tok.txt = normalized.clone();
        }
    }
    if opts.convert_numbers && matches!(tok.kind, Kind::Number | Kind::Amount | Kind::Percent) {
        tok.txt = swap_number_punctuation(&tok.txt);
    }
    if opts.convert_measurements && tok.kind == Kind::Measurement {
        tok.txt = canonicalize_measurement_spacing(&tok.txt);
    }
    tok
}

/// Swaps `.`/`,` in a NUMBER/AMOUNT/PERCENT's surface text, turning
/// English-style grouping (`1,234.5`) into Icelandic-style (`1.234,5`) and
/// leaving everything else (currency codes, percent words) untouched.
fn swap_number_punctuation(txt: &str) -> String {
    txt.chars()
        .map(|c| match c {
            '.' => ',',
            ',' => '.',
            other => other,
        })
        .collect()
}

/// Canonicalizes a MEASUREMENT's surface text to a single space between
/// the number and the unit (`200°C`/`200° C` -> `200 °C`).
fn canonicalize_measurement_spacing(txt: &str) -> String {
    let chars: Vec<char> = txt.chars().collect();
    let split = chars.iter().rposition(char::is_ascii_digit).map_or(0, |i| i + 1);
    let number: String = chars[..split].iter().collect();
    let unit: String = chars[split..].iter().collect::<String>().trim_start().to_string();
    if unit.is_empty() {
        number
    } else {
        format!("{number} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icetok_ir::Kind;
    use icetok_lexer_core::{generate_raw_tokens, PreprocessOptions};
    use pretty_assertions::assert_eq;

    #[test]
    fn full_pipeline_wraps_sentence_and_composes_date() {
        let table = AbbrevTable::default_table();
        let raw = generate_raw_tokens("14. mars 2019.", PreprocessOptions::default());
        let toks: Vec<Tok> = cook(raw.into_iter(), &table, Options::default()).collect();
        assert_eq!(toks.first().unwrap().kind, Kind::SBegin);
        assert_eq!(toks.last().unwrap().kind, Kind::SEnd);
        assert!(toks.iter().any(|t| t.kind == Kind::DateAbs));
    }

    #[test]
    fn without_annotation_skips_stage_six_composition() {
        let table = AbbrevTable::default_table();
        let raw = generate_raw_tokens("tvær milljónir", PreprocessOptions::default());
        let toks: Vec<Tok> = cook_without_annotation(raw.into_iter(), &table, Options::default()).collect();
        assert!(toks.iter().all(|t| t.kind != Kind::Number || t.txt != "tvær milljónir"));
    }
}
