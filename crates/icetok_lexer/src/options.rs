//! Pipeline-wide options ("Options").

use crate::tables::KludgyOrdinals;

/// Options recognized by the cooking pipeline (stages 2-6). The raw
/// lexer's own options (`replace_composite_glyphs`, `replace_html_escapes`)
/// live on `icetok_lexer_core::PreprocessOptions` instead; `icetok::Options`
/// (the public, flattened surface) carries both.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Rewrite English-style number punctuation (`1,234.5`) to Icelandic
    /// convention (`1.234,5`) in a token's surface text.
    pub convert_numbers: bool,
    /// Normalize phone numbers to `NNN-NNNN` in a token's surface text.
    pub convert_telnos: bool,
    /// Canonicalize `200° C` / `200°C` to `200 °C` in a token's surface
    /// text before measurement conversion.
    pub convert_measurements: bool,
    /// Coalesce `NUMBER + percent-WORD` into a single PERCENT token
    /// (rather than leaving the word as a separate WORD).
    pub coalesce_percent: bool,
    pub handle_kludgy_ordinals: KludgyOrdinals,
    /// Force a sentence boundary at every newline in the input, in
    /// addition to punctuation-driven boundaries.
    pub one_sent_per_line: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            convert_numbers: false,
            convert_telnos: false,
            convert_measurements: false,
            coalesce_percent: false,
            handle_kludgy_ordinals: KludgyOrdinals::PassThrough,
            one_sent_per_line: false,
        }
    }
}
