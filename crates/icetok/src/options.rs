//! The public, flattened option surface ("Options"), combining
//! the raw lexer's preprocessing knobs with the cooking pipeline's.

use icetok_lexer::tables::KludgyOrdinals;
use icetok_lexer_core::PreprocessOptions;

/// Every option recognized anywhere in the pipeline, in one struct so
/// callers don't need to know the crate split into stage 1 vs. stages 2-6.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    pub replace_composite_glyphs: bool,
    pub replace_html_escapes: bool,
    pub convert_numbers: bool,
    pub convert_telnos: bool,
    pub convert_measurements: bool,
    pub coalesce_percent: bool,
    pub handle_kludgy_ordinals: KludgyOrdinals,
    pub one_sent_per_line: bool,
    /// When `split_into_sentences` is asked to preserve the original
    /// surface text instead of the cooked `txt`.
    pub original: bool,
}

impl Default for Options {
    fn default() -> Self {
        let preprocess = PreprocessOptions::default();
        let cook = icetok_lexer::Options::default();
        Options {
            replace_composite_glyphs: preprocess.replace_composite_glyphs,
            replace_html_escapes: preprocess.replace_html_escapes,
            convert_numbers: cook.convert_numbers,
            convert_telnos: cook.convert_telnos,
            convert_measurements: cook.convert_measurements,
            coalesce_percent: cook.coalesce_percent,
            handle_kludgy_ordinals: cook.handle_kludgy_ordinals,
            one_sent_per_line: cook.one_sent_per_line,
            original: false,
        }
    }
}

impl Options {
    pub(crate) fn preprocess(&self) -> PreprocessOptions {
        PreprocessOptions {
            replace_composite_glyphs: self.replace_composite_glyphs,
            replace_html_escapes: self.replace_html_escapes,
        }
    }

    pub(crate) fn cook(&self) -> icetok_lexer::Options {
        icetok_lexer::Options {
            convert_numbers: self.convert_numbers,
            convert_telnos: self.convert_telnos,
            convert_measurements: self.convert_measurements,
            coalesce_percent: self.coalesce_percent,
            handle_kludgy_ordinals: self.handle_kludgy_ordinals,
            one_sent_per_line: self.one_sent_per_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component_defaults() {
        let o = Options::default();
        assert!(o.replace_composite_glyphs);
        assert!(!o.replace_html_escapes);
        assert!(!o.convert_numbers);
        assert!(!o.original);
    }
}
