//! Raw lexer (stage 1) for the icetok Icelandic tokenizer.
//!
//! Mirrors the two-layer lexer split used elsewhere in the workspace: this
//! crate turns preprocessed source text into coarse, fully origin-tracked
//! [`icetok_ir::Tok`] values (WORD/NUMBER/DATE/TIME/... already resolved at
//! the character-class level) with no knowledge of abbreviations, sentence
//! boundaries, or phrase composition — all of that is `icetok_lexer`'s job.
//!
//! Unlike the raw/cook split this crate's architecture is modeled on, this
//! layer depends on [`icetok_ir`] directly rather than staying
//! dependency-free: digit-lexer rules (§4.2) need to produce typed values
//! (a `YMD`, an `HMS`, a telephone normalization) at the very first scan, so
//! deferring all typing to the cooking layer would just mean re-parsing the
//! same text twice.

mod cursor;
mod digit;
mod entities;
mod glyphs;
mod punctuation;
mod raw_scanner;
mod si_units;
mod source_buffer;

pub use cursor::Cursor;
pub use punctuation::{is_composite_hyphen, is_dash, is_punctuation};
pub use raw_scanner::{scan_all, RawScanner};
pub use si_units::is_si_symbol;
pub use source_buffer::{PreprocessOptions, SourceBuffer};

/// Runs the raw lexer over `text` with default preprocessing and the
/// built-in SI-unit symbol table.
#[must_use]
pub fn generate_raw_tokens(text: &str, opts: PreprocessOptions) -> Vec<icetok_ir::Tok> {
    let buf = SourceBuffer::new(text, opts);
    let tokens = scan_all(&buf, is_si_symbol);
    tracing::debug!(chars = text.chars().count(), tokens = tokens.len(), "raw lexer pass complete");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(generate_raw_tokens("", PreprocessOptions::default()).is_empty());
    }

    #[test]
    fn whitespace_only_input_yields_no_tokens() {
        assert!(generate_raw_tokens("   \n\t  ", PreprocessOptions::default()).is_empty());
    }
}
