//! Small shared helpers used across pipeline stages.

use icetok_ir::{Kind, Tok};

#[must_use]
pub fn is_word(tok: &Tok, txt: &str) -> bool {
    tok.kind == Kind::Word && tok.txt == txt
}

#[must_use]
pub fn is_word_ci(tok: &Tok, txt_lower: &str) -> bool {
    tok.kind == Kind::Word && tok.txt.to_lowercase() == txt_lower
}

#[must_use]
pub fn is_punct(tok: &Tok, txt: &str) -> bool {
    tok.kind == Kind::Punctuation && tok.txt == txt
}

#[must_use]
pub fn first_char_uppercase(tok: &Tok) -> bool {
    tok.txt.chars().next().is_some_and(char::is_uppercase)
}

/// A token that structurally ends a stream of interest: end-of-input,
/// paragraph boundary, or the pipeline sentinel.
#[must_use]
pub fn is_boundary(tok: &Tok) -> bool {
    matches!(tok.kind, Kind::PBegin | Kind::PEnd | Kind::XEnd)
}
