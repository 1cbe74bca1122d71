//! Single public re-export surface, acting as the crate's sole intended
//! entry point for downstream consumers.

pub use crate::{
    calculate_indexes, correct_spaces, detokenize, generate_raw_tokens, mark_paragraphs, paragraphs, split_into_sentences,
    tokenize, tokenize_with_table, tokenize_without_annotation, Options,
};
pub use icetok_abbrev::AbbrevTable;
pub use icetok_ir::{Kind, Tok, Val};
pub use icetok_lexer::tables::KludgyOrdinals;
