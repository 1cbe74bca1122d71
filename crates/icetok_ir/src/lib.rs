//! Token and origin-tracking types for the icetok Icelandic tokenizer.
//!
//! This crate is the standalone equivalent of `icetok_lexer_core::RawTag`
//! one layer up: it defines the cooked [`Tok`] record that every pipeline
//! stage (`icetok_lexer`) produces and consumes, plus the closed [`Kind`]
//! tag and [`Val`] payload. It has no dependency on any other `icetok_*`
//! crate, so external tools can depend on it without pulling in the
//! pipeline.

mod kind;
mod tok;
mod val;

pub use kind::Kind;
pub use tok::Tok;
pub use val::{HMS, Meaning, SpacingClass, Val, YMD};
