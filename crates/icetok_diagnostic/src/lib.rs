//! Error types for the icetok tokenizer.
//!
//! The pipeline itself never aborts on malformed input — anomalies are
//! folded into `UNKNOWN` tokens (see `icetok_lexer_core::raw_scanner`) and
//! never surface as a `Result::Err`. The only fatal error in this crate is
//! [`ConfigError`], raised while loading an abbreviation table.

use thiserror::Error;

/// A fatal error while parsing an abbreviation configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("wrong format for abbreviation line {line}: should be `abbreviation = \"meaning\"`")]
    MalformedLine { line: usize },

    #[error("missing abbreviation on line {line}: format should be `abbreviation = meaning`")]
    MissingAbbreviation { line: usize },

    #[error("wrong section header on line {line}: expected `[abbreviations]`, found `{found}`")]
    WrongSectionHeader { line: usize, found: String },

    #[error(
        "abbreviation `{abbrev}` is defined more than once (line {line})"
    )]
    DuplicateAbbreviation { abbrev: String, line: usize },

    #[error(
        "only abbreviations ending with a period can be marked {modifier} (line {line}: `{abbrev}`)"
    )]
    ModifierRequiresTrailingPeriod {
        abbrev: String,
        modifier: &'static str,
        line: usize,
    },

    #[error(
        "`*`, `!` and `^` modifiers are mutually exclusive on abbreviations (line {line}: `{abbrev}`)"
    )]
    ConflictingModifiers { abbrev: String, line: usize },
}

/// A non-fatal observation recorded while tokenizing, kept for callers
/// that want to surface "this looked odd but we recovered" information
/// (e.g. a CLI `--verbose` flag) without breaking the pipeline's
/// never-fails guarantee. Not part of the public token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// Character offset into the original input where the anomaly begins.
    pub char_offset: usize,
    pub message: String,
}

impl Anomaly {
    #[must_use]
    pub fn new(char_offset: usize, message: impl Into<String>) -> Self {
        Anomaly { char_offset, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_are_informative() {
        let e = ConfigError::DuplicateAbbreviation {
            abbrev: "t.d.".into(),
            line: 12,
        };
        assert!(e.to_string().contains("t.d."));
        assert!(e.to_string().contains("12"));
    }

    #[test]
    fn anomaly_carries_offset() {
        let a = Anomaly::new(5, "unrecognized byte");
        assert_eq!(a.char_offset, 5);
    }
}
