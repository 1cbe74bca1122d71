//! Kind-dependent semantic payload for a [`crate::Tok`].

/// Spacing class used both by `Val::Punctuation` and by the detokenizer's
/// 5x5 spacing matrix (`icetok::detokenize::SPACING_MATRIX`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpacingClass {
    /// Whitespace to the left only, e.g. opening bracket `(`.
    Left,
    /// Whitespace on both sides, e.g. `"`, `*`, `&`.
    Center,
    /// Whitespace to the right only, e.g. `.`, `,`, closing bracket.
    Right,
    /// No surrounding whitespace, e.g. `/`, hyphen.
    None,
    /// Flexible, word-like spacing (multi-character tokens default here).
    Word,
}

/// A single grammatical meaning for a [`crate::Tok`] of [`crate::Kind::Word`].
///
/// Mirrors the `(stem, utg, wordclass, category, surface, inflection)`
/// tuples that `BIN`-backed lookups would attach to abbreviation/word
/// tokens; `icetok` only ever populates this from the abbreviation table,
/// never from a full morphological analyzer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meaning {
    pub stem: String,
    pub utg: i64,
    pub word_class: String,
    pub category: String,
    pub surface: String,
    pub inflection: String,
}

/// Calendar fields with `0` meaning "unset", shared by `Date`/`Timestamp`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YMD {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl YMD {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.year != 0 && self.month != 0 && self.day != 0
    }
}

/// Clock fields, always fully specified once a `Time` value exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HMS {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Kind-dependent semantic value. Exactly one arm is meaningful per
/// [`crate::Kind`]; structural/punctuation-only tokens use `Val::None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Val {
    None,
    Punctuation(SpacingClass),
    Number {
        value: f64,
        cases: Option<Vec<String>>,
        genders: Option<Vec<String>>,
    },
    Percent {
        value: f64,
        cases: Option<Vec<String>>,
        genders: Option<Vec<String>>,
    },
    Year(i32),
    Date(YMD),
    Time(HMS),
    Timestamp { date: YMD, time: HMS },
    Amount {
        value: f64,
        iso: String,
        cases: Option<Vec<String>>,
        genders: Option<Vec<String>>,
    },
    /// Canonical base-SI unit symbol and the value converted to it.
    Measurement { unit: String, value: f64 },
    Word(Vec<Meaning>),
    Telno { normalized: String, country_code: String },
    Ordinal(u64),
    NumWLetter { value: i64, letter: char },
    /// `(num_parses, err_index)` carried by an `S_BEGIN` marker.
    SentenceStart {
        num_parses: Option<u32>,
        err_index: Option<u32>,
    },
}

impl Default for Val {
    fn default() -> Self {
        Val::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymd_completeness() {
        assert!(YMD { year: 2019, month: 3, day: 14 }.is_complete());
        assert!(!YMD { year: 2019, month: 3, day: 0 }.is_complete());
        assert!(!YMD::default().is_complete());
    }

    #[test]
    fn default_val_is_none() {
        assert_eq!(Val::default(), Val::None);
    }
}
