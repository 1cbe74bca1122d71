//! The closed set of token kinds produced anywhere in the pipeline.
//!
//! `Kind` is the tag half of a [`crate::Tok`]; the payload half is
//! [`crate::Val`]. Keeping them as two independently-matchable types
//! (rather than a single enum with data, `TokenKind(Data)`) mirrors how
//! the raw layer (`icetok_lexer_core::RawTag`) stays a plain `#[repr(u8)]`
//! tag while the cooked layer carries the value.

/// Discriminant-stable kind tag for a [`crate::Tok`].
///
/// New variants are never removed once released; see `RawTag` in
/// `icetok_lexer_core` for the analogous stability note on the raw layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Kind {
    Punctuation,
    Time,
    Date,
    Year,
    Number,
    Word,
    Telno,
    Percent,
    Url,
    Ordinal,
    Timestamp,
    Currency,
    Amount,
    Person,
    Email,
    Entity,
    Unknown,
    DateAbs,
    DateRel,
    TimestampAbs,
    TimestampRel,
    Measurement,
    NumWLetter,
    Domain,
    Hashtag,
    Molecule,
    Ssn,
    SerialNumber,
    Raw,
    SSplit,
    PBegin,
    PEnd,
    SBegin,
    SEnd,
    XEnd,
}

impl Kind {
    /// `true` for the paragraph/sentence/sentinel markers that carry no
    /// source text of their own (their `original`/`origin_spans` are empty).
    #[must_use]
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            Kind::PBegin | Kind::PEnd | Kind::SBegin | Kind::SEnd | Kind::SSplit | Kind::XEnd
        )
    }

    /// Human-readable label, used by the CLI's `--csv`/`--json` output and
    /// by diagnostics. Mirrors `RawTag::name` in the raw-lexer crate.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Kind::Punctuation => "PUNCTUATION",
            Kind::Time => "TIME",
            Kind::Date => "DATE",
            Kind::Year => "YEAR",
            Kind::Number => "NUMBER",
            Kind::Word => "WORD",
            Kind::Telno => "TELNO",
            Kind::Percent => "PERCENT",
            Kind::Url => "URL",
            Kind::Ordinal => "ORDINAL",
            Kind::Timestamp => "TIMESTAMP",
            Kind::Currency => "CURRENCY",
            Kind::Amount => "AMOUNT",
            Kind::Person => "PERSON",
            Kind::Email => "EMAIL",
            Kind::Entity => "ENTITY",
            Kind::Unknown => "UNKNOWN",
            Kind::DateAbs => "DATEABS",
            Kind::DateRel => "DATEREL",
            Kind::TimestampAbs => "TIMESTAMPABS",
            Kind::TimestampRel => "TIMESTAMPREL",
            Kind::Measurement => "MEASUREMENT",
            Kind::NumWLetter => "NUMWLETTER",
            Kind::Domain => "DOMAIN",
            Kind::Hashtag => "HASHTAG",
            Kind::Molecule => "MOLECULE",
            Kind::Ssn => "SSN",
            Kind::SerialNumber => "SERIALNUMBER",
            Kind::Raw => "RAW",
            Kind::SSplit => "S_SPLIT",
            Kind::PBegin => "P_BEGIN",
            Kind::PEnd => "P_END",
            Kind::SBegin => "S_BEGIN",
            Kind::SEnd => "S_END",
            Kind::XEnd => "X_END",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_kinds() {
        assert!(Kind::PBegin.is_structural());
        assert!(Kind::PEnd.is_structural());
        assert!(Kind::SBegin.is_structural());
        assert!(Kind::SEnd.is_structural());
        assert!(Kind::XEnd.is_structural());
        assert!(!Kind::Word.is_structural());
        assert!(!Kind::Number.is_structural());
    }

    #[test]
    fn name_is_stable_text() {
        assert_eq!(Kind::DateAbs.name(), "DATEABS");
        assert_eq!(Kind::TimestampRel.name(), "TIMESTAMPREL");
        assert_eq!(Kind::XEnd.name(), "X_END");
    }
}
