//! A single abbreviation-table entry and its finisher modifier.

/// How an abbreviation's trailing period interacts with sentence-boundary
/// detection (§4.4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// No modifier: the period is swallowed normally; look-ahead decides
    /// whether this occurrence might still end a sentence.
    Plain,
    /// `*` — may end a sentence (e.g. `o.s.frv.*`).
    Finisher,
    /// `!` — never ends a sentence, even before an uppercase word
    /// (e.g. `dags.!`).
    NotFinisher,
    /// `^` — does not end a sentence when followed by a proper name;
    /// otherwise behaves like `NotFinisher` (e.g. `próf.^`).
    NameFinisher,
}

/// One abbreviation entry: surface form (without any trailing modifier
/// character, but including its own periods), meaning, grammatical
/// gender, word class, and finisher modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbbrevEntry {
    pub abbrev: String,
    pub meaning: String,
    pub gender: String,
    pub word_class: String,
    pub modifier: Modifier,
}

impl AbbrevEntry {
    #[must_use]
    pub fn new(abbrev: impl Into<String>, meaning: impl Into<String>, gender: impl Into<String>, word_class: impl Into<String>, modifier: Modifier) -> Self {
        AbbrevEntry {
            abbrev: abbrev.into(),
            meaning: meaning.into(),
            gender: gender.into(),
            word_class: word_class.into(),
            modifier,
        }
    }

    /// `true` if this abbreviation's only `.` is the trailing one — these
    /// feed the `SINGLES` set used to decide whether `X` followed by `.`
    /// should be read as the abbreviation `X.`.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.abbrev.ends_with('.') && !self.abbrev[..self.abbrev.len() - 1].contains('.')
    }

    /// The abbreviation text with its trailing `.` stripped, used as the
    /// `SINGLES` lookup key.
    #[must_use]
    pub fn without_trailing_dot(&self) -> &str {
        self.abbrev.strip_suffix('.').unwrap_or(&self.abbrev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dot_abbreviation_is_single() {
        let e = AbbrevEntry::new("kr.", "krónur", "kvk", "skst", Modifier::Plain);
        assert!(e.is_single());
        assert_eq!(e.without_trailing_dot(), "kr");
    }

    #[test]
    fn multi_dot_abbreviation_is_not_single() {
        let e = AbbrevEntry::new("o.s.frv.", "og svo framvegis", "hk", "skst", Modifier::Finisher);
        assert!(!e.is_single());
    }
}
