//! The abbreviation table and its derived lookup views.

use rustc_hash::{FxHashMap, FxHashSet};

use icetok_diagnostic::ConfigError;

use crate::config;
use crate::entry::{AbbrevEntry, Modifier};

/// Lookup table built from a set of [`AbbrevEntry`] values, with the
/// derived views the pipeline's particle coalescer (§4.5) and sentence
/// segmenter (§4.4) consult.
#[derive(Debug, Default)]
pub struct AbbrevTable {
    dict: FxHashMap<String, AbbrevEntry>,
    singles: FxHashSet<String>,
    finishers: FxHashSet<String>,
    not_finishers: FxHashSet<String>,
    name_finishers: FxHashSet<String>,
}

impl AbbrevTable {
    /// Builds a table from entries already known to be individually valid
    /// (produced by [`config::parse`]); only cross-entry conflicts
    /// (duplicates) are checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateAbbreviation`] if the same
    /// abbreviation surface appears twice.
    pub fn build(entries: Vec<AbbrevEntry>) -> Result<Self, ConfigError> {
        let mut table = AbbrevTable::default();
        for entry in entries {
            table.add(entry)?;
        }
        Ok(table)
    }

    /// Parses `source` as an abbreviation config document and builds the
    /// table from it in one step.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigError`] from parsing or from duplicate entries.
    pub fn from_str(source: &str) -> Result<Self, ConfigError> {
        Self::build(config::parse(source)?)
    }

    /// The compiled-in default table.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in default data fails to parse — that would
    /// indicate a bug in this crate, not a caller error.
    #[must_use]
    pub fn default_table() -> Self {
        Self::from_str(crate::data::DEFAULT_ABBREVIATIONS)
            .expect("compiled-in default abbreviation table must be valid")
    }

    fn add(&mut self, entry: AbbrevEntry) -> Result<(), ConfigError> {
        if self.dict.contains_key(&entry.abbrev) {
            return Err(ConfigError::DuplicateAbbreviation {
                abbrev: entry.abbrev.clone(),
                line: 0,
            });
        }
        if entry.is_single() {
            self.singles.insert(entry.without_trailing_dot().to_string());
        }
        match entry.modifier {
            Modifier::Finisher => {
                self.finishers.insert(entry.abbrev.clone());
            }
            Modifier::NotFinisher => {
                self.not_finishers.insert(entry.abbrev.clone());
            }
            Modifier::NameFinisher => {
                self.not_finishers.insert(entry.abbrev.clone());
                self.name_finishers.insert(entry.abbrev.clone());
            }
            Modifier::Plain => {}
        }
        self.dict.insert(entry.abbrev.clone(), entry);
        Ok(())
    }

    /// Merges another table's entries into this one in-place, for layering
    /// a caller-supplied configuration onto the default table before first
    /// use. Later entries with an
    /// already-known abbreviation are an error, keeping merges
    /// order-independent for non-conflicting entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateAbbreviation`] on conflict.
    pub fn merge(&mut self, other: AbbrevTable) -> Result<(), ConfigError> {
        for (_, entry) in other.dict {
            self.add(entry)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, abbrev: &str) -> Option<&AbbrevEntry> {
        self.dict.get(abbrev)
    }

    #[must_use]
    pub fn has_meaning(&self, abbrev: &str) -> bool {
        self.dict.contains_key(abbrev)
    }

    /// `true` if `word` (without a trailing period) is known only via its
    /// single trailing-period form, i.e. `word.` would be read as an
    /// abbreviation rather than `word` followed by end-of-sentence
    /// punctuation.
    #[must_use]
    pub fn is_single(&self, word_without_dot: &str) -> bool {
        self.singles.contains(word_without_dot)
    }

    #[must_use]
    pub fn is_finisher(&self, abbrev_with_dot: &str) -> bool {
        self.finishers.contains(abbrev_with_dot)
    }

    #[must_use]
    pub fn is_not_finisher(&self, abbrev_with_dot: &str) -> bool {
        self.not_finishers.contains(abbrev_with_dot)
    }

    #[must_use]
    pub fn is_name_finisher(&self, abbrev_with_dot: &str) -> bool {
        self.name_finishers.contains(abbrev_with_dot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dict.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_loads() {
        let table = AbbrevTable::default_table();
        assert!(!table.is_empty());
        assert!(table.has_meaning("kr."));
        assert!(table.is_finisher("o.s.frv."));
        assert!(table.is_not_finisher("dags."));
        assert!(table.is_name_finisher("próf."));
        assert!(table.is_single("kr"));
    }

    #[test]
    fn duplicate_entries_error() {
        let src = "[abbreviations]\nkr. = \"krónur\" kvk\nkr. = \"krónur aftur\" kvk\n";
        let err = AbbrevTable::from_str(src).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAbbreviation { .. }));
    }

    #[test]
    fn merge_adds_new_entries() {
        let mut table = AbbrevTable::from_str("[abbreviations]\nkr. = \"krónur\" kvk\n").unwrap();
        let extra = AbbrevTable::from_str("[abbreviations]\nbls.! = \"blaðsíða\" kvk\n").unwrap();
        table.merge(extra).unwrap();
        assert!(table.has_meaning("bls."));
        assert!(table.is_not_finisher("bls."));
    }

    #[test]
    fn merge_conflict_errors() {
        let mut table = AbbrevTable::from_str("[abbreviations]\nkr. = \"krónur\" kvk\n").unwrap();
        let extra = AbbrevTable::from_str("[abbreviations]\nkr. = \"aftur\" kvk\n").unwrap();
        assert!(table.merge(extra).is_err());
    }
}
