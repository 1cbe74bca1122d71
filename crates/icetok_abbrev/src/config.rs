//! INI-like abbreviation config reader. Format, one entry per line inside
//! a `[abbreviations]` section:
//!
//! ```text
//! [abbreviations]
//! kr.  = "krónur"          kvk
//! dags.! = "dagsetning"    kvk
//! o.s.frv.* = "og svo framvegis" hk
//! próf.^ = "prófessor"     kk   skst
//! ```
//!
//! `#` starts a trailing comment; blank lines are ignored. This module
//! treats the file as a purely external, opaque data source whose
//! entries feed the abbreviation table.

use icetok_diagnostic::ConfigError;

use crate::entry::{AbbrevEntry, Modifier};

/// Parses an abbreviation config document into entries, in file order.
///
/// # Errors
///
/// Returns [`ConfigError`] on the first malformed line, section header,
/// or modifier conflict — parsing does not continue past an error.
pub fn parse(source: &str) -> Result<Vec<AbbrevEntry>, ConfigError> {
    let mut entries = Vec::new();
    let mut in_section = false;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('[') {
            if line != "[abbreviations]" {
                return Err(ConfigError::WrongSectionHeader {
                    line: line_no,
                    found: line.to_string(),
                });
            }
            in_section = true;
            continue;
        }
        if !in_section {
            // Lines outside any recognized section are ignored.
            continue;
        }
        entries.push(parse_line(line, line_no)?);
    }

    Ok(entries)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(ix) => &line[..ix],
        None => line,
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<AbbrevEntry, ConfigError> {
    let mut parts = line.splitn(2, '=');
    let lhs = parts.next().unwrap_or_default().trim();
    let rhs = match parts.next() {
        Some(r) => r.trim(),
        None => {
            return Err(ConfigError::MalformedLine { line: line_no });
        }
    };

    if lhs.is_empty() {
        return Err(ConfigError::MissingAbbreviation { line: line_no });
    }

    let (abbrev, modifier) = split_modifier(lhs, line_no)?;

    // rhs format: "meaning" [gender [word_class]]
    let quoted: Vec<&str> = rhs.splitn(3, '"').collect();
    if quoted.len() < 2 {
        return Err(ConfigError::MalformedLine { line: line_no });
    }
    let meaning = quoted[1].to_string();
    let trailer = quoted.get(2).unwrap_or(&"").trim();
    let mut trailer_parts = trailer.split_whitespace();
    let gender = trailer_parts.next().unwrap_or("hk").to_string();
    let word_class = trailer_parts.next().unwrap_or("skst").to_string();

    Ok(AbbrevEntry::new(abbrev, meaning, gender, word_class, modifier))
}

fn split_modifier(lhs: &str, line_no: usize) -> Result<(String, Modifier), ConfigError> {
    let (body, modifier) = if let Some(stripped) = lhs.strip_suffix('*') {
        (stripped, Modifier::Finisher)
    } else if let Some(stripped) = lhs.strip_suffix('!') {
        (stripped, Modifier::NotFinisher)
    } else if let Some(stripped) = lhs.strip_suffix('^') {
        (stripped, Modifier::NameFinisher)
    } else {
        (lhs, Modifier::Plain)
    };

    if matches!(modifier, Modifier::Finisher | Modifier::NotFinisher | Modifier::NameFinisher) {
        if !body.ends_with('.') {
            let modifier_name = match modifier {
                Modifier::Finisher => "a sentence finisher",
                Modifier::NotFinisher => "a not-finisher",
                Modifier::NameFinisher => "a name finisher",
                Modifier::Plain => unreachable!(),
            };
            return Err(ConfigError::ModifierRequiresTrailingPeriod {
                abbrev: body.to_string(),
                modifier: modifier_name,
                line: line_no,
            });
        }
        // Reject stacked modifiers, e.g. "foo.*!": after stripping one
        // trailing modifier char, another would remain.
        if body.ends_with('*') || body.ends_with('!') || body.ends_with('^') {
            return Err(ConfigError::ConflictingModifiers {
                abbrev: body.to_string(),
                line: line_no,
            });
        }
    }

    Ok((body.to_string(), modifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_plain_entry() {
        let entries = parse("[abbreviations]\nkr. = \"krónur\" kvk\n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].abbrev, "kr.");
        assert_eq!(entries[0].meaning, "krónur");
        assert_eq!(entries[0].gender, "kvk");
        assert_eq!(entries[0].modifier, Modifier::Plain);
    }

    #[test]
    fn parses_finisher_modifier() {
        let entries = parse("[abbreviations]\no.s.frv.* = \"og svo framvegis\" hk\n").unwrap();
        assert_eq!(entries[0].abbrev, "o.s.frv.");
        assert_eq!(entries[0].modifier, Modifier::Finisher);
    }

    #[test]
    fn parses_name_finisher_with_word_class() {
        let entries = parse("[abbreviations]\npróf.^ = \"prófessor\" kk skst\n").unwrap();
        assert_eq!(entries[0].modifier, Modifier::NameFinisher);
        assert_eq!(entries[0].word_class, "skst");
    }

    #[test]
    fn rejects_modifier_without_trailing_period() {
        let err = parse("[abbreviations]\nfoo* = \"bar\" hk\n").unwrap_err();
        assert!(matches!(err, ConfigError::ModifierRequiresTrailingPeriod { .. }));
    }

    #[test]
    fn rejects_wrong_section_header() {
        let err = parse("[other]\nfoo. = \"bar\" hk\n").unwrap_err();
        assert!(matches!(err, ConfigError::WrongSectionHeader { .. }));
    }

    #[test]
    fn ignores_comments_and_blank_lines() {
        let entries = parse("[abbreviations]\n# a comment\n\nkr. = \"krónur\" kvk # trailing\n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meaning, "krónur");
    }
}
