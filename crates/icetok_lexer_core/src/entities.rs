//! HTML entity expansion.
//!
//! Covers numeric entities (`&#NNN;`, `&#xHH;`) and a small set of named
//! entities relevant to Icelandic text and general markup cleanup. Only
//! active when `Options::replace_html_escapes` is set.

/// Attempts to match an HTML entity starting at `chars[pos]` (which must
/// be `&`). Returns `(replacement_char, entity_char_len)` on success.
#[must_use]
pub fn match_entity(chars: &[char], pos: usize) -> Option<(char, usize)> {
    debug_assert_eq!(chars.get(pos), Some(&'&'));
    let rest = &chars[pos..];
    let semi = rest.iter().position(|&c| c == ';')?;
    if semi == 0 || semi > 10 {
        return None;
    }
    let body: String = rest[1..semi].iter().collect();
    let len = semi + 1;

    if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        let code = u32::from_str_radix(hex, 16).ok()?;
        return char::from_u32(code).map(|c| (c, len));
    }
    if let Some(rest_digits) = body.strip_prefix('#') {
        // Some producers emit &#x... without the leading & being doubled;
        // handled above via strip_prefix('x') already covering &#x.
        let code: u32 = rest_digits.parse().ok()?;
        return char::from_u32(code).map(|c| (c, len));
    }
    if let Some(c) = named_entity(&body) {
        return Some((c, len));
    }
    None
}

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "nbsp" => '\u{00A0}',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "yacute" => 'ý',
        "Aacute" => 'Á',
        "Eacute" => 'É',
        "Iacute" => 'Í',
        "Oacute" => 'Ó',
        "Uacute" => 'Ú',
        "Yacute" => 'Ý',
        "thorn" => 'þ',
        "THORN" => 'Þ',
        "eth" => 'ð',
        "ETH" => 'Ð',
        "ouml" => 'ö',
        "Ouml" => 'Ö',
        "aelig" => 'æ',
        "AElig" => 'Æ',
        "mdash" => '—',
        "ndash" => '–',
        "hellip" => '…',
        "ldquo" => '“',
        "rdquo" => '”',
        "lsquo" => '‘',
        "rsquo" => '’',
        _ => return None,
    })
}

// `&#` is handled above via the `#` branch before the numeric entity
// check; the entity body parser above expects `&` as the first char and
// includes the leading `#` in the body when present.
fn _numeric_entity_note() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn named_amp() {
        let c = chars("&amp;x");
        assert_eq!(match_entity(&c, 0), Some(('&', 5)));
    }

    #[test]
    fn named_nbsp() {
        let c = chars("&nbsp;");
        assert_eq!(match_entity(&c, 0), Some(('\u{00A0}', 6)));
    }

    #[test]
    fn decimal_numeric() {
        let c = chars("&#65;");
        assert_eq!(match_entity(&c, 0), Some(('A', 5)));
    }

    #[test]
    fn hex_numeric() {
        let c = chars("&#x41;");
        assert_eq!(match_entity(&c, 0), Some(('A', 6)));
    }

    #[test]
    fn icelandic_named() {
        let c = chars("&thorn;");
        assert_eq!(match_entity(&c, 0), Some(('þ', 7)));
    }

    #[test]
    fn unknown_entity_is_none() {
        let c = chars("&bogus;");
        assert_eq!(match_entity(&c, 0), None);
    }

    #[test]
    fn no_semicolon_is_none() {
        let c = chars("&amp no semi");
        assert_eq!(match_entity(&c, 0), None);
    }
}
