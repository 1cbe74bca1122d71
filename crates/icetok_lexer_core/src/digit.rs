//! Digit sub-lexer, applied to a whitespace-delimited chunk starting at
//! a digit. Rules are tried in priority order; the first match wins.

use icetok_ir::{Kind, Val, HMS, YMD};

const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('↉', 0.0),
    ('⅒', 0.1),
    ('⅑', 1.0 / 9.0),
    ('⅛', 0.125),
    ('⅐', 1.0 / 7.0),
    ('⅙', 1.0 / 6.0),
    ('⅕', 0.2),
    ('¼', 0.25),
    ('⅓', 1.0 / 3.0),
    ('½', 0.5),
    ('⅖', 0.4),
    ('⅔', 2.0 / 3.0),
    ('⅜', 0.375),
    ('⅗', 0.6),
    ('¾', 0.75),
    ('⅘', 0.8),
    ('⅝', 0.625),
    ('⅚', 5.0 / 6.0),
    ('⅞', 0.875),
];

pub(crate) fn vulgar_fraction_value(c: char) -> Option<f64> {
    VULGAR_FRACTIONS.iter().find(|&&(ch, _)| ch == c).map(|&(_, v)| v)
}

/// Result of a successful digit-lexer rule.
pub struct DigitMatch {
    pub kind: Kind,
    pub val: Val,
    pub txt: String,
    pub consumed: usize,
}

fn digits(chars: &[char], start: usize) -> usize {
    let mut n = 0;
    while chars.get(start + n).is_some_and(char::is_ascii_digit) {
        n += 1;
    }
    n
}

fn parse_digits(chars: &[char], start: usize, len: usize) -> i64 {
    chars[start..start + len].iter().collect::<String>().parse().unwrap_or(0)
}

/// Attempts every digit-lexer rule against `chars` (a full
/// whitespace-delimited chunk) starting at `chars[0]`, which must be an
/// ASCII digit. `at_word_end` indicates there is no more text after this
/// chunk in the input (affects the bare-year rule).
#[must_use]
pub fn lex_digit_chunk(chars: &[char], is_si_unit: impl Fn(&str) -> bool) -> Option<DigitMatch> {
    debug_assert!(chars.first().is_some_and(char::is_ascii_digit));

    try_time(chars)
        .or_else(|| try_date_dotted_or_slashed(chars))
        .or_else(|| try_kludgy_ordinal(chars))
        .or_else(|| try_numwletter(chars, &is_si_unit))
        .or_else(|| try_number_with_vulgar_fraction(chars))
        .or_else(|| try_decimal_comma_thousands(chars))
        .or_else(|| try_integer_dot_thousands(chars))
        .or_else(|| try_fraction_or_date_slash(chars))
        .or_else(|| try_year(chars))
        .or_else(|| try_ssn(chars))
        .or_else(|| try_telno(chars))
        .or_else(|| try_dotted_ordinal(chars))
        .or_else(|| try_decimal_dot_thousands(chars))
        .or_else(|| try_integer_comma_thousands(chars))
}

/// Icelandic national ID (kennitala): `DDMMYY-XXXC`, a 10-digit string
/// split 6+4 by a dash, where `C` is a modulo-11 check digit over the
/// first 9 digits (`kt. 591213-1480` has a valid checksum and is an SSN;
/// `591214-1480` has an invalid checksum and stays a plain
/// `NUMBER "-" NUMBER`). Only matches — and only consumes
/// the `-` — when the checksum is actually valid; an invalid checksum
/// returns `None` so the chunk falls through to `try_integer_comma_thousands`,
/// leaving the dash to be re-lexed as ordinary punctuation.
fn try_ssn(chars: &[char]) -> Option<DigitMatch> {
    const WEIGHTS: [u32; 9] = [3, 2, 7, 6, 5, 4, 3, 2, 1];

    let d1_len = digits(chars, 0);
    if d1_len != 6 || chars.get(6) != Some(&'-') {
        return None;
    }
    let d2_len = digits(chars, 7);
    if d2_len != 4 || chars.get(11).is_some_and(char::is_ascii_digit) {
        return None;
    }

    let mut ssn_digits = [0u32; 10];
    for (i, slot) in ssn_digits.iter_mut().enumerate() {
        let pos = if i < 6 { i } else { i + 1 };
        *slot = chars[pos].to_digit(10)?;
    }

    let sum: u32 = ssn_digits[..9].iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    let check = match 11 - remainder {
        11 => 0,
        10 => return None, // no valid check digit exists for this prefix
        c => c,
    };
    if check != ssn_digits[9] {
        return None;
    }

    let consumed = 11;
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch { kind: Kind::Ssn, val: Val::None, txt, consumed })
}

fn try_time(chars: &[char]) -> Option<DigitMatch> {
    let h_len = digits(chars, 0);
    if !(1..=2).contains(&h_len) || chars.get(h_len) != Some(&':') {
        return None;
    }
    let m_start = h_len + 1;
    let m_len = digits(chars, m_start);
    if m_len != 2 {
        return None;
    }
    let hour = parse_digits(chars, 0, h_len);
    let minute = parse_digits(chars, m_start, m_len);
    if hour > 23 || minute > 59 {
        return None;
    }
    let mut consumed = m_start + m_len;
    let mut second = 0i64;
    if chars.get(consumed) == Some(&':') {
        let s_len = digits(chars, consumed + 1);
        if s_len == 2 {
            let s = parse_digits(chars, consumed + 1, s_len);
            if s <= 59 {
                second = s;
                consumed += 1 + s_len;
            }
        }
    }
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch {
        kind: Kind::Time,
        val: Val::Time(HMS { hour: hour as u8, minute: minute as u8, second: second as u8 }),
        txt,
        consumed,
    })
}

fn is_valid_ymd(year: i32, month: u32, day: u32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    };
    (1..=days_in_month).contains(&day)
}

fn try_date_dotted_or_slashed(chars: &[char]) -> Option<DigitMatch> {
    let d1_len = digits(chars, 0);
    if !(1..=2).contains(&d1_len) {
        return None;
    }
    let sep = chars.get(d1_len).copied()?;
    if sep != '.' && sep != '/' {
        return None;
    }
    let d2_start = d1_len + 1;
    let d2_len = digits(chars, d2_start);
    if !(1..=2).contains(&d2_len) {
        return None;
    }
    if chars.get(d2_start + d2_len) != Some(&sep) {
        return None;
    }
    let d3_start = d2_start + d2_len + 1;
    let d3_len = digits(chars, d3_start);
    if !(2..=4).contains(&d3_len) {
        return None;
    }
    // Must not be followed by another digit (keeps a 3-digit year chunk
    // from silently truncating).
    if chars.get(d3_start + d3_len).is_some_and(char::is_ascii_digit) {
        return None;
    }

    let mut day = parse_digits(chars, 0, d1_len) as u32;
    let mut month = parse_digits(chars, d2_start, d2_len) as u32;
    let year_raw = parse_digits(chars, d3_start, d3_len);
    let year = if d3_len == 2 { 2000 + year_raw } else { year_raw } as i32;

    if day > 12 && month <= 12 {
        std::mem::swap(&mut day, &mut month);
    }
    if !is_valid_ymd(year, month, day) {
        return None;
    }

    let consumed = d3_start + d3_len;
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch {
        kind: Kind::Date,
        val: Val::Date(YMD { year, month: month as u8, day: day as u8 }),
        txt,
        consumed,
    })
}

/// Closed set of "kludgy ordinal" suffixes (`1sti`, `4ra`, `2svar`, ...): a
/// misspelled Icelandic ordinal or multiplier written as digit + suffix.
/// Recognized here as a single chunk, ahead of the generic single-letter
/// `NUMWLETTER` rule, so that a later stage can look the whole string up
/// against a fixed correction table and apply `handle_kludgy_ordinals`;
/// which of these combinations actually has a table entry is none of this
/// lexer's business.
const KLUDGY_ORDINAL_SUFFIXES: &[&str] =
    &["sti", "sta", "stu", "ji", "ja", "ju", "ði", "ða", "ðu", "ti", "ta", "tu", "svar", "ra"];

fn try_kludgy_ordinal(chars: &[char]) -> Option<DigitMatch> {
    let n_len = digits(chars, 0);
    if n_len == 0 {
        return None;
    }
    let rest: String = chars[n_len..].iter().collect();
    let suffix = KLUDGY_ORDINAL_SUFFIXES.iter().filter(|s| rest.starts_with(**s)).max_by_key(|s| s.len())?;
    let consumed = n_len + suffix.chars().count();
    if chars.get(consumed).is_some_and(|c| c.is_alphabetic()) {
        return None;
    }
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch { kind: Kind::Word, val: Val::None, txt, consumed })
}

fn try_numwletter(chars: &[char], is_si_unit: &impl Fn(&str) -> bool) -> Option<DigitMatch> {
    let n_len = digits(chars, 0);
    if n_len == 0 {
        return None;
    }
    let letter = *chars.get(n_len)?;
    if !letter.is_alphabetic() {
        return None;
    }
    // Must be exactly one trailing letter.
    if chars.get(n_len + 1).is_some_and(|c| c.is_alphabetic()) {
        return None;
    }
    let unit: String = chars[n_len..=n_len].iter().collect();
    if is_si_unit(&unit) {
        return None;
    }
    let value = parse_digits(chars, 0, n_len);
    let consumed = n_len + 1;
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch {
        kind: Kind::NumWLetter,
        val: Val::NumWLetter { value, letter },
        txt,
        consumed,
    })
}

fn try_number_with_vulgar_fraction(chars: &[char]) -> Option<DigitMatch> {
    let n_len = digits(chars, 0);
    if n_len == 0 {
        return None;
    }
    let frac_char = *chars.get(n_len)?;
    let frac_val = vulgar_fraction_value(frac_char)?;
    let int_val = parse_digits(chars, 0, n_len) as f64;
    let consumed = n_len + 1;
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch {
        kind: Kind::Number,
        val: Val::Number { value: int_val + frac_val, cases: None, genders: None },
        txt,
        consumed,
    })
}

/// Shared engine for a real number written as a leading digit run,
/// zero or more `thousands_sep`-delimited groups of exactly 3 digits,
/// then a mandatory `decimal_sep` followed by a (greedy, any-width)
/// digit run. Mirrors the original's two decimal regexes
/// (`\d+(\.\d\d\d)*,\d+` and `\d+(,\d\d\d)*\.\d+`) — neither tries to
/// consume more than one kind of separator run, so a 4-digit group
/// breaks the thousands pattern rather than being truncated to 3.
fn try_decimal(chars: &[char], thousands_sep: char, decimal_sep: char) -> Option<DigitMatch> {
    let first_len = digits(chars, 0);
    if first_len == 0 {
        return None;
    }
    let mut int_groups = vec![(0usize, first_len)];
    let mut pos = first_len;
    loop {
        if chars.get(pos) != Some(&thousands_sep) {
            break;
        }
        let len = digits(chars, pos + 1);
        if len != 3 {
            break;
        }
        int_groups.push((pos + 1, len));
        pos += 1 + len;
    }
    if chars.get(pos) != Some(&decimal_sep) {
        return None;
    }
    let decimal_start = pos + 1;
    let decimal_len = digits(chars, decimal_start);
    if decimal_len == 0 {
        return None;
    }
    let consumed = decimal_start + decimal_len;

    let mut int_part = String::new();
    for &(start, len) in &int_groups {
        int_part.push_str(&chars[start..start + len].iter().collect::<String>());
    }
    let frac_part: String = chars[decimal_start..consumed].iter().collect();
    let value: f64 = format!("{int_part}.{frac_part}").parse().ok()?;
    let txt: String = chars[..consumed].iter().collect();
    Some(DigitMatch { kind: Kind::Number, val: Val::Number { value, cases: None, genders: None }, txt, consumed })
}

/// Real number formatted with decimal comma and possibly a `.`
/// thousands separator (`2.013,45` -> `2013.45`). Checked before
/// integers, matching the original's ordering.
fn try_decimal_comma_thousands(chars: &[char]) -> Option<DigitMatch> {
    try_decimal(chars, '.', ',')
}

/// Integer with a `.` thousands separator and no decimal part
/// (`2.013` -> `2013`, `2.013.456` -> `2013456`): every repeated group
/// must be exactly 3 digits wide. Checked before dd.mm dates so a bare
/// thousands-grouped integer isn't mistaken for one.
fn try_integer_dot_thousands(chars: &[char]) -> Option<DigitMatch> {
    let first_len = digits(chars, 0);
    if first_len == 0 {
        return None;
    }
    let mut groups = vec![(0usize, first_len)];
    let mut pos = first_len;
    loop {
        if chars.get(pos) != Some(&'.') {
            break;
        }
        let len = digits(chars, pos + 1);
        if len != 3 {
            break;
        }
        groups.push((pos + 1, len));
        pos += 1 + len;
    }
    if groups.len() < 2 {
        return None;
    }
    let mut digits_only = String::new();
    for &(start, len) in &groups {
        digits_only.push_str(&chars[start..start + len].iter().collect::<String>());
    }
    let value: f64 = digits_only.parse().ok()?;
    let txt: String = chars[..pos].iter().collect();
    Some(DigitMatch { kind: Kind::Number, val: Val::Number { value, cases: None, genders: None }, txt, consumed: pos })
}

/// Real number, possibly with a `,` thousands separator, decimal point
/// (`2,013.45` -> `2013.45`); with zero thousands groups this is just a
/// plain `X.Y` decimal (`2.0134` -> `2.0134`). Checked after the
/// chapter-ordinal rule, matching the original's explicit ordering
/// ("we need to check this before numbers with decimal points" refers
/// to the ordinal rule needing to run first here, not the reverse).
fn try_decimal_dot_thousands(chars: &[char]) -> Option<DigitMatch> {
    try_decimal(chars, ',', '.')
}

fn try_fraction_or_date_slash(chars: &[char]) -> Option<DigitMatch> {
    let d1_len = digits(chars, 0);
    if !(1..=2).contains(&d1_len) || chars.get(d1_len) != Some(&'/') {
        return None;
    }
    let d2_start = d1_len + 1;
    let d2_len = digits(chars, d2_start);
    if !(1..=2).contains(&d2_len) {
        return None;
    }
    if chars.get(d2_start + d2_len).is_some_and(char::is_ascii_digit) {
        return None;
    }
    let num = parse_digits(chars, 0, d1_len);
    let den = parse_digits(chars, d2_start, d2_len);
    let consumed = d2_start + d2_len;
    let txt: String = chars[..consumed].iter().collect();

    // Small, common fractions parse as a NUMBER; everything else is a
    // DATE with year left unset (day/month swapped the same way as the
    // dotted form when the first field can't be a day).
    let is_common_fraction = den != 0 && den <= 31 && num < den;
    if is_common_fraction && matches!(den, 2 | 3 | 4 | 5 | 6 | 8 | 10 | 16) {
        return Some(DigitMatch {
            kind: Kind::Number,
            val: Val::Number { value: num as f64 / den as f64, cases: None, genders: None },
            txt,
            consumed,
        });
    }
    let mut day = num as u32;
    let mut month = den as u32;
    if day > 12 && month <= 12 {
        std::mem::swap(&mut day, &mut month);
    }
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(DigitMatch {
        kind: Kind::Date,
        val: Val::Date(YMD { year: 0, month: month as u8, day: day as u8 }),
        txt,
        consumed,
    })
}

fn try_year(chars: &[char]) -> Option<DigitMatch> {
    let n_len = digits(chars, 0);
    if n_len != 4 {
        return None;
    }
    if chars.get(4).is_some_and(char::is_ascii_digit) {
        return None;
    }
    let year = parse_digits(chars, 0, 4) as i32;
    if !(1776..=2100).contains(&year) {
        return None;
    }
    let txt: String = chars[..4].iter().collect();
    Some(DigitMatch { kind: Kind::Year, val: Val::Year(year), txt, consumed: 4 })
}

fn try_telno(chars: &[char]) -> Option<DigitMatch> {
    let n_len = digits(chars, 0);
    if n_len == 3 && chars.get(3) == Some(&'-') {
        let rest_len = digits(chars, 4);
        if rest_len == 4 && !chars.get(8).is_some_and(char::is_ascii_digit) {
            let normalized: String = chars[..8].iter().collect();
            return Some(DigitMatch {
                kind: Kind::Telno,
                val: Val::Telno { normalized, country_code: "354".to_string() },
                txt: chars[..8].iter().collect(),
                consumed: 8,
            });
        }
    }
    if n_len == 7 && !chars.get(7).is_some_and(char::is_ascii_digit) {
        let digits_str: String = chars[..7].iter().collect();
        let normalized = format!("{}-{}", &digits_str[..3], &digits_str[3..]);
        return Some(DigitMatch {
            kind: Kind::Telno,
            val: Val::Telno { normalized, country_code: "354".to_string() },
            txt: digits_str,
            consumed: 7,
        });
    }
    None
}

/// Chapter-style ordinal numbering (`2.5.1`, `17.6.1.` -> dots
/// stripped): the original's regex `\d+\.\d+(\.\d+)+` needs a minimum
/// of three number groups, since the trailing `(\.\d+)+` is itself at
/// least one more repetition on top of the leading `\d+\.\d+`. A bare
/// `N.N` (two groups) is not an ordinal by this rule — it's left to
/// `try_decimal_dot_thousands`/`try_integer_comma_thousands`.
fn try_dotted_ordinal(chars: &[char]) -> Option<DigitMatch> {
    let mut groups = Vec::new();
    let mut pos = 0;
    loop {
        let len = digits(chars, pos);
        if len == 0 {
            break;
        }
        groups.push((pos, len));
        pos += len;
        if chars.get(pos) == Some(&'.') && chars.get(pos + 1).is_some_and(char::is_ascii_digit) {
            pos += 1;
        } else {
            break;
        }
    }
    if groups.len() < 3 {
        return None;
    }
    let mut digits_only = String::new();
    for &(start, len) in &groups {
        digits_only.push_str(&chars[start..start + len].iter().collect::<String>());
    }
    let value: u64 = digits_only.parse().ok()?;
    let txt: String = chars[..pos].iter().collect();
    Some(DigitMatch { kind: Kind::Ordinal, val: Val::Ordinal(value), txt, consumed: pos })
}

/// Integer, optionally with a `,` thousands separator (each repeated
/// group exactly 3 digits). The final fallback once every other digit
/// rule has failed, mirroring the original's last-resort
/// `\d+(,\d\d\d)*`.
fn try_integer_comma_thousands(chars: &[char]) -> Option<DigitMatch> {
    let first_len = digits(chars, 0);
    if first_len == 0 {
        return None;
    }
    let mut groups = vec![(0usize, first_len)];
    let mut pos = first_len;
    loop {
        if chars.get(pos) != Some(&',') {
            break;
        }
        let len = digits(chars, pos + 1);
        if len != 3 {
            break;
        }
        groups.push((pos + 1, len));
        pos += 1 + len;
    }
    let mut digits_only = String::new();
    for &(start, len) in &groups {
        digits_only.push_str(&chars[start..start + len].iter().collect::<String>());
    }
    let value: f64 = digits_only.parse().ok()?;
    let txt: String = chars[..pos].iter().collect();
    Some(DigitMatch {
        kind: Kind::Number,
        val: Val::Number { value, cases: None, genders: None },
        txt,
        consumed: pos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex(s: &str) -> DigitMatch {
        let chars: Vec<char> = s.chars().collect();
        lex_digit_chunk(&chars, |_| false).unwrap_or_else(|| panic!("no match for {s:?}"))
    }

    #[test]
    fn time_hhmm() {
        let m = lex("14:30");
        assert_eq!(m.kind, Kind::Time);
        assert_eq!(m.val, Val::Time(HMS { hour: 14, minute: 30, second: 0 }));
    }

    #[test]
    fn time_hhmmss() {
        let m = lex("09:05:07");
        assert_eq!(m.val, Val::Time(HMS { hour: 9, minute: 5, second: 7 }));
    }

    #[test]
    fn date_dotted_day_month_year() {
        let m = lex("14.3.2019");
        assert_eq!(m.kind, Kind::Date);
        assert_eq!(m.val, Val::Date(YMD { year: 2019, month: 3, day: 14 }));
    }

    #[test]
    fn date_two_digit_year_assumes_2000s() {
        let m = lex("17.6.19");
        assert_eq!(m.val, Val::Date(YMD { year: 2019, month: 6, day: 17 }));
    }

    #[test]
    fn date_day_over_12_swaps_with_month() {
        let m = lex("17.6.2019");
        assert_eq!(m.val, Val::Date(YMD { year: 2019, month: 6, day: 17 }));
    }

    #[test]
    fn year_in_range() {
        let m = lex("2007");
        assert_eq!(m.kind, Kind::Year);
        assert_eq!(m.val, Val::Year(2007));
    }

    #[test]
    fn telno_dashed() {
        let m = lex("591-2007");
        assert_eq!(m.kind, Kind::Telno);
    }

    #[test]
    fn telno_seven_digits() {
        let chars: Vec<char> = "5912007".chars().collect();
        let m = lex_digit_chunk(&chars, |_| false).unwrap();
        assert_eq!(m.kind, Kind::Telno);
        if let Val::Telno { normalized, .. } = m.val {
            assert_eq!(normalized, "591-2007");
        } else {
            panic!("expected Telno");
        }
    }

    #[test]
    fn real_number_dot_thousands_comma_decimal() {
        let m = lex("2.013,45");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 2013.45, cases: None, genders: None });
    }

    #[test]
    fn numwletter() {
        let m = lex("5a");
        assert_eq!(m.kind, Kind::NumWLetter);
        assert_eq!(m.val, Val::NumWLetter { value: 5, letter: 'a' });
    }

    #[test]
    fn kludgy_ordinal_suffix_is_one_word_token() {
        let m = lex("3ja");
        assert_eq!(m.kind, Kind::Word);
        assert_eq!(m.txt, "3ja");
        assert_eq!(m.consumed, 3);
    }

    #[test]
    fn kludgy_ordinal_longer_suffix() {
        let m = lex("2svar");
        assert_eq!(m.kind, Kind::Word);
        assert_eq!(m.txt, "2svar");
    }

    #[test]
    fn numwletter_still_wins_over_unrelated_single_letter() {
        // "1x" has no kludgy-ordinal suffix match, so it stays NUMWLETTER.
        let m = lex("1x");
        assert_eq!(m.kind, Kind::NumWLetter);
    }

    #[test]
    fn plain_integer() {
        let m = lex("42");
        assert_eq!(m.val, Val::Number { value: 42.0, cases: None, genders: None });
    }

    #[test]
    fn dotted_ordinal_needs_three_groups() {
        let m = lex("2.5.1");
        assert_eq!(m.kind, Kind::Ordinal);
        assert_eq!(m.val, Val::Ordinal(251));
    }

    #[test]
    fn two_dot_groups_is_a_decimal_not_an_ordinal() {
        // Only two number groups, so this is the plain decimal `17.6`,
        // not a chapter ordinal (which needs a minimum of three).
        let m = lex("17.6.");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 17.6, cases: None, genders: None });
        assert_eq!(m.consumed, 4);
    }

    #[test]
    fn integer_with_dot_thousands() {
        let m = lex("2.013");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 2013.0, cases: None, genders: None });
    }

    #[test]
    fn integer_with_repeated_dot_thousands() {
        let m = lex("2.013.456");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 2_013_456.0, cases: None, genders: None });
    }

    #[test]
    fn irregular_group_width_breaks_thousands_grouping() {
        // The middle group is 4 digits wide, not 3, so this is not a
        // thousands-grouped number at all: it falls through to the
        // plain decimal `2.0134`, leaving `,45` unconsumed.
        let m = lex("2.0134,45");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 2.0134, cases: None, genders: None });
        assert_eq!(m.txt, "2.0134");
    }

    #[test]
    fn comma_thousands_dot_decimal() {
        let m = lex("2,013.45");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 2013.45, cases: None, genders: None });
    }

    #[test]
    fn integer_with_comma_thousands() {
        let m = lex("2,013");
        assert_eq!(m.kind, Kind::Number);
        assert_eq!(m.val, Val::Number { value: 2013.0, cases: None, genders: None });
    }

    #[test]
    fn ssn_valid_checksum() {
        let m = lex("591213-1480");
        assert_eq!(m.kind, Kind::Ssn);
        assert_eq!(m.txt, "591213-1480");
        assert_eq!(m.consumed, 11);
    }

    #[test]
    fn ssn_invalid_checksum_falls_through() {
        let chars: Vec<char> = "591214-1480".chars().collect();
        assert!(try_ssn(&chars).is_none());
        let m = lex_digit_chunk(&chars, |_| false).unwrap();
        assert_ne!(m.kind, Kind::Ssn);
    }

    #[test]
    fn ssn_wrong_length_falls_through() {
        let chars: Vec<char> = "591213-14803".chars().collect();
        assert!(try_ssn(&chars).is_none());
    }
}
