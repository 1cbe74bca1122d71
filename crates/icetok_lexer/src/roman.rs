//! Roman-numeral recognition/conversion backing the "Roman-numeral WORD"
//! arm of the ordinal rule.

const MAP: &[(u64, &str)] = &[
    (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"), (100, "C"), (90, "XC"),
    (50, "L"), (40, "XL"), (10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I"),
];

/// `true` if `s` is a well-formed Roman numeral (`M{0,4}(CM|CD|D?C{0,3})
/// (XC|XL|L?X{0,3})(IX|IV|V?I{0,3})`), case-sensitive upper case only.
#[must_use]
pub fn is_roman_numeral(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| matches!(b, b'M' | b'C' | b'D' | b'X' | b'L' | b'V' | b'I')) {
        return false;
    }
    to_int(s).is_some_and(|n| to_roman(n) == s)
}

/// Converts an already-validated Roman numeral to its integer value.
#[must_use]
pub fn to_int(s: &str) -> Option<u64> {
    let mut result = 0u64;
    let mut rest = s;
    'outer: while !rest.is_empty() {
        for &(value, numeral) in MAP {
            if let Some(tail) = rest.strip_prefix(numeral) {
                result += value;
                rest = tail;
                continue 'outer;
            }
        }
        return None;
    }
    Some(result)
}

fn to_roman(mut n: u64) -> String {
    let mut out = String::new();
    for &(value, numeral) in MAP {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
