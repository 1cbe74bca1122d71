//! Minimal SI-unit *symbol* recognition used by the raw scanner: a chunk
//! that matches a known SI-unit symbol emits WORD instead of falling
//! through to NUMWLETTER. Canonicalization and scaling factors for these
//! symbols live in `icetok_lexer::tables`, one layer up; this crate only
//! needs to know which bare strings count as a symbol at all.

const SYMBOLS: &[&str] = &[
    "m", "cm", "mm", "km", "g", "kg", "mg", "s", "ms", "K", "°C", "°F", "°",
    "J", "kJ", "W", "kW", "kWh", "V", "A", "Hz", "kHz", "Pa", "hPa", "N",
    "l", "ml", "kl", "°K",
];

#[must_use]
pub fn is_si_symbol(s: &str) -> bool {
    SYMBOLS.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_symbols() {
        assert!(is_si_symbol("km"));
        assert!(is_si_symbol("°C"));
        assert!(is_si_symbol("kg"));
    }

    #[test]
    fn rejects_arbitrary_words() {
        assert!(!is_si_symbol("hundur"));
        assert!(!is_si_symbol(""));
    }
}
