//! Static lookup tables driving stages 2-6, built as data rather than
//! prose. Every table is built once behind a [`once_cell::sync::Lazy`] and
//! consulted read-only from every pipeline stage.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

/// Conversion applied by a derived unit onto its canonical SI base: either
/// a plain multiplicative scale or (for temperature) an affine function.
#[derive(Clone, Copy)]
pub enum Conversion {
    Scale(f64),
    AffineFromCelsius,
    AffineFromFahrenheit,
}

impl Conversion {
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Conversion::Scale(k) => x * k,
            Conversion::AffineFromCelsius => x + 273.15,
            Conversion::AffineFromFahrenheit => (x + 459.67) * 5.0 / 9.0,
        }
    }
}

/// Month name (and common abbreviations) -> 1-based month number.
pub static MONTHS: Lazy<FxHashMap<&'static str, u8>> = Lazy::new(|| {
    [
        ("janúar", 1), ("febrúar", 2), ("mars", 3), ("apríl", 4), ("maí", 5),
        ("júní", 6), ("júlí", 7), ("ágúst", 8), ("september", 9), ("október", 10),
        ("nóvember", 11), ("desember", 12),
        ("jan.", 1), ("feb.", 2), ("mar.", 3), ("apr.", 4), ("jún.", 6),
        ("júl.", 7), ("ág.", 8), ("ágú.", 8), ("sep.", 9), ("sept.", 9),
        ("okt.", 10), ("nóv.", 11), ("des.", 12),
        ("jan", 1), ("feb", 2), ("mar", 3), ("apr", 4), ("jún", 6), ("júl", 7),
        ("ág", 8), ("ágú", 8), ("sep", 9), ("sept", 9), ("okt", 10), ("nóv", 11),
        ("des", 12),
    ]
    .into_iter()
    .collect()
});

/// Short/ambiguous month forms that must not be read as a standalone
/// DATEREL when not adjacent to other date material.
pub static AMBIGUOUS_MONTH_FORMS: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["jan", "mar", "júl", "des"].into_iter().collect());

/// The given name "Ágúst" must never be read as the month.
pub const MONTH_BLACKLIST: &str = "Ágúst";

/// Day-of-month ordinal words -> day number.
pub static DAYS_OF_MONTH: Lazy<FxHashMap<&'static str, u8>> = Lazy::new(|| {
    [
        ("fyrsti", 1), ("fyrsta", 1), ("annar", 2), ("annan", 2),
        ("þriðji", 3), ("þriðja", 3), ("fjórði", 4), ("fjórða", 4),
        ("fimmti", 5), ("fimmta", 5), ("sjötti", 6), ("sjötta", 6),
        ("sjöundi", 7), ("sjöunda", 7), ("áttundi", 8), ("áttunda", 8),
        ("níundi", 9), ("níunda", 9), ("tíundi", 10), ("tíunda", 10),
        ("ellefti", 11), ("ellefta", 11), ("tólfti", 12), ("tólfta", 12),
        ("þrettándi", 13), ("þrettánda", 13), ("fjórtándi", 14), ("fjórtánda", 14),
        ("fimmtándi", 15), ("fimmtánda", 15), ("sextándi", 16), ("sextánda", 16),
        ("sautjándi", 17), ("sautjánda", 17), ("átjándi", 18), ("átjánda", 18),
        ("nítjándi", 19), ("nítjánda", 19), ("tuttugasti", 20), ("tuttugasta", 20),
        ("þrítugasti", 30), ("þrítugasta", 30),
    ]
    .into_iter()
    .collect()
});

/// Spelled-out clock times -> (hour, minute, second).
pub static CLOCK_NUMBERS: Lazy<FxHashMap<&'static str, (u8, u8, u8)>> = Lazy::new(|| {
    [
        ("eitt", (1, 0, 0)), ("tvö", (2, 0, 0)), ("þrjú", (3, 0, 0)), ("fjögur", (4, 0, 0)),
        ("fimm", (5, 0, 0)), ("sex", (6, 0, 0)), ("sjö", (7, 0, 0)), ("átta", (8, 0, 0)),
        ("níu", (9, 0, 0)), ("tíu", (10, 0, 0)), ("ellefu", (11, 0, 0)), ("tólf", (12, 0, 0)),
        ("hálfeitt", (12, 30, 0)), ("hálftvö", (1, 30, 0)), ("hálfþrjú", (2, 30, 0)),
        ("hálffjögur", (3, 30, 0)), ("hálffimm", (4, 30, 0)), ("hálfsex", (5, 30, 0)),
        ("hálfsjö", (6, 30, 0)), ("hálfátta", (7, 30, 0)), ("hálfníu", (8, 30, 0)),
        ("hálftíu", (9, 30, 0)), ("hálfellefu", (10, 30, 0)), ("hálftólf", (11, 30, 0)),
    ]
    .into_iter()
    .collect()
});

/// Subset of [`CLOCK_NUMBERS`] that can only occur as a half-hour clock
/// word (`hálfátta` etc.), never a full hour.
pub static CLOCK_HALF: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    CLOCK_NUMBERS
        .keys()
        .copied()
        .filter(|k| k.starts_with("hálf"))
        .collect()
});

pub const CLOCK_WORD: &str = "klukkan";
pub const CLOCK_ABBREV: &str = "kl.";

/// Era suffix forms attached after a YEAR or NUMBER.
pub static CE: Lazy<FxHashSet<&'static str>> = Lazy::new(|| ["e.Kr", "e.Kr."].into_iter().collect());
pub static BCE: Lazy<FxHashSet<&'static str>> = Lazy::new(|| ["f.Kr", "f.Kr."].into_iter().collect());

#[must_use]
pub fn is_ce_bce(s: &str) -> bool {
    CE.contains(s) || BCE.contains(s)
}

#[must_use]
pub fn is_bce(s: &str) -> bool {
    BCE.contains(s)
}

/// ISO 4217 currency codes recognized as a bare WORD suffix following a
/// NUMBER.
pub static CURRENCY_ABBREV: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "ISK", "DKK", "NOK", "SEK", "GBP", "USD", "EUR", "CAD", "AUD", "CHF",
        "JPY", "PLN", "RUB", "CZK", "INR", "IDR", "CNY", "RMB", "HKD", "NZD",
        "SGD", "MXN", "ZAR",
    ]
    .into_iter()
    .collect()
});

/// Currency symbol -> ISO code ("symbol + NUMBER").
pub static CURRENCY_SYMBOLS: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    [('$', "USD"), ('€', "EUR"), ('£', "GBP"), ('¥', "JPY"), ('₽', "RUB")]
        .into_iter()
        .collect()
});

/// Derived SI unit -> (canonical base symbol, conversion). Temperature
/// units use an affine conversion; everything else is a pure scale.
pub static SI_UNITS: Lazy<FxHashMap<&'static str, (&'static str, Conversion)>> = Lazy::new(|| {
    use Conversion::{AffineFromCelsius, AffineFromFahrenheit, Scale};
    [
        ("m²", ("m²", Scale(1.0))),
        ("fm", ("m²", Scale(1.0))),
        ("cm²", ("m²", Scale(1.0e-2))),
        ("m³", ("m³", Scale(1.0))),
        ("cm³", ("m³", Scale(1.0e-6))),
        ("l", ("m³", Scale(1.0e-3))),
        ("ltr", ("m³", Scale(1.0e-3))),
        ("dl", ("m³", Scale(1.0e-4))),
        ("cl", ("m³", Scale(1.0e-5))),
        ("ml", ("m³", Scale(1.0e-6))),
        ("°C", ("K", AffineFromCelsius)),
        ("°F", ("K", AffineFromFahrenheit)),
        ("K", ("K", Scale(1.0))),
        ("g", ("g", Scale(1.0))),
        ("gr", ("g", Scale(1.0))),
        ("kg", ("g", Scale(1.0e3))),
        ("t", ("g", Scale(1.0e6))),
        ("mg", ("g", Scale(1.0e-3))),
        ("μg", ("g", Scale(1.0e-6))),
        ("m", ("m", Scale(1.0))),
        ("km", ("m", Scale(1.0e3))),
        ("mm", ("m", Scale(1.0e-3))),
        ("μm", ("m", Scale(1.0e-6))),
        ("cm", ("m", Scale(1.0e-2))),
        ("sm", ("m", Scale(1.0e-2))),
        ("s", ("s", Scale(1.0))),
        ("ms", ("s", Scale(1.0e-3))),
        ("μs", ("s", Scale(1.0e-6))),
        ("Nm", ("J", Scale(1.0))),
        ("klst", ("s", Scale(3600.0))),
        ("mín", ("s", Scale(60.0))),
        ("W", ("W", Scale(1.0))),
        ("mW", ("W", Scale(1.0e-3))),
        ("kW", ("W", Scale(1.0e3))),
        ("MW", ("W", Scale(1.0e6))),
        ("GW", ("W", Scale(1.0e9))),
        ("TW", ("W", Scale(1.0e12))),
        ("J", ("J", Scale(1.0))),
        ("kJ", ("J", Scale(1.0e3))),
        ("MJ", ("J", Scale(1.0e6))),
        ("GJ", ("J", Scale(1.0e9))),
        ("TJ", ("J", Scale(1.0e12))),
        ("kWh", ("J", Scale(3.6e6))),
        ("MWh", ("J", Scale(3.6e9))),
        ("kWst", ("J", Scale(3.6e6))),
        ("MWst", ("J", Scale(3.6e9))),
        ("kcal", ("J", Scale(4184.0))),
        ("cal", ("J", Scale(4.184))),
        ("N", ("N", Scale(1.0))),
        ("kN", ("N", Scale(1.0e3))),
        ("V", ("V", Scale(1.0))),
        ("mV", ("V", Scale(1.0e-3))),
        ("kV", ("V", Scale(1.0e3))),
        ("A", ("A", Scale(1.0))),
        ("mA", ("A", Scale(1.0e-3))),
        ("Hz", ("Hz", Scale(1.0))),
        ("kHz", ("Hz", Scale(1.0e3))),
        ("MHz", ("Hz", Scale(1.0e6))),
        ("GHz", ("Hz", Scale(1.0e9))),
        ("Pa", ("Pa", Scale(1.0))),
        ("hPa", ("Pa", Scale(1.0e2))),
        ("°", ("°", Scale(1.0))),
    ]
    .into_iter()
    .collect()
});

/// `handle_kludgy_ordinals` option arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KludgyOrdinals {
    PassThrough,
    Modify,
    Translate,
}

/// Incorrectly-written ("kludgy") ordinal word -> corrected word, used by
/// `KludgyOrdinals::Modify`. Note `"3ja"` maps to `"þriðja"` ("3rd"), not
/// `"þriggja"` ("of three") — an acknowledged ambiguity, preserved
/// verbatim rather than "fixed".
pub static ORDINAL_ERRORS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("1sti", "fyrsti"), ("1sta", "fyrsta"), ("1stu", "fyrstu"),
        ("3ji", "þriðji"), ("3ja", "þriðja"), ("3ju", "þriðju"),
        ("4ði", "fjórði"), ("4ða", "fjórða"), ("4ðu", "fjórðu"),
        ("5ti", "fimmti"), ("5ta", "fimmta"), ("5tu", "fimmtu"),
        ("2svar", "tvisvar"), ("3svar", "þrisvar"),
        ("2ja", "tveggja"), ("4ra", "fjögurra"),
    ]
    .into_iter()
    .collect()
});

/// Kludgy ordinal word -> its numeric value, used by
/// `KludgyOrdinals::Translate`. A strict subset of [`ORDINAL_ERRORS`]: the
/// pure-multiplier forms (`2svar`, `2ja`, `4ra`) have no ordinal number.
pub static ORDINAL_NUMBERS: Lazy<FxHashMap<&'static str, u64>> = Lazy::new(|| {
    [
        ("1sti", 1), ("1sta", 1), ("1stu", 1),
        ("3ji", 3), ("3ja", 3), ("3ju", 3),
        ("4ði", 4), ("4ða", 4), ("4ðu", 4),
        ("5ti", 5), ("5ta", 5), ("5tu", 5),
    ]
    .into_iter()
    .collect()
});

/// Number words that multiply a preceding (or standalone) value. Kept
/// as `f64` since the table mixes small integers with
/// `1e6`/`1e9`-scale multipliers.
pub static MULTIPLIERS: Lazy<FxHashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("einn", 1.0), ("tveir", 2.0), ("þrír", 3.0), ("fjórir", 4.0), ("fimm", 5.0),
        ("sex", 6.0), ("sjö", 7.0), ("átta", 8.0), ("níu", 9.0), ("tíu", 10.0),
        ("ellefu", 11.0), ("tólf", 12.0), ("þrettán", 13.0), ("fjórtán", 14.0),
        ("fimmtán", 15.0), ("sextán", 16.0), ("sautján", 17.0), ("seytján", 17.0),
        ("átján", 18.0), ("nítján", 19.0), ("tuttugu", 20.0), ("þrjátíu", 30.0),
        ("fjörutíu", 40.0), ("fimmtíu", 50.0), ("sextíu", 60.0), ("sjötíu", 70.0),
        ("áttatíu", 80.0), ("níutíu", 90.0), ("hundrað", 100.0),
        ("þúsund", 1.0e3), ("þús.", 1.0e3),
        ("milljón", 1.0e6), ("milla", 1.0e6), ("millj.", 1.0e6), ("mljó.", 1.0e6),
        ("milljarður", 1.0e9), ("miljarður", 1.0e9), ("ma.", 1.0e9), ("mrð.", 1.0e9),
    ]
    .into_iter()
    .collect()
});

/// Words meaning "percent", recognized as a suffix on a NUMBER.
pub static PERCENTAGES: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["prósent", "prósenta", "hundraðshluti", "prósentustig"].into_iter().collect());

/// ISK amount suffix -> scale factor.
pub static AMOUNT_ABBREV: Lazy<FxHashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("kr.", 1.0), ("kr", 1.0), ("krónur", 1.0),
        ("þ.kr.", 1.0e3), ("þ.kr", 1.0e3), ("þús.kr.", 1.0e3), ("þús.kr", 1.0e3),
        ("m.kr.", 1.0e6), ("m.kr", 1.0e6), ("mkr.", 1.0e6), ("mkr", 1.0e6),
        ("millj.kr.", 1.0e6), ("millj.kr", 1.0e6), ("mljó.kr.", 1.0e6), ("mljó.kr", 1.0e6),
        ("ma.kr.", 1.0e9), ("ma.kr", 1.0e9), ("mö.kr.", 1.0e9), ("mö.kr", 1.0e9),
        ("mlja.kr.", 1.0e9), ("mlja.kr", 1.0e9),
    ]
    .into_iter()
    .collect()
});

/// Króna-amount words that may precede a number as well as follow it
/// (`kr. 9.900`).
pub static ISK_AMOUNT_PRECEDING: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["kr.", "kr", "krónur"].into_iter().collect());

/// Compound-word prefixes that merge with a following hyphenated word even
/// without an `og`/`eða` coordinator.
pub static ADJECTIVE_PREFIXES: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["hálf", "marg", "semí", "full"].into_iter().collect());

/// Words that precede a YEAR/NUMBER to fold it into a YEAR.
pub static YEAR_WORD: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["árið", "ársins", "árinu"].into_iter().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_cover_full_and_abbreviated_forms() {
        assert_eq!(MONTHS.get("mars"), Some(&3));
        assert_eq!(MONTHS.get("nóv."), Some(&11));
        assert_eq!(MONTHS.get("des"), Some(&12));
    }

    #[test]
    fn clock_half_is_subset_of_clock_numbers() {
        assert!(CLOCK_HALF.contains("hálfátta"));
        assert_eq!(CLOCK_NUMBERS["hálfátta"], (7, 30, 0));
        assert!(!CLOCK_HALF.contains("átta"));
    }

    #[test]
    fn si_unit_temperature_conversion() {
        let (base, conv) = SI_UNITS["°C"];
        assert_eq!(base, "K");
        assert!((conv.apply(32.0) - 305.15).abs() < 1e-9);
    }

    #[test]
    fn kludgy_ordinal_3ja_maps_to_third_not_three() {
        assert_eq!(ORDINAL_ERRORS["3ja"], "þriðja");
        assert_eq!(ORDINAL_NUMBERS["3ja"], 3);
    }

    #[test]
    fn amount_abbrev_scales() {
        assert_eq!(AMOUNT_ABBREV["m.kr."], 1.0e6);
        assert_eq!(AMOUNT_ABBREV["ma.kr."], 1.0e9);
    }

    #[test]
    fn currency_symbol_lookup() {
        assert_eq!(CURRENCY_SYMBOLS[&'$'], "USD");
        assert_eq!(CURRENCY_SYMBOLS[&'€'], "EUR");
    }
}
