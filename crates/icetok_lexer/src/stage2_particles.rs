//! Stage 2: the particle coalescer.
//!
//! Folds short multi-token patterns — currency symbol + number, an
//! abbreviation's period interacting with sentence-boundary look-ahead
//! (§4.4), `klukkan`/`kl.` + time, `árið` + year, percent signs, ordinals,
//! measurement units — into single typed tokens, with one token of
//! look-ahead (occasionally two, for the abbreviation-period rule, which
//! needs to see past the period to decide whether it might end a
//! sentence).

use std::collections::VecDeque;

use icetok_abbrev::AbbrevTable;
use icetok_ir::{Kind, Meaning, SpacingClass, Tok, Val};

use crate::roman;
use crate::tables;
use crate::util::{first_char_uppercase, is_boundary, is_punct, is_word};

pub struct ParticleCoalescer<'a, I: Iterator<Item = Tok>> {
    inner: I,
    table: &'a AbbrevTable,
    handle_kludgy_ordinals: tables::KludgyOrdinals,
    /// Tokens pulled from `inner` (or re-queued after use as look-ahead)
    /// that have not yet been run through [`Self::step`].
    repush: VecDeque<Tok>,
    /// Tokens already produced by `step`, waiting to be yielded.
    out: VecDeque<Tok>,
}

impl<'a, I: Iterator<Item = Tok>> ParticleCoalescer<'a, I> {
    pub fn new(inner: I, table: &'a AbbrevTable, handle_kludgy_ordinals: tables::KludgyOrdinals) -> Self {
        ParticleCoalescer { inner, table, handle_kludgy_ordinals, repush: VecDeque::new(), out: VecDeque::new() }
    }

    fn pull(&mut self) -> Option<Tok> {
        self.repush.pop_front().or_else(|| self.inner.next())
    }

    fn peek_kind_txt(&mut self) -> Option<(Kind, String)> {
        if self.repush.is_empty() {
            // `Iterator` has no generic peek without `Peekable`, and we
            // need to pull-and-requeue uniformly with `repush` anyway, so
            // just pull one token and push it straight back.
            let tok = self.inner.next()?;
            let info = (tok.kind, tok.txt.clone());
            self.repush.push_back(tok);
            Some(info)
        } else {
            self.repush.front().map(|t| (t.kind, t.txt.clone()))
        }
    }

    fn step(&mut self, tok: Tok) {
        if tok.kind == Kind::Punctuation && tok.txt.chars().count() == 1 {
            if let Some(&iso) = tables::CURRENCY_SYMBOLS.get(&tok.txt.chars().next().unwrap()) {
                if let Some((Kind::Number, _)) = self.peek_kind_txt() {
                    let num = self.pull().unwrap();
                    if let Val::Number { value, cases, genders } = num.val.clone() {
                        let merged = tok.concatenate(&num, "");
                        self.out.push_back(Tok::new(
                            Kind::Amount,
                            merged.txt,
                            Val::Amount { value, iso: iso.to_string(), cases, genders },
                            merged.original,
                            merged.origin_spans,
                        ));
                        return;
                    }
                }
            }
        }

        if tok.kind == Kind::Word {
            if let Some(rewritten) = self.apply_kludgy_ordinal(&tok) {
                self.out.push_back(rewritten);
                return;
            }
        }

        if tok.kind == Kind::Word {
            if let Some((Kind::Punctuation, dot)) = self.peek_kind_txt() {
                if dot == "." {
                    let candidate = format!("{}.", tok.txt);
                    if self.table.has_meaning(&candidate) {
                        let period = self.pull().unwrap();
                        self.handle_abbrev_period(tok, period, candidate);
                        return;
                    }
                }
            }
        }

        if is_word(&tok, "klukkan") || tok.txt.to_lowercase() == "kl." {
            if let Some(kind_next) = self.peek_kind_txt() {
                let is_clock_word = matches!(kind_next.0, Kind::Word) && tables::CLOCK_NUMBERS.contains_key(kind_next.1.as_str());
                if matches!(kind_next.0, Kind::Time | Kind::Number) || is_clock_word {
                    let next = self.pull().unwrap();
                    if let Some(hms) = clock_value(&next) {
                        let merged = tok.concatenate(&next, " ");
                        self.out.push_back(Tok::new(Kind::Time, merged.txt, Val::Time(hms), merged.original, merged.origin_spans));
                        return;
                    }
                    self.repush.push_front(next);
                }
            }
        }

        if tok.kind == Kind::Word {
            if let Some(&(h, m, s)) = tables::CLOCK_NUMBERS.get(tok.txt.as_str()) {
                if tables::CLOCK_HALF.contains(tok.txt.as_str()) {
                    self.out.push_back(Tok::new(Kind::Time, tok.txt.clone(), Val::Time(icetok_ir::HMS { hour: h, minute: m, second: s }), tok.original, tok.origin_spans));
                    return;
                }
            }
        }

        if tok.kind == Kind::Word && tables::YEAR_WORD.contains(tok.txt.to_lowercase().as_str()) {
            if let Some((k, _)) = self.peek_kind_txt() {
                if matches!(k, Kind::Year | Kind::Number) {
                    let next = self.pull().unwrap();
                    if let Some(year) = year_value(&next) {
                        let merged = tok.concatenate(&next, " ");
                        self.out.push_back(Tok::new(Kind::Year, merged.txt, Val::Year(year), merged.original, merged.origin_spans));
                        return;
                    }
                    self.repush.push_front(next);
                }
            }
        }

        if tok.kind == Kind::Number {
            if let Val::Number { value, .. } = tok.val {
                if is_punct_lookahead(self, "%") {
                    let pct = self.pull().unwrap();
                    let merged = tok.concatenate(&pct, "");
                    self.out.push_back(Tok::new(Kind::Percent, merged.txt, Val::Percent { value, cases: None, genders: None }, merged.original, merged.origin_spans));
                    return;
                }
                if value.fract() == 0.0 && is_punct_lookahead(self, ".") {
                    if self.ordinal_is_safe() {
                        let dot = self.pull().unwrap();
                        let merged = tok.concatenate(&dot, "");
                        self.out.push_back(Tok::new(Kind::Ordinal, merged.txt, Val::Ordinal(value as u64), merged.original, merged.origin_spans));
                        return;
                    }
                }
            }
        }

        if tok.kind == Kind::Word && roman::is_roman_numeral(&tok.txt) {
            if is_punct_lookahead(self, ".") && self.ordinal_is_safe() {
                let dot = self.pull().unwrap();
                let value = roman::to_int(&tok.txt).unwrap_or(0);
                let merged = tok.concatenate(&dot, "");
                self.out.push_back(Tok::new(Kind::Ordinal, merged.txt, Val::Ordinal(value), merged.original, merged.origin_spans));
                return;
            }
        }

        if matches!(tok.kind, Kind::Number | Kind::Year) {
            if let Some((Kind::Word, unit)) = self.peek_kind_txt() {
                if let Some(&(base, conv)) = tables::SI_UNITS.get(unit.as_str()) {
                    let num_value = match &tok.val {
                        Val::Number { value, .. } => *value,
                        Val::Year(y) => *y as f64,
                        _ => unreachable!(),
                    };
                    let unit_tok = self.pull().unwrap();
                    let converted = conv.apply(num_value);
                    let merged = tok.concatenate(&unit_tok, " ");
                    let measurement = Tok::new(Kind::Measurement, merged.txt, Val::Measurement { unit: base.to_string(), value: converted }, merged.original, merged.origin_spans);
                    self.out.push_back(self.maybe_rewrite_degree(measurement));
                    return;
                }
            }
        }

        self.out.push_back(self.attach_plain_meaning(tok));
    }

    /// `MEASUREMENT("°") + {"C","F"}` rewrite. Called right
    /// after producing a fresh `°`-unit MEASUREMENT token.
    fn maybe_rewrite_degree(&mut self, tok: Tok) -> Tok {
        if tok.kind != Kind::Measurement {
            return tok;
        }
        let is_bare_degree = matches!(&tok.val, Val::Measurement { unit, .. } if unit == "°");
        if !is_bare_degree {
            return tok;
        }
        let Some((Kind::Word, letter)) = self.peek_kind_txt() else { return tok };
        let conv = match letter.as_str() {
            "C" => Some(tables::Conversion::AffineFromCelsius),
            "F" => Some(tables::Conversion::AffineFromFahrenheit),
            _ => None,
        };
        let Some(conv) = conv else { return tok };
        // "°" converts with Conversion::Scale(1.0), so `value` here is
        // still the original numeric reading; reapply the real conversion.
        let Val::Measurement { value, .. } = tok.val.clone() else { unreachable!() };
        let letter_tok = self.pull().unwrap();
        let converted = conv.apply(value);
        let merged = tok.concatenate(&letter_tok, "");
        Tok::new(Kind::Measurement, merged.txt, Val::Measurement { unit: "K".to_string(), value: converted }, merged.original, merged.origin_spans)
    }

    /// `handle_kludgy_ordinals` applied to a raw `1sti`/`3ja`/`4ra`-style
    /// WORD token. `PassThrough` leaves it untouched; `Modify` rewrites its
    /// surface text to the corrected word; `Translate` turns it into an
    /// ORDINAL carrying the numeric value, when the table has one (the
    /// pure-multiplier forms like `2svar` don't).
    fn apply_kludgy_ordinal(&self, tok: &Tok) -> Option<Tok> {
        match self.handle_kludgy_ordinals {
            tables::KludgyOrdinals::PassThrough => None,
            tables::KludgyOrdinals::Modify => {
                let word = *tables::ORDINAL_ERRORS.get(tok.txt.as_str())?;
                Some(Tok::new(Kind::Word, word.to_string(), Val::None, tok.original.clone(), tok.origin_spans.clone()))
            }
            tables::KludgyOrdinals::Translate => {
                let value = *tables::ORDINAL_NUMBERS.get(tok.txt.as_str())?;
                Some(Tok::new(Kind::Ordinal, tok.txt.clone(), Val::Ordinal(value), tok.original.clone(), tok.origin_spans.clone()))
            }
        }
    }

    fn attach_plain_meaning(&self, mut tok: Tok) -> Tok {
        if tok.kind == Kind::Word {
            if let Some(entry) = self.table.get(&tok.txt) {
                tok.val = Val::Word(vec![Meaning {
                    stem: entry.meaning.clone(),
                    utg: 0,
                    word_class: entry.word_class.clone(),
                    category: entry.gender.clone(),
                    surface: entry.abbrev.clone(),
                    inflection: "-".to_string(),
                }]);
            }
        }
        tok
    }

    fn attach_meaning(&self, mut tok: Tok, candidate: &str) -> Tok {
        tok.kind = Kind::Word;
        if let Some(entry) = self.table.get(candidate) {
            tok.val = Val::Word(vec![Meaning {
                stem: entry.meaning.clone(),
                utg: 0,
                word_class: entry.word_class.clone(),
                category: entry.gender.clone(),
                surface: entry.abbrev.clone(),
                inflection: "-".to_string(),
            }]);
        }
        tok
    }

    /// Whether the number/Roman-numeral + "." in front of us is safe to
    /// read as an ORDINAL: the token after the period must not be an
    /// uppercase WORD (unless a month name), an opening quote, or a
    /// sentence/paragraph boundary.
    fn ordinal_is_safe(&mut self) -> bool {
        // Look two tokens ahead: the "." itself is still in front (not yet
        // pulled by the caller), so peek past it via a temporary pull.
        let dot = self.pull().expect("caller already confirmed a '.' is next");
        let after = self.pull();
        let safe = match &after {
            None => true,
            Some(t) if is_boundary(t) => true,
            Some(t) if is_punct(t, "„") || is_punct(t, "\"") => false,
            Some(t) if t.kind == Kind::Word && first_char_uppercase(t) && !tables::MONTHS.contains_key(t.txt.to_lowercase().as_str()) => false,
            _ => true,
        };
        if let Some(t) = after {
            self.repush.push_front(t);
        }
        self.repush.push_front(dot);
        safe
    }
}

fn is_punct_lookahead<I: Iterator<Item = Tok>>(stage: &mut ParticleCoalescer<I>, txt: &str) -> bool {
    matches!(stage.peek_kind_txt(), Some((Kind::Punctuation, ref t)) if t == txt)
}

fn clock_value(tok: &Tok) -> Option<icetok_ir::HMS> {
    match &tok.val {
        Val::Time(hms) => Some(*hms),
        Val::Number { value, .. } => {
            let hour = *value as u8;
            if hour <= 23 {
                Some(icetok_ir::HMS { hour, minute: 0, second: 0 })
            } else {
                None
            }
        }
        _ => tables::CLOCK_NUMBERS.get(tok.txt.as_str()).map(|&(h, m, s)| icetok_ir::HMS { hour: h, minute: m, second: s }),
    }
}

fn year_value(tok: &Tok) -> Option<i32> {
    match &tok.val {
        Val::Year(y) => Some(*y),
        Val::Number { value, .. } => Some(*value as i32),
        _ => None,
    }
}

/// `true` if `word_without_dot` names a multiplier whose dotted form is a
/// known multiplier (the `þús.` exception carve-out).
fn is_multiplier_abbrev(word: &str) -> bool {
    tables::MULTIPLIERS.contains_key(format!("{word}.").as_str())
}

impl<'a, I: Iterator<Item = Tok>> ParticleCoalescer<'a, I> {
    fn handle_abbrev_period(&mut self, word: Tok, period: Tok, candidate: String) {
        let lookahead = self.pull();
        let looks_like_sentence_end = match &lookahead {
            None => true,
            Some(t) if is_boundary(t) => true,
            Some(t) if matches!(t.kind, Kind::Word | Kind::Entity) => {
                first_char_uppercase(t)
                    && !tables::MONTHS.contains_key(t.txt.to_lowercase().as_str())
                    && !roman::is_roman_numeral(&t.txt)
                    && !(is_multiplier_abbrev(&word.txt) && tables::CURRENCY_ABBREV.contains(t.txt.as_str()))
            }
            _ => false,
        };

        if looks_like_sentence_end && self.table.is_finisher(&candidate) {
            self.out.push_back(self.attach_meaning(word, &candidate));
            self.out.push_back(make_dot_punct(&period));
        } else if looks_like_sentence_end && self.table.is_not_finisher(&candidate) {
            self.out.push_back(word);
            self.out.push_back(period);
        } else {
            let combined = word.concatenate(&period, "");
            self.out.push_back(self.attach_meaning(combined, &candidate));
        }

        if let Some(la) = lookahead {
            self.repush.push_front(la);
        }
    }
}

fn make_dot_punct(source: &Tok) -> Tok {
    Tok::new(Kind::Punctuation, ".", Val::Punctuation(SpacingClass::Right), source.original.clone(), source.origin_spans.clone())
}

impl<'a, I: Iterator<Item = Tok>> Iterator for ParticleCoalescer<'a, I> {
    type Item = Tok;

    fn next(&mut self) -> Option<Tok> {
        loop {
            if let Some(t) = self.out.pop_front() {
                return Some(t);
            }
            let tok = self.pull()?;
            self.step(tok);
        }
    }
}
