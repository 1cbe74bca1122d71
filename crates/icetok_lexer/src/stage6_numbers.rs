//! Stage 6: phrase composer 2.
//!
//! Number-word and multiplier composition (`tvær milljónir` -> 2 000 000),
//! amount/currency and percent-word suffixes, and hyphen-composite phrase
//! coalescing (`fjármála- og efnahagsráðuneyti`, `marg-ítrekaðri`).

use std::collections::VecDeque;

use icetok_ir::{Kind, Tok, Val};

use crate::tables;

/// Declined (gendered/cased) forms of the small cardinal numbers 1-4,
/// which is as far as this crate goes without a full morphological
/// analyzer. Everything from 5 upward is gender-invariant in Icelandic
/// and already covered by
/// [`tables::MULTIPLIERS`].
fn declined_small_number(word_lower: &str) -> Option<f64> {
    match word_lower {
        "einn" | "ein" | "eitt" | "einni" | "einu" | "einum" => Some(1.0),
        "tveir" | "tvær" | "tvö" | "tveim" | "tveimur" => Some(2.0),
        "þrír" | "þrjár" | "þrjú" | "þrem" | "þremur" => Some(3.0),
        "fjórir" | "fjórar" | "fjögur" | "fjórum" => Some(4.0),
        _ => None,
    }
}

fn number_word_value(word_lower: &str) -> Option<f64> {
    declined_small_number(word_lower).or_else(|| tables::MULTIPLIERS.get(word_lower).copied())
}

/// `true` for the multiplier-scale words (>= 100) that multiply whatever
/// preceded them, rather than adding to it (`hundrað`, `þúsund`,
/// `milljón`, `milljarður`, ...).
fn is_scale_word(value: f64) -> bool {
    value >= 100.0
}

pub struct PhraseComposer2<I: Iterator<Item = Tok>> {
    inner: I,
    coalesce_percent: bool,
    repush: VecDeque<Tok>,
    out: VecDeque<Tok>,
}

impl<I: Iterator<Item = Tok>> PhraseComposer2<I> {
    pub fn new(inner: I, coalesce_percent: bool) -> Self {
        PhraseComposer2 { inner, coalesce_percent, repush: VecDeque::new(), out: VecDeque::new() }
    }

    fn pull(&mut self) -> Option<Tok> {
        self.repush.pop_front().or_else(|| self.inner.next())
    }

    fn peek(&mut self) -> Option<&Tok> {
        if self.repush.is_empty() {
            if let Some(t) = self.inner.next() {
                self.repush.push_back(t);
            }
        }
        self.repush.front()
    }

    fn requeue_front(&mut self, toks: Vec<Tok>) {
        for t in toks.into_iter().rev() {
            self.repush.push_front(t);
        }
    }

    fn step(&mut self, tok: Tok) {
        if tok.kind == Kind::Word {
            if let Some(merged) = self.try_adjective_prefix_hyphen(&tok) {
                self.out.push_back(merged);
                return;
            }
            if let Some(merged) = self.try_composite_hyphen_chain(tok.clone()) {
                self.out.push_back(merged);
                return;
            }
        }

        if let Some(number_tok) = self.try_number_composition(tok.clone()) {
            self.out.push_back(self.try_amount_or_percent_suffix(number_tok));
            return;
        }

        self.out.push_back(tok);
    }

    /// `prefix-WORD` directly, unconditionally, for the fixed
    /// [`tables::ADJECTIVE_PREFIXES`] set.
    fn try_adjective_prefix_hyphen(&mut self, tok: &Tok) -> Option<Tok> {
        if !tables::ADJECTIVE_PREFIXES.contains(tok.txt.to_lowercase().as_str()) {
            return None;
        }
        let is_hyphen = matches!(self.peek(), Some(t) if t.kind == Kind::Punctuation && t.txt == "-");
        if !is_hyphen {
            return None;
        }
        let hyphen = self.pull().unwrap();
        let after_word = matches!(self.peek(), Some(t) if t.kind == Kind::Word);
        if !after_word {
            self.requeue_front(vec![hyphen]);
            return None;
        }
        let word2 = self.pull().unwrap();
        let step1 = tok.concatenate(&hyphen, "");
        let merged = step1.concatenate(&word2, "");
        Some(Tok::new(Kind::Word, merged.txt, Val::None, merged.original, merged.origin_spans))
    }

    /// `WORD "-" [","] (WORD "-" [","])* (og|eða) WORD`. On
    /// failure to find the connector, the accumulated tokens are requeued
    /// verbatim (in source order) and `None` is returned.
    fn try_composite_hyphen_chain(&mut self, first: Tok) -> Option<Tok> {
        let starts_hyphen = matches!(self.peek(), Some(t) if t.kind == Kind::Punctuation && t.txt == "-");
        if !starts_hyphen {
            return None;
        }

        let mut parts: Vec<Tok> = vec![first];
        let mut seps: Vec<&'static str> = Vec::new();

        loop {
            let hyphen = self.pull().unwrap();
            seps.push("");
            parts.push(hyphen);

            if matches!(self.peek(), Some(t) if t.kind == Kind::Punctuation && t.txt == ",") {
                let comma = self.pull().unwrap();
                seps.push("");
                parts.push(comma);
            }

            match self.peek().cloned() {
                Some(t) if t.kind == Kind::Word && matches!(t.txt.to_lowercase().as_str(), "og" | "eða") => {
                    let connector = self.pull().unwrap();
                    seps.push(" ");
                    parts.push(connector);
                    match self.peek() {
                        Some(w) if w.kind == Kind::Word => {
                            let final_word = self.pull().unwrap();
                            seps.push(" ");
                            parts.push(final_word);
                            return Some(merge_parts(parts, &seps));
                        }
                        _ => {
                            self.requeue_front(parts);
                            return None;
                        }
                    }
                }
                Some(t) if t.kind == Kind::Word => {
                    let word = self.pull().unwrap();
                    let continues = matches!(self.peek(), Some(h) if h.kind == Kind::Punctuation && h.txt == "-");
                    if continues {
                        seps.push(" ");
                        parts.push(word);
                        continue;
                    }
                    self.requeue_front(vec![word]);
                    self.requeue_front(parts);
                    return None;
                }
                _ => {
                    self.requeue_front(parts);
                    return None;
                }
            }
        }
    }

    /// Folds a number token (bare `NUMBER`, or a `WORD` that is itself a
    /// multiplier) together with any following ones/tens/`og`/scale-word
    /// chain into a single `NUMBER`.
    fn try_number_composition(&mut self, first: Tok) -> Option<Tok> {
        let seed = match (&first.kind, &first.val) {
            (Kind::Number, Val::Number { value, .. }) => *value,
            (Kind::Word, _) => number_word_value(first.txt.to_lowercase().as_str())?,
            _ => return None,
        };

        let mut current = if is_scale_word(seed) { seed } else { seed };
        let mut total = 0.0;
        let mut merged = first;
        let mut extended = false;

        loop {
            // `og` only continues the chain if it is itself followed by
            // another number word; otherwise it's an ordinary connector
            // between unrelated clauses and must not be consumed.
            if matches!(self.peek(), Some(t) if t.kind == Kind::Word && t.txt.to_lowercase() == "og") {
                let og = self.pull().unwrap();
                let next_value = match self.peek() {
                    Some(t) if t.kind == Kind::Word => number_word_value(t.txt.to_lowercase().as_str()),
                    _ => None,
                };
                if next_value.is_none() {
                    self.requeue_front(vec![og]);
                    break;
                }
                let word = self.pull().unwrap();
                merged = merged.concatenate(&og, " ").concatenate(&word, " ");
                let v = next_value.unwrap();
                if is_scale_word(v) {
                    total += apply_scale(current, v);
                    current = 0.0;
                } else {
                    current += v;
                }
                extended = true;
                continue;
            }

            let next_value = match self.peek() {
                Some(t) if t.kind == Kind::Word => number_word_value(t.txt.to_lowercase().as_str()),
                _ => None,
            };
            let Some(v) = next_value else { break };
            let word = self.pull().unwrap();
            merged = merged.concatenate(&word, " ");
            if is_scale_word(v) {
                total += apply_scale(current, v);
                current = 0.0;
            } else {
                current += v;
            }
            extended = true;
        }

        total += current;
        if !extended {
            return None;
        }
        Some(Tok::new(Kind::Number, merged.txt, Val::Number { value: total, cases: None, genders: None }, merged.original, merged.origin_spans))
    }

    fn try_amount_or_percent_suffix(&mut self, number_tok: Tok) -> Tok {
        let Val::Number { value, .. } = number_tok.val.clone() else { return number_tok };

        if let Some(next) = self.peek() {
            if next.kind == Kind::Word {
                let lower = next.txt.to_lowercase();
                if let Some(&scale) = tables::AMOUNT_ABBREV.get(next.txt.as_str()) {
                    let unit = self.pull().unwrap();
                    let merged = number_tok.concatenate(&unit, " ");
                    return Tok::new(Kind::Amount, merged.txt, Val::Amount { value: value * scale, iso: "ISK".to_string(), cases: None, genders: None }, merged.original, merged.origin_spans);
                }
                if tables::CURRENCY_ABBREV.contains(next.txt.as_str()) {
                    let unit = self.pull().unwrap();
                    let iso = unit.txt.clone();
                    let merged = number_tok.concatenate(&unit, " ");
                    return Tok::new(Kind::Amount, merged.txt, Val::Amount { value, iso, cases: None, genders: None }, merged.original, merged.origin_spans);
                }
                if self.coalesce_percent && tables::PERCENTAGES.contains(lower.as_str()) {
                    let unit = self.pull().unwrap();
                    let merged = number_tok.concatenate(&unit, " ");
                    return Tok::new(Kind::Percent, merged.txt, Val::Percent { value, cases: None, genders: None }, merged.original, merged.origin_spans);
                }
            }
        }
        number_tok
    }
}

fn apply_scale(current: f64, scale: f64) -> f64 {
    (if current == 0.0 { 1.0 } else { current }) * scale
}

fn merge_parts(parts: Vec<Tok>, seps: &[&str]) -> Tok {
    let mut iter = parts.into_iter();
    let mut acc = iter.next().expect("at least one part");
    for (part, sep) in iter.zip(seps.iter()) {
        acc = acc.concatenate(&part, sep);
    }
    Tok::new(Kind::Word, acc.txt, Val::None, acc.original, acc.origin_spans)
}

impl<I: Iterator<Item = Tok>> Iterator for PhraseComposer2<I> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use icetok_abbrev::AbbrevTable;
    use icetok_lexer_core::{generate_raw_tokens, PreprocessOptions};
    use crate::stage2_particles::ParticleCoalescer;
    use pretty_assertions::assert_eq;

    fn compose(s: &str) -> Vec<Tok> {
        compose_with(s, false)
    }

    fn compose_with(s: &str, coalesce_percent: bool) -> Vec<Tok> {
        let table = AbbrevTable::default_table();
        let raw = generate_raw_tokens(s, PreprocessOptions::default());
        let stage2 = ParticleCoalescer::new(raw.into_iter(), &table, crate::tables::KludgyOrdinals::PassThrough);
        PhraseComposer2::new(stage2, coalesce_percent).collect()
    }

    #[test]
    fn multiplier_word_alone_forms_number() {
        let toks = compose("tvær milljónir króna");
        let n = toks.iter().find(|t| t.kind == Kind::Number).expect("number token");
        assert_eq!(n.val, Val::Number { value: 2_000_000.0, cases: None, genders: None });
    }

    #[test]
    fn number_plus_amount_abbrev_is_isk_amount() {
        let toks = compose("500 kr.");
        let a = toks.iter().find(|t| t.kind == Kind::Amount).expect("amount token");
        assert_eq!(a.val, Val::Amount { value: 500.0, iso: "ISK".to_string(), cases: None, genders: None });
    }

    #[test]
    fn number_plus_currency_code() {
        let toks = compose("20 USD");
        let a = toks.iter().find(|t| t.kind == Kind::Amount).expect("amount token");
        assert_eq!(a.val, Val::Amount { value: 20.0, iso: "USD".to_string(), cases: None, genders: None });
    }

    #[test]
    fn percent_word_left_alone_when_coalesce_percent_is_off() {
        let toks = compose_with("42 prósent", false);
        assert!(toks.iter().all(|t| t.kind != Kind::Percent));
        assert!(toks.iter().any(|t| t.txt == "prósent"));
    }

    #[test]
    fn percent_word_coalesces_when_coalesce_percent_is_on() {
        let toks = compose_with("42 prósent", true);
        let p = toks.iter().find(|t| t.kind == Kind::Percent).expect("percent token");
        assert_eq!(p.val, Val::Percent { value: 42.0, cases: None, genders: None });
    }

    #[test]
    fn composite_hyphen_with_connector_merges() {
        let toks = compose("fjármála- og efnahagsráðuneyti");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, Kind::Word);
        assert_eq!(toks[0].txt, "fjármála- og efnahagsráðuneyti");
    }

    #[test]
    fn no_connector_flushes_verbatim() {
        let toks = compose("viðskipta- ráðherra");
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].txt, "viðskipta");
        assert_eq!(toks[1].txt, "-");
        assert_eq!(toks[2].txt, "ráðherra");
    }

    #[test]
    fn adjective_prefix_merges_without_connector() {
        let toks = compose("marg-ítrekaðri");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].txt, "marg-ítrekaðri");
    }

    #[test]
    fn three_way_composite_continuation() {
        let toks = compose("viðskipta-, dómsmála- og iðnaðarráðherra");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].txt, "viðskipta-, dómsmála- og iðnaðarráðherra");
    }
}
