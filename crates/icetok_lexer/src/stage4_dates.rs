//! Stage 4: phrase composer 1 ("Stage 4").
//!
//! Forms `DATE` from `[number|ordinal] + month-name`, coalesces era
//! suffixes (`f.Kr.`/`e.Kr.`) onto year values, and joins `DATE + YEAR`
//! and `DATE + TIME` into `TIMESTAMP`.

use std::collections::VecDeque;

use icetok_ir::{Kind, Tok, Val, YMD};

use crate::tables;

pub struct PhraseComposer1<I: Iterator<Item = Tok>> {
    inner: I,
    repush: VecDeque<Tok>,
    out: VecDeque<Tok>,
}

impl<I: Iterator<Item = Tok>> PhraseComposer1<I> {
    pub fn new(inner: I) -> Self {
        PhraseComposer1 { inner, repush: VecDeque::new(), out: VecDeque::new() }
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

    fn step(&mut self, tok: Tok) {
        let day_value = match (&tok.kind, &tok.val) {
            (Kind::Ordinal, Val::Ordinal(n)) => Some(*n as u8),
            (Kind::Number, Val::Number { value, .. }) if value.fract() == 0.0 => Some(*value as u8),
            _ => None,
        };
        if let Some(day) = day_value {
            if let Some(next) = self.peek() {
                if next.kind == Kind::Word && next.txt != tables::MONTH_BLACKLIST {
                    if let Some(&month) = tables::MONTHS.get(next.txt.to_lowercase().as_str()) {
                        let month_tok = self.pull().unwrap();
                        let mut date = tok.concatenate(&month_tok, " ");
                        date.kind = Kind::Date;
                        date.val = Val::Date(YMD { year: 0, month, day });
                        self.continue_date_chain(date);
                        return;
                    }
                }
            }
        }

        if matches!(tok.kind, Kind::Year | Kind::Number) {
            if let Some(next) = self.peek() {
                if next.kind == Kind::Word && tables::is_ce_bce(&next.txt) {
                    let era_tok = self.pull().unwrap();
                    let base = match &tok.val {
                        Val::Year(y) => *y,
                        Val::Number { value, .. } => *value as i32,
                        _ => unreachable!(),
                    };
                    let year = if tables::is_bce(&era_tok.txt) { -base } else { base };
                    let merged = tok.concatenate(&era_tok, " ");
                    self.out.push_back(Tok::new(Kind::Year, merged.txt, Val::Year(year), merged.original, merged.origin_spans));
                    return;
                }
            }
        }

        self.out.push_back(tok);
    }

    /// After producing a fresh DATE, greedily fold in a following YEAR and
    /// then a following TIME, since both are meant to chain onto the date
    /// that precedes them.
    fn continue_date_chain(&mut self, mut date: Tok) {
        if let Val::Date(ymd) = date.val {
            if ymd.year == 0 {
                if let Some(next) = self.peek() {
                    if next.kind == Kind::Year {
                        let year_tok = self.pull().unwrap();
                        if let Val::Year(y) = year_tok.val {
                            let merged = date.concatenate(&year_tok, " ");
                            date = Tok::new(Kind::Date, merged.txt, Val::Date(YMD { year: y, month: ymd.month, day: ymd.day }), merged.original, merged.origin_spans);
                        }
                    }
                }
            }
        }
        if let Some(next) = self.peek() {
            if next.kind == Kind::Time {
                let time_tok = self.pull().unwrap();
                if let (Val::Date(d), Val::Time(t)) = (date.val.clone(), time_tok.val.clone()) {
                    let merged = date.concatenate(&time_tok, " ");
                    self.out.push_back(Tok::new(Kind::Timestamp, merged.txt, Val::Timestamp { date: d, time: t }, merged.original, merged.origin_spans));
                    return;
                }
            }
        }
        self.out.push_back(date);
    }
}

impl<I: Iterator<Item = Tok>> Iterator for PhraseComposer1<I> {
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
    use icetok_lexer_core::{generate_raw_tokens, PreprocessOptions};
    use icetok_abbrev::AbbrevTable;
    use crate::stage2_particles::ParticleCoalescer;
    use pretty_assertions::assert_eq;

    fn compose(s: &str) -> Vec<Tok> {
        let table = AbbrevTable::default_table();
        let raw = generate_raw_tokens(s, PreprocessOptions::default());
        let cooked = ParticleCoalescer::new(raw.into_iter(), &table, crate::tables::KludgyOrdinals::PassThrough);
        PhraseComposer1::new(cooked).collect()
    }

    #[test]
    fn ordinal_plus_month_forms_date() {
        let toks = compose("14. mars 2019");
        let date = toks.iter().find(|t| matches!(t.kind, Kind::Date | Kind::Timestamp)).expect("a date-bearing token");
        assert_eq!(date.kind, Kind::Date);
        assert_eq!(date.val, Val::Date(YMD { year: 2019, month: 3, day: 14 }));
    }

    #[test]
    fn date_without_year_stays_year_zero() {
        let toks = compose("14. mars");
        let date = toks.iter().find(|t| t.kind == Kind::Date).expect("date token");
        assert_eq!(date.val, Val::Date(YMD { year: 0, month: 3, day: 14 }));
    }

    #[test]
    fn bce_suffix_negates_year() {
        let toks = compose("44 f.Kr.");
        let year = toks.iter().find(|t| t.kind == Kind::Year).expect("year token");
        assert_eq!(year.val, Val::Year(-44));
    }
}
