//! Stage 5: the date/time refiner ("Stage 5").
//!
//! Recognizes day-of-month words and month-only forms that stage 4
//! doesn't, then splits every `DATE`/`TIMESTAMP` into its absolute
//! (all fields known) or relative (some field unset) variant.

use std::collections::VecDeque;

use icetok_ir::{Kind, Tok, Val, YMD};

use crate::tables;

pub struct DateTimeRefiner<I: Iterator<Item = Tok>> {
    inner: I,
    repush: VecDeque<Tok>,
    out: VecDeque<Tok>,
}

impl<I: Iterator<Item = Tok>> DateTimeRefiner<I> {
    pub fn new(inner: I) -> Self {
        DateTimeRefiner { inner, repush: VecDeque::new(), out: VecDeque::new() }
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
        // Day-of-month word + month name -> DATE.
        if tok.kind == Kind::Word {
            if let Some(&day) = tables::DAYS_OF_MONTH.get(tok.txt.to_lowercase().as_str()) {
                if let Some(next) = self.peek() {
                    if next.kind == Kind::Word && next.txt != tables::MONTH_BLACKLIST {
                        if let Some(&month) = tables::MONTHS.get(next.txt.to_lowercase().as_str()) {
                            let month_tok = self.pull().unwrap();
                            let merged = tok.concatenate(&month_tok, " ");
                            let date = Tok::new(Kind::Date, merged.txt, Val::Date(YMD { year: 0, month, day }), merged.original, merged.origin_spans);
                            self.finish_date(date);
                            return;
                        }
                    }
                }
            }
        }

        // month-WORD + (NUMBER|YEAR in range) -> DATE(year, month, 0).
        if tok.kind == Kind::Word && tok.txt != tables::MONTH_BLACKLIST {
            if let Some(&month) = tables::MONTHS.get(tok.txt.to_lowercase().as_str()) {
                if let Some(next) = self.peek() {
                    let year = match (&next.kind, &next.val) {
                        (Kind::Year, Val::Year(y)) => Some(*y),
                        (Kind::Number, Val::Number { value, .. }) if (1776.0..=2100.0).contains(value) && value.fract() == 0.0 => Some(*value as i32),
                        _ => None,
                    };
                    if let Some(year) = year {
                        let year_tok = self.pull().unwrap();
                        let merged = tok.concatenate(&year_tok, " ");
                        let date = Tok::new(Kind::Date, merged.txt, Val::Date(YMD { year, month, day: 0 }), merged.original, merged.origin_spans);
                        self.finish_date(date);
                        return;
                    }
                }
                // Standalone month word (excluding ambiguous short forms).
                if !tables::AMBIGUOUS_MONTH_FORMS.contains(tok.txt.to_lowercase().as_str()) {
                    let date = Tok::new(Kind::DateRel, tok.txt.clone(), Val::Date(YMD { year: 0, month, day: 0 }), tok.original.clone(), tok.origin_spans.clone());
                    self.finish_date(date);
                    return;
                }
            }
        }

        if tok.kind == Kind::Date {
            self.finish_date(tok);
            return;
        }
        if tok.kind == Kind::Timestamp {
            self.finish_timestamp(tok);
            return;
        }

        self.out.push_back(tok);
    }

    /// Splits a DATE into DATEABS/DATEREL, swallows a trailing era suffix,
    /// and folds in a following TIME.
    fn finish_date(&mut self, mut date: Tok) {
        let Val::Date(mut ymd) = date.val.clone() else {
            self.out.push_back(date);
            return;
        };

        if ymd.is_complete() {
            if let Some(next) = self.peek() {
                if next.kind == Kind::Word && tables::is_ce_bce(&next.txt) {
                    let era_tok = self.pull().unwrap();
                    if tables::is_bce(&era_tok.txt) {
                        ymd.year = -ymd.year;
                    }
                    let merged = date.concatenate(&era_tok, " ");
                    date = Tok { kind: Kind::Date, txt: merged.txt, val: Val::Date(ymd), original: merged.original, origin_spans: merged.origin_spans };
                }
            }
        }

        let kind = if ymd.is_complete() { Kind::DateAbs } else { Kind::DateRel };
        date.kind = kind;

        if let Some(next) = self.peek() {
            if next.kind == Kind::Time {
                let time_tok = self.pull().unwrap();
                if let Val::Time(t) = time_tok.val {
                    let merged = date.concatenate(&time_tok, " ");
                    let ts_kind = if kind == Kind::DateAbs { Kind::TimestampAbs } else { Kind::TimestampRel };
                    self.out.push_back(Tok::new(ts_kind, merged.txt, Val::Timestamp { date: ymd, time: t }, merged.original, merged.origin_spans));
                    return;
                }
            }
        }
        self.out.push_back(date);
    }

    fn finish_timestamp(&mut self, mut ts: Tok) {
        let Val::Timestamp { date, time } = ts.val.clone() else {
            self.out.push_back(ts);
            return;
        };
        ts.kind = if date.is_complete() { Kind::TimestampAbs } else { Kind::TimestampRel };
        let _ = time;
        self.out.push_back(ts);
    }
}

impl<I: Iterator<Item = Tok>> Iterator for DateTimeRefiner<I> {
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
    use crate::stage2_particles::ParticleCoalescer;
    use crate::stage4_dates::PhraseComposer1;
    use icetok_abbrev::AbbrevTable;
    use icetok_lexer_core::{generate_raw_tokens, PreprocessOptions};
    use pretty_assertions::assert_eq;

    fn refine(s: &str) -> Vec<Tok> {
        let table = AbbrevTable::default_table();
        let raw = generate_raw_tokens(s, PreprocessOptions::default());
        let stage2 = ParticleCoalescer::new(raw.into_iter(), &table, crate::tables::KludgyOrdinals::PassThrough);
        let stage4 = PhraseComposer1::new(stage2);
        DateTimeRefiner::new(stage4).collect()
    }

    #[test]
    fn full_date_becomes_dateabs() {
        let toks = refine("14. mars 2019");
        let t = toks.iter().find(|t| matches!(t.kind, Kind::DateAbs | Kind::TimestampAbs)).unwrap();
        assert_eq!(t.kind, Kind::DateAbs);
        assert_eq!(t.val, Val::Date(YMD { year: 2019, month: 3, day: 14 }));
    }

    #[test]
    fn partial_date_becomes_daterel() {
        let toks = refine("14. mars");
        let t = toks.iter().find(|t| matches!(t.kind, Kind::DateAbs | Kind::DateRel)).unwrap();
        assert_eq!(t.kind, Kind::DateRel);
        assert_eq!(t.val, Val::Date(YMD { year: 0, month: 3, day: 14 }));
    }

    #[test]
    fn standalone_month_is_daterel() {
        let toks = refine("mars kemur");
        assert_eq!(toks[0].kind, Kind::DateRel);
    }

    #[test]
    fn dateabs_plus_time_becomes_timestampabs() {
        let toks = refine("14. mars 2019 14:30");
        let t = toks.iter().find(|t| t.kind == Kind::TimestampAbs).expect("timestampabs token");
        assert_eq!(t.val, Val::Timestamp { date: YMD { year: 2019, month: 3, day: 14 }, time: icetok_ir::HMS { hour: 14, minute: 30, second: 0 } });
    }
}
