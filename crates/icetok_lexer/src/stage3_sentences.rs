//! Stage 3: the sentence segmenter.
//!
//! Wraps each run of non-structural tokens in `S_BEGIN`/`S_END`, absorbing
//! trailing "sentence finisher" punctuation (closing quotes/parens) before
//! closing the sentence, and treats paragraph markers as forced boundaries
//! (collapsing two adjacent ones with nothing between into no sentence at
//! all).

use std::collections::VecDeque;

use icetok_ir::{Kind, Tok, Val};

const END_OF_SENTENCE: &[&str] = &[".", "?", "!", "…"];
const SENTENCE_FINISHERS: &[&str] = &[")", "]", "\u{201c}", "\u{bb}", "\u{201d}", "\u{2019}", "\""];

pub struct SentenceSegmenter<I: Iterator<Item = Tok>> {
    inner: I,
    out: VecDeque<Tok>,
    in_sentence: bool,
    one_sent_per_line: bool,
    done: bool,
}

impl<I: Iterator<Item = Tok>> SentenceSegmenter<I> {
    pub fn new(inner: I, one_sent_per_line: bool) -> Self {
        SentenceSegmenter { inner, out: VecDeque::new(), in_sentence: false, one_sent_per_line, done: false }
    }

    fn open_if_needed(&mut self) {
        if !self.in_sentence {
            self.out.push_back(Tok::new(Kind::SBegin, "", Val::SentenceStart { num_parses: None, err_index: None }, "", vec![]));
            self.in_sentence = true;
        }
    }

    fn close(&mut self) {
        if self.in_sentence {
            self.out.push_back(Tok::structural(Kind::SEnd));
            self.in_sentence = false;
        }
    }
}

impl<I: Iterator<Item = Tok>> Iterator for SentenceSegmenter<I> {
    type Item = Tok;

    fn next(&mut self) -> Option<Tok> {
        loop {
            if let Some(t) = self.out.pop_front() {
                return Some(t);
            }
            if self.done {
                return None;
            }
            let Some(tok) = self.inner.next() else {
                self.close();
                self.done = true;
                continue;
            };

            match tok.kind {
                Kind::PBegin | Kind::PEnd => {
                    self.close();
                    self.out.push_back(tok);
                }
                Kind::Punctuation if self.one_sent_per_line && tok.txt == "\n" => {
                    self.close();
                }
                Kind::Punctuation if END_OF_SENTENCE.contains(&tok.txt.as_str()) => {
                    self.open_if_needed();
                    self.out.push_back(tok);
                    // Greedily absorb sentence finishers that directly
                    // follow, then close.
                    loop {
                        match self.inner.next() {
                            Some(next) if next.kind == Kind::Punctuation && SENTENCE_FINISHERS.contains(&next.txt.as_str()) => {
                                self.out.push_back(next);
                            }
                            Some(next) => {
                                self.close();
                                self.out.push_back(next);
                                break;
                            }
                            None => {
                                self.close();
                                self.done = true;
                                break;
                            }
                        }
                    }
                }
                _ => {
                    self.open_if_needed();
                    self.out.push_back(tok);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icetok_ir::SpacingClass;
    use pretty_assertions::assert_eq;

    fn word(s: &str) -> Tok {
        let spans: Vec<u32> = (0..s.chars().count() as u32).collect();
        Tok::new(Kind::Word, s, Val::None, s, spans)
    }

    fn punct(s: &str) -> Tok {
        Tok::new(Kind::Punctuation, s, Val::Punctuation(SpacingClass::Right), s, vec![0])
    }

    #[test]
    fn single_sentence_wrapped() {
        let toks = vec![word("Hæ"), punct(".")];
        let out: Vec<Tok> = SentenceSegmenter::new(toks.into_iter(), false).collect();
        assert_eq!(out[0].kind, Kind::SBegin);
        assert_eq!(out.last().unwrap().kind, Kind::SEnd);
    }

    #[test]
    fn two_sentences_are_balanced() {
        let toks = vec![word("Eitt"), punct("."), word("Tvö"), punct(".")];
        let out: Vec<Tok> = SentenceSegmenter::new(toks.into_iter(), false).collect();
        let begins = out.iter().filter(|t| t.kind == Kind::SBegin).count();
        let ends = out.iter().filter(|t| t.kind == Kind::SEnd).count();
        assert_eq!(begins, 2);
        assert_eq!(ends, 2);
    }

    #[test]
    fn closing_quote_absorbed_before_sentence_end() {
        let toks = vec![word("Hann"), word("sagði"), punct("."), punct("\u{201d}")];
        let out: Vec<Tok> = SentenceSegmenter::new(toks.into_iter(), false).collect();
        // S_END must come after the closing quote, not before it.
        let end_pos = out.iter().position(|t| t.kind == Kind::SEnd).unwrap();
        let quote_pos = out.iter().position(|t| t.txt == "\u{201d}").unwrap();
        assert!(quote_pos < end_pos);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        let out: Vec<Tok> = SentenceSegmenter::new(std::iter::empty(), false).collect();
        assert!(out.is_empty());
    }

    #[test]
    fn adjacent_paragraph_markers_yield_no_empty_sentence() {
        let toks = vec![Tok::structural(Kind::PBegin), Tok::structural(Kind::PEnd)];
        let out: Vec<Tok> = SentenceSegmenter::new(toks.into_iter(), false).collect();
        assert!(out.iter().all(|t| t.kind != Kind::SBegin));
    }
}
