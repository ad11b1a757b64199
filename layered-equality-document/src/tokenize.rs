//! Reference tokenizer used by [`Document::from_text`](crate::Document::from_text).
//!
//! Word boundaries come from UAX #29 (`unicode-segmentation`), which already
//! keeps `Down's` and `I’m` together. Two merges are layered on top:
//!
//! - hyphenated compounds: `bi` `-` `polar` → `bi-polar`
//! - a dotted acronym swallows its final period: `O.C.D` `.` → `O.C.D.`
//!
//! Sentences end after `.`, `?` or `!`; trailing punctuation such as a closing
//! quote stays with the sentence it follows.

use unicode_segmentation::UnicodeSegmentation;

use crate::token::is_word_text;
use crate::{Position, Sentence, Token};

const HYPHENS: &[&str] = &["-", "\u{2010}", "\u{2011}"];

const TERMINATORS: &[&str] = &[".", "?", "!", "…"];

struct Segment {
    text: String,
    start: Position,
    end: Position,
}

impl Segment {
    fn touches(&self, next: &Segment) -> bool {
        self.end == next.start
    }

    fn is_word(&self) -> bool {
        is_word_text(&self.text)
    }
}

pub(crate) fn tokenize(text: &str) -> Vec<Sentence> {
    let segments = merge_compounds(segment(text));

    let mut sentences = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut closing = false;

    for (index, segment) in segments.into_iter().enumerate() {
        let is_terminator = TERMINATORS.contains(&segment.text.as_str());
        if closing && segment.is_word() {
            sentences.push(Sentence::new(std::mem::take(&mut current)));
            closing = false;
        }
        current.push(Token::new(segment.text, segment.start, segment.end, index));
        if is_terminator {
            closing = true;
        }
    }

    if !current.is_empty() {
        sentences.push(Sentence::new(current));
    }

    sentences
}

fn segment(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line_number = line_idx + 1;
        let mut column = 1;

        for piece in line.split_word_bounds() {
            let start = Position::new(line_number, column);
            column += piece.chars().count();

            if piece.chars().all(char::is_whitespace) {
                continue;
            }

            segments.push(Segment {
                text: piece.to_string(),
                start,
                end: Position::new(line_number, column),
            });
        }
    }

    segments
}

fn merge_compounds(segments: Vec<Segment>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter().peekable();

    while let Some(segment) = iter.next() {
        if let Some(prev) = merged.last_mut() {
            if prev.is_word() && prev.touches(&segment) {
                // O.C.D + . => O.C.D.
                if segment.text == "." && prev.text.contains('.') {
                    prev.text.push('.');
                    prev.end = segment.end;
                    continue;
                }

                if HYPHENS.contains(&segment.text.as_str()) {
                    let joins = matches!(
                        iter.peek(),
                        Some(next) if segment.touches(next) && next.is_word()
                    );
                    if joins {
                        if let Some(next) = iter.next() {
                            prev.text.push_str(&segment.text);
                            prev.text.push_str(&next.text);
                            prev.end = next.end;
                            continue;
                        }
                    }
                }
            }
        }

        merged.push(segment);
    }

    merged
}
