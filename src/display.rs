use layered_equality_document::{Document, Sentence};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

use crate::warning::Warning;

/// Renders a document one sentence per block, with each warning underlined
/// beneath the token it starts on.
///
/// ```text
/// Sam  set  up  the  network  as  master  and  slave  .
///                                 ╰────╯`master` / `slave` may be insensitive, use `primary` / `replica` instead
///                                   └─paired─>`slave` at 1:38
/// ```
pub struct WarningDisplay<'a> {
    document: &'a Document,
    warnings: Vec<&'a Warning>,
    show_pairs: bool,
}

impl<'a> WarningDisplay<'a> {
    pub fn new(document: &'a Document) -> Self {
        WarningDisplay {
            document,
            warnings: Vec::new(),
            show_pairs: false,
        }
    }

    pub fn include(&mut self, warnings: &'a [Warning]) {
        self.warnings.extend(warnings.iter());
    }

    /// Takes self
    pub fn with(mut self, warnings: &'a [Warning]) -> Self {
        self.include(warnings);
        self
    }

    /// Also draw an arrow from each relational warning to its paired side.
    pub fn with_pairs(mut self) -> Self {
        self.show_pairs = true;
        self
    }

    fn fmt_sentence(&self, sentence: &Sentence, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in sentence.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for warning in &self.warnings {
            let token_idx = match sentence.tokens().iter().position(|t| t.start == warning.start) {
                Some(idx) => idx,
                None => continue,
            };

            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[token_idx];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[token_idx];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&warning.message())?;

            if let (true, Some(paired)) = (self.show_pairs, &warning.paired) {
                f.write_char('\n')?;
                for _ in 0..start_char_idx + 2 {
                    f.write_char(' ')?;
                }
                write!(f, "└─paired─>`{}` at {}", paired.text, paired.start)?;
            }
        }

        Ok(())
    }
}

impl<'a> std::fmt::Display for WarningDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, sentence) in self.document.sentences().iter().enumerate() {
            if idx > 0 {
                f.write_str("\n\n")?;
            }
            self.fmt_sentence(sentence, f)?;
        }
        Ok(())
    }
}
