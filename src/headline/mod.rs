// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Headline case conversion.
//!
//! The conversion is a straight pipeline: [`segment`] splits the text into
//! whitespace and content tokens, [`Positions`] finds the first and last
//! words, [`RuleEvaluator`] decides each word's [`Case`], and [`capitalize`]
//! or [`lowercase`] rewrite the word before everything is joined back
//! together.

mod case;
mod position;
mod rules;
mod segment;
pub mod words;


pub use case::{capitalize, lowercase};
pub use position::{Position, Positions};
pub use rules::{Case, Rule, RuleEvaluator, Verdict, alphabetic_core};
pub use segment::{Token, TokenKind, is_whitespace, segment};

use crate::Options;

/// How a single word of the input was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport<'a> {
    /// The word as it appeared in the input.
    pub word: &'a str,
    /// The 0-based index of the word.
    pub index: usize,
    /// Where the word sits in the text.
    pub position: Position,
    /// The rule that decided the word's case.
    pub verdict: Verdict,
    /// The rewritten word.
    pub output: String,
}

/// Convert `text` to headline case.
///
/// Leading and trailing whitespace is trimmed; text that trims to nothing
/// yields an empty string.  Interior whitespace is kept byte for byte.
pub fn to_headline_case(text: &str, options: &Options) -> String {
    let text = text.trim_matches(is_whitespace);
    if text.is_empty() {
        return String::new();
    }

    let tokens = segment(text);
    let positions = Positions::new(&tokens);
    let evaluator = RuleEvaluator::new(options);

    let mut result = String::with_capacity(text.len());
    for token in &tokens {
        match positions.of(token) {
            Some(position) => {
                let (_, output) = process_word(&evaluator, token.text, position);
                result.push_str(&output);
            }
            None => result.push_str(token.text),
        }
    }
    result
}

/// Report, for every word of `text`, which rule decided its case and what it
/// was rewritten to.
pub fn explain<'a>(text: &'a str, options: &Options) -> Vec<WordReport<'a>> {
    let tokens = segment(text.trim_matches(is_whitespace));
    let positions = Positions::new(&tokens);
    let evaluator = RuleEvaluator::new(options);

    tokens
        .iter()
        .filter_map(|token| {
            let position = positions.of(token)?;
            let index = token.word_index?;
            let (verdict, output) = process_word(&evaluator, token.text, position);
            Some(WordReport {
                word: token.text,
                index,
                position,
                verdict,
                output,
            })
        })
        .collect()
}

fn process_word(
    evaluator: &RuleEvaluator<'_>,
    word: &str,
    position: Position,
) -> (Verdict, String) {
    let verdict = evaluator.evaluate(word, position);
    let output = match verdict.case {
        Case::Capitalize => capitalize(word),
        Case::Lowercase => lowercase(word, &verdict.core),
    };
    log::trace!(
        "{:?} -> {:?} (rule: {}, core: {:?})",
        word,
        output,
        verdict.rule,
        verdict.core
    );
    (verdict, output)
}
