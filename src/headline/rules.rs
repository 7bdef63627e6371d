// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! The priority-ordered rule chain deciding each word's case.

use std::fmt;

use super::position::Position;
use super::words::MEDIUM_WORD_LENGTH;
use crate::Options;

/// The case a content token should end up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Uppercase the first ASCII letter of the token.
    Capitalize,
    /// Replace the first ASCII letter run with the alphabetic core.
    Lowercase,
}

/// The rules of the chain, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    /// First or last real word.
    Position,
    /// Alphabetic core listed in `always_capitalize`.
    ForcedCapitalize,
    /// Alphabetic core listed in `always_lowercase`.
    ForcedLowercase,
    /// Alphabetic core at least `min_capitalize_length` long.
    LongWord,
    /// Alphabetic core of three letters (with the default threshold).
    MediumWord,
    /// Anything not matched above.
    Default,
}

impl Rule {
    /// A short, stable name for the rule.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Position => "position",
            Rule::ForcedCapitalize => "forced-capitalize",
            Rule::ForcedLowercase => "forced-lowercase",
            Rule::LongWord => "long-word",
            Rule::MediumWord => "medium-word",
            Rule::Default => "default",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The outcome of evaluating one content token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The first rule that matched.
    pub rule: Rule,
    /// The case that rule decided.
    pub case: Case,
    /// The token's alphabetic core, used both as the list lookup key and as
    /// the replacement text when lowercasing.
    pub core: String,
}

/// Extract the alphabetic core of a token.
///
/// The whole token is lowercased, then only the leading and trailing runs of
/// characters outside `a-z` are stripped.  Punctuation between letters stays:
/// `"O'Neil,"` becomes `"o'neil"`, `"v."` becomes `"v"`, and `"2024"`
/// becomes the empty string.
pub fn alphabetic_core(text: &str) -> String {
    text.to_lowercase()
        .trim_matches(|c: char| !c.is_ascii_lowercase())
        .to_string()
}

/// Applies the rule chain using a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct RuleEvaluator<'o> {
    options: &'o Options,
}

impl<'o> RuleEvaluator<'o> {
    /// Bind the evaluator to `options` for its whole lifetime.
    pub fn new(options: &'o Options) -> Self {
        Self { options }
    }

    /// Decide the case of one content token.  The first matching rule wins.
    pub fn evaluate(&self, text: &str, position: Position) -> Verdict {
        let core = alphabetic_core(text);
        let (rule, case) = self.decide(&core, position);
        Verdict { rule, case, core }
    }

    fn decide(&self, core: &str, position: Position) -> (Rule, Case) {
        if position.is_edge() {
            return (Rule::Position, Case::Capitalize);
        }
        if self.options.always_capitalize().contains(core) {
            return (Rule::ForcedCapitalize, Case::Capitalize);
        }
        if self.options.always_lowercase().contains(core) {
            return (Rule::ForcedLowercase, Case::Lowercase);
        }

        let length = core.chars().count();
        if length >= self.options.min_capitalize_length() {
            (Rule::LongWord, Case::Capitalize)
        } else if length >= MEDIUM_WORD_LENGTH {
            (Rule::MediumWord, Case::Capitalize)
        } else {
            (Rule::Default, Case::Lowercase)
        }
    }
}
