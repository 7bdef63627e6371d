// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Built-in exception lists and thresholds for headline case.

/// Words that are always capitalized, regardless of their length.
pub const ALWAYS_CAPITALIZE: &[&str] = &[
    // Single letter pronouns
    "i",
    // Two-letter verbs
    "am", "be", "do", "go", "is",
    // Two-letter pronouns
    "he", "it", "me", "my", "us", "we",
    // Short adverbs and other words
    "no", "nor", "not", "off", "out", "so", "up", "was", "yet",
];

/// Words that are always lowercased unless they open or close the text.
///
/// `v.` and `vs.` never match: the trailing period is stripped from a token
/// before it is compared against this list.
pub const ALWAYS_LOWERCASE: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "v.", "vs.", "via",
];

/// Alphabetic cores at least this long are capitalized.
pub const MIN_CAPITALIZE_LENGTH: usize = 4;

/// Alphabetic cores of exactly this length fall into the medium-word rule
/// when the default threshold is in effect.
pub const MEDIUM_WORD_LENGTH: usize = 3;

/// Parts of speech the headline style capitalizes.  Informational only;
/// nothing in the rule chain reads it.
pub const CAPITALIZE_POS: &[&str] = &["noun", "adjective", "adverb", "pronoun", "verb"];
