// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Applying a case decision to a single token.

use std::sync::LazyLock;

use regex::Regex;

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("letter run pattern is valid"));

/// Uppercase the first ASCII letter in `word`, leaving every other character
/// untouched.
///
/// Only one letter per token changes, so `state-of-the-art` becomes
/// `State-of-the-art` and `iPhone` becomes `IPhone`.  A token without ASCII
/// letters is returned unchanged.
pub fn capitalize(word: &str) -> String {
    let mut result = word.to_string();
    if let Some((pos, ch)) = word.char_indices().find(|(_, c)| c.is_ascii_alphabetic()) {
        result.replace_range(pos..pos + 1, &ch.to_ascii_uppercase().to_string());
    }
    result
}

/// Replace the first run of ASCII letters in `word` with `core`.
///
/// `core` is the token's alphabetic core, so this substitutes rather than
/// flips case: any punctuation the core carries between letters is inserted
/// along with it, and letter runs after the first are left alone.
pub fn lowercase(word: &str, core: &str) -> String {
    match LETTER_RUN.find(word) {
        Some(run) => {
            let mut result = String::with_capacity(word.len() - run.len() + core.len());
            result.push_str(&word[..run.start()]);
            result.push_str(core);
            result.push_str(&word[run.end()..]);
            result
        }
        None => word.to_string(),
    }
}
