// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Locating the first and last real words of a token sequence.

use super::segment::{Token, is_whitespace};

/// Where a content token sits among the real words of the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// The token is the first real word.
    pub is_first_word: bool,
    /// The token is the last real word.  Also set on the first word when the
    /// text has a single word.
    pub is_last_word: bool,
}

impl Position {
    /// Returns `true` if either edge flag is set.
    pub fn is_edge(&self) -> bool {
        self.is_first_word || self.is_last_word
    }
}

/// Counts the real words of a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positions {
    total_words: usize,
}

impl Positions {
    /// Count the content tokens whose trimmed text is non-empty.
    pub fn new(tokens: &[Token<'_>]) -> Self {
        let total_words = tokens
            .iter()
            .filter(|token| {
                token.is_content() && !token.text.trim_matches(is_whitespace).is_empty()
            })
            .count();
        Self { total_words }
    }

    /// Number of real words.
    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Position flags for `token`, or `None` for whitespace tokens.
    pub fn of(&self, token: &Token<'_>) -> Option<Position> {
        let index = token.word_index?;
        Some(Position {
            is_first_word: index == 0,
            is_last_word: self.total_words > 0 && index == self.total_words - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headline::segment::segment;

    fn flags(text: &str) -> Vec<Option<Position>> {
        let tokens = segment(text);
        let positions = Positions::new(&tokens);
        tokens.iter().map(|t| positions.of(t)).collect()
    }

    #[test]
    fn test_counts_words_only() {
        let tokens = segment("one  two\tthree");
        assert_eq!(Positions::new(&tokens).total_words(), 3);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(Positions::new(&[]).total_words(), 0);
    }

    #[test]
    fn test_first_and_last_flags() {
        let result = flags("a b c");
        assert_eq!(
            result,
            vec![
                Some(Position {
                    is_first_word: true,
                    is_last_word: false
                }),
                None,
                Some(Position::default()),
                None,
                Some(Position {
                    is_first_word: false,
                    is_last_word: true
                }),
            ]
        );
    }

    #[test]
    fn test_single_word_is_first_and_last() {
        let result = flags("alone");
        assert_eq!(
            result,
            vec![Some(Position {
                is_first_word: true,
                is_last_word: true
            })]
        );
    }

    #[test]
    fn test_whitespace_never_flagged() {
        assert!(flags(" x ").iter().step_by(2).all(Option::is_none));
    }
}
