// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Splitting text into alternating whitespace and content tokens.

/// Whether a token is a run of whitespace or a run of anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of whitespace characters, kept verbatim.
    Whitespace,
    /// A maximal run of non-whitespace characters: a word together with any
    /// punctuation, digits, hyphens, or apostrophes attached to it.
    Content,
}

/// A slice of the input text.  Tokens never overlap and are never split or
/// merged after segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The exact substring of the input.
    pub text: &'a str,
    /// The kind of run this token covers.
    pub kind: TokenKind,
    /// The 0-based index among content tokens; `None` for whitespace.
    pub word_index: Option<usize>,
}

impl<'a> Token<'a> {
    fn whitespace(text: &'a str) -> Self {
        Self {
            text,
            kind: TokenKind::Whitespace,
            word_index: None,
        }
    }

    fn content(text: &'a str, word_index: usize) -> Self {
        Self {
            text,
            kind: TokenKind::Content,
            word_index: Some(word_index),
        }
    }

    /// Returns `true` if this token is a content token.
    pub fn is_content(&self) -> bool {
        self.kind == TokenKind::Content
    }
}

/// Returns `true` if `ch` separates words.
///
/// This is the Unicode `White_Space` set without U+0085 NEXT LINE, plus
/// U+FEFF ZERO WIDTH NO-BREAK SPACE, so a byte order mark at the start of a
/// file is trimmed like any other leading space.
pub fn is_whitespace(ch: char) -> bool {
    match ch {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        _ => ch.is_whitespace(),
    }
}

/// Split `text` into runs of whitespace and runs of non-whitespace.
///
/// Concatenating the `text` of every returned token yields `text` again.
/// Hyphens do not split tokens, so `state-of-the-art` is one content token.
/// Empty input yields no tokens.
pub fn segment(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace: Option<bool> = None;
    let mut word_index = 0;

    for (pos, ch) in text.char_indices() {
        let is_space = is_whitespace(ch);
        match in_whitespace {
            Some(current) if current != is_space => {
                push_token(&mut tokens, &text[start..pos], current, &mut word_index);
                start = pos;
            }
            _ => {}
        }
        in_whitespace = Some(is_space);
    }

    if let Some(current) = in_whitespace {
        push_token(&mut tokens, &text[start..], current, &mut word_index);
    }

    tokens
}

fn push_token<'a>(
    tokens: &mut Vec<Token<'a>>,
    text: &'a str,
    is_whitespace: bool,
    word_index: &mut usize,
) {
    if is_whitespace {
        tokens.push(Token::whitespace(text));
    } else {
        tokens.push(Token::content(text, *word_index));
        *word_index += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_single_word() {
        let tokens = segment("hello");
        assert_eq!(tokens, vec![Token::content("hello", 0)]);
    }

    #[test]
    fn test_alternating_kinds() {
        let tokens = segment("hello world");
        assert_eq!(texts(&tokens), vec!["hello", " ", "world"]);
        assert_eq!(tokens[0].kind, TokenKind::Content);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[2].kind, TokenKind::Content);
    }

    #[test]
    fn test_word_indices_skip_whitespace() {
        let tokens = segment("a b\tc");
        let indices: Vec<Option<usize>> = tokens.iter().map(|t| t.word_index).collect();
        assert_eq!(indices, vec![Some(0), None, Some(1), None, Some(2)]);
    }

    #[test]
    fn test_whitespace_runs_preserved() {
        let tokens = segment("hello  \t world");
        assert_eq!(texts(&tokens), vec!["hello", "  \t ", "world"]);
    }

    #[test]
    fn test_leading_and_trailing_whitespace() {
        let tokens = segment("  hi ");
        assert_eq!(texts(&tokens), vec!["  ", "hi", " "]);
        assert_eq!(tokens[1].word_index, Some(0));
    }

    #[test]
    fn test_hyphen_does_not_split() {
        let tokens = segment("state-of-the-art design");
        assert_eq!(texts(&tokens), vec!["state-of-the-art", " ", "design"]);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let tokens = segment("smith v. jones, (esq.)");
        assert_eq!(
            texts(&tokens),
            vec!["smith", " ", "v.", " ", "jones,", " ", "(esq.)"]
        );
    }

    #[test]
    fn test_byte_order_mark_splits_words() {
        let tokens = segment("hello\u{FEFF}world");
        assert_eq!(texts(&tokens), vec!["hello", "\u{FEFF}", "world"]);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    }

    #[test]
    fn test_next_line_does_not_split() {
        let tokens = segment("of\u{0085}the");
        assert_eq!(texts(&tokens), vec!["of\u{0085}the"]);
    }

    #[test]
    fn test_is_whitespace() {
        let spaces = [
            ' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{2028}', '\u{3000}',
            '\u{FEFF}',
        ];
        for ch in spaces {
            assert!(is_whitespace(ch), "{:?}", ch);
        }
        for ch in ['a', '-', '\u{0085}', '\u{200B}'] {
            assert!(!is_whitespace(ch), "{:?}", ch);
        }
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        let input = "The  quick\tbrown\u{3000}fox — jumps!";
        let joined: String = segment(input).iter().map(|t| t.text).collect();
        assert_eq!(joined, input);
    }
}
