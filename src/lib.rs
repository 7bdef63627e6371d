//! Headcase converts free-form text into headline case: the first and last
//! words are capitalized, short function words are lowercased, and everything
//! else is capitalized by length, while whitespace and punctuation are kept
//! exactly as they were.
//!
//! # Example
//!
//! ```
//! use headcase::{format, transform, Options};
//!
//! assert_eq!(
//!     transform("the quick brown fox jumps over a lazy dog"),
//!     "The Quick Brown Fox Jumps Over a Lazy Dog"
//! );
//!
//! let options = Options::default().with_min_capitalize_length(5);
//! assert_eq!(format("back to the good old days", &options), "Back to the Good Old Days");
//! ```

pub mod config;
pub mod headline;

#[cfg(feature = "wasm")]
mod wasm;

use indexmap::IndexSet;

pub use headline::words::{
    ALWAYS_CAPITALIZE, ALWAYS_LOWERCASE, CAPITALIZE_POS, MIN_CAPITALIZE_LENGTH,
};
pub use headline::{Case, Rule, Verdict, WordReport, explain};

/// Word lists and thresholds that drive the rule chain.
///
/// The two lists are kept disjoint and lowercase; [`Options::new`] refuses
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    always_capitalize: IndexSet<String>,
    always_lowercase: IndexSet<String>,
    min_capitalize_length: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            always_capitalize: ALWAYS_CAPITALIZE.iter().map(|w| w.to_string()).collect(),
            always_lowercase: ALWAYS_LOWERCASE.iter().map(|w| w.to_string()).collect(),
            min_capitalize_length: MIN_CAPITALIZE_LENGTH,
        }
    }
}

impl Options {
    /// Build options from custom word lists.
    ///
    /// # Errors
    ///
    /// Returns an error if a word appears in both lists, or if a word is not
    /// already lowercase (it could never match an alphabetic core).
    pub fn new<C, CS, L, LS>(
        always_capitalize: C,
        always_lowercase: L,
        min_capitalize_length: usize,
    ) -> Result<Self, OptionsError>
    where
        C: IntoIterator<Item = CS>,
        CS: Into<String>,
        L: IntoIterator<Item = LS>,
        LS: Into<String>,
    {
        let always_capitalize = collect_words(always_capitalize)?;
        let always_lowercase = collect_words(always_lowercase)?;
        if let Some(word) = always_capitalize
            .iter()
            .find(|word| always_lowercase.contains(*word))
        {
            return Err(OptionsError::ConflictingWord(word.clone()));
        }

        Ok(Self {
            always_capitalize,
            always_lowercase,
            min_capitalize_length,
        })
    }

    /// Replace the length threshold.
    pub fn with_min_capitalize_length(mut self, min_capitalize_length: usize) -> Self {
        self.min_capitalize_length = min_capitalize_length;
        self
    }

    /// Words that are always capitalized, in insertion order.
    pub fn always_capitalize(&self) -> &IndexSet<String> {
        &self.always_capitalize
    }

    /// Words that are always lowercased, in insertion order.
    pub fn always_lowercase(&self) -> &IndexSet<String> {
        &self.always_lowercase
    }

    /// Alphabetic cores at least this long are capitalized.
    pub fn min_capitalize_length(&self) -> usize {
        self.min_capitalize_length
    }

    /// List entries that no word can ever match.
    ///
    /// An alphabetic core never starts or ends with a character outside
    /// `a-z`, so entries like `v.` are unreachable.  They are kept rather
    /// than rewritten; words such as `v.` fall through to the length rules.
    pub fn unreachable_entries(&self) -> impl Iterator<Item = &str> {
        self.always_capitalize
            .iter()
            .chain(&self.always_lowercase)
            .map(String::as_str)
            .filter(|word| headline::alphabetic_core(word) != *word)
    }
}

fn collect_words<I, S>(words: I) -> Result<IndexSet<String>, OptionsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words
        .into_iter()
        .map(|word| {
            let word = word.into();
            if word.to_lowercase() == word {
                Ok(word)
            } else {
                Err(OptionsError::NotLowercase(word))
            }
        })
        .collect()
}

/// Errors that can occur when building [`Options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The word is listed as both always-capitalize and always-lowercase.
    ConflictingWord(String),
    /// The word contains uppercase characters.
    NotLowercase(String),
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::ConflictingWord(word) => write!(
                f,
                "{:?} is listed in both always_capitalize and always_lowercase",
                word
            ),
            OptionsError::NotLowercase(word) => {
                write!(f, "exception list entry {:?} is not lowercase", word)
            }
        }
    }
}

impl std::error::Error for OptionsError {}

/// Converts text to headline case with the built-in word lists.
///
/// Text that is empty or only whitespace yields an empty string.
pub fn transform(text: &str) -> String {
    headline::to_headline_case(text, &Options::default())
}

/// Converts text to headline case with custom options.
pub fn format(text: &str, options: &Options) -> String {
    headline::to_headline_case(text, options)
}

/// Converts every line of `text` to headline case independently.
///
/// Line terminators (`\n` or `\r\n`) are kept as they are; each line's
/// content is trimmed by the conversion, and blank lines become empty.
pub fn format_lines(text: &str, options: &Options) -> String {
    let mut result = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let (content, ending) = split_line_ending(line);
        result.push_str(&headline::to_headline_case(content, options));
        result.push_str(ending);
    }
    result
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}
