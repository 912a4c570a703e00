//! String tokenizers feeding the string entry points of the measures.
//!
//! A tokenizer must be deterministic and total: the same input always yields
//! the same ordered token list, and every string is accepted. Case folding
//! and Unicode normalization are deliberately absent; tokens compare by
//! exact value.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Character used to frame the input when q-gram padding is enabled.
pub const PADDING_CHAR: char = '#';

/// Largest accepted q-gram size.
pub const MAX_QGRAM_SIZE: usize = 64;

/// Splits a string into an ordered sequence of tokens.
pub trait Tokenizer {
    fn tokenize(&self, input: &str) -> Vec<String>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, input: &str) -> Vec<String> {
        (**self).tokenize(input)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, input: &str) -> Vec<String> {
        (**self).tokenize(input)
    }
}

/// One token per `char`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input.chars().map(String::from).collect()
    }
}

/// Splits on Unicode whitespace; runs of whitespace never produce empty
/// tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_owned).collect()
    }
}

/// Overlapping character q-grams.
///
/// With padding, `size - 1` copies of [`PADDING_CHAR`] frame the input on
/// both sides, so `"ab"` with `size = 2` becomes `#a ab b#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QGramTokenizer {
    size: usize,
    padding: bool,
}

impl QGramTokenizer {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidQGramSize`] when `size` is zero or
    /// above [`MAX_QGRAM_SIZE`].
    pub const fn new(size: usize, padding: bool) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_QGRAM_SIZE {
            return Err(ConfigError::InvalidQGramSize(size));
        }
        Ok(Self { size, padding })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn padding(&self) -> bool {
        self.padding
    }
}

impl Tokenizer for QGramTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }

        let pad = if self.padding { self.size - 1 } else { 0 };
        let mut chars: Vec<char> = Vec::with_capacity(input.len());
        chars.extend(std::iter::repeat_n(PADDING_CHAR, pad));
        chars.extend(input.chars());
        chars.extend(std::iter::repeat_n(PADDING_CHAR, pad));

        // Too short for a single full gram: the whole input is the only token.
        if chars.len() < self.size {
            return vec![chars.into_iter().collect()];
        }

        chars
            .windows(self.size)
            .map(|gram| gram.iter().collect())
            .collect()
    }
}

/// Serializable tokenizer selection, used by [`crate::MeasureConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    Char,
    #[default]
    Whitespace,
    #[serde(rename = "qgram")]
    QGram,
}

impl TokenizerKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Whitespace => "whitespace",
            Self::QGram => "qgram",
        }
    }

    /// Build the tokenizer this kind names. `size` and `padding` only
    /// matter for [`TokenizerKind::QGram`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidQGramSize`] for a q-gram size outside
    /// `1..=MAX_QGRAM_SIZE`.
    pub fn build(
        self,
        size: usize,
        padding: bool,
    ) -> Result<Box<dyn Tokenizer + Send + Sync>, ConfigError> {
        Ok(match self {
            Self::Char => Box::new(CharTokenizer),
            Self::Whitespace => Box::new(WhitespaceTokenizer),
            Self::QGram => Box::new(QGramTokenizer::new(size, padding)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn char_tokenizer_splits_per_char() {
        assert_eq!(CharTokenizer.tokenize("abc"), toks(&["a", "b", "c"]));
        assert!(CharTokenizer.tokenize("").is_empty());
    }

    #[test]
    fn char_tokenizer_keeps_multibyte_chars_whole() {
        assert_eq!(CharTokenizer.tokenize("né"), toks(&["n", "é"]));
    }

    #[test]
    fn whitespace_tokenizer_drops_empty_runs() {
        assert_eq!(
            WhitespaceTokenizer.tokenize("  the  quick\tfox\n"),
            toks(&["the", "quick", "fox"])
        );
        assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn qgram_rejects_zero_size() {
        let err = QGramTokenizer::new(0, false).expect_err("zero size");
        assert!(matches!(err, ConfigError::InvalidQGramSize(0)));
    }

    #[test]
    fn qgram_rejects_size_above_cap() {
        assert!(QGramTokenizer::new(MAX_QGRAM_SIZE, true).is_ok());
        assert!(matches!(
            QGramTokenizer::new(MAX_QGRAM_SIZE + 1, true),
            Err(ConfigError::InvalidQGramSize(n)) if n == MAX_QGRAM_SIZE + 1
        ));
        assert!(QGramTokenizer::new(usize::MAX / 2 + 2, true).is_err());
    }

    #[test]
    fn qgram_largest_size_tokenizes_short_input() {
        let t = QGramTokenizer::new(MAX_QGRAM_SIZE, true).expect("valid size");
        let grams = t.tokenize("a");
        assert_eq!(grams.len(), MAX_QGRAM_SIZE);
        assert!(grams.iter().all(|g| g.chars().count() == MAX_QGRAM_SIZE));
    }

    #[test]
    fn qgram_without_padding() {
        let t = QGramTokenizer::new(2, false).expect("valid size");
        assert_eq!(t.tokenize("abcd"), toks(&["ab", "bc", "cd"]));
    }

    #[test]
    fn qgram_with_padding_frames_boundaries() {
        let t = QGramTokenizer::new(3, true).expect("valid size");
        assert_eq!(t.tokenize("ab"), toks(&["##a", "#ab", "ab#", "b##"]));
    }

    #[test]
    fn qgram_short_input_is_single_token() {
        let t = QGramTokenizer::new(4, false).expect("valid size");
        assert_eq!(t.tokenize("ab"), toks(&["ab"]));
    }

    #[test]
    fn qgram_empty_input_has_no_tokens() {
        let t = QGramTokenizer::new(3, true).expect("valid size");
        assert!(t.tokenize("").is_empty());
    }

    #[test]
    fn qgram_size_one_ignores_padding() {
        let t = QGramTokenizer::new(1, true).expect("valid size");
        assert_eq!(t.tokenize("ab"), CharTokenizer.tokenize("ab"));
    }

    #[test]
    fn kind_builds_matching_tokenizer() {
        let t = TokenizerKind::QGram.build(2, false).expect("valid");
        assert_eq!(t.tokenize("abc"), toks(&["ab", "bc"]));
        assert!(TokenizerKind::QGram.build(0, false).is_err());
        let ws = TokenizerKind::Whitespace.build(0, false).expect("size ignored");
        assert_eq!(ws.tokenize("a b"), toks(&["a", "b"]));
    }

    #[test]
    fn kind_names_round_trip_through_serde() {
        #[derive(Deserialize)]
        struct Wrap {
            kind: TokenizerKind,
        }
        let w: Wrap = toml::from_str("kind = \"qgram\"").expect("parse");
        assert_eq!(w.kind, TokenizerKind::QGram);
        assert_eq!(w.kind.as_str(), "qgram");
    }
}
