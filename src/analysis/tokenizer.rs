//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting raw text into tokens. The crate ships a single tokenizer,
//! [`AlphanumTokenizer`], which implements the index's word-boundary rule:
//! lowercase the input and extract maximal runs of ASCII letters and digits.
//!
//! # Examples
//!
//! ```
//! use xiphos::analysis::tokenizer::{AlphanumTokenizer, Tokenizer};
//!
//! let tokenizer = AlphanumTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{Result, XiphosError};

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Empty input yields an empty stream, never an error. Tokenization is a
    /// pure function of its input: no side effects, no retained state.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that extracts lowercased alphanumeric words.
///
/// The input is lowercased as a whole, then tokens are taken as maximal runs
/// of ASCII letters and digits. Internal punctuation splits words ("can't"
/// becomes "can" and "t"); everything outside `[a-z0-9]` is a boundary.
/// Token positions are 0-based indexes into the resulting sequence.
#[derive(Clone, Debug)]
pub struct AlphanumTokenizer {
    /// The regex pattern used to extract tokens.
    pattern: Arc<Regex>,
}

impl AlphanumTokenizer {
    /// Create a new alphanumeric tokenizer.
    pub fn new() -> Self {
        // The pattern is a constant, so compilation cannot fail at runtime.
        let regex = Regex::new(r"[a-z0-9]+").expect("alphanumeric pattern is valid");

        AlphanumTokenizer {
            pattern: Arc::new(regex),
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for AlphanumTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for AlphanumTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let lowered = text.to_lowercase();

        let tokens: Vec<Token> = self
            .pattern
            .find_iter(&lowered)
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "alphanum"
    }
}

/// A regex-based tokenizer with a caller-supplied pattern.
///
/// Useful when the corpus needs a different word-boundary rule than
/// [`AlphanumTokenizer`] applies. The input is not lowercased; pair it with
/// a lowercasing pattern or pre-normalized text.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| XiphosError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
