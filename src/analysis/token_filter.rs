//! Token filter implementations.
//!
//! Filters transform the token stream produced by a tokenizer. The crate
//! ships [`StopFilter`], which removes caller-supplied stopwords and
//! renumbers the surviving tokens so positions stay compact. Compact
//! positions keep phrase adjacency consistent between index time and
//! query time.
//!
//! # Examples
//!
//! ```
//! use xiphos::analysis::token::Token;
//! use xiphos::analysis::token_filter::{StopFilter, TokenFilter};
//!
//! let filter = StopFilter::from_words(["the"]);
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! assert_eq!(result[0].position, 0);
//! ```

use ahash::AHashSet;

use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::error::Result;

/// Default English stop words list.
///
/// Common English words that are typically filtered out during indexing.
/// The core never applies this list implicitly; callers opt in via
/// [`StopFilter::english`].
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has", "have",
    "he", "how", "in", "is", "it", "its", "of", "on", "that", "the", "they", "this", "to", "was",
    "what", "when", "where", "which", "who", "why", "will", "with",
];

/// Trait for filters that transform a token stream.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait TokenFilter: Send + Sync {
    /// Filter the given token stream, producing a new stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A filter that removes stop words from the token stream.
///
/// Matching is exact string equality against the stopword set; since the
/// tokenizer lowercases its input, the set should hold lowercase words.
/// Surviving tokens are renumbered from zero so the position sequence has
/// no gaps.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: AHashSet<String>,
}

impl StopFilter {
    /// Create a stop filter with an empty stopword set (passes everything).
    pub fn new() -> Self {
        StopFilter {
            stop_words: AHashSet::new(),
        }
    }

    /// Create a stop filter from a caller-supplied word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a stop filter with the default English stopword list.
    pub fn english() -> Self {
        Self::from_words(DEFAULT_ENGLISH_STOP_WORDS.iter().copied())
    }

    /// Check whether a word is in the stopword set.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of words in the stopword set.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens
            .filter(|token| !self.stop_words.contains(&token.text))
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();

        Ok(filtered.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
