//! Analyzer implementations that combine tokenizers and filters.
//!
//! An analyzer is the full text-to-terms pipeline applied both at index time
//! and to phrase queries. Using the same analyzer on both sides is what makes
//! phrase adjacency line up with indexed positions.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{StopFilter, TokenFilter};
use crate::analysis::tokenizer::{AlphanumTokenizer, Tokenizer};
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

/// The standard analyzer: lowercased alphanumeric tokens minus stopwords.
///
/// This is the analyzer the index is designed around. Construct it with the
/// caller's stopword set (possibly empty); the core mandates no default set.
#[derive(Clone)]
pub struct StandardAnalyzer {
    pipeline: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a standard analyzer with an empty stopword set.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a standard analyzer with a caller-supplied stopword set.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_filter(StopFilter::from_words(words))
    }

    fn with_stop_filter(filter: StopFilter) -> Self {
        let pipeline = PipelineAnalyzer::new(Arc::new(AlphanumTokenizer::new()))
            .add_filter(Arc::new(filter));

        StandardAnalyzer { pipeline }
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.pipeline.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
