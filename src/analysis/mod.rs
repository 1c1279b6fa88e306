//! Text analysis pipeline: tokenization, filtering, and analyzers.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{StopFilter, TokenFilter};
pub use tokenizer::{AlphanumTokenizer, Tokenizer};
