//! # Xiphos
//!
//! A compact positional inverted index and boolean search library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Positional posting lists with replace-on-reindex semantics
//! - Boolean (AND/OR/NOT) and phrase queries
//! - Term and document frequency statistics
//! - Versioned JSON persistence with exact round trips

pub mod analysis;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;

pub use engine::SearchEngine;
pub use error::{Result, XiphosError};
pub use index::store::PostingStore;
pub use index::writer::IndexWriter;
pub use query::searcher::Searcher;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
