//! Read-only query evaluation over a posting store.

pub mod searcher;

pub use searcher::Searcher;
