//! High-level search engine that combines indexing, searching, and
//! persistence behind one handle.
//!
//! [`SearchEngine`] wraps a [`PostingStore`] in a reader-writer lock and
//! exposes the full operation surface with a single-writer/multiple-reader
//! discipline: mutating operations (`add_document`, `add_documents`,
//! `remove_document`, `load`, `clear`) take the write lock, while searches,
//! frequency statistics, and `save` take the read lock and may run
//! concurrently with each other.
//!
//! Callers who want to manage locking themselves can use [`IndexWriter`]
//! and [`Searcher`] directly against their own store.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::index::persist;
use crate::index::store::{IndexStats, PostingStore};
use crate::index::writer::IndexWriter;
use crate::query::searcher::Searcher;

/// A thread-safe positional inverted index engine.
///
/// # Usage Example
///
/// ```
/// use xiphos::SearchEngine;
///
/// let engine = SearchEngine::new();
/// engine.add_document("doc1", "Inverted index enables fast search").unwrap();
///
/// let hits = engine.search_and(&["fast", "search"]);
/// assert!(hits.contains("doc1"));
/// ```
pub struct SearchEngine {
    store: RwLock<PostingStore>,
    writer: IndexWriter,
    analyzer: Arc<dyn Analyzer>,
}

impl SearchEngine {
    /// Create an engine with the standard analyzer and no stopwords.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(StandardAnalyzer::new()))
    }

    /// Create an engine whose analyzer removes the given stopwords.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_analyzer(Arc::new(StandardAnalyzer::with_stop_words(words)))
    }

    /// Create an engine with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        SearchEngine {
            store: RwLock::new(PostingStore::new()),
            writer: IndexWriter::new(analyzer.clone()),
            analyzer,
        }
    }

    /// Index one document, replacing any prior postings for its id.
    pub fn add_document(&self, doc_id: &str, text: &str) -> Result<()> {
        let mut store = self.store.write();
        self.writer.add_document(&mut store, doc_id, text)
    }

    /// Index a batch of (doc_id, text) pairs, failing fast on the first
    /// error without rolling back already-indexed documents.
    pub fn add_documents<I, D, T>(&self, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = (D, T)>,
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let mut store = self.store.write();
        self.writer.add_documents(&mut store, documents)
    }

    /// Remove every posting referencing `doc_id`. Idempotent.
    pub fn remove_document(&self, doc_id: &str) {
        self.store.write().remove_document(doc_id);
    }

    /// Look up a single term's postings as doc_id -> positions.
    pub fn search_term(&self, term: &str) -> BTreeMap<String, Vec<u32>> {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).search_term(term)
    }

    /// Documents containing every one of `terms`.
    pub fn search_and<T: AsRef<str>>(&self, terms: &[T]) -> HashSet<String> {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).search_and(terms)
    }

    /// Documents containing at least one of `terms`.
    pub fn search_or<T: AsRef<str>>(&self, terms: &[T]) -> HashSet<String> {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).search_or(terms)
    }

    /// Documents matching all of `include` and none of `exclude`.
    pub fn search_not<T: AsRef<str>, U: AsRef<str>>(
        &self,
        include: &[T],
        exclude: &[U],
    ) -> HashSet<String> {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).search_not(include, exclude)
    }

    /// Documents containing the phrase as consecutive terms.
    pub fn search_phrase(&self, phrase: &str) -> Result<HashSet<String>> {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).search_phrase(phrase)
    }

    /// Number of occurrences of `term` within `doc_id` (0 if absent).
    pub fn term_frequency(&self, term: &str, doc_id: &str) -> usize {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).term_frequency(term, doc_id)
    }

    /// Number of documents containing `term` (0 if absent).
    pub fn document_frequency(&self, term: &str) -> usize {
        let store = self.store.read();
        Searcher::new(&store, self.analyzer.clone()).document_frequency(term)
    }

    /// All terms in the dictionary.
    pub fn terms(&self) -> HashSet<String> {
        self.store.read().terms().map(str::to_string).collect()
    }

    /// All indexed document ids.
    pub fn documents(&self) -> HashSet<String> {
        self.store.read().documents().map(str::to_string).collect()
    }

    /// The number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.store.read().doc_count()
    }

    /// The number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.store.read().term_count()
    }

    /// Summary statistics over the index.
    pub fn stats(&self) -> IndexStats {
        self.store.read().stats()
    }

    /// Write the full index to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persist::save(&self.store.read(), path)
    }

    /// Replace the index contents with the store persisted at `path`.
    ///
    /// All-or-nothing: on any error the current contents are left untouched.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let loaded = persist::load(path)?;
        *self.store.write() = loaded;
        Ok(())
    }

    /// Remove every posting, leaving an empty index.
    pub fn clear(&self) {
        self.store.write().clear();
    }

    /// Run a closure against the store under the read lock.
    ///
    /// Escape hatch for read-only operations not covered by the methods
    /// above, e.g. borrowing posting lists without cloning.
    pub fn with_store<R>(&self, f: impl FnOnce(&PostingStore) -> R) -> R {
        f(&self.store.read())
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
