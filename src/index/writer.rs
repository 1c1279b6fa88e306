//! The index writer: turns documents into postings.
//!
//! [`IndexWriter`] owns the analyzer and writes into a caller-owned
//! [`PostingStore`]. Re-adding a document with an id already in the store
//! replaces all of that document's prior postings across every term; the
//! writer removes the document first, so no stale entries survive.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, XiphosError};
use crate::index::store::PostingStore;

/// Builds index entries for one or many documents.
pub struct IndexWriter {
    analyzer: Arc<dyn Analyzer>,
}

impl IndexWriter {
    /// Create a writer using the given analyzer.
    ///
    /// The same analyzer must be used for phrase queries against the
    /// resulting index, otherwise positions will not line up.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        IndexWriter { analyzer }
    }

    /// Get the analyzer used by this writer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Index one document, replacing any prior postings for its id.
    ///
    /// Fails with `EmptyDocumentId` if `doc_id` is empty or blank; the store
    /// is untouched in that case. A document whose text analyzes to zero
    /// tokens ends up absent from the index entirely.
    pub fn add_document(&self, store: &mut PostingStore, doc_id: &str, text: &str) -> Result<()> {
        if doc_id.trim().is_empty() {
            return Err(XiphosError::empty_document_id());
        }

        store.remove_document(doc_id);

        // Accumulate positions per term; token positions arrive in strictly
        // increasing order, so each per-term list is strictly increasing too.
        let mut term_positions: AHashMap<String, Vec<u32>> = AHashMap::new();
        for token in self.analyzer.analyze(text)? {
            term_positions
                .entry(token.text)
                .or_default()
                .push(token.position as u32);
        }

        for (term, positions) in term_positions {
            store.upsert_positions(term, doc_id, positions)?;
        }

        Ok(())
    }

    /// Index a batch of (doc_id, text) pairs.
    ///
    /// Documents are processed sequentially and the batch fails fast on the
    /// first error: documents indexed before the failure stay indexed, the
    /// rest are left untouched. No cross-document ordering is guaranteed.
    pub fn add_documents<I, D, T>(&self, store: &mut PostingStore, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = (D, T)>,
        D: AsRef<str>,
        T: AsRef<str>,
    {
        for (doc_id, text) in documents {
            self.add_document(store, doc_id.as_ref(), text.as_ref())?;
        }
        Ok(())
    }
}
