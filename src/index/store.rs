//! The posting store: the term-to-postings mapping that owns all index state.
//!
//! [`PostingStore`] maps terms to [`PostingList`]s and maintains a reverse
//! index from document id to the set of terms that document contains. The
//! reverse index makes replace-on-reindex a targeted purge instead of a scan
//! over the whole term dictionary.
//!
//! Invariants maintained by every mutation:
//!
//! 1. A term key exists iff at least one document has a non-empty position
//!    list under it.
//! 2. Positions within a posting are strictly increasing.
//! 3. A document id appears under a term at most once.

use ahash::{AHashMap, AHashSet};

use crate::error::{Result, XiphosError};
use crate::index::posting::{PostingList, validate_positions};

/// An in-memory positional inverted index.
///
/// The store exclusively owns its posting lists; readers get borrowed views.
/// Instances are explicitly constructed and caller-owned; there is no
/// process-wide index.
#[derive(Clone, Debug, Default)]
pub struct PostingStore {
    /// Term dictionary mapping terms to posting lists.
    terms: AHashMap<String, PostingList>,
    /// Reverse index mapping document ids to the terms they contain.
    doc_terms: AHashMap<String, AHashSet<String>>,
}

/// Summary statistics over a posting store.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexStats {
    /// Total number of indexed documents.
    pub doc_count: usize,
    /// Total number of distinct terms.
    pub term_count: usize,
    /// Average number of indexed tokens per document.
    pub avg_doc_length: f64,
    /// The most common terms by document frequency, descending.
    pub top_terms: Vec<(String, usize)>,
}

impl PostingStore {
    /// Create a new empty posting store.
    pub fn new() -> Self {
        PostingStore {
            terms: AHashMap::new(),
            doc_terms: AHashMap::new(),
        }
    }

    /// Insert or overwrite the position list for (term, doc_id).
    ///
    /// Positions must be strictly increasing or the call fails with
    /// `InvalidPositions`; a blank `doc_id` fails with `EmptyDocumentId`.
    /// Either way the store is left unmodified. An empty position list
    /// removes any existing posting for (term, doc_id) rather than storing
    /// an empty one.
    pub fn upsert_positions<T, D>(&mut self, term: T, doc_id: D, positions: Vec<u32>) -> Result<()>
    where
        T: Into<String>,
        D: Into<String>,
    {
        let term = term.into();
        let doc_id = doc_id.into();

        if doc_id.trim().is_empty() {
            return Err(XiphosError::empty_document_id());
        }
        validate_positions(&positions)?;

        if positions.is_empty() {
            self.remove_posting(&term, &doc_id);
            return Ok(());
        }

        self.terms
            .entry(term.clone())
            .or_default()
            .set_positions(doc_id.clone(), positions);
        self.doc_terms.entry(doc_id).or_default().insert(term);

        Ok(())
    }

    /// Remove every posting referencing `doc_id`.
    ///
    /// Terms left with zero documents are dropped from the dictionary.
    /// Removing an absent document is a no-op.
    pub fn remove_document(&mut self, doc_id: &str) {
        let Some(terms) = self.doc_terms.remove(doc_id) else {
            return;
        };

        for term in terms {
            if let Some(posting_list) = self.terms.get_mut(&term) {
                posting_list.remove(doc_id);
                if posting_list.is_empty() {
                    self.terms.remove(&term);
                }
            }
        }
    }

    fn remove_posting(&mut self, term: &str, doc_id: &str) {
        if let Some(posting_list) = self.terms.get_mut(term) {
            posting_list.remove(doc_id);
            if posting_list.is_empty() {
                self.terms.remove(term);
            }
        }
        if let Some(terms) = self.doc_terms.get_mut(doc_id) {
            terms.remove(term);
            if terms.is_empty() {
                self.doc_terms.remove(doc_id);
            }
        }
    }

    /// Get the posting list for a term, if the term has been seen.
    pub fn postings_for(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// Get the positions of a term within a document (empty if absent).
    pub fn positions(&self, term: &str, doc_id: &str) -> &[u32] {
        self.terms
            .get(term)
            .and_then(|list| list.positions(doc_id))
            .unwrap_or(&[])
    }

    /// Iterate over all terms in the dictionary.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|s| s.as_str())
    }

    /// Iterate over all indexed document ids.
    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.doc_terms.keys().map(|s| s.as_str())
    }

    /// Check whether a document is present in the index.
    pub fn contains_document(&self, doc_id: &str) -> bool {
        self.doc_terms.contains_key(doc_id)
    }

    /// The number of distinct terms in the dictionary.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// The number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.doc_terms.len()
    }

    /// Check if the store holds no postings at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Remove every posting, leaving an empty store.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.doc_terms.clear();
    }

    /// Compute summary statistics over the store.
    pub fn stats(&self) -> IndexStats {
        let doc_count = self.doc_count();
        let total_tokens: usize = self
            .terms
            .values()
            .map(|list| list.iter().map(|(_, positions)| positions.len()).sum::<usize>())
            .sum();
        let avg_doc_length = if doc_count > 0 {
            total_tokens as f64 / doc_count as f64
        } else {
            0.0
        };

        let mut top_terms: Vec<(String, usize)> = self
            .terms
            .iter()
            .map(|(term, list)| (term.clone(), list.doc_frequency()))
            .collect();
        top_terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        top_terms.truncate(10);

        IndexStats {
            doc_count,
            term_count: self.term_count(),
            avg_doc_length,
            top_terms,
        }
    }
}

impl PartialEq for PostingStore {
    fn eq(&self, other: &Self) -> bool {
        // The reverse index is derived from the term table, so comparing the
        // term table compares the whole store.
        self.terms == other.terms
    }
}

impl Eq for PostingStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XiphosError;

    #[test]
    fn test_upsert_and_lookup() {
        let mut store = PostingStore::new();
        store.upsert_positions("index", "doc2", vec![3]).unwrap();
        store.upsert_positions("index", "doc3", vec![1]).unwrap();

        let list = store.postings_for("index").unwrap();
        assert_eq!(list.doc_frequency(), 2);
        assert_eq!(store.positions("index", "doc2"), &[3]);
        assert_eq!(store.positions("index", "missing"), &[] as &[u32]);
        assert!(store.postings_for("unseen").is_none());
    }

    #[test]
    fn test_upsert_rejects_invalid_positions() {
        let mut store = PostingStore::new();
        let err = store
            .upsert_positions("term", "doc1", vec![2, 1])
            .unwrap_err();
        assert!(matches!(err, XiphosError::InvalidPositions(_)));

        // Failed call leaves the store unmodified.
        assert!(store.is_empty());
        assert_eq!(store.doc_count(), 0);
    }

    #[test]
    fn test_upsert_rejects_blank_doc_id() {
        let mut store = PostingStore::new();

        let err = store.upsert_positions("term", "", vec![0]).unwrap_err();
        assert!(matches!(err, XiphosError::EmptyDocumentId));

        let err = store.upsert_positions("term", "  ", vec![0]).unwrap_err();
        assert!(matches!(err, XiphosError::EmptyDocumentId));

        // Blank ids never enter the store, so every store reachable through
        // the public API survives a save/load round trip.
        assert!(store.is_empty());
        assert_eq!(store.doc_count(), 0);
    }

    #[test]
    fn test_upsert_empty_positions_removes_entry() {
        let mut store = PostingStore::new();
        store.upsert_positions("term", "doc1", vec![0]).unwrap();
        store.upsert_positions("term", "doc1", vec![]).unwrap();

        assert!(store.postings_for("term").is_none());
        assert!(!store.contains_document("doc1"));
    }

    #[test]
    fn test_remove_document_purges_terms() {
        let mut store = PostingStore::new();
        store.upsert_positions("shared", "doc1", vec![0]).unwrap();
        store.upsert_positions("shared", "doc2", vec![0]).unwrap();
        store.upsert_positions("lonely", "doc1", vec![1]).unwrap();

        store.remove_document("doc1");

        // "lonely" lost its last document and is dropped entirely.
        assert!(store.postings_for("lonely").is_none());
        assert_eq!(store.postings_for("shared").unwrap().doc_frequency(), 1);
        assert_eq!(store.doc_count(), 1);

        // Idempotent.
        store.remove_document("doc1");
        assert_eq!(store.doc_count(), 1);
    }

    #[test]
    fn test_store_equality() {
        let mut a = PostingStore::new();
        let mut b = PostingStore::new();
        assert_eq!(a, b);

        a.upsert_positions("term", "doc1", vec![0, 2]).unwrap();
        assert_ne!(a, b);

        b.upsert_positions("term", "doc1", vec![0, 2]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stats() {
        let mut store = PostingStore::new();
        store.upsert_positions("common", "doc1", vec![0]).unwrap();
        store.upsert_positions("common", "doc2", vec![0, 2]).unwrap();
        store.upsert_positions("rare", "doc2", vec![1]).unwrap();

        let stats = store.stats();
        assert_eq!(stats.doc_count, 2);
        assert_eq!(stats.term_count, 2);
        assert_eq!(stats.avg_doc_length, 2.0);
        assert_eq!(stats.top_terms[0], ("common".to_string(), 2));
    }

    #[test]
    fn test_empty_store_stats() {
        let stats = PostingStore::new().stats();
        assert_eq!(stats.doc_count, 0);
        assert_eq!(stats.avg_doc_length, 0.0);
        assert!(stats.top_terms.is_empty());
    }
}
