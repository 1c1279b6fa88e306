//! Posting lists: per-term mappings from document id to occurrence positions.
//!
//! A posting records where a term occurs within one document as a strictly
//! increasing sequence of 0-based token positions. A [`PostingList`] holds
//! every posting for one term, keyed by document id. Document ids are kept
//! in sorted order so iteration and serialization are deterministic.

use std::collections::BTreeMap;

use crate::error::{Result, XiphosError};

/// Check that a position list is valid for insertion.
///
/// Positions must be strictly increasing, which also guarantees uniqueness.
/// Negative positions are unrepresentable at this boundary since positions
/// are `u32`.
pub fn validate_positions(positions: &[u32]) -> Result<()> {
    for window in positions.windows(2) {
        if window[1] <= window[0] {
            return Err(XiphosError::invalid_positions(format!(
                "positions must be strictly increasing, got {} after {}",
                window[1], window[0]
            )));
        }
    }
    Ok(())
}

/// All postings for a single term, keyed by document id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostingList {
    postings: BTreeMap<String, Vec<u32>>,
}

impl PostingList {
    /// Create a new empty posting list.
    pub fn new() -> Self {
        PostingList {
            postings: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the position list for a document.
    ///
    /// The caller is responsible for validating positions first; the store
    /// does this once at its own boundary.
    pub fn set_positions<S: Into<String>>(&mut self, doc_id: S, positions: Vec<u32>) {
        self.postings.insert(doc_id.into(), positions);
    }

    /// Remove the posting for a document. Returns true if one was present.
    pub fn remove(&mut self, doc_id: &str) -> bool {
        self.postings.remove(doc_id).is_some()
    }

    /// Get the positions of the term within a document, if any.
    pub fn positions(&self, doc_id: &str) -> Option<&[u32]> {
        self.postings.get(doc_id).map(|p| p.as_slice())
    }

    /// Check whether a document appears in this posting list.
    pub fn contains(&self, doc_id: &str) -> bool {
        self.postings.contains_key(doc_id)
    }

    /// The number of documents containing the term.
    pub fn doc_frequency(&self) -> usize {
        self.postings.len()
    }

    /// The term frequency within one document (0 if absent).
    pub fn term_frequency(&self, doc_id: &str) -> usize {
        self.postings.get(doc_id).map_or(0, |p| p.len())
    }

    /// Check if the posting list has no documents.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over (doc_id, positions) pairs in sorted doc_id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.postings
            .iter()
            .map(|(doc_id, positions)| (doc_id.as_str(), positions.as_slice()))
    }

    /// Iterate over the document ids in sorted order.
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|s| s.as_str())
    }
}
