//! The searcher: boolean and phrase query evaluation plus frequency stats.
//!
//! Every operation here is read-only over a borrowed [`PostingStore`].
//! Absence is never an error: unknown terms and documents yield empty
//! results or zero counts, which is what boolean composition over absent
//! terms relies on.
//!
//! Boolean operations take already-normalized terms (lowercase, as produced
//! by the tokenizer); phrase queries take raw text and run it through the
//! same analyzer used at index time, so a phrase consisting only of
//! stopwords analyzes to nothing and matches nothing.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::index::store::PostingStore;

/// Read-only query engine over a posting store.
pub struct Searcher<'a> {
    store: &'a PostingStore,
    analyzer: Arc<dyn Analyzer>,
}

impl<'a> Searcher<'a> {
    /// Create a searcher over the given store.
    ///
    /// The analyzer must be the one the index was built with; it is only
    /// used for phrase queries.
    pub fn new(store: &'a PostingStore, analyzer: Arc<dyn Analyzer>) -> Self {
        Searcher { store, analyzer }
    }

    /// Look up a single term, returning its postings as doc_id -> positions.
    ///
    /// An unseen term yields an empty map.
    pub fn search_term(&self, term: &str) -> BTreeMap<String, Vec<u32>> {
        self.store
            .postings_for(term)
            .map(|list| {
                list.iter()
                    .map(|(doc_id, positions)| (doc_id.to_string(), positions.to_vec()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Documents containing every one of `terms`.
    ///
    /// An empty term sequence yields the empty set, as does any term absent
    /// from the index. Intersection order does not affect the result.
    pub fn search_and<T: AsRef<str>>(&self, terms: &[T]) -> HashSet<String> {
        let Some(first) = terms.first() else {
            return HashSet::new();
        };

        let mut result = self.doc_set(first.as_ref());
        for term in &terms[1..] {
            if result.is_empty() {
                break;
            }
            let docs = self.doc_set(term.as_ref());
            result.retain(|doc_id| docs.contains(doc_id));
        }
        result
    }

    /// Documents containing at least one of `terms`.
    ///
    /// Absent terms contribute nothing.
    pub fn search_or<T: AsRef<str>>(&self, terms: &[T]) -> HashSet<String> {
        let mut result = HashSet::new();
        for term in terms {
            if let Some(list) = self.store.postings_for(term.as_ref()) {
                result.extend(list.doc_ids().map(str::to_string));
            }
        }
        result
    }

    /// Documents matching all of `include` and none of `exclude`.
    ///
    /// With an empty `include` the result is the empty set; there is no
    /// implied "all documents" universe.
    pub fn search_not<T: AsRef<str>, U: AsRef<str>>(
        &self,
        include: &[T],
        exclude: &[U],
    ) -> HashSet<String> {
        let mut result = self.search_and(include);
        if result.is_empty() {
            return result;
        }

        let excluded = self.search_or(exclude);
        result.retain(|doc_id| !excluded.contains(doc_id));
        result
    }

    /// Documents containing the given phrase as consecutive terms.
    ///
    /// The phrase is analyzed with the index-time analyzer; if nothing
    /// survives analysis the result is empty. A document matches iff some
    /// occurrence of the first term is followed by the remaining terms at
    /// consecutive positions.
    pub fn search_phrase(&self, phrase: &str) -> Result<HashSet<String>> {
        let terms: Vec<String> = self
            .analyzer
            .analyze(phrase)?
            .map(|token| token.text)
            .collect();

        let Some(first) = terms.first() else {
            return Ok(HashSet::new());
        };

        if terms.len() == 1 {
            return Ok(self.doc_set(first));
        }

        let candidates = self.search_and(&terms);
        let mut result = HashSet::new();

        'docs: for doc_id in candidates {
            let start_positions = self.store.positions(first, &doc_id);
            for &start in start_positions {
                let mut matched = true;
                for (offset, term) in terms.iter().enumerate().skip(1) {
                    let Some(expected) = start.checked_add(offset as u32) else {
                        matched = false;
                        break;
                    };
                    let positions = self.store.positions(term, &doc_id);
                    if positions.binary_search(&expected).is_err() {
                        matched = false;
                        break;
                    }
                }
                if matched {
                    result.insert(doc_id);
                    continue 'docs;
                }
            }
        }

        Ok(result)
    }

    /// Number of occurrences of `term` within `doc_id` (0 if absent).
    pub fn term_frequency(&self, term: &str, doc_id: &str) -> usize {
        self.store
            .postings_for(term)
            .map_or(0, |list| list.term_frequency(doc_id))
    }

    /// Number of documents containing `term` (0 if absent).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.store
            .postings_for(term)
            .map_or(0, |list| list.doc_frequency())
    }

    fn doc_set(&self, term: &str) -> HashSet<String> {
        self.store
            .postings_for(term)
            .map(|list| list.doc_ids().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
