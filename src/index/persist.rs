//! Persistence codec for the posting store.
//!
//! The on-disk format is a versioned JSON document:
//!
//! ```json
//! {
//!   "format": "xiphos-index",
//!   "version": 1,
//!   "doc_count": 3,
//!   "term_count": 12,
//!   "terms": {
//!     "index": [["doc2", [3]], ["doc3", [1]]]
//!   }
//! }
//! ```
//!
//! Per-term postings are written as an array of `[doc_id, positions]` pairs
//! rather than a JSON object: a duplicate document id under one term is then
//! representable in the file and rejected as corruption on load, where an
//! object key would be silently collapsed by the parser.
//!
//! `doc_count` and `term_count` are informational. [`load`] recomputes them
//! from the term table and never trusts the stored values.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, XiphosError};
use crate::index::store::PostingStore;

/// Format marker written into every index file.
pub const FORMAT_MARKER: &str = "xiphos-index";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct IndexFile {
    format: String,
    version: u32,
    #[serde(default)]
    doc_count: usize,
    #[serde(default)]
    term_count: usize,
    terms: BTreeMap<String, Vec<(String, Vec<u32>)>>,
}

/// Write the full posting store to `path`.
///
/// Output is deterministic: terms and document ids are sorted.
pub fn save<P: AsRef<Path>>(store: &PostingStore, path: P) -> Result<()> {
    let mut terms: BTreeMap<String, Vec<(String, Vec<u32>)>> = BTreeMap::new();
    for term in store.terms() {
        let postings = store
            .postings_for(term)
            .map(|list| {
                list.iter()
                    .map(|(doc_id, positions)| (doc_id.to_string(), positions.to_vec()))
                    .collect()
            })
            .unwrap_or_default();
        terms.insert(term.to_string(), postings);
    }

    let file = IndexFile {
        format: FORMAT_MARKER.to_string(),
        version: FORMAT_VERSION,
        doc_count: store.doc_count(),
        term_count: store.term_count(),
        terms,
    };

    // Flush explicitly: a drop-time flush would discard I/O errors and
    // report success for a truncated file.
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &file)?;
    writer.flush()?;
    Ok(())
}

/// Reconstruct a posting store from `path`.
///
/// All-or-nothing: a missing file, unparseable JSON, an unexpected format
/// marker or version, or any invariant violation in the term table fails
/// with `CorruptIndex` and no partial store is returned.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PostingStore> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        XiphosError::corrupt_index(format!("cannot open {}: {e}", path.display()))
    })?;

    let parsed: IndexFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| XiphosError::corrupt_index(format!("unparseable index file: {e}")))?;

    if parsed.format != FORMAT_MARKER {
        return Err(XiphosError::corrupt_index(format!(
            "unexpected format marker: {:?}",
            parsed.format
        )));
    }
    if parsed.version != FORMAT_VERSION {
        return Err(XiphosError::corrupt_index(format!(
            "unsupported format version: {}",
            parsed.version
        )));
    }

    // Rebuild through the store so its own validation re-checks invariants.
    let mut store = PostingStore::new();
    for (term, postings) in parsed.terms {
        if term.is_empty() {
            return Err(XiphosError::corrupt_index("empty term key"));
        }
        if postings.is_empty() {
            return Err(XiphosError::corrupt_index(format!(
                "term {term:?} has no postings"
            )));
        }

        let mut seen_docs: AHashSet<&str> = AHashSet::new();
        for (doc_id, positions) in &postings {
            if doc_id.trim().is_empty() {
                return Err(XiphosError::corrupt_index(format!(
                    "blank document id under term {term:?}"
                )));
            }
            if !seen_docs.insert(doc_id.as_str()) {
                return Err(XiphosError::corrupt_index(format!(
                    "duplicate document id {doc_id:?} under term {term:?}"
                )));
            }
            if positions.is_empty() {
                return Err(XiphosError::corrupt_index(format!(
                    "empty position list for term {term:?} in document {doc_id:?}"
                )));
            }
        }

        for (doc_id, positions) in postings {
            store
                .upsert_positions(term.clone(), doc_id, positions)
                .map_err(|e| XiphosError::corrupt_index(e.to_string()))?;
        }
    }

    Ok(store)
}
