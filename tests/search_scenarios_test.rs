//! Integration tests for boolean and phrase search over a small corpus.

use std::collections::HashSet;

use xiphos::SearchEngine;
use xiphos::error::{Result, XiphosError};

fn seed_engine() -> SearchEngine {
    let engine = SearchEngine::new();
    engine
        .add_documents([
            ("doc1", "Information retrieval is important"),
            ("doc2", "Search engines use inverted index"),
            ("doc3", "Inverted index enables fast search"),
        ])
        .unwrap();
    engine
}

fn docs(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_seed_corpus_scenarios() -> Result<()> {
    let engine = seed_engine();

    // Single-term lookup with positions.
    let postings = engine.search_term("index");
    assert_eq!(postings.len(), 2);
    assert_eq!(postings["doc2"], vec![4]);
    assert_eq!(postings["doc3"], vec![1]);

    // Boolean queries.
    assert_eq!(
        engine.search_and(&["inverted", "index"]),
        docs(&["doc2", "doc3"])
    );
    assert_eq!(
        engine.search_or(&["search", "retrieval"]),
        docs(&["doc1", "doc2", "doc3"])
    );
    assert_eq!(engine.search_not(&["search"], &["engines"]), docs(&["doc3"]));

    // Phrase query.
    assert_eq!(
        engine.search_phrase("inverted index")?,
        docs(&["doc2", "doc3"])
    );

    // Frequency statistics.
    assert_eq!(engine.term_frequency("index", "doc2"), 1);
    assert_eq!(engine.document_frequency("index"), 2);

    Ok(())
}

#[test]
fn test_replace_semantics() -> Result<()> {
    let engine = seed_engine();

    engine.add_document("doc2", "completely different text")?;

    // Nothing from the old doc2 survives under any term.
    assert_eq!(engine.search_term("engines").len(), 0);
    assert_eq!(engine.search_and(&["inverted", "index"]), docs(&["doc3"]));
    assert_eq!(engine.term_frequency("index", "doc2"), 0);

    // The new postings are in place.
    assert_eq!(
        engine.search_and(&["completely", "different"]),
        docs(&["doc2"])
    );
    assert_eq!(engine.doc_count(), 3);

    Ok(())
}

#[test]
fn test_boolean_algebra_properties() {
    let engine = seed_engine();

    // AND is a subset of OR over the same terms.
    let and_result = engine.search_and(&["inverted", "search"]);
    let or_result = engine.search_or(&["inverted", "search"]);
    assert!(and_result.is_subset(&or_result));

    // AND is independent of argument order.
    assert_eq!(
        engine.search_and(&["fast", "search"]),
        engine.search_and(&["search", "fast"])
    );

    // NOT is AND minus OR.
    let not_result = engine.search_not(&["search"], &["engines"]);
    let expected: HashSet<String> = engine
        .search_and(&["search"])
        .difference(&engine.search_or(&["engines"]))
        .cloned()
        .collect();
    assert_eq!(not_result, expected);
}

#[test]
fn test_phrase_implies_and() -> Result<()> {
    let engine = seed_engine();

    let phrase = engine.search_phrase("inverted index")?;
    let conjunction = engine.search_and(&["inverted", "index"]);
    assert!(phrase.is_subset(&conjunction));

    // AND matches regardless of adjacency; the reversed phrase does not.
    assert!(engine.search_phrase("index inverted")?.is_empty());
    assert_eq!(engine.search_and(&["index", "inverted"]), conjunction);

    Ok(())
}

#[test]
fn test_tf_df_consistency() {
    let engine = seed_engine();

    for term in ["index", "search", "inverted", "important", "zebra"] {
        let df = engine.document_frequency(term);
        let docs_with_term = engine
            .documents()
            .into_iter()
            .filter(|doc_id| engine.term_frequency(term, doc_id) > 0)
            .count();
        assert_eq!(df, docs_with_term, "TF/DF mismatch for term {term:?}");
    }
}

#[test]
fn test_empty_input_safety() -> Result<()> {
    let engine = seed_engine();

    assert!(engine.search_term("nonexistent").is_empty());
    assert!(engine.search_and::<&str>(&[]).is_empty());
    assert!(engine.search_or::<&str>(&[]).is_empty());
    assert!(engine.search_not::<&str, &str>(&[], &[]).is_empty());
    assert!(engine.search_phrase("")?.is_empty());
    assert_eq!(engine.term_frequency("nonexistent", "doc1"), 0);
    assert_eq!(engine.document_frequency("nonexistent"), 0);

    Ok(())
}

#[test]
fn test_stopword_handling() -> Result<()> {
    let engine = SearchEngine::with_stop_words(["is", "use"]);
    engine
        .add_documents([
            ("doc1", "Information retrieval is important"),
            ("doc2", "Search engines use inverted index"),
        ])
        .unwrap();

    // Stopwords never reach the index.
    assert!(engine.search_term("is").is_empty());
    assert!(engine.search_term("use").is_empty());

    // Positions are compact after removal: "index" slides to position 3.
    assert_eq!(engine.search_term("index")["doc2"], vec![3]);

    // A phrase of nothing but stopwords matches nothing.
    assert!(engine.search_phrase("is use is")?.is_empty());

    // Removal closes gaps, so the phrase matches across the dropped word.
    assert_eq!(engine.search_phrase("engines inverted")?, docs(&["doc2"]));

    Ok(())
}

#[test]
fn test_empty_document_id_rejected() {
    let engine = seed_engine();

    let err = engine.add_document("  ", "some text").unwrap_err();
    assert!(matches!(err, XiphosError::EmptyDocumentId));

    // Nothing was indexed for the rejected call.
    assert_eq!(engine.doc_count(), 3);
}

#[test]
fn test_batch_failure_keeps_earlier_documents() {
    let engine = SearchEngine::new();

    let result = engine.add_documents([
        ("doc1", "first document"),
        ("", "broken entry"),
        ("doc3", "never indexed"),
    ]);

    assert!(matches!(result, Err(XiphosError::EmptyDocumentId)));
    assert_eq!(engine.documents(), docs(&["doc1"]));
}

#[test]
fn test_case_folding() {
    let engine = SearchEngine::new();
    engine.add_document("doc1", "Inverted INDEX").unwrap();

    // Queries use normalized (lowercase) terms.
    assert_eq!(engine.search_and(&["inverted", "index"]), docs(&["doc1"]));
    // Phrase text is normalized by the analyzer.
    assert_eq!(
        engine.search_phrase("INVERTED Index").unwrap(),
        docs(&["doc1"])
    );
}
