//! Inverted index construction: posting lists, the posting store, the index
//! writer, and the persistence codec.

pub mod persist;
pub mod posting;
pub mod store;
pub mod writer;

pub use posting::PostingList;
pub use store::{IndexStats, PostingStore};
pub use writer::IndexWriter;
