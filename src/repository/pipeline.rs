//! Aggregation pipeline builders for search operations.
//!
//! These produce the raw pipeline stages handed to the driver's
//! aggregation runner. They are pure constructors; execution and result
//! mapping happen in the repository.

use bson::{doc, Document};

/// Builds a `$search` pipeline against a store-side full-text search index.
///
/// # Arguments
///
/// * `index` - Name of the pre-existing search index
/// * `path` - Field to search
/// * `query` - Query text
///
/// The search index must already exist on the collection; the store rejects
/// or ignores the stage otherwise.
pub fn text_search(index: &str, path: &str, query: &str) -> Vec<Document> {
    vec![doc! {
        "$search": {
            "index": index,
            "text": {
                "path": path,
                "query": query,
            }
        }
    }]
}

/// Builds a `$match` pipeline that applies a regular expression to a field.
///
/// The pattern is used verbatim; no anchoring or escaping is performed.
pub fn regex_match(field: &str, pattern: &str) -> Vec<Document> {
    vec![doc! {
        "$match": {
            field: { "$regex": pattern }
        }
    }]
}
