use bson::Document;

/// A predicate over entity fields, backed by a BSON filter document.
///
/// # Purpose
///
/// `Filter` is the query currency of the crate: every predicate-taking
/// repository operation accepts one. It wraps the driver's native filter
/// representation, so anything expressible in the store's query language is
/// expressible here, either through the fluent builders in this module or
/// by converting a raw `bson::Document`.
///
/// # Examples
///
/// ```rust,ignore
/// use bson::doc;
/// use mangrove::filter::{field, Filter};
///
/// // Fluent construction
/// let by_author = field("author").eq("Melville");
///
/// // Raw document construction
/// let raw: Filter = doc! { "author": "Melville" }.into();
/// assert_eq!(by_author, raw);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Filter(Document);

impl Filter {
    pub(crate) fn new(document: Document) -> Self {
        Filter(document)
    }

    /// Returns the underlying BSON filter document.
    pub fn as_document(&self) -> &Document {
        &self.0
    }

    /// Consumes the filter, yielding the underlying BSON filter document.
    pub fn into_document(self) -> Document {
        self.0
    }
}

impl From<Document> for Filter {
    fn from(document: Document) -> Self {
        Filter(document)
    }
}

impl From<Filter> for Document {
    fn from(filter: Filter) -> Self {
        filter.0
    }
}
