use bson::Document;

/// Sort direction for a field in query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn direction(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Options for controlling find operations.
///
/// `FindOptions` allows you to specify sorting, pagination, and result
/// limits for query results. It supports method chaining for convenient
/// configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use mangrove::repository::{order_by, limit_to, FindOptions, SortOrder};
///
/// // Create options with sorting, skip, and limit
/// let options = FindOptions::new()
///     .sort_by("pages", SortOrder::Descending)
///     .skip(10)
///     .limit(20);
///
/// // Or use the convenience constructors
/// let options = order_by("title", SortOrder::Ascending);
/// let options = limit_to(100);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
    pub(crate) sort: Option<Document>,
    pub(crate) skip: Option<u64>,
    pub(crate) limit: Option<i64>,
}

/// Creates `FindOptions` sorted by a field.
pub fn order_by(field_name: &str, sort_order: SortOrder) -> FindOptions {
    FindOptions::new().sort_by(field_name, sort_order)
}

/// Creates `FindOptions` that skips a number of results.
///
/// Combined with a limit for pagination: skip(10).limit(20) returns
/// results 11-30.
pub fn skip_by(skip: u64) -> FindOptions {
    FindOptions::new().skip(skip)
}

/// Creates `FindOptions` that limits the number of results.
pub fn limit_to(limit: i64) -> FindOptions {
    FindOptions::new().limit(limit)
}

impl FindOptions {
    /// Creates a new `FindOptions` with default settings: no sort, no
    /// skip, no limit.
    pub fn new() -> FindOptions {
        FindOptions::default()
    }

    /// Adds a sort field. Repeated calls append further sort keys in
    /// order of significance.
    pub fn sort_by(mut self, field_name: &str, sort_order: SortOrder) -> FindOptions {
        let sort = self.sort.get_or_insert_with(Document::new);
        sort.insert(field_name, sort_order.direction());
        self
    }

    /// Sets the number of documents to skip.
    pub fn skip(mut self, skip: u64) -> FindOptions {
        self.skip = Some(skip);
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: i64) -> FindOptions {
        self.limit = Some(limit);
        self
    }
}
