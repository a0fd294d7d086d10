use bson::{doc, Bson};

use super::Filter;

/// Creates a fluent filter builder for the specified field name.
///
/// The returned [`FluentFilter`] provides chainable methods for building
/// equality, comparison, membership, and pattern-matching predicates on
/// that field.
///
/// # Arguments
///
/// * `field_name` - The name of the field to filter on
pub fn field(field_name: &str) -> FluentFilter {
    FluentFilter {
        field_name: field_name.to_string(),
    }
}

/// A fluent builder for constructing filters on a specific field.
///
/// Each method consumes the builder and returns a [`Filter`] that can be
/// passed directly to repository query operations or combined with
/// [`and`](super::and) / [`or`](super::or).
pub struct FluentFilter {
    field_name: String,
}

impl FluentFilter {
    /// Matches documents where the field equals the specified value.
    #[inline]
    pub fn eq<V: Into<Bson>>(self, value: V) -> Filter {
        Filter::new(doc! { self.field_name: value.into() })
    }

    /// Matches documents where the field does not equal the specified value.
    #[inline]
    pub fn ne<V: Into<Bson>>(self, value: V) -> Filter {
        Filter::new(doc! { self.field_name: { "$ne": value.into() } })
    }

    /// Matches documents where the field is greater than the specified value.
    #[inline]
    pub fn gt<V: Into<Bson>>(self, value: V) -> Filter {
        Filter::new(doc! { self.field_name: { "$gt": value.into() } })
    }

    /// Matches documents where the field is greater than or equal to the specified value.
    #[inline]
    pub fn gte<V: Into<Bson>>(self, value: V) -> Filter {
        Filter::new(doc! { self.field_name: { "$gte": value.into() } })
    }

    /// Matches documents where the field is less than the specified value.
    #[inline]
    pub fn lt<V: Into<Bson>>(self, value: V) -> Filter {
        Filter::new(doc! { self.field_name: { "$lt": value.into() } })
    }

    /// Matches documents where the field is less than or equal to the specified value.
    #[inline]
    pub fn lte<V: Into<Bson>>(self, value: V) -> Filter {
        Filter::new(doc! { self.field_name: { "$lte": value.into() } })
    }

    /// Matches documents where the field value lies within a range, both
    /// bounds inclusive.
    pub fn between<V: Into<Bson>>(self, lower_bound: V, upper_bound: V) -> Filter {
        Filter::new(doc! {
            self.field_name: { "$gte": lower_bound.into(), "$lte": upper_bound.into() }
        })
    }

    /// Matches documents where the field value is one of the specified values.
    pub fn within<V: Into<Bson>>(self, values: Vec<V>) -> Filter {
        let values: Vec<Bson> = values.into_iter().map(Into::into).collect();
        Filter::new(doc! { self.field_name: { "$in": values } })
    }

    /// Matches documents by the presence or absence of the field.
    pub fn exists(self, exists: bool) -> Filter {
        Filter::new(doc! { self.field_name: { "$exists": exists } })
    }

    /// Matches documents where the field matches the supplied regular
    /// expression pattern.
    ///
    /// The pattern is handed to the store verbatim; no anchoring or
    /// escaping is performed.
    pub fn regex(self, pattern: &str) -> Filter {
        Filter::new(doc! { self.field_name: { "$regex": pattern } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_builds_plain_equality() {
        let filter = field("author").eq("Melville");
        assert_eq!(filter.as_document(), &doc! { "author": "Melville" });
    }

    #[test]
    fn ne_builds_ne_operator() {
        let filter = field("author").ne("Melville");
        assert_eq!(
            filter.as_document(),
            &doc! { "author": { "$ne": "Melville" } }
        );
    }

    #[test]
    fn comparison_operators_build_expected_documents() {
        assert_eq!(
            field("pages").gt(100).as_document(),
            &doc! { "pages": { "$gt": 100 } }
        );
        assert_eq!(
            field("pages").gte(100).as_document(),
            &doc! { "pages": { "$gte": 100 } }
        );
        assert_eq!(
            field("pages").lt(100).as_document(),
            &doc! { "pages": { "$lt": 100 } }
        );
        assert_eq!(
            field("pages").lte(100).as_document(),
            &doc! { "pages": { "$lte": 100 } }
        );
    }

    #[test]
    fn between_is_inclusive_on_both_bounds() {
        let filter = field("pages").between(100, 300);
        assert_eq!(
            filter.as_document(),
            &doc! { "pages": { "$gte": 100, "$lte": 300 } }
        );
    }

    #[test]
    fn within_builds_in_operator() {
        let filter = field("author").within(vec!["Melville", "Woolf"]);
        assert_eq!(
            filter.as_document(),
            &doc! { "author": { "$in": ["Melville", "Woolf"] } }
        );
    }

    #[test]
    fn exists_builds_exists_operator() {
        assert_eq!(
            field("isbn").exists(true).as_document(),
            &doc! { "isbn": { "$exists": true } }
        );
        assert_eq!(
            field("isbn").exists(false).as_document(),
            &doc! { "isbn": { "$exists": false } }
        );
    }

    #[test]
    fn regex_passes_pattern_verbatim() {
        let filter = field("title").regex("^Moby.*");
        assert_eq!(
            filter.as_document(),
            &doc! { "title": { "$regex": "^Moby.*" } }
        );
    }
}
