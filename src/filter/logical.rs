use bson::{doc, Bson, Document};

use super::Filter;

/// Creates a filter that matches every document in the collection.
pub fn all() -> Filter {
    Filter::new(Document::new())
}

/// Creates a filter matching documents that satisfy every supplied filter.
pub fn and(filters: Vec<Filter>) -> Filter {
    Filter::new(doc! { "$and": clauses(filters) })
}

/// Creates a filter matching documents that satisfy at least one supplied filter.
pub fn or(filters: Vec<Filter>) -> Filter {
    Filter::new(doc! { "$or": clauses(filters) })
}

/// Creates a filter matching documents that do not satisfy the supplied filter.
pub fn not(filter: Filter) -> Filter {
    Filter::new(doc! { "$nor": [filter.into_document()] })
}

fn clauses(filters: Vec<Filter>) -> Vec<Bson> {
    filters
        .into_iter()
        .map(|filter| Bson::Document(filter.into_document()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::field;

    #[test]
    fn all_is_the_empty_filter() {
        assert_eq!(all().as_document(), &Document::new());
    }

    #[test]
    fn and_combines_clauses() {
        let filter = and(vec![
            field("author").eq("Melville"),
            field("pages").gt(300),
        ]);
        assert_eq!(
            filter.as_document(),
            &doc! { "$and": [
                { "author": "Melville" },
                { "pages": { "$gt": 300 } },
            ]}
        );
    }

    #[test]
    fn or_combines_clauses() {
        let filter = or(vec![
            field("author").eq("Melville"),
            field("author").eq("Woolf"),
        ]);
        assert_eq!(
            filter.as_document(),
            &doc! { "$or": [
                { "author": "Melville" },
                { "author": "Woolf" },
            ]}
        );
    }

    #[test]
    fn not_negates_a_filter() {
        let filter = not(field("author").eq("Melville"));
        assert_eq!(
            filter.as_document(),
            &doc! { "$nor": [ { "author": "Melville" } ] }
        );
    }

    #[test]
    fn combinators_nest() {
        let filter = and(vec![
            or(vec![field("a").eq(1), field("b").eq(2)]),
            not(field("c").eq(3)),
        ]);
        assert_eq!(
            filter.as_document(),
            &doc! { "$and": [
                { "$or": [ { "a": 1 }, { "b": 2 } ] },
                { "$nor": [ { "c": 3 } ] },
            ]}
        );
    }
}
