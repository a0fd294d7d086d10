//! Typed document accessors.
//!
//! An [`ObjectRepository`] binds to one logical database and one named
//! collection for an entity type, and exposes the full data surface of the
//! crate: create, lookups, filtered and projected listing, replace,
//! deletes, pipeline search, and TTL configuration.

mod find_options;
mod object_repository;
pub mod pipeline;

pub use find_options::{limit_to, order_by, skip_by, FindOptions, SortOrder};
pub use object_repository::ObjectRepository;
