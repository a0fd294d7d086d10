//! Query filters for repository operations.
//!
//! Filters are thin builders over BSON filter documents, translated by the
//! driver's own query language. Build them fluently from a field name:
//!
//! ```rust,ignore
//! use mangrove::filter::{and, field};
//!
//! let filter = and(vec![
//!     field("author").eq("Melville"),
//!     field("pages").gt(300),
//! ]);
//! ```

mod filter;
mod fluent;
mod logical;

pub use filter::Filter;
pub use fluent::{field, FluentFilter};
pub use logical::{all, and, not, or};
