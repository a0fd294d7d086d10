//! # Mangrove - Typed Repositories over MongoDB
//!
//! Mangrove is a thin, typed repository layer over the official MongoDB
//! Rust driver. It binds a generic accessor to one logical database and
//! one named collection for a declared entity shape, and exposes the
//! everyday data surface: create, point and predicate lookups, bounded
//! listing, filtering with projection, full replace, deletes, full-text
//! and regex search, and idempotent TTL auto-expiry configuration.
//!
//! Everything hard about talking to the store (wire protocol, pooling,
//! query planning, replication) belongs to the driver. Mangrove only
//! builds filters, options, index models, and aggregation pipelines, and
//! maps results back to typed entities.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bson::oid::ObjectId;
//! use chrono::{DateTime, Utc};
//! use mangrove::{filter::field, MangroveEntity, ObjectRepository, TimeUnit};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Book {
//!     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
//!     id: Option<ObjectId>,
//!     title: String,
//!     author: String,
//!     #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
//!     created_at: DateTime<Utc>,
//! }
//!
//! impl MangroveEntity for Book {
//!     fn id(&self) -> Option<ObjectId> { self.id }
//!     fn created_at(&self) -> DateTime<Utc> { self.created_at }
//!     fn set_created_at(&mut self, at: DateTime<Utc>) { self.created_at = at; }
//! }
//!
//! # async fn example() -> mangrove::MangroveResult<()> {
//! let mut books: ObjectRepository<Book> =
//!     ObjectRepository::connect("mongodb://localhost:27017", "library").await?;
//! books.set_collection("books");
//!
//! let moby_dick = Book {
//!     id: None,
//!     title: "Moby-Dick".into(),
//!     author: "Melville".into(),
//!     created_at: Utc::now(),
//! };
//! books.create(&moby_dick).await?;
//!
//! let found = books.get(field("title").eq("Moby-Dick")).await?;
//!
//! // Expire books 30 days after creation
//! let mut fresh = found;
//! books.configure_auto_expiry(&mut fresh, 30, TimeUnit::Day).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`entity`] - The entity contract (store-assigned id + creation timestamp)
//! - [`errors`] - Error types and result definitions
//! - [`filter`] - Fluent query filters over the driver's filter documents
//! - [`repository`] - The typed document accessor and find options
//! - [`settings`] - Connection settings
//! - [`ttl`] - Time-to-live units, durations, and index matching

pub mod entity;
pub mod errors;
pub mod filter;
pub mod repository;
pub mod settings;
pub mod ttl;

pub use entity::MangroveEntity;
pub use errors::{ErrorKind, MangroveError, MangroveResult};
pub use filter::Filter;
pub use repository::{FindOptions, ObjectRepository, SortOrder};
pub use settings::DatabaseSettings;
pub use ttl::TimeUnit;
