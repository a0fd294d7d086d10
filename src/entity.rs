use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Trait that defines the persistence contract for a repository entity.
///
/// # Purpose
///
/// Every record type managed by an [`ObjectRepository`](crate::repository::ObjectRepository)
/// must carry a store-assigned identifier and a creation timestamp. The
/// timestamp doubles as an audit field and as the target of the TTL
/// auto-expiry index, so the trait requires it at compile time instead of
/// discovering it at runtime.
///
/// # Characteristics
///
/// - The identifier is assigned by the store on first insert, never by the
///   client; until then `id()` returns `None`.
/// - `CREATED_AT_FIELD` names the BSON field holding the creation timestamp.
///   It must match the serialized field name, and the field must serialize
///   as a BSON datetime for the store to expire documents on it.
///
/// # Usage
///
/// ```rust,ignore
/// use bson::oid::ObjectId;
/// use chrono::{DateTime, Utc};
/// use mangrove::MangroveEntity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Book {
///     #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
///     pub id: Option<ObjectId>,
///     pub title: String,
///     #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
///     pub created_at: DateTime<Utc>,
/// }
///
/// impl MangroveEntity for Book {
///     fn id(&self) -> Option<ObjectId> {
///         self.id
///     }
///
///     fn created_at(&self) -> DateTime<Utc> {
///         self.created_at
///     }
///
///     fn set_created_at(&mut self, created_at: DateTime<Utc>) {
///         self.created_at = created_at;
///     }
/// }
/// ```
pub trait MangroveEntity: Serialize + DeserializeOwned + Unpin + Send + Sync {
    /// BSON field name that holds the creation timestamp.
    ///
    /// The TTL index created by
    /// [`configure_auto_expiry`](crate::repository::ObjectRepository::configure_auto_expiry)
    /// is keyed on this field.
    const CREATED_AT_FIELD: &'static str = "created_at";

    /// Returns the store-assigned identifier, or `None` if the entity has
    /// not been persisted yet.
    fn id(&self) -> Option<ObjectId>;

    /// Returns the creation timestamp of the entity.
    fn created_at(&self) -> DateTime<Utc>;

    /// Replaces the creation timestamp.
    ///
    /// Used by TTL configuration, which restarts the entity's expiry clock
    /// from the current instant.
    fn set_created_at(&mut self, created_at: DateTime<Utc>);
}
