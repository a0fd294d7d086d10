use bson::oid::ObjectId;
use bson::{doc, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};
use serde::de::DeserializeOwned;

use crate::entity::MangroveEntity;
use crate::errors::{ErrorKind, MangroveError, MangroveResult};
use crate::filter::Filter;
use crate::repository::find_options::{limit_to, FindOptions};
use crate::repository::pipeline;
use crate::settings::DatabaseSettings;
use crate::ttl::{self, TimeUnit};

/// A typed document accessor bound to one logical database.
///
/// # Purpose
///
/// `ObjectRepository<T>` is the single data-access surface of the crate.
/// It is constructed against a store connection target and a database
/// name, then bound to a named collection with [`set_collection`]; every
/// data operation before binding fails with `NotInitialized`.
///
/// # Characteristics
///
/// - **Stateless**: holds only the database and collection handles; all
///   query execution, pooling, and retry behavior belongs to the driver.
/// - **Shareable**: the handles are internally reference-counted and the
///   accessor performs no local mutation after binding, so one instance
///   may be shared across concurrently running tasks.
/// - **Direct conduit**: store failures surface unchanged as `StoreError`;
///   nothing is retried or aggregated.
///
/// # Examples
///
/// ```rust,ignore
/// use mangrove::{filter::field, ObjectRepository};
///
/// let mut books: ObjectRepository<Book> =
///     ObjectRepository::connect("mongodb://localhost:27017", "library").await?;
/// books.set_collection("books");
///
/// books.create(&moby_dick).await?;
/// let found = books.get(field("title").eq("Moby-Dick")).await?;
/// ```
///
/// [`set_collection`]: ObjectRepository::set_collection
#[derive(Debug)]
pub struct ObjectRepository<T: MangroveEntity> {
    database: Database,
    collection: Option<Collection<T>>,
}

impl<T: MangroveEntity> ObjectRepository<T> {
    /// Connects to the store and selects the logical database.
    ///
    /// The driver establishes connections lazily, so this call validates
    /// the connection string but does not reach the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection string is malformed.
    pub async fn connect(
        connection_string: &str,
        database_name: &str,
    ) -> MangroveResult<ObjectRepository<T>> {
        let client = Client::with_uri_str(connection_string).await?;
        let database = client.database(database_name);
        log::debug!("selected database {}", database.name());
        Ok(ObjectRepository {
            database,
            collection: None,
        })
    }

    /// Connects using a [`DatabaseSettings`] value.
    pub async fn with_settings(settings: &DatabaseSettings) -> MangroveResult<ObjectRepository<T>> {
        ObjectRepository::connect(&settings.connection_string, &settings.database_name).await
    }

    /// Binds the accessor to a named collection.
    ///
    /// Must be called before any data operation. Rebinding to a different
    /// collection is allowed and replaces the previous binding.
    pub fn set_collection(&mut self, collection_name: &str) {
        self.collection = Some(self.database.collection(collection_name));
    }

    fn collection(&self) -> MangroveResult<&Collection<T>> {
        self.collection.as_ref().ok_or_else(|| {
            MangroveError::new(
                "No collection bound; call set_collection first",
                ErrorKind::NotInitialized,
            )
        })
    }

    /// Inserts a record into the bound collection.
    ///
    /// The store assigns the identifier; the entity's own `id` field is
    /// left untouched.
    pub async fn create(&self, entity: &T) -> MangroveResult<()> {
        let collection = self.collection()?;
        let result = collection.insert_one(entity).await?;
        log::debug!(
            "inserted document {} into {}",
            result.inserted_id,
            collection.name()
        );
        Ok(())
    }

    /// Returns the single record with the given identifier.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is not a well-formed ObjectId string
    /// - `NotFound` if no record has that identifier
    pub async fn get_by_id(&self, id: &str) -> MangroveResult<T> {
        let object_id = ObjectId::parse_str(id)?;
        self.get(doc! { "_id": object_id }).await
    }

    /// Returns the single record matching the filter.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record matches
    /// - `MultipleMatches` if two or more records match
    pub async fn get(&self, filter: impl Into<Filter>) -> MangroveResult<T> {
        // Probing with limit 2 is enough to distinguish one match from many.
        let mut matches = self.find_with_options(filter, &limit_to(2)).await?;
        match matches.len() {
            0 => Err(MangroveError::new(
                "No record matched the filter",
                ErrorKind::NotFound,
            )),
            1 => Ok(matches.remove(0)),
            _ => Err(MangroveError::new(
                "More than one record matched the filter",
                ErrorKind::MultipleMatches,
            )),
        }
    }

    /// Returns all records in the collection, in store order.
    pub async fn get_all(&self) -> MangroveResult<Vec<T>> {
        self.find_with_options(Filter::from(Document::new()), &FindOptions::new())
            .await
    }

    /// Returns up to `limit` records, in store order. A zero limit
    /// returns no records.
    ///
    /// For a deterministic order, use [`find_with_options`] with a sort.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `limit` is negative.
    ///
    /// [`find_with_options`]: ObjectRepository::find_with_options
    pub async fn get_top(&self, limit: i64) -> MangroveResult<Vec<T>> {
        if limit < 0 {
            return Err(MangroveError::new(
                &format!("Limit must be non-negative, got {}", limit),
                ErrorKind::InvalidArgument,
            ));
        }
        // The store treats limit 0 as "no limit"; a zero request means
        // zero records here.
        if limit == 0 {
            self.collection()?;
            return Ok(Vec::new());
        }
        self.find_with_options(Filter::from(Document::new()), &limit_to(limit))
            .await
    }

    /// Returns all records matching the filter.
    pub async fn filter_by(&self, filter: impl Into<Filter>) -> MangroveResult<Vec<T>> {
        self.find_with_options(filter, &FindOptions::new()).await
    }

    /// Returns records matching the filter, with sorting and pagination
    /// applied by the store.
    pub async fn find_with_options(
        &self,
        filter: impl Into<Filter>,
        options: &FindOptions,
    ) -> MangroveResult<Vec<T>> {
        let collection = self.collection()?;
        let mut find = collection.find(filter.into().into_document());
        if let Some(sort) = &options.sort {
            find = find.sort(sort.clone());
        }
        if let Some(skip) = options.skip {
            find = find.skip(skip);
        }
        if let Some(limit) = options.limit {
            find = find.limit(limit);
        }
        let cursor = find.await?;
        let results = cursor.try_collect().await?;
        Ok(results)
    }

    /// Returns projected shapes for the records matching the filter.
    ///
    /// `P` describes the projected shape and must deserialize from the
    /// fields selected by `projection`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// #[derive(Deserialize)]
    /// struct TitleOnly { title: String }
    ///
    /// let titles: Vec<TitleOnly> = books
    ///     .filter_by_projected(field("pages").gt(300), doc! { "title": 1 })
    ///     .await?;
    /// ```
    pub async fn filter_by_projected<P>(
        &self,
        filter: impl Into<Filter>,
        projection: Document,
    ) -> MangroveResult<Vec<P>>
    where
        P: DeserializeOwned + Unpin + Send + Sync,
    {
        let collection = self.collection()?.clone_with_type::<P>();
        let cursor = collection
            .find(filter.into().into_document())
            .projection(projection)
            .await?;
        let results = cursor.try_collect().await?;
        Ok(results)
    }

    /// Replaces the record with the given identifier wholesale and returns
    /// the record as stored after the replace.
    ///
    /// # Errors
    ///
    /// - `InvalidId` if `id` is not a well-formed ObjectId string
    /// - `NotFound` if no record has that identifier
    pub async fn replace(&self, id: &str, entity: &T) -> MangroveResult<T> {
        let collection = self.collection()?;
        let object_id = ObjectId::parse_str(id)?;
        let replaced = collection
            .find_one_and_replace(doc! { "_id": object_id }, entity)
            .return_document(ReturnDocument::After)
            .await?;
        replaced.ok_or_else(|| {
            MangroveError::new(&format!("No record with id {}", id), ErrorKind::NotFound)
        })
    }

    /// Deletes the record with the given identifier.
    ///
    /// Returns whether a record was deleted.
    pub async fn delete(&self, id: &str) -> MangroveResult<bool> {
        let collection = self.collection()?;
        let object_id = ObjectId::parse_str(id)?;
        let result = collection.delete_one(doc! { "_id": object_id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Deletes every record in the collection. Irreversible.
    pub async fn delete_all(&self) -> MangroveResult<bool> {
        let collection = self.collection()?;
        log::warn!("deleting every document in collection {}", collection.name());
        collection.delete_many(Document::new()).await?;
        Ok(true)
    }

    /// Runs a full-text search through a store-side search index.
    ///
    /// The search index must already exist on the collection; results come
    /// back in store relevance order.
    pub async fn text_search(
        &self,
        index: &str,
        search_field: &str,
        search_text: &str,
    ) -> MangroveResult<Vec<T>> {
        self.aggregate_typed(pipeline::text_search(index, search_field, search_text))
            .await
    }

    /// Returns records whose field matches the regular expression pattern.
    ///
    /// The pattern is handed to the store verbatim; no anchoring or
    /// escaping is performed.
    pub async fn regex_search(
        &self,
        search_field: &str,
        pattern: &str,
    ) -> MangroveResult<Vec<T>> {
        self.aggregate_typed(pipeline::regex_match(search_field, pattern))
            .await
    }

    /// Configures TTL-based auto-expiry on the bound collection.
    ///
    /// Restarts the entity's expiry clock by setting its creation
    /// timestamp to the current instant, then ensures a TTL index exists
    /// on [`MangroveEntity::CREATED_AT_FIELD`] with the requested expiry.
    /// The setup is idempotent: if an equivalent index already exists
    /// (same name, same single key, expiry within one second) no new index
    /// is created.
    ///
    /// Returns `true` if a new index was created, `false` if an equivalent
    /// one was already present.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `amount` is zero or negative (the entity is
    ///   left untouched)
    /// - `IndexingError` if listing or creating the index fails
    pub async fn configure_auto_expiry(
        &self,
        entity: &mut T,
        amount: i64,
        unit: TimeUnit,
    ) -> MangroveResult<bool> {
        let collection = self.collection()?;
        let expire_after = ttl::expire_after(amount, unit)?;
        entity.set_created_at(Utc::now());

        let mut indexes = collection.list_indexes().await.map_err(|err| {
            MangroveError::with_cause("Failed to list indexes", ErrorKind::IndexingError, err)
        })?;
        while let Some(model) = indexes.try_next().await.map_err(|err| {
            MangroveError::with_cause("Failed to read index listing", ErrorKind::IndexingError, err)
        })? {
            if ttl::matches_ttl_index(&model, T::CREATED_AT_FIELD, expire_after) {
                log::debug!(
                    "equivalent TTL index already present on {}",
                    collection.name()
                );
                return Ok(false);
            }
        }

        let options = IndexOptions::builder()
            .name(ttl::ttl_index_name(T::CREATED_AT_FIELD))
            .expire_after(expire_after)
            .build();
        let mut keys = Document::new();
        keys.insert(T::CREATED_AT_FIELD, 1);
        let model = IndexModel::builder().keys(keys).options(options).build();

        let created = collection.create_index(model).await.map_err(|err| {
            MangroveError::with_cause("Failed to create TTL index", ErrorKind::IndexingError, err)
        })?;
        log::debug!(
            "created TTL index {} on {}",
            created.index_name,
            collection.name()
        );
        Ok(true)
    }

    async fn aggregate_typed(&self, pipeline: Vec<Document>) -> MangroveResult<Vec<T>> {
        let collection = self.collection()?;
        let mut cursor = collection.aggregate(pipeline).await?;
        let mut results = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            results.push(bson::from_document(document)?);
        }
        Ok(results)
    }
}
