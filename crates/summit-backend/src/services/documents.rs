use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::{DateTime, Document, doc, oid::ObjectId};

use summit::errors::StoreError;
use summit::id::DocumentId;

/// The most collection names reported by [`DocumentStore::describe`].
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// A trait for persisting and reading documents in named collections.
///
/// Identifiers are assigned by the store when a document is inserted; any
/// `_id` already present on a document handed to [`DocumentStore::insert`]
/// is discarded. Implementations are shared between request handlers, so
/// they must be safe to call concurrently.
///
/// # Examples
///
/// ```rust
/// use summit_backend::services::{DocumentStore, MemoryStore};
/// use summit::bson::doc;
///
/// # tokio_test::block_on(async {
/// let store = MemoryStore::new();
/// let id = store.insert("registration", doc! { "name": "Maya" }).await?;
/// let docs = store.find("registration", 10).await?;
/// assert_eq!(docs.len(), 1);
/// # Ok::<_, summit::errors::StoreError>(())
/// # });
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists `document` into `collection` and returns its new identifier.
    ///
    /// Stamps `created_at` and `updated_at` with the insertion time.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] without a connection, [`StoreError::Write`]
    /// if the store rejects the write.
    async fn insert(&self, collection: &str, document: Document)
    -> Result<DocumentId, StoreError>;

    /// Returns up to `limit` documents from `collection`, oldest first.
    ///
    /// # Errors
    ///
    /// [`StoreError::Unavailable`] without a connection, [`StoreError::Read`]
    /// if the query fails.
    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError>;

    /// Returns a best-effort snapshot of the store. Never fails.
    async fn describe(&self) -> StoreStatus;
}

/// Introspection snapshot returned by [`DocumentStore::describe`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoreStatus {
    pub connected: bool,
    pub name: Option<String>,
    pub collections: Vec<String>,
    /// Set when the store is connected but introspection itself failed.
    pub error: Option<String>,
}

impl StoreStatus {
    pub fn disconnected() -> Self {
        Self::default()
    }
}

/// Gives a document its store-assigned `_id` and creation timestamps.
pub(crate) fn stamp(document: Document, id: ObjectId) -> Document {
    let now = DateTime::now();
    let mut stamped = doc! { "_id": id };
    stamped.extend(document.into_iter().filter(|(key, _)| key != "_id"));
    stamped.insert("created_at", now);
    stamped.insert("updated_at", now);
    stamped
}

/// An in-memory implementation of the [`DocumentStore`] trait.
///
/// Collections are kept in a `DashMap`, allowing concurrent access from
/// handlers. Nothing survives a restart, so it is only suitable for tests
/// or for running the API without a database.
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
    connected: bool,
}

impl MemoryStore {
    pub const NAME: &'static str = "memory";

    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
            connected: true,
        }
    }

    /// A store that behaves as if no database connection was ever made.
    pub fn disconnected() -> Self {
        Self {
            collections: DashMap::new(),
            connected: false,
        }
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|entry| entry.value().len())
            .unwrap_or_default()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        if !self.connected {
            return Err(StoreError::Unavailable);
        }

        let id = ObjectId::new();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(stamp(document, id));
        Ok(id.into())
    }

    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError> {
        if !self.connected {
            return Err(StoreError::Unavailable);
        }

        Ok(self
            .collections
            .get(collection)
            .map(|entry| entry.value().iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn describe(&self) -> StoreStatus {
        if !self.connected {
            return StoreStatus::disconnected();
        }

        let mut collections: Vec<String> = self
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        collections.sort();
        collections.truncate(MAX_LISTED_COLLECTIONS);

        StoreStatus {
            connected: true,
            name: Some(Self::NAME.to_string()),
            collections,
            error: None,
        }
    }
}
