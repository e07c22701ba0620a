//! MongoDB-backed document store

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Database,
    bson::{Document, doc, oid::ObjectId},
};

use summit::errors::StoreError;
use summit::id::DocumentId;
use summit::log;

use super::documents::{DocumentStore, MAX_LISTED_COLLECTIONS, StoreStatus, stamp};

/// MongoDB client wrapper.
///
/// Holds no database when constructed with [`MongoStore::disconnected`]; every
/// data operation then fails with [`StoreError::Unavailable`].
#[derive(Clone, Default)]
pub struct MongoStore {
    database: Option<Database>,
}

impl MongoStore {
    /// Connect to `db_name` at `uri` and verify the connection with a ping.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        log::info!("Connecting to MongoDB database '{}'", db_name);

        // Bound server selection so an unreachable host fails startup quickly
        let timeout_uri = if uri.contains('?') {
            format!("{uri}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        } else {
            format!("{uri}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        };

        let client = Client::with_uri_str(&timeout_uri).await?;
        let database = client.database(db_name);
        database.run_command(doc! { "ping": 1 }).await?;

        log::info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            database: Some(database),
        })
    }

    pub fn disconnected() -> Self {
        Self { database: None }
    }

    pub fn is_connected(&self) -> bool {
        self.database.is_some()
    }

    fn database(&self) -> Result<&Database, StoreError> {
        self.database.as_ref().ok_or(StoreError::Unavailable)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        let database = self.database()?;
        let id = ObjectId::new();

        let result = database
            .collection::<Document>(collection)
            .insert_one(stamp(document, id))
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        result
            .inserted_id
            .as_object_id()
            .map(DocumentId::from)
            .ok_or_else(|| StoreError::Write("Failed to get inserted ID".into()))
    }

    async fn find(&self, collection: &str, limit: usize) -> Result<Vec<Document>, StoreError> {
        let database = self.database()?;

        // A zero limit means "no limit" to MongoDB
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = database
            .collection::<Document>(collection)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Read(e.to_string()))
    }

    async fn describe(&self) -> StoreStatus {
        let Some(database) = &self.database else {
            return StoreStatus::disconnected();
        };

        let mut status = StoreStatus {
            connected: true,
            name: Some(database.name().to_string()),
            ..StoreStatus::default()
        };

        match database.list_collection_names().await {
            Ok(mut names) => {
                names.truncate(MAX_LISTED_COLLECTIONS);
                status.collections = names;
            }
            Err(e) => {
                log::warn!("Failed to list collections: {}", e);
                status.error = Some(e.to_string());
            }
        }

        status
    }
}
