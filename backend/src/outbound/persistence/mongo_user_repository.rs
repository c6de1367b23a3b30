//! MongoDB-backed [`UserRepository`] adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{DateTime, doc};
use mongodb::{Collection, Database};
use tracing::debug;

use crate::domain::ports::{StorageError, UserRepository};
use crate::domain::{NewUser, RecordId, User};

use super::documents::{UserDocument, map_store_error, object_id};

const COLLECTION: &str = "users";

/// User collection adapter.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create an adapter over the `users` collection of the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StorageError> {
        let document = UserDocument::from_new(&new_user);
        let inserted = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_store_error)?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::operation("store assigned a non-object-id key"))?;

        // Re-read the canonical stored form so store-side defaulting cannot
        // diverge from what callers observe.
        let stored = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| StorageError::operation("inserted user missing on re-read"))?;
        debug!(user_id = %id, "user document created");
        stored.into_domain()
    }

    async fn find_active(&self, id: &RecordId) -> Result<Option<User>, StorageError> {
        let key = object_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": key, "is_active": true })
            .await
            .map_err(map_store_error)?;
        document.map(UserDocument::into_domain).transpose()
    }

    async fn list_active(&self) -> Result<Vec<User>, StorageError> {
        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! { "is_active": true })
            .await
            .map_err(map_store_error)?
            .try_collect()
            .await
            .map_err(map_store_error)?;
        documents.into_iter().map(UserDocument::into_domain).collect()
    }

    async fn deactivate(&self, id: &RecordId) -> Result<bool, StorageError> {
        let key = object_id(id)?;
        // One conditional update: the filter and the transition are a single
        // store operation, so concurrent deactivations cannot both match.
        let result = self
            .collection
            .update_one(
                doc! { "_id": key, "is_active": true },
                doc! { "$set": { "is_active": false, "deleted_at": DateTime::now() } },
            )
            .await
            .map_err(map_store_error)?;
        Ok(result.modified_count > 0)
    }
}
