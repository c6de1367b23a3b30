//! MongoDB-backed [`ArticleRepository`] adapter.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::debug;

use crate::domain::ports::{ArticleRepository, StorageError};
use crate::domain::{Article, NewArticle, RecordId};

use super::documents::{ArticleDocument, map_store_error, object_id};

const COLLECTION: &str = "articles";

/// Article collection adapter.
#[derive(Clone)]
pub struct MongoArticleRepository {
    collection: Collection<ArticleDocument>,
}

impl MongoArticleRepository {
    /// Create an adapter over the `articles` collection of the given database.
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl ArticleRepository for MongoArticleRepository {
    async fn create(&self, new_article: NewArticle) -> Result<Article, StorageError> {
        let document = ArticleDocument::from_new(&new_article)?;
        let inserted = self
            .collection
            .insert_one(&document)
            .await
            .map_err(map_store_error)?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::operation("store assigned a non-object-id key"))?;

        let stored = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| StorageError::operation("inserted article missing on re-read"))?;
        debug!(article_id = %id, "article document created");
        stored.into_domain()
    }

    async fn find(&self, id: &RecordId) -> Result<Option<Article>, StorageError> {
        let key = object_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": key })
            .await
            .map_err(map_store_error)?;
        document.map(ArticleDocument::into_domain).transpose()
    }

    async fn list(&self) -> Result<Vec<Article>, StorageError> {
        let documents: Vec<ArticleDocument> = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_store_error)?
            .try_collect()
            .await
            .map_err(map_store_error)?;
        documents
            .into_iter()
            .map(ArticleDocument::into_domain)
            .collect()
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        let key = object_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": key })
            .await
            .map_err(map_store_error)?;
        Ok(result.deleted_count > 0)
    }
}
