//! Port abstraction for article persistence adapters.

use async_trait::async_trait;

use crate::domain::{Article, NewArticle, RecordId};

use super::StorageError;

/// Persistence operations over the article collection.
///
/// This is a pure storage boundary: the author-existence precondition is the
/// handler's responsibility, and articles carry no soft-delete state.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Persist a new article unconditionally and return the canonical stored
    /// form.
    async fn create(&self, new_article: NewArticle) -> Result<Article, StorageError>;

    /// Fetch an article by identifier.
    async fn find(&self, id: &RecordId) -> Result<Option<Article>, StorageError>;

    /// List all articles in store iteration order.
    async fn list(&self) -> Result<Vec<Article>, StorageError>;

    /// Hard-delete an article.
    ///
    /// Returns `true` iff a document was removed.
    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError>;
}
