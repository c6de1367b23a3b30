//! Persisted document layouts and the document ⇄ domain mapping layer.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::ports::StorageError;
use crate::domain::{Article, EmailAddress, NewArticle, NewUser, RecordId, User};

/// Translate a driver error into the port error type.
pub(crate) fn map_store_error(error: mongodb::error::Error) -> StorageError {
    StorageError::operation(error.to_string())
}

/// Convert a validated record identifier into the store's key type.
pub(crate) fn object_id(id: &RecordId) -> Result<ObjectId, StorageError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|error| StorageError::operation(format!("record id is not a store key: {error}")))
}

fn record_id(id: ObjectId) -> Result<RecordId, StorageError> {
    RecordId::new(id.to_hex()).map_err(|error| {
        StorageError::operation(format!("store key does not match the id grammar: {error}"))
    })
}

fn timestamp(value: DateTime) -> Result<ChronoDateTime<Utc>, StorageError> {
    ChronoDateTime::from_timestamp_millis(value.timestamp_millis())
        .ok_or_else(|| StorageError::operation("stored timestamp out of range"))
}

/// Persisted user document.
///
/// Adds the soft-delete fields `is_active` and `deleted_at` to the wire
/// shape; they never leave this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub deleted_at: Option<DateTime>,
}

impl UserDocument {
    /// Document for a fresh user: active, with no deactivation timestamp and
    /// a store-assigned key.
    pub(crate) fn from_new(new_user: &NewUser) -> Self {
        Self {
            id: None,
            username: new_user.username().to_owned(),
            email: new_user.email().to_string(),
            full_name: new_user.full_name().map(ToOwned::to_owned),
            is_active: true,
            deleted_at: None,
        }
    }

    /// Map the stored form back into the domain entity.
    pub(crate) fn into_domain(self) -> Result<User, StorageError> {
        let id = self
            .id
            .ok_or_else(|| StorageError::operation("user document missing its _id"))?;
        let email = EmailAddress::new(self.email).map_err(|error| {
            StorageError::operation(format!("stored email fails validation: {error}"))
        })?;
        let deactivated_at = self.deleted_at.map(timestamp).transpose()?;
        Ok(User::new(
            record_id(id)?,
            self.username,
            email,
            self.full_name,
            self.is_active,
            deactivated_at,
        ))
    }
}

/// Persisted article document. The author reference is stored as a typed key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ArticleDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub content: String,
    pub author_id: ObjectId,
}

impl ArticleDocument {
    /// Document for a fresh article with a store-assigned key.
    pub(crate) fn from_new(new_article: &NewArticle) -> Result<Self, StorageError> {
        Ok(Self {
            id: None,
            title: new_article.title().to_owned(),
            content: new_article.content().to_owned(),
            author_id: object_id(new_article.author_id())?,
        })
    }

    /// Map the stored form back into the domain entity.
    pub(crate) fn into_domain(self) -> Result<Article, StorageError> {
        let id = self
            .id
            .ok_or_else(|| StorageError::operation("article document missing its _id"))?;
        Ok(Article::new(
            record_id(id)?,
            self.title,
            self.content,
            record_id(self.author_id)?,
        ))
    }
}
