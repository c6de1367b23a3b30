//! Article entity.
//!
//! Articles reference their author by record identifier. The reference is
//! checked against the active user set at creation time only; it is never
//! re-validated on read and there is no cascade when the author is later
//! deactivated.

use crate::domain::RecordId;

/// Validated input for creating an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    title: String,
    content: String,
    author_id: RecordId,
}

impl NewArticle {
    /// Construct the creation input.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: RecordId) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }

    /// Requested title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Requested body content.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Identifier of the authoring user.
    pub fn author_id(&self) -> &RecordId {
        &self.author_id
    }
}

/// Stored article in its canonical persisted form.
///
/// ## Invariants
/// - `author_id` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: RecordId,
    title: String,
    content: String,
    author_id: RecordId,
}

impl Article {
    /// Build an [`Article`] from components already validated by the store layer.
    pub fn new(
        id: RecordId,
        title: String,
        content: String,
        author_id: RecordId,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author_id,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Title as persisted.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Body content as persisted.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Identifier of the authoring user.
    pub fn author_id(&self) -> &RecordId {
        &self.author_id
    }
}
