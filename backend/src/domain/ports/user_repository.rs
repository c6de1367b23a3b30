//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use crate::domain::{NewUser, RecordId, User};

use super::StorageError;

/// Persistence operations over the user collection.
///
/// Users are soft-deleted: every read here filters on the active flag, and
/// [`UserRepository::deactivate`] is the only exposed state transition.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the canonical stored form.
    ///
    /// The adapter re-reads the inserted document so that store-side
    /// defaulting or coercion cannot diverge from what callers observe.
    async fn create(&self, new_user: NewUser) -> Result<User, StorageError>;

    /// Fetch an active user by identifier.
    ///
    /// Returns `None` both when no document matches and when a document
    /// exists but is inactive.
    async fn find_active(&self, id: &RecordId) -> Result<Option<User>, StorageError>;

    /// List all active users in store iteration order.
    async fn list_active(&self) -> Result<Vec<User>, StorageError>;

    /// Atomically transition an active user to inactive, stamping the
    /// deactivation time.
    ///
    /// Returns `true` only if a document was actually transitioned; `false`
    /// when the user never existed or was already inactive. The update must
    /// be a single conditional store operation so that two concurrent
    /// deactivations cannot both report success.
    async fn deactivate(&self, id: &RecordId) -> Result<bool, StorageError>;
}
