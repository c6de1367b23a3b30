//! MongoDB persistence adapters.
//!
//! This module provides concrete implementations of the domain repository
//! ports backed by MongoDB collections.
//!
//! # Architecture
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   document structs and domain types. The author-existence rule and every
//!   other business decision live above this layer.
//! - **Internal documents**: The persisted layout (`documents.rs`, including
//!   the `is_active`/`deleted_at` soft-delete fields) is an implementation
//!   detail, never exposed to the domain layer or the wire.
//! - **Strongly typed errors**: All driver errors are mapped to
//!   [`StorageError`](crate::domain::ports::StorageError) and propagated
//!   without retry.

mod documents;
mod mongo_article_repository;
mod mongo_user_repository;
mod store;

pub use mongo_article_repository::MongoArticleRepository;
pub use mongo_user_repository::MongoUserRepository;
pub use store::{DEFAULT_DATABASE, DEFAULT_STORE_URL, StoreConfig, connect};
