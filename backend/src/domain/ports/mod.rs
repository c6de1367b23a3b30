//! Domain ports and supporting types for the hexagonal boundary.

mod article_repository;
mod error;
mod user_repository;

pub use article_repository::ArticleRepository;
pub use error::StorageError;
pub use user_repository::UserRepository;
