//! Domain primitives and ports.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod article;
pub mod error;
pub mod id;
pub mod ports;
pub mod user;

pub use self::article::{Article, NewArticle};
pub use self::error::{Error, ErrorCode};
pub use self::id::{IdError, RecordId};
pub use self::user::{EmailAddress, NewUser, User, UserValidationError};
