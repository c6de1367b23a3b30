//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without a running document store.

use std::sync::Arc;

use crate::domain::ports::{ArticleRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User collection port.
    pub users: Arc<dyn UserRepository>,
    /// Article collection port.
    pub articles: Arc<dyn ArticleRepository>,
}

impl HttpState {
    /// Bundle the repository ports handlers depend on.
    pub fn new(users: Arc<dyn UserRepository>, articles: Arc<dyn ArticleRepository>) -> Self {
        Self { users, articles }
    }
}
