//! Test helpers for inbound HTTP components.
//!
//! Provides in-memory repository implementations and an app builder so
//! handler tests exercise the real routing, extraction, and error mapping
//! without a running document store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use actix_web::{App, web};
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{ArticleRepository, StorageError, UserRepository};
use crate::domain::{Article, EmailAddress, NewArticle, NewUser, RecordId, User};
use crate::inbound::http::error::json_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{articles, users};

fn synthetic_id(seq: u64) -> RecordId {
    let hex = format!("{seq:024x}");
    RecordId::new(hex).expect("synthetic id matches the store grammar")
}

#[derive(Default)]
struct UserStore {
    seq: u64,
    docs: BTreeMap<String, User>,
}

/// In-memory [`UserRepository`] mirroring the store's soft-delete semantics.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<UserStore>,
}

impl InMemoryUserRepository {
    /// Seed an already-deactivated user, returning its identifier.
    pub fn insert_deactivated(&self, username: &str, email: &str) -> RecordId {
        let mut state = self.state.lock().expect("state lock");
        state.seq += 1;
        let id = synthetic_id(state.seq);
        let user = User::new(
            id.clone(),
            username.to_owned(),
            EmailAddress::new(email).expect("valid email"),
            None,
            false,
            Some(Utc::now()),
        );
        state.docs.insert(id.as_str().to_owned(), user);
        id
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StorageError> {
        let mut state = self.state.lock().expect("state lock");
        state.seq += 1;
        let id = synthetic_id(state.seq);
        let user = User::new(
            id.clone(),
            new_user.username().to_owned(),
            new_user.email().clone(),
            new_user.full_name().map(ToOwned::to_owned),
            true,
            None,
        );
        state.docs.insert(id.as_str().to_owned(), user.clone());
        Ok(user)
    }

    async fn find_active(&self, id: &RecordId) -> Result<Option<User>, StorageError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.docs.get(id.as_str()).filter(|u| u.is_active()).cloned())
    }

    async fn list_active(&self) -> Result<Vec<User>, StorageError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.docs.values().filter(|u| u.is_active()).cloned().collect())
    }

    async fn deactivate(&self, id: &RecordId) -> Result<bool, StorageError> {
        let mut state = self.state.lock().expect("state lock");
        let Some(user) = state.docs.get(id.as_str()) else {
            return Ok(false);
        };
        if !user.is_active() {
            return Ok(false);
        }
        let deactivated = User::new(
            user.id().clone(),
            user.username().to_owned(),
            user.email().clone(),
            user.full_name().map(ToOwned::to_owned),
            false,
            Some(Utc::now()),
        );
        state.docs.insert(id.as_str().to_owned(), deactivated);
        Ok(true)
    }
}

#[derive(Default)]
struct ArticleStore {
    seq: u64,
    docs: BTreeMap<String, Article>,
}

/// In-memory [`ArticleRepository`] with hard-delete semantics.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    state: Mutex<ArticleStore>,
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, new_article: NewArticle) -> Result<Article, StorageError> {
        let mut state = self.state.lock().expect("state lock");
        state.seq += 1;
        // Offset so article ids never collide with user ids in fixtures.
        let id = synthetic_id(0x1000 + state.seq);
        let article = Article::new(
            id.clone(),
            new_article.title().to_owned(),
            new_article.content().to_owned(),
            new_article.author_id().clone(),
        );
        state.docs.insert(id.as_str().to_owned(), article.clone());
        Ok(article)
    }

    async fn find(&self, id: &RecordId) -> Result<Option<Article>, StorageError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.docs.get(id.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<Article>, StorageError> {
        let state = self.state.lock().expect("state lock");
        Ok(state.docs.values().cloned().collect())
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, StorageError> {
        let mut state = self.state.lock().expect("state lock");
        Ok(state.docs.remove(id.as_str()).is_some())
    }
}

/// User repository whose every operation fails, for 500-path coverage.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _new_user: NewUser) -> Result<User, StorageError> {
        Err(StorageError::operation("injected failure"))
    }

    async fn find_active(&self, _id: &RecordId) -> Result<Option<User>, StorageError> {
        Err(StorageError::operation("injected failure"))
    }

    async fn list_active(&self) -> Result<Vec<User>, StorageError> {
        Err(StorageError::operation("injected failure"))
    }

    async fn deactivate(&self, _id: &RecordId) -> Result<bool, StorageError> {
        Err(StorageError::operation("injected failure"))
    }
}

/// Bundle in-memory repositories into handler state.
pub fn in_memory_state() -> HttpState {
    HttpState::new(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryArticleRepository::default()),
    )
}

/// Build the full application surface against the given state.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(
            web::scope("/v1")
                .service(users::create_user)
                .service(users::list_users)
                .service(users::get_user)
                .service(users::deactivate_user)
                .service(articles::create_article)
                .service(articles::list_articles)
                .service(articles::get_article)
                .service(articles::delete_article),
        )
}
