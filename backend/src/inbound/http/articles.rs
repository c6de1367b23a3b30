//! Article resource handlers.
//!
//! ```text
//! POST   /v1/articles/      create an article (author must be active)
//! GET    /v1/articles/{id}  fetch an article
//! GET    /v1/articles/      list articles
//! DELETE /v1/articles/{id}  hard delete
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::domain::{Article, Error, NewArticle, RecordId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /v1/articles/`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateArticleRequest {
    /// Article title.
    #[schema(example = "On Gardens")]
    pub title: String,
    /// Article body.
    pub content: String,
    /// Identifier of the authoring user; must name an active user.
    #[schema(example = "65f2a0c4d9b1e83a7c5f0d12")]
    pub author_id: String,
}

/// Wire representation of an article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    /// External identifier.
    #[schema(example = "65f2a0c4d9b1e83a7c5f0d13")]
    pub id: String,
    /// Title as stored.
    pub title: String,
    /// Body as stored.
    pub content: String,
    /// Identifier of the authoring user.
    pub author_id: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id().to_string(),
            title: article.title().to_owned(),
            content: article.content().to_owned(),
            author_id: article.author_id().to_string(),
        }
    }
}

fn unknown_author_error(author_id: &str) -> Error {
    Error::invalid_request("author does not exist or is not active")
        .with_details(json!({ "field": "author_id", "value": author_id }))
}

/// Create an article.
///
/// The author reference is a strict precondition: it is resolved against the
/// active user set before anything is persisted, so a rejected request leaves
/// no partial state behind.
#[utoipa::path(
    post,
    path = "/v1/articles/",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created", body = ArticleResponse),
        (status = 400, description = "Author missing or inactive", body = Error),
        (status = 422, description = "Invalid request body", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "createArticle"
)]
#[post("/articles/")]
pub async fn create_article(
    state: web::Data<HttpState>,
    payload: web::Json<CreateArticleRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner();
    let Ok(author_id) = RecordId::new(&request.author_id) else {
        warn!(author_id = %request.author_id, "rejected malformed author id");
        return Err(unknown_author_error(&request.author_id).into());
    };
    if state.users.find_active(&author_id).await?.is_none() {
        warn!(author_id = %author_id, "rejected article naming an unknown or inactive author");
        return Err(unknown_author_error(author_id.as_str()).into());
    }

    let new_article = NewArticle::new(request.title, request.content, author_id);
    let article = state.articles.create(new_article).await?;
    info!(article_id = %article.id(), "article created");
    Ok(HttpResponse::Created().json(ArticleResponse::from(article)))
}

/// Fetch an article by identifier.
#[utoipa::path(
    get,
    path = "/v1/articles/{id}",
    params(("id" = String, Path, description = "External article identifier")),
    responses(
        (status = 200, description = "Article", body = ArticleResponse),
        (status = 404, description = "Article not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "getArticle"
)]
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ArticleResponse>> {
    let raw = path.into_inner();
    let Ok(id) = RecordId::new(&raw) else {
        warn!(id = %raw, "rejected malformed article id");
        return Err(Error::not_found("Article not found").into());
    };
    match state.articles.find(&id).await? {
        Some(article) => Ok(web::Json(ArticleResponse::from(article))),
        None => Err(Error::not_found("Article not found").into()),
    }
}

/// List all articles.
#[utoipa::path(
    get,
    path = "/v1/articles/",
    responses(
        (status = 200, description = "Articles", body = [ArticleResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "listArticles"
)]
#[get("/articles/")]
pub async fn list_articles(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ArticleResponse>>> {
    let articles = state.articles.list().await?;
    Ok(web::Json(
        articles.into_iter().map(ArticleResponse::from).collect(),
    ))
}

/// Hard-delete an article.
#[utoipa::path(
    delete,
    path = "/v1/articles/{id}",
    params(("id" = String, Path, description = "External article identifier")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 404, description = "Article not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["articles"],
    operation_id = "deleteArticle"
)]
#[delete("/articles/{id}")]
pub async fn delete_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let Ok(id) = RecordId::new(&raw) else {
        warn!(id = %raw, "rejected malformed article id");
        return Err(Error::not_found("Article not found").into());
    };
    if state.articles.delete(&id).await? {
        info!(article_id = %id, "article deleted");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(Error::not_found("Article not found").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::state::HttpState as State;
    use crate::inbound::http::test_utils::{
        InMemoryArticleRepository, InMemoryUserRepository, in_memory_state, test_app,
    };
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn create_author<S>(app: &S) -> String
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/v1/users/")
                .set_json(json!({"username": "alice", "email": "alice@example.com"}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("user JSON");
        value
            .get("id")
            .and_then(Value::as_str)
            .expect("generated id")
            .to_owned()
    }

    async fn list_article_count<S>(app: &S) -> usize
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let response = actix_test::call_service(
            app,
            actix_test::TestRequest::get()
                .uri("/v1/articles/")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("list JSON");
        value.as_array().map_or(0, Vec::len)
    }

    #[actix_web::test]
    async fn create_with_active_author_echoes_fields() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let author_id = create_author(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/v1/articles/")
                .set_json(json!({"title": "T", "content": "C", "author_id": author_id}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("article JSON");
        assert_eq!(value.get("title"), Some(&json!("T")));
        assert_eq!(value.get("content"), Some(&json!("C")));
        assert_eq!(value.get("author_id"), Some(&json!(author_id)));
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .expect("generated id");
        assert_eq!(id.len(), 24);
    }

    #[actix_web::test]
    async fn create_with_unknown_author_is_400_and_persists_nothing() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/v1/articles/")
                .set_json(json!({
                    "title": "T",
                    "content": "C",
                    "author_id": "ffffffffffffffffffffffff"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("error JSON");
        assert_eq!(value.get("code"), Some(&json!("invalid_request")));

        assert_eq!(list_article_count(&app).await, 0);
    }

    #[actix_web::test]
    async fn create_with_deactivated_author_is_400() {
        let users = Arc::new(InMemoryUserRepository::default());
        let author_id = users.insert_deactivated("bob", "bob@example.com");
        let state = State::new(users, Arc::new(InMemoryArticleRepository::default()));
        let app = actix_test::init_service(test_app(state)).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/v1/articles/")
                .set_json(json!({
                    "title": "T",
                    "content": "C",
                    "author_id": author_id.as_str()
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(list_article_count(&app).await, 0);
    }

    #[actix_web::test]
    async fn create_with_malformed_author_id_is_400() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/v1/articles/")
                .set_json(json!({"title": "T", "content": "C", "author_id": "nope"}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_removes_the_article_and_is_not_repeatable() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let author_id = create_author(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/v1/articles/")
                .set_json(json!({"title": "T", "content": "C", "author_id": author_id}))
                .to_request(),
        )
        .await;
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("article JSON");
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .expect("generated id")
            .to_owned();

        let first = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/v1/articles/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let get = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/v1/articles/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(get.status(), StatusCode::NOT_FOUND);

        let second = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/v1/articles/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_of_a_never_existing_id_is_404_both_times() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        for _ in 0..2 {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::delete()
                    .uri("/v1/articles/ffffffffffffffffffffffff")
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn list_on_empty_store_is_an_empty_array() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        assert_eq!(list_article_count(&app).await, 0);
    }

    #[actix_web::test]
    async fn article_survives_author_deactivation() {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let author_id = create_author(&app).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/v1/articles/")
                .set_json(json!({"title": "T", "content": "C", "author_id": author_id}))
                .to_request(),
        )
        .await;
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("article JSON");
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .expect("generated id")
            .to_owned();

        let deactivate = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/v1/users/{author_id}"))
                .to_request(),
        )
        .await;
        assert_eq!(deactivate.status(), StatusCode::NO_CONTENT);

        // No cascade: the article still reads back with its original author.
        let get = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/v1/articles/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(get.status(), StatusCode::OK);
        let body = actix_test::read_body(get).await;
        let fetched: Value = serde_json::from_slice(&body).expect("article JSON");
        assert_eq!(fetched.get("author_id"), Some(&json!(author_id)));
    }
}
