//! Server construction and wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use gazette_backend::doc::ApiDoc;
use gazette_backend::inbound::http::health::{self, HealthState};
use gazette_backend::inbound::http::state::HttpState;
use gazette_backend::inbound::http::{articles, json_config, users};
use gazette_backend::outbound::persistence::{
    MongoArticleRepository, MongoUserRepository, connect,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Connect to the document store, wire the handlers, and serve until
/// shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let database = connect(config.store()).await.map_err(std::io::Error::other)?;
    let state = HttpState::new(
        Arc::new(MongoUserRepository::new(&database)),
        Arc::new(MongoArticleRepository::new(&database)),
    );

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays shared.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), store = config.store().url(), "server listening");
    server.run().await
}

fn build_app(
    state: HttpState,
    health_state: web::Data<HealthState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/v1")
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::deactivate_user)
        .service(articles::create_article)
        .service(articles::list_articles)
        .service(articles::get_article)
        .service(articles::delete_article);

    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(health_state)
        .app_data(json_config())
        .service(api)
        .service(health::ready)
        .service(health::live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
