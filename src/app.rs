use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::{config::Config, handlers::rest, service::NoteService};

pub fn build_router(service: Arc<NoteService>, config: &Config) -> Router {
    let mut router = Router::new()
        .route(
            "/api/notes",
            get(rest::get_all_notes).post(rest::create_note),
        )
        .route(
            "/api/notes/{id}",
            put(rest::update_note).delete(rest::delete_note),
        )
        .with_state(service);

    if config.swagger_ui {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", rest::ApiDoc::openapi()),
        );
    }

    router
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
}
