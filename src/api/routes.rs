use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;
use crate::middleware::{make_span_with_request_id, request_id_middleware};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api, scoped to one user's wardrobe
fn api_routes() -> Router<AppState> {
    Router::new()
        // Wardrobe
        .route(
            "/users/:user_id/wardrobe",
            get(handlers::get_wardrobe).post(handlers::add_item),
        )
        .route(
            "/users/:user_id/wardrobe/:item_id",
            delete(handlers::delete_item),
        )
        // Suggestions
        .route(
            "/users/:user_id/suggestions",
            post(handlers::rule_based_suggestions),
        )
        .route(
            "/users/:user_id/suggestions/ai",
            post(handlers::ai_suggestions),
        )
}
