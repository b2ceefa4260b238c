//! API routes definition

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the API router with all endpoints
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        // Item routes
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/items/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        // User routes
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/users/:user_id", get(handlers::get_user))
        // Auth routes
        .route("/login", post(handlers::login))
        .route("/config", get(handlers::get_config))
        // Misc
        .route("/message", get(handlers::get_message));

    // Left unrouted (404) when disabled
    let router = if state.config.server.enable_debug_reset {
        router.route("/debug/reset", post(handlers::reset))
    } else {
        router
    };

    router.with_state(state)
}
