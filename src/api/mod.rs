// API layer module (HTTP adapters)
// Routes, handlers and the HTTP error mapping

pub mod errors;
pub mod handlers;

use axum::{routing::get, Router};
use sqlx::MySqlPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{customers, health};

/// Builds the application router with the pool as shared state
pub fn router(pool: MySqlPool) -> Router {
    // CORS is open to every origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/", get(health::health_check))
        // Customer routes
        .route(
            "/clientes",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/clientes/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(pool)
}
