use crate::handlers::{
    farmers::{
        create_farmer, delete_farmer, get_farmer, get_farmer_farmlands, get_farmers, lookup_farmer,
    },
    farmlands::{create_farmland, get_farmland, get_farmlands},
    health::health_check,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Lookup used by the portal's side menu
        .route("/farmer/:nic", get(lookup_farmer))
        // Farmer routes
        .route("/api/v1/farmers", post(create_farmer))
        .route("/api/v1/farmers", get(get_farmers))
        .route("/api/v1/farmers/:nic", get(get_farmer))
        .route("/api/v1/farmers/:nic", delete(delete_farmer))
        .route("/api/v1/farmers/:nic/farmlands", get(get_farmer_farmlands))
        // Farmland routes
        .route("/api/v1/farmlands", post(create_farmland))
        .route("/api/v1/farmlands", get(get_farmlands))
        .route("/api/v1/farmlands/:id", get(get_farmland))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Portal is served from another origin
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
