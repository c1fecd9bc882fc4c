use axum::{http::StatusCode, Json};
use common::{FarmerDto, FarmlandDto};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::farmers::CreateFarmerRequest;
use crate::handlers::farmlands::CreateFarmlandRequest;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Farmer profiles by NIC, filled by the lookup endpoint
    pub cache: Cache<String, FarmerDto>,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: &str) -> Self {
        Self {
            data,
            message: message.to_string(),
            success: true,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Handler error: status plus JSON body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, code: &str, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::farmers::lookup_farmer,
        crate::handlers::farmers::create_farmer,
        crate::handlers::farmers::get_farmers,
        crate::handlers::farmers::get_farmer,
        crate::handlers::farmers::delete_farmer,
        crate::handlers::farmers::get_farmer_farmlands,
        crate::handlers::farmlands::create_farmland,
        crate::handlers::farmlands::get_farmlands,
        crate::handlers::farmlands::get_farmland,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            FarmerDto,
            FarmlandDto,
            CreateFarmerRequest,
            CreateFarmlandRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "farmers", description = "Farmer profiles and lookup"),
        (name = "farmlands", description = "Farmland plots"),
    ),
    info(
        title = "CropMaster API",
        description = "Farmer lookup service backing the CropMaster farmer portal",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
