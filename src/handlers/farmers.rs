use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{FarmerDto, FarmlandDto};
use model::entities::{farmer, farmland};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{farmer_dto, farmland_dto, PageQuery, ValidJson};
use crate::schemas::{api_error, ApiError, ApiResponse, AppState, ErrorResponse};

/// Request body for registering a farmer
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateFarmerRequest {
    /// National identity card number (unique)
    #[validate(length(min = 1, max = 20))]
    pub nic: String,
    /// Display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Filter for a farmer's farmland
#[derive(Debug, Deserialize, IntoParams)]
pub struct FarmerFarmlandQuery {
    /// `true`: planted plots only, `false`: unplanted only, absent: all
    pub cropped: Option<bool>,
}

fn farmer_not_found(nic: &str) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "FARMER_NOT_FOUND",
        format!("Farmer with NIC {} not found", nic),
    )
}

fn nic_taken(nic: &str) -> ApiError {
    api_error(
        StatusCode::CONFLICT,
        "NIC_ALREADY_EXISTS",
        format!("Farmer with NIC '{}' already exists", nic),
    )
}

/// A concurrent create can pass the existence check and still lose the
/// primary-key race; that surfaces here as a unique violation.
pub(crate) fn farmer_insert_error(nic: &str, db_error: DbErr) -> ApiError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = db_error.sql_err() {
        warn!("Farmer with NIC {} inserted concurrently: {}", nic, detail);
        return nic_taken(nic);
    }
    error!("Failed to create farmer '{}': {}", nic, db_error);
    database_error("Failed to create farmer")
}

fn database_error(context: &str) -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", context)
}

/// Load a farmer or fail with 404.
async fn require_farmer(state: &AppState, nic: &str) -> Result<farmer::Model, ApiError> {
    match farmer::Entity::find_by_id(nic.to_string()).one(&state.db).await {
        Ok(Some(model)) => Ok(model),
        Ok(None) => {
            warn!("Farmer with NIC {} not found", nic);
            Err(farmer_not_found(nic))
        }
        Err(db_error) => {
            error!("Failed to look up farmer {}: {}", nic, db_error);
            Err(database_error("Failed to look up farmer"))
        }
    }
}

/// Resolve a farmer's profile by NIC.
///
/// Returns the bare profile (no response wrapper); the portal only reads
/// `name` from it. Results are cached.
#[utoipa::path(
    get,
    path = "/farmer/{nic}",
    tag = "farmers",
    params(
        ("nic" = String, Path, description = "Farmer NIC"),
    ),
    responses(
        (status = 200, description = "Farmer found", body = FarmerDto),
        (status = 404, description = "Farmer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn lookup_farmer(
    Path(nic): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FarmerDto>, ApiError> {
    trace!("Entering lookup_farmer for NIC: {}", nic);

    if let Some(cached) = state.cache.get(&nic).await {
        debug!("Farmer {} served from cache", nic);
        return Ok(Json(cached));
    }

    let dto = farmer_dto(require_farmer(&state, &nic).await?);
    state.cache.insert(nic.clone(), dto.clone()).await;
    info!("Resolved farmer {} ({})", nic, dto.name);

    Ok(Json(dto))
}

/// Register a new farmer
#[utoipa::path(
    post,
    path = "/api/v1/farmers",
    tag = "farmers",
    request_body = CreateFarmerRequest,
    responses(
        (status = 201, description = "Farmer created successfully", body = ApiResponse<FarmerDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "NIC already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_farmer(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateFarmerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FarmerDto>>), ApiError> {
    trace!("Entering create_farmer function");

    match farmer::Entity::find_by_id(request.nic.clone()).one(&state.db).await {
        Ok(Some(_)) => {
            warn!("Farmer with NIC {} already exists", request.nic);
            return Err(nic_taken(&request.nic));
        }
        Ok(None) => {}
        Err(db_error) => {
            error!("Failed to check for existing farmer {}: {}", request.nic, db_error);
            return Err(database_error("Failed to create farmer"));
        }
    }

    let new_farmer = farmer::ActiveModel {
        nic: Set(request.nic.clone()),
        name: Set(request.name),
        phone: Set(request.phone),
        address: Set(request.address),
    };

    match new_farmer.insert(&state.db).await {
        Ok(model) => {
            info!("Farmer created with NIC: {}, name: {}", model.nic, model.name);
            // a stale miss could not have been cached, but a recreated NIC could
            state.cache.invalidate(&model.nic).await;
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::ok(farmer_dto(model), "Farmer created successfully")),
            ))
        }
        Err(db_error) => Err(farmer_insert_error(&request.nic, db_error)),
    }
}

/// List farmers
#[utoipa::path(
    get,
    path = "/api/v1/farmers",
    tag = "farmers",
    params(PageQuery),
    responses(
        (status = 200, description = "Farmers retrieved successfully", body = ApiResponse<Vec<FarmerDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_farmers(
    Valid(Query(query)): Valid<Query<PageQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FarmerDto>>>, ApiError> {
    let (page, limit) = query.resolve();
    debug!("Fetching farmers - page: {}, limit: {}", page + 1, limit);

    match farmer::Entity::find()
        .order_by_asc(farmer::Column::Nic)
        .paginate(&state.db, limit)
        .fetch_page(page)
        .await
    {
        Ok(farmers) => {
            info!("Successfully retrieved {} farmers", farmers.len());
            let data = farmers.into_iter().map(farmer_dto).collect();
            Ok(Json(ApiResponse::ok(data, "Farmers retrieved successfully")))
        }
        Err(db_error) => {
            error!("Failed to retrieve farmers: {}", db_error);
            Err(database_error("Failed to retrieve farmers"))
        }
    }
}

/// Get a farmer by NIC
#[utoipa::path(
    get,
    path = "/api/v1/farmers/{nic}",
    tag = "farmers",
    params(
        ("nic" = String, Path, description = "Farmer NIC"),
    ),
    responses(
        (status = 200, description = "Farmer retrieved successfully", body = ApiResponse<FarmerDto>),
        (status = 404, description = "Farmer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_farmer(
    Path(nic): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FarmerDto>>, ApiError> {
    let model = require_farmer(&state, &nic).await?;
    debug!("Retrieved farmer {}", model.nic);
    Ok(Json(ApiResponse::ok(farmer_dto(model), "Farmer retrieved successfully")))
}

/// Remove a farmer. Their farmland stays, without an owner.
#[utoipa::path(
    delete,
    path = "/api/v1/farmers/{nic}",
    tag = "farmers",
    params(
        ("nic" = String, Path, description = "Farmer NIC"),
    ),
    responses(
        (status = 200, description = "Farmer deleted successfully", body = ApiResponse<String>),
        (status = 404, description = "Farmer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_farmer(
    Path(nic): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    trace!("Entering delete_farmer for NIC: {}", nic);

    match farmer::Entity::delete_by_id(nic.clone()).exec(&state.db).await {
        Ok(result) if result.rows_affected > 0 => {
            state.cache.invalidate(&nic).await;
            info!("Farmer {} deleted successfully", nic);
            Ok(Json(ApiResponse::ok(
                format!("Farmer {} deleted", nic),
                "Farmer deleted successfully",
            )))
        }
        Ok(_) => {
            warn!("Farmer {} not found for deletion (no rows affected)", nic);
            Err(farmer_not_found(&nic))
        }
        Err(db_error) => {
            error!("Failed to delete farmer {}: {}", nic, db_error);
            Err(database_error("Failed to delete farmer"))
        }
    }
}

/// List a farmer's farmland, optionally split by whether a crop is planted
#[utoipa::path(
    get,
    path = "/api/v1/farmers/{nic}/farmlands",
    tag = "farmers",
    params(
        ("nic" = String, Path, description = "Farmer NIC"),
        FarmerFarmlandQuery,
    ),
    responses(
        (status = 200, description = "Farmland retrieved successfully", body = ApiResponse<Vec<FarmlandDto>>),
        (status = 404, description = "Farmer not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_farmer_farmlands(
    Path(nic): Path<String>,
    Query(query): Query<FarmerFarmlandQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FarmlandDto>>>, ApiError> {
    require_farmer(&state, &nic).await?;

    let select = match query.cropped {
        Some(true) => farmland::Entity::find_cropped_by_farmer(&nic),
        Some(false) => farmland::Entity::find_uncropped_by_farmer(&nic),
        None => farmland::Entity::find_by_farmer(&nic),
    };

    match select.all(&state.db).await {
        Ok(lands) => {
            info!("Retrieved {} farmlands for farmer {} (cropped: {:?})", lands.len(), nic, query.cropped);
            let data = lands.into_iter().map(farmland_dto).collect();
            Ok(Json(ApiResponse::ok(data, "Farmlands retrieved successfully")))
        }
        Err(db_error) => {
            error!("Failed to retrieve farmlands for {}: {}", nic, db_error);
            Err(database_error("Failed to retrieve farmlands"))
        }
    }
}
