use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::FarmlandDto;
use model::entities::{farmer, farmland};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace, warn};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::{farmland_dto, PageQuery, ValidJson};
use crate::schemas::{api_error, ApiError, ApiResponse, AppState, ErrorResponse};

fn validate_positive_acres(size: &Decimal) -> Result<(), ValidationError> {
    if size.is_sign_positive() && !size.is_zero() {
        Ok(())
    } else {
        Err(ValidationError::new("size_acres must be positive"))
    }
}

/// Request body for registering a plot
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateFarmlandRequest {
    /// Owner NIC; omit for unassigned land
    pub nic: Option<String>,
    /// Planted crop id (default: 0, nothing planted)
    #[validate(range(min = 0))]
    pub crop_id: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[schema(value_type = String, example = "2.50")]
    #[validate(custom(function = "validate_positive_acres"))]
    pub size_acres: Decimal,
}

/// Filter and pagination for the farmland listing
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct FarmlandQuery {
    /// `true`: owned plots only, `false`: unowned only, absent: all
    pub assigned: Option<bool>,
    /// Page number (default: 1)
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u64>,
    /// Page size (default: 50)
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
}

impl FarmlandQuery {
    fn page(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Register a plot of farmland
#[utoipa::path(
    post,
    path = "/api/v1/farmlands",
    tag = "farmlands",
    request_body = CreateFarmlandRequest,
    responses(
        (status = 201, description = "Farmland created successfully", body = ApiResponse<FarmlandDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Owner not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_farmland(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateFarmlandRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FarmlandDto>>), ApiError> {
    trace!("Entering create_farmland function");

    if let Some(nic) = &request.nic {
        match farmer::Entity::find_by_id(nic.clone()).one(&state.db).await {
            Ok(Some(_)) => debug!("Owner {} verified", nic),
            Ok(None) => {
                warn!("Farmland owner {} does not exist", nic);
                return Err(api_error(
                    StatusCode::NOT_FOUND,
                    "FARMER_NOT_FOUND",
                    format!("Farmer with NIC {} not found", nic),
                ));
            }
            Err(db_error) => {
                error!("Failed to verify farmland owner {}: {}", nic, db_error);
                return Err(api_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Failed to create farmland",
                ));
            }
        }
    }

    let new_land = farmland::ActiveModel {
        nic: Set(request.nic),
        crop_id: Set(request.crop_id.unwrap_or(farmland::NO_CROP)),
        location: Set(request.location),
        size_acres: Set(request.size_acres),
        ..Default::default()
    };

    match new_land.insert(&state.db).await {
        Ok(model) => {
            info!("Farmland created with ID: {}, location: {}", model.id, model.location);
            Ok((
                StatusCode::CREATED,
                Json(ApiResponse::ok(farmland_dto(model), "Farmland created successfully")),
            ))
        }
        Err(db_error) => {
            error!("Failed to create farmland: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Failed to create farmland",
            ))
        }
    }
}

/// List farmland, optionally filtered by ownership
#[utoipa::path(
    get,
    path = "/api/v1/farmlands",
    tag = "farmlands",
    params(FarmlandQuery),
    responses(
        (status = 200, description = "Farmland retrieved successfully", body = ApiResponse<Vec<FarmlandDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_farmlands(
    Valid(Query(query)): Valid<Query<FarmlandQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FarmlandDto>>>, ApiError> {
    let (page, limit) = query.page().resolve();
    debug!(
        "Fetching farmlands - assigned: {:?}, page: {}, limit: {}",
        query.assigned,
        page + 1,
        limit
    );

    let select = match query.assigned {
        Some(true) => farmland::Entity::find_assigned(),
        Some(false) => farmland::Entity::find_unassigned(),
        None => farmland::Entity::find().order_by_asc(farmland::Column::Id),
    };

    match select.paginate(&state.db, limit).fetch_page(page).await {
        Ok(lands) => {
            info!("Successfully retrieved {} farmlands", lands.len());
            let data = lands.into_iter().map(farmland_dto).collect();
            Ok(Json(ApiResponse::ok(data, "Farmlands retrieved successfully")))
        }
        Err(db_error) => {
            error!("Failed to retrieve farmlands: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Failed to retrieve farmlands",
            ))
        }
    }
}

/// Get a plot by id
#[utoipa::path(
    get,
    path = "/api/v1/farmlands/{id}",
    tag = "farmlands",
    params(
        ("id" = i32, Path, description = "Farmland ID"),
    ),
    responses(
        (status = 200, description = "Farmland retrieved successfully", body = ApiResponse<FarmlandDto>),
        (status = 404, description = "Farmland not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_farmland(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FarmlandDto>>, ApiError> {
    match farmland::Entity::find_by_id(id).one(&state.db).await {
        Ok(Some(model)) => {
            debug!("Retrieved farmland {}", id);
            Ok(Json(ApiResponse::ok(farmland_dto(model), "Farmland retrieved successfully")))
        }
        Ok(None) => {
            warn!("Farmland {} not found", id);
            Err(api_error(
                StatusCode::NOT_FOUND,
                "FARMLAND_NOT_FOUND",
                format!("Farmland with ID {} not found", id),
            ))
        }
        Err(db_error) => {
            error!("Failed to retrieve farmland {}: {}", id, db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Failed to retrieve farmland",
            ))
        }
    }
}
