pub mod farmers;
pub mod farmlands;
pub mod health;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use axum_valid::Valid;
use common::{FarmerDto, FarmlandDto};
use model::entities::{farmer, farmland};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::warn;
use utoipa::IntoParams;
use validator::Validate;

use crate::schemas::{api_error, ApiError};

/// Pagination shared by the list endpoints
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct PageQuery {
    /// Page number (default: 1)
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u64>,
    /// Page size (default: 50)
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u64>,
}

impl PageQuery {
    /// Zero-based page index and page size.
    pub fn resolve(&self) -> (u64, u64) {
        (self.page.unwrap_or(1) - 1, self.limit.unwrap_or(50))
    }
}

/// JSON body checked through `Valid<Json<T>>`. Both malformed and invalid
/// bodies are rejected as a 400 `VALIDATION_ERROR` in the usual error shape.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send + 'static,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Valid::<Json<T>>::from_request(req, state).await {
            Ok(Valid(Json(value))) => Ok(Self(value)),
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection);
                Err(api_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", rejection.to_string()))
            }
        }
    }
}

pub fn farmer_dto(model: farmer::Model) -> FarmerDto {
    FarmerDto {
        nic: model.nic,
        name: model.name,
        phone: model.phone,
        address: model.address,
    }
}

pub fn farmland_dto(model: farmland::Model) -> FarmlandDto {
    let cropped = model.is_cropped();
    FarmlandDto {
        id: model.id,
        nic: model.nic,
        crop_id: model.crop_id,
        location: model.location,
        size_acres: model.size_acres,
        cropped,
    }
}
