//! Types shared between the farmer-lookup service and the browser portal.
//!
//! Transport structs mirror the service's request/response payloads so the
//! frontend can deserialize them without duplicating shapes. The portal's
//! presentation rules (weather derivations, soil report form, side menu)
//! live here too so they can be unit tested off the browser.

pub mod navigation;
pub mod soil_report;
pub mod weather;

pub use navigation::{NavItem, NAV_ITEMS};
pub use soil_report::{SoilField, SoilReportError, SoilReportForm, SoilReportReceipt, SoilType};
pub use weather::{
    FinalWeatherReport, ForecastPoint, LocationInfo, WeatherIcon, WeatherPanel,
    WeatherPayloadError, WeatherReport, WeatherSnapshot,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the service.
/// The service keeps its own definition in `src/schemas.rs` with the same
/// field names; this copy is what the frontend deserializes into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Farmers =====================

/// Farmer profile as returned by `GET /farmer/{nic}` and the farmer API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FarmerDto {
    /// National identity card number
    pub nic: String,
    /// Display name
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

// ===================== Farmlands =====================

/// Farmland response model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FarmlandDto {
    pub id: i32,
    /// Owner NIC, absent for unassigned land
    pub nic: Option<String>,
    /// Planted crop id, 0 when nothing is planted
    pub crop_id: i32,
    pub location: String,
    /// Plot size in acres
    #[schema(value_type = String, example = "2.50")]
    pub size_acres: Decimal,
    /// True when a crop is planted
    pub cropped: bool,
}
