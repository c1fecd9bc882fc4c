//! The daily soil report form hosted by the weather view.
//!
//! Submission is acknowledged in memory only; nothing is sent anywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Silty,
}

impl SoilType {
    /// Options offered by the soil type select, in display order.
    pub const ALL: [SoilType; 4] = [Self::Sandy, Self::Clay, Self::Loamy, Self::Silty];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sandy => "Sandy",
            Self::Clay => "Clay",
            Self::Loamy => "Loamy",
            Self::Silty => "Silty",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid soil type: {}", s))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoilReportError {
    #[error("Please fill in the soil health field.")]
    MissingSoilHealth,
}

/// Named inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilField {
    Weather,
    SoilHealth,
    SoilType,
}

impl FromStr for SoilField {
    type Err = String;

    /// Accepts the `name` attributes used by the form inputs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weather" => Ok(Self::Weather),
            "soilHealth" => Ok(Self::SoilHealth),
            "soilType" => Ok(Self::SoilType),
            other => Err(format!("Unknown soil report field: {}", other)),
        }
    }
}

/// Acknowledgment of an accepted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoilReportReceipt {
    pub weather: String,
    pub soil_health: String,
    pub soil_type: String,
}

impl SoilReportReceipt {
    /// Confirmation text shown to the farmer.
    pub fn message(&self) -> String {
        format!("Daily report submitted! Soil Type: {}", self.soil_type)
    }
}

/// Form state. `soil_type` holds the raw select value, empty when unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoilReportForm {
    pub weather: String,
    pub soil_health: String,
    pub soil_type: String,
}

impl SoilReportForm {
    pub fn set(&mut self, field: SoilField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SoilField::Weather => self.weather = value,
            SoilField::SoilHealth => self.soil_health = value,
            SoilField::SoilType => self.soil_type = value,
        }
    }

    /// Same as [`Self::set`], returning the updated form.
    pub fn with(mut self, field: SoilField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn selected_soil_type(&self) -> Option<SoilType> {
        self.soil_type.parse().ok()
    }

    /// Validate and acknowledge the report.
    ///
    /// On rejection the form is left untouched. On success the soil fields are
    /// cleared and the weather field is reset to `current_condition`.
    pub fn submit(&mut self, current_condition: &str) -> Result<SoilReportReceipt, SoilReportError> {
        if self.soil_health.is_empty() {
            warn!("Soil report rejected: soil health missing");
            return Err(SoilReportError::MissingSoilHealth);
        }

        let receipt = SoilReportReceipt {
            weather: std::mem::take(&mut self.weather),
            soil_health: std::mem::take(&mut self.soil_health),
            soil_type: std::mem::take(&mut self.soil_type),
        };
        self.weather = current_condition.to_string();
        debug!("Soil report accepted for soil type '{}'", receipt.soil_type);

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SoilReportForm {
        SoilReportForm::default()
            .with(SoilField::Weather, "Partly Cloudy")
            .with(SoilField::SoilType, "Loamy")
            .with(SoilField::SoilHealth, "Good, moist")
    }

    #[test]
    fn empty_soil_health_is_rejected_without_touching_state() {
        let mut form = filled().with(SoilField::SoilHealth, "");
        let before = form.clone();

        let err = form.submit("Sunny").unwrap_err();

        assert_eq!(err, SoilReportError::MissingSoilHealth);
        assert_eq!(err.to_string(), "Please fill in the soil health field.");
        assert_eq!(form, before);
    }

    #[test]
    fn empty_soil_health_is_rejected_even_with_nothing_else_set() {
        let mut form = SoilReportForm::default();
        assert!(form.submit("Mist").is_err());
        assert_eq!(form, SoilReportForm::default());
    }

    #[test]
    fn accepted_report_clears_soil_fields_and_keeps_weather() {
        let mut form = filled();

        let receipt = form.submit("Partly Cloudy").unwrap();

        assert_eq!(receipt.soil_type, "Loamy");
        assert_eq!(receipt.soil_health, "Good, moist");
        assert_eq!(receipt.message(), "Daily report submitted! Soil Type: Loamy");
        assert_eq!(form.soil_health, "");
        assert_eq!(form.soil_type, "");
        assert_eq!(form.weather, "Partly Cloudy");
    }

    #[test]
    fn weather_is_reset_to_current_condition() {
        let mut form = filled().with(SoilField::Weather, "edited by hand");
        form.submit("Light Rain").unwrap();
        assert_eq!(form.weather, "Light Rain");
    }

    #[test]
    fn soil_type_is_optional_for_submission() {
        let mut form = SoilReportForm::default().with(SoilField::SoilHealth, "Dry");
        let receipt = form.submit("Sunny").unwrap();
        assert_eq!(receipt.message(), "Daily report submitted! Soil Type: ");
    }

    #[test]
    fn field_names_and_soil_types_parse() {
        assert_eq!("soilHealth".parse::<SoilField>(), Ok(SoilField::SoilHealth));
        assert_eq!("soilType".parse::<SoilField>(), Ok(SoilField::SoilType));
        assert!("soil_type".parse::<SoilField>().is_err());

        let form = filled();
        assert_eq!(form.selected_soil_type(), Some(SoilType::Loamy));
        assert_eq!("Peat".parse::<SoilType>(), Err("Invalid soil type: Peat".to_string()));
        assert_eq!(SoilType::ALL.map(SoilType::as_str), ["Sandy", "Clay", "Loamy", "Silty"]);
    }
}
