//! Weather API payloads and the presentational values the weather report
//! derives from them.
//!
//! The provider's `forecast.json` document is parsed into [`ForecastResponse`]
//! and flattened into a [`WeatherReport`]: one current-conditions snapshot,
//! the location, and one average temperature per forecast day.

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Message shown in place of the report when the fetch fails for any reason.
pub const WEATHER_FETCH_ERROR: &str = "Failed to fetch weather data.";

/// Message shown while the first fetch is in flight.
pub const WEATHER_LOADING_TEXT: &str = "Loading weather data...";

/// Temperatures at or above this many degrees Celsius count as excessive heat.
pub const EXCESSIVE_HEAT_C: f64 = 35.0;

/// Temperatures at or below this many degrees Celsius count as extreme cold.
pub const EXTREME_COLD_C: f64 = 0.0;

#[derive(Debug, Error)]
pub enum WeatherPayloadError {
    #[error("Malformed weather payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ===================== Provider payload =====================

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub location: LocationPayload,
    pub current: CurrentPayload,
    pub forecast: ForecastPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationPayload {
    pub name: String,
    #[serde(default)]
    pub region: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionPayload {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPayload {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub condition: ConditionPayload,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub gust_kph: f64,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub uv: f64,
    pub vis_km: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub forecastday: Vec<ForecastDayPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDayPayload {
    pub date: NaiveDate,
    pub day: DayPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DayPayload {
    pub avgtemp_c: f64,
}

// ===================== Derived values =====================

/// Icon category for a condition string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sun,
    Cloud,
    CloudRain,
    Snowflake,
    Smog,
}

impl WeatherIcon {
    /// Picks an icon by case-sensitive substring match; first match wins.
    ///
    /// Rain is checked before anything else, so "Sunny with Rain showers"
    /// still renders the rain icon. Unknown conditions fall back to a cloud.
    pub fn for_condition(condition: &str) -> Self {
        let icon = if condition.contains("Rain") {
            Self::CloudRain
        } else if condition.contains("Sunny") {
            Self::Sun
        } else if condition.contains("Cloud") {
            Self::Cloud
        } else if condition.contains("Snow") {
            Self::Snowflake
        } else if condition.contains("Fog") {
            Self::Smog
        } else {
            Self::Cloud
        };
        trace!("Condition '{}' mapped to icon {:?}", condition, icon);
        icon
    }

    /// Font Awesome classes for the icon.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Sun => "fas fa-sun",
            Self::Cloud => "fas fa-cloud",
            Self::CloudRain => "fas fa-cloud-rain",
            Self::Snowflake => "fas fa-snowflake",
            Self::Smog => "fas fa-smog",
        }
    }
}

/// Coarse one-line verdict shown under the weather details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalWeatherReport {
    ExcessiveHeat,
    ExtremeCold,
    HeavyRain,
    CloudySkies,
    ModerateWeather,
}

impl FinalWeatherReport {
    /// Temperature thresholds are checked before the condition text.
    pub fn classify(temperature: f64, condition: &str) -> Self {
        if temperature >= EXCESSIVE_HEAT_C {
            Self::ExcessiveHeat
        } else if temperature <= EXTREME_COLD_C {
            Self::ExtremeCold
        } else if condition.contains("Rain") {
            Self::HeavyRain
        } else if condition.contains("Cloud") {
            Self::CloudySkies
        } else {
            Self::ModerateWeather
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ExcessiveHeat => "Excessive Heat",
            Self::ExtremeCold => "Extreme Cold",
            Self::HeavyRain => "Heavy Rain",
            Self::CloudySkies => "Cloudy Skies",
            Self::ModerateWeather => "Moderate Weather",
        }
    }
}

impl fmt::Display for FinalWeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// CSS class for the report container's background.
pub fn background_class(condition: Option<&str>) -> &'static str {
    match condition {
        Some(c) if c.contains("Sunny") => "sunny-bg",
        Some(c) if c.contains("Rain") => "rainy-bg",
        Some(c) if c.contains("Cloud") => "cloudy-bg",
        _ => "default-bg",
    }
}

/// Current conditions, flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: String,
    pub icon: WeatherIcon,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub gust_speed: f64,
    pub pressure: f64,
    pub precipitation: f64,
    pub uv_index: f64,
    pub visibility: f64,
}

impl WeatherSnapshot {
    pub fn final_report(&self) -> FinalWeatherReport {
        FinalWeatherReport::classify(self.temperature, &self.condition)
    }

    pub fn background_class(&self) -> &'static str {
        background_class(Some(&self.condition))
    }
}

impl From<CurrentPayload> for WeatherSnapshot {
    fn from(current: CurrentPayload) -> Self {
        let icon = WeatherIcon::for_condition(&current.condition.text);
        Self {
            temperature: current.temp_c,
            feels_like: current.feelslike_c,
            condition: current.condition.text,
            icon,
            humidity: current.humidity,
            wind_speed: current.wind_kph,
            wind_direction: current.wind_dir,
            gust_speed: current.gust_kph,
            pressure: current.pressure_mb,
            precipitation: current.precip_mm,
            uv_index: current.uv,
            visibility: current.vis_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInfo {
    pub city: String,
    pub region: String,
}

impl fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.region)
    }
}

/// One charted forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Average temperature for the day, degrees Celsius
    pub temp: f64,
}

/// Everything the weather view renders after a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub location: LocationInfo,
    pub forecast: Vec<ForecastPoint>,
}

impl WeatherReport {
    /// Parse a raw `forecast.json` body.
    pub fn from_json(body: &str) -> Result<Self, WeatherPayloadError> {
        let response: ForecastResponse = serde_json::from_str(body)?;
        Ok(Self::from(response))
    }

    /// Chart labels, one per forecast day.
    pub fn forecast_dates(&self) -> Vec<String> {
        self.forecast.iter().map(|p| p.date.to_string()).collect()
    }

    /// Chart values, aligned with [`Self::forecast_dates`].
    pub fn forecast_temperatures(&self) -> Vec<f64> {
        self.forecast.iter().map(|p| p.temp).collect()
    }
}

impl From<ForecastResponse> for WeatherReport {
    fn from(response: ForecastResponse) -> Self {
        let forecast: Vec<ForecastPoint> = response
            .forecast
            .forecastday
            .into_iter()
            .map(|day| ForecastPoint {
                date: day.date,
                temp: day.day.avgtemp_c,
            })
            .collect();
        debug!(
            "Weather report for {}: {} forecast days",
            response.location.name,
            forecast.len()
        );

        Self {
            snapshot: WeatherSnapshot::from(response.current),
            location: LocationInfo {
                city: response.location.name,
                region: response.location.region,
            },
            forecast,
        }
    }
}

// ===================== View state =====================

/// Render state of the weather report.
///
/// Starts loading; a fetch settles it exactly once into either a report or
/// the static error message. The chart is only available with a report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPanel {
    pub loading: bool,
    pub error: Option<String>,
    pub report: Option<WeatherReport>,
}

impl Default for WeatherPanel {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            report: None,
        }
    }
}

impl WeatherPanel {
    pub fn loaded(report: WeatherReport) -> Self {
        Self {
            loading: false,
            error: None,
            report: Some(report),
        }
    }

    /// Any failure collapses to the same message; the cause is only logged.
    pub fn failed() -> Self {
        Self {
            loading: false,
            error: Some(WEATHER_FETCH_ERROR.to_string()),
            report: None,
        }
    }

    /// Text to render instead of the report, if any.
    pub fn status_message(&self) -> Option<&str> {
        if self.loading {
            Some(WEATHER_LOADING_TEXT)
        } else {
            self.error.as_deref()
        }
    }

    /// Report to chart; `None` while loading or after a failure.
    pub fn chart(&self) -> Option<&WeatherReport> {
        match (&self.report, self.status_message()) {
            (Some(report), None) => Some(report),
            _ => None,
        }
    }

    pub fn background_class(&self) -> &'static str {
        background_class(self.report.as_ref().map(|r| r.snapshot.condition.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALEM_FORECAST: &str = r#"{
        "location": {"name": "Salem", "region": "Tamil Nadu", "country": "India"},
        "current": {
            "temp_c": 31.2,
            "feelslike_c": 35.4,
            "condition": {"text": "Partly Cloudy", "icon": "//cdn/116.png", "code": 1003},
            "humidity": 62,
            "wind_kph": 13.0,
            "wind_dir": "WSW",
            "gust_kph": 17.3,
            "pressure_mb": 1009.0,
            "precip_mm": 0.0,
            "uv": 8.0,
            "vis_km": 6.0
        },
        "forecast": {"forecastday": [
            {"date": "2024-10-04", "day": {"avgtemp_c": 28.4, "maxtemp_c": 33.0}},
            {"date": "2024-10-05", "day": {"avgtemp_c": 27.9}},
            {"date": "2024-10-06", "day": {"avgtemp_c": 26.1}}
        ]}
    }"#;

    #[test]
    fn rain_wins_over_every_other_keyword() {
        for condition in [
            "Rain",
            "Light Rain",
            "Sunny with Rain",
            "Cloudy, Rain later",
            "Snow and Rain",
            "Fog then Rain",
        ] {
            assert_eq!(
                WeatherIcon::for_condition(condition),
                WeatherIcon::CloudRain,
                "condition: {condition}"
            );
        }
    }

    #[test]
    fn icon_keywords_and_fallback() {
        assert_eq!(WeatherIcon::for_condition("Sunny"), WeatherIcon::Sun);
        assert_eq!(WeatherIcon::for_condition("Partly Cloudy"), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::for_condition("Blowing Snow"), WeatherIcon::Snowflake);
        assert_eq!(WeatherIcon::for_condition("Freezing Fog"), WeatherIcon::Smog);
        assert_eq!(WeatherIcon::for_condition("Mist"), WeatherIcon::Cloud);
        // matching is case-sensitive
        assert_eq!(WeatherIcon::for_condition("Patchy rain possible"), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::CloudRain.css_class(), "fas fa-cloud-rain");
    }

    #[test]
    fn temperature_thresholds_precede_condition() {
        assert_eq!(
            FinalWeatherReport::classify(35.0, "Heavy Rain"),
            FinalWeatherReport::ExcessiveHeat
        );
        assert_eq!(
            FinalWeatherReport::classify(41.5, "Cloudy"),
            FinalWeatherReport::ExcessiveHeat
        );
        assert_eq!(
            FinalWeatherReport::classify(0.0, "Light Rain"),
            FinalWeatherReport::ExtremeCold
        );
        assert_eq!(
            FinalWeatherReport::classify(-4.0, "Sunny"),
            FinalWeatherReport::ExtremeCold
        );
    }

    #[test]
    fn condition_rules_apply_between_thresholds() {
        assert_eq!(
            FinalWeatherReport::classify(34.9, "Rain and Cloud"),
            FinalWeatherReport::HeavyRain
        );
        assert_eq!(
            FinalWeatherReport::classify(22.0, "Partly Cloudy"),
            FinalWeatherReport::CloudySkies
        );
        assert_eq!(
            FinalWeatherReport::classify(0.1, "Sunny"),
            FinalWeatherReport::ModerateWeather
        );
        assert_eq!(FinalWeatherReport::ExcessiveHeat.to_string(), "Excessive Heat");
        assert_eq!(FinalWeatherReport::ModerateWeather.label(), "Moderate Weather");
    }

    #[test]
    fn background_follows_condition() {
        assert_eq!(background_class(Some("Sunny")), "sunny-bg");
        assert_eq!(background_class(Some("Moderate Rain")), "rainy-bg");
        assert_eq!(background_class(Some("Overcast Cloud")), "cloudy-bg");
        assert_eq!(background_class(Some("Mist")), "default-bg");
        assert_eq!(background_class(None), "default-bg");
    }

    #[test]
    fn parses_provider_document() {
        let report = WeatherReport::from_json(SALEM_FORECAST).unwrap();

        assert_eq!(report.location.to_string(), "Salem, Tamil Nadu");
        assert_eq!(report.snapshot.temperature, 31.2);
        assert_eq!(report.snapshot.feels_like, 35.4);
        assert_eq!(report.snapshot.condition, "Partly Cloudy");
        assert_eq!(report.snapshot.icon, WeatherIcon::Cloud);
        assert_eq!(report.snapshot.humidity, 62.0);
        assert_eq!(report.snapshot.wind_direction, "WSW");
        assert_eq!(report.snapshot.final_report(), FinalWeatherReport::CloudySkies);
        assert_eq!(report.snapshot.background_class(), "cloudy-bg");

        assert_eq!(
            report.forecast_dates(),
            vec!["2024-10-04", "2024-10-05", "2024-10-06"]
        );
        assert_eq!(report.forecast_temperatures(), vec![28.4, 27.9, 26.1]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = WeatherReport::from_json(r#"{"error": {"code": 2006, "message": "API key is invalid."}}"#)
            .unwrap_err();
        assert!(matches!(err, WeatherPayloadError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed weather payload"));
    }

    #[test]
    fn panel_starts_loading_without_chart() {
        let panel = WeatherPanel::default();
        assert!(panel.loading);
        assert_eq!(panel.status_message(), Some(WEATHER_LOADING_TEXT));
        assert!(panel.chart().is_none());
        assert_eq!(panel.background_class(), "default-bg");
    }

    #[test]
    fn failed_fetch_stops_loading_and_hides_chart() {
        let panel = WeatherPanel::failed();
        assert!(!panel.loading);
        assert_eq!(panel.status_message(), Some("Failed to fetch weather data."));
        assert!(panel.chart().is_none());
        assert!(panel.report.is_none());
    }

    #[test]
    fn loaded_panel_exposes_chart() {
        let report = WeatherReport::from_json(SALEM_FORECAST).unwrap();
        let panel = WeatherPanel::loaded(report);
        assert_eq!(panel.status_message(), None);
        assert_eq!(panel.chart().map(|r| r.forecast_temperatures().len()), Some(3));
    }
}
