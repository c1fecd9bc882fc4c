use common::WeatherReport;
use gloo_net::http::Request;
use crate::settings;

/// Fetch current conditions and the forecast from the weather provider.
///
/// Key, location and day count come from the settings. The caller only
/// sees a `String` error; every cause is logged here.
pub async fn fetch_weather_report() -> Result<WeatherReport, String> {
    let settings = settings::get_settings();
    let url = settings.weather_forecast_url();
    let days = settings.forecast_days.to_string();

    if settings.weather_api_key.is_empty() {
        log::warn!("No weather API key configured; the provider will reject the request");
    }
    log::debug!(
        "GET request to: {} (q={}, days={})",
        url,
        settings.weather_location,
        days
    );

    let response = Request::get(&url)
        .query([
            ("key", settings.weather_api_key.as_str()),
            ("q", settings.weather_location.as_str()),
            ("days", days.as_str()),
        ])
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET forecast.json - {}", error_msg);
            error_msg
        })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET forecast.json - {}", error_msg);
        return Err(error_msg);
    }

    let body = response.text().await.map_err(|e| {
        let error_msg = format!("Failed to read response: {}", e);
        log::error!("GET forecast.json - {}", error_msg);
        error_msg
    })?;

    let report = WeatherReport::from_json(&body).map_err(|e| {
        log::error!("GET forecast.json - {}", e);
        e.to_string()
    })?;

    log::info!(
        "Weather for {}: {} at {}°C, {} forecast days",
        report.location,
        report.snapshot.condition,
        report.snapshot.temperature,
        report.forecast.len()
    );
    Ok(report)
}
