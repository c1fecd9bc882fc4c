pub mod farmer;
pub mod weather;

use common::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use crate::settings;

/// Error body returned by the farmer service
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub success: bool,
}

/// Send a GET and reject transport failures and non-2xx statuses.
///
/// `label` names the request in logs; the service's error body is surfaced
/// when it has one.
async fn send_get(url: &str, label: &str) -> Result<Response, String> {
    log::debug!("GET request to: {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", label, error_msg);
        error_msg
    })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", label, response.status());
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error {}: {}", label, err.code, err.error);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", response.status());
                log::error!("GET {} - {}", label, error_msg);
                error_msg
            }
        });
    }

    Ok(response)
}

async fn parse_json<T>(response: Response, label: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("GET {} - Response received, parsing JSON", label);
    response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", label, error_msg);
        error_msg
    })
}

/// GET from the versioned API and unwrap the `ApiResponse` envelope
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    let response = send_get(&url, endpoint).await?;
    let api_response: ApiResponse<T> = parse_json(response, endpoint).await?;

    log::info!("GET {} - Success", endpoint);
    Ok(api_response.data)
}

/// GET an absolute URL whose body is the payload itself
pub async fn get_bare<T>(url: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let response = send_get(url, url).await?;
    let data = parse_json(response, url).await?;

    log::info!("GET {} - Success", url);
    Ok(data)
}
