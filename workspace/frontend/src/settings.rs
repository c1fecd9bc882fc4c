use log::Level;
use web_sys::window;

/// Prefix of every localStorage key the portal reads or writes.
pub const STORAGE_PREFIX: &str = "cropmaster_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Farmer-lookup service host (e.g., "localhost")
    pub farmer_api_host: String,

    /// Farmer-lookup service port
    pub farmer_api_port: u16,

    /// Path prefix of the service's REST API (the lookup route sits outside it)
    pub api_path: String,

    /// Use HTTPS for farmer service requests
    pub farmer_api_use_https: bool,

    /// Base URL of the weather provider
    pub weather_api_base: String,

    /// Weather provider key; empty means the request will be rejected
    pub weather_api_key: String,

    /// Location queried for the weather report
    pub weather_location: String,

    /// Number of forecast days requested
    pub forecast_days: u8,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            farmer_api_host: "localhost".to_string(),
            farmer_api_port: 8080,
            api_path: "/api/v1".to_string(),
            farmer_api_use_https: false,
            weather_api_base: "https://api.weatherapi.com/v1".to_string(),
            weather_api_key: option_env!("CROPMASTER_WEATHER_API_KEY")
                .unwrap_or_default()
                .to_string(),
            weather_location: "Salem".to_string(),
            forecast_days: 5,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                settings.apply_overrides(|key| {
                    storage
                        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                        .ok()
                        .flatten()
                });
            }
        }

        settings
    }

    /// Overwrite fields with stored values. `lookup` receives the key without
    /// the storage prefix; unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("api_host") {
            self.farmer_api_host = host;
        }
        if let Some(port) = lookup("api_port").and_then(|p| p.parse().ok()) {
            self.farmer_api_port = port;
        }
        if let Some(path) = lookup("api_path") {
            self.api_path = path;
        }
        if let Some(use_https) = lookup("api_use_https") {
            self.farmer_api_use_https = use_https.eq_ignore_ascii_case("true");
        }
        if let Some(base) = lookup("weather_api_base") {
            self.weather_api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(key) = lookup("weather_api_key") {
            self.weather_api_key = key;
        }
        if let Some(location) = lookup("weather_location") {
            self.weather_location = location;
        }
        if let Some(days) = lookup("forecast_days").and_then(|d| d.parse::<u8>().ok()) {
            if days > 0 {
                self.forecast_days = days;
            }
        }
        if let Some(level) = lookup("log_level").and_then(|l| parse_level(&l)) {
            self.log_level = level;
        }
    }

    /// Protocol, host and port of the farmer service
    pub fn service_base_url(&self) -> String {
        let protocol = if self.farmer_api_use_https { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.farmer_api_host, self.farmer_api_port)
    }

    /// Base URL of the versioned REST API
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.service_base_url(), self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }

    /// The profile lookup lives at the service root.
    pub fn farmer_lookup_url(&self, nic: &str) -> String {
        format!("{}/farmer/{}", self.service_base_url(), urlencoding::encode(nic))
    }

    pub fn weather_forecast_url(&self) -> String {
        format!("{}/forecast.json", self.weather_api_base)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

/// Read one prefixed key from localStorage.
pub fn load_item(key: &str) -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()?
}

/// Write one prefixed key to localStorage; failures are only logged.
pub fn store_item(key: &str, value: &str) {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|storage| storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), value));
    match stored {
        Some(Ok(())) => log::trace!("Stored {}{}", STORAGE_PREFIX, key),
        Some(Err(e)) => log::warn!("Failed to store {}{}: {:?}", STORAGE_PREFIX, key, e),
        None => log::warn!("localStorage unavailable, {} not persisted", key),
    }
}
