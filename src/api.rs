//! weatherapi.com current-conditions client

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::{Config, ConfigError};
use crate::state::WeatherSnapshot;

/// Shown for transport, status and payload failures alike.
pub const SERVICE_ERROR_MESSAGE: &str = "City not found or weather service error";
pub const TIMEOUT_MESSAGE: &str = "Weather service timed out, please try again";

const MAX_LOGGED_BODY: usize = 200;

/// Fetch error type
///
/// `Display` carries the raw detail for logs; [`FetchError::user_message`] is
/// what the UI shows.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Timeout => TIMEOUT_MESSAGE,
            FetchError::Network(_) | FetchError::Status { .. } | FetchError::Malformed(_) => {
                SERVICE_ERROR_MESSAGE
            }
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            // The request URL holds the API key.
            FetchError::Network(err.without_url().to_string())
        }
    }
}

// ============================================================================
// Response payload
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    condition: ApiCondition,
    humidity: f64,
    pressure_mb: f64,
    wind_kph: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
    icon: Option<String>,
}

/// Map a `current.json` body onto a snapshot
pub fn parse_current(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let data: CurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    Ok(WeatherSnapshot {
        location: data.location.name,
        country: data.location.country,
        temp_c: data.current.temp_c,
        feels_like_c: data.current.feelslike_c,
        condition: data.current.condition.text,
        humidity: data.current.humidity.round().clamp(0.0, 100.0) as u8,
        wind_kph: data.current.wind_kph,
        pressure_mb: data.current.pressure_mb,
        icon_url: data.current.condition.icon.map(normalize_icon_url),
    })
}

/// The API hands out protocol-relative icon links (`//cdn.weatherapi.com/...`).
fn normalize_icon_url(icon: String) -> String {
    if icon.starts_with("//") {
        format!("https:{icon}")
    } else {
        icon
    }
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_LOGGED_BODY) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the current-conditions endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: Config,
}

impl WeatherClient {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn current_url(&self, city: &str) -> String {
        format!(
            "{}/current.json?key={}&q={}&aqi=no",
            self.config.base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(city)
        )
    }

    /// Fetch current conditions for `city`
    #[instrument(skip(self))]
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!("requesting current conditions");
        let result = self.request(city).await;
        if let Err(err) = &result {
            warn!(error = %err, "weather fetch failed");
        }
        result
    }

    async fn request(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let response = self
            .http
            .get(self.current_url(city))
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        let body = response.text().await.map_err(FetchError::from_reqwest)?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        parse_current(&body)
    }
}
