use crate::config::Config;
use crate::models::{
    error::AppError,
    forecast::{
        Extreme, ForecastSeries, ForecastSnapshot, HourlyForecastPoint, PeakLowSummary,
        decode_hour,
    },
    supply::{SupplySnapshot, SupplySource},
};
use serde::Deserialize;

// CONSTANTS
const FORECAST_PATH: &str = "/api/forecast/latest";
const HOURLY_DATA_PATH: &str = "/api/hourly-data/latest";
const DEFAULT_SOURCE_COLOR: &str = "#9CA3AF";

/// Upper bound on any single MW figure; larger values are treated as corrupt
const MAX_PLAUSIBLE_MW: f64 = 1_000_000.0;

// API CONFIGURATION
/// Configuration for the forecast API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the latest 24-hour forecast document.
    pub fn forecast_url(&self) -> String {
        format!("{}{FORECAST_PATH}", self.base_url)
    }

    /// URL of the latest supply mix and interchange document.
    pub fn hourly_data_url(&self) -> String {
        format!("{}{HOURLY_DATA_PATH}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(Config::api_base_url);
        ApiConfig { base_url }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ApiForecastResponse {
    #[serde(default)]
    forecast_data: Vec<ApiForecastPoint>,
    #[serde(default)]
    peak: Option<ApiExtreme>,
    #[serde(default)]
    low: Option<ApiExtreme>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    total_hours: Option<usize>,
}

#[derive(Deserialize, Debug)]
struct ApiForecastPoint {
    hour: String,
    #[serde(default)]
    predicted: Option<f64>,
    #[serde(default)]
    actual: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct ApiExtreme {
    hour: String,
    #[serde(default)]
    demand: Option<f64>,
}

#[derive(Deserialize, Debug)]
struct ApiHourlyResponse {
    #[serde(default)]
    supply_breakdown: Vec<ApiSupplySource>,
    #[serde(default)]
    imports: Option<f64>,
    #[serde(default)]
    exports: Option<f64>,
    #[serde(default)]
    fetched_at: Option<String>,
    #[serde(default)]
    file_key: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiSupplySource {
    source: String,
    #[serde(default)]
    mw: Option<f64>,
    #[serde(default)]
    color: Option<String>,
}

// VALIDATION
/// A parsed document together with the entries dropped while validating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    pub value: T,
    pub rejected: Vec<String>,
}

fn is_valid_hour(hour: &str) -> bool {
    decode_hour(hour).is_some_and(|minutes| minutes % 60 == 0)
}

fn is_valid_mw(value: f64) -> bool {
    value.is_finite() && (0.0..=MAX_PLAUSIBLE_MW).contains(&value)
}

impl ApiForecastPoint {
    fn validate(self) -> Result<HourlyForecastPoint, String> {
        if !is_valid_hour(&self.hour) {
            return Err(format!("invalid hour label '{}'", self.hour));
        }
        let Some(predicted) = self.predicted.filter(|v| is_valid_mw(*v)) else {
            return Err(format!("invalid predicted demand at {}", self.hour));
        };
        let actual = self.actual.filter(|v| is_valid_mw(*v));
        Ok(HourlyForecastPoint::new(self.hour, predicted, actual))
    }
}

impl ApiExtreme {
    fn validate(self) -> Option<Extreme> {
        let demand = self.demand.filter(|v| is_valid_mw(*v))?;
        is_valid_hour(&self.hour).then_some(Extreme {
            hour: self.hour,
            demand,
        })
    }
}

impl ApiForecastResponse {
    fn validate(self) -> Validated<ForecastSnapshot> {
        let mut rejected = Vec::new();
        let points = self
            .forecast_data
            .into_iter()
            .filter_map(|p| p.validate().map_err(|e| rejected.push(e)).ok())
            .collect::<Vec<_>>();

        let total_hours = self.total_hours.unwrap_or(points.len());

        Validated {
            value: ForecastSnapshot {
                series: ForecastSeries::normalize(points),
                extremes: PeakLowSummary {
                    peak: self.peak.and_then(ApiExtreme::validate),
                    low: self.low.and_then(ApiExtreme::validate),
                },
                timestamp: self.timestamp,
                total_hours,
            },
            rejected,
        }
    }
}

impl ApiHourlyResponse {
    fn validate(self) -> Validated<SupplySnapshot> {
        let mut rejected = Vec::new();
        let sources = self
            .supply_breakdown
            .into_iter()
            .filter_map(|s| match s.mw.filter(|v| is_valid_mw(*v)) {
                Some(mw) => {
                    let color = s.color.unwrap_or_else(|| DEFAULT_SOURCE_COLOR.to_string());
                    Some(SupplySource::new(s.source, mw, color))
                }
                None => {
                    rejected.push(format!("invalid output for source '{}'", s.source));
                    None
                }
            })
            .collect();

        Validated {
            value: SupplySnapshot {
                sources,
                imports: self.imports.filter(|v| is_valid_mw(*v)),
                exports: self.exports.filter(|v| is_valid_mw(*v)),
                fetched_at: self.fetched_at.filter(|s| !s.is_empty()),
                file_key: self.file_key.filter(|s| !s.is_empty()),
            },
            rejected,
        }
    }
}

/// Parses and validates a forecast document.
///
/// A body that does not match the documented shape, or that has no usable
/// hours, is reported as `DataError`.
pub fn parse_forecast(body: &str) -> Result<Validated<ForecastSnapshot>, AppError> {
    let response: ApiForecastResponse = serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Malformed forecast response: {e}")))?;

    let validated = response.validate();
    if validated.value.is_empty() {
        return Err(AppError::DataError("Forecast contains no hours".to_string()));
    }
    Ok(validated)
}

/// Parses and validates a supply mix document.
pub fn parse_hourly_data(body: &str) -> Result<Validated<SupplySnapshot>, AppError> {
    let response: ApiHourlyResponse = serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Malformed hourly data response: {e}")))?;

    let validated = response.validate();
    if validated.value.is_empty() {
        return Err(AppError::DataError("Hourly data contains no supply figures".to_string()));
    }
    Ok(validated)
}

// FORECAST CLIENT
/// HTTP client for the forecast backend.
pub struct ForecastClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ForecastClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the latest 24-hour forecast.
    pub async fn fetch_forecast(&self) -> Result<ForecastSnapshot, AppError> {
        let body = self.fetch(&self.config.forecast_url()).await?;
        let validated = parse_forecast(&body)?;
        log_rejected("forecast", &validated.rejected);
        Ok(validated.value)
    }

    /// Fetches the latest supply mix and interchange figures.
    pub async fn fetch_hourly_data(&self) -> Result<SupplySnapshot, AppError> {
        let body = self.fetch(&self.config.hourly_data_url()).await?;
        let validated = parse_hourly_data(&body)?;
        log_rejected("hourly data", &validated.rejected);
        Ok(validated.value)
    }

    /// Executes a single GET and returns the raw body.
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::ApiError(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

fn log_rejected(document: &str, rejected: &[String]) {
    for reason in rejected {
        gloo::console::warn!(format!("Dropped {document} entry: {reason}"));
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the forecast using default configuration.
pub async fn fetch_forecast() -> Result<ForecastSnapshot, AppError> {
    ForecastClient::new()?.fetch_forecast().await
}

/// Fetches the supply snapshot using default configuration.
pub async fn fetch_hourly_data() -> Result<SupplySnapshot, AppError> {
    ForecastClient::new()?.fetch_hourly_data().await
}
