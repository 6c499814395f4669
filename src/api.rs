//! Weather backend client
//!
//! The backend proxies OpenWeatherMap and exposes two endpoints taking a
//! free-text `location` parameter. Only the fields the view displays are read.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{validate_query, RequestKind, SearchError};
use crate::state::{CurrentConditions, ForecastEntry, ForecastSeries, WeatherReport};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    sys: SysBlock,
    weather: Vec<ConditionBlock>,
    main: CurrentMain,
    wind: WindBlock,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt_txt: String,
    weather: Vec<ConditionBlock>,
    main: ForecastMain,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
}

fn first_condition(
    weather: Vec<ConditionBlock>,
    request: RequestKind,
) -> Result<ConditionBlock, SearchError> {
    weather
        .into_iter()
        .next()
        .ok_or_else(|| SearchError::Parse {
            request,
            reason: "empty `weather` array".to_string(),
        })
}

impl CurrentResponse {
    fn into_conditions(self) -> Result<CurrentConditions, SearchError> {
        let condition = first_condition(self.weather, RequestKind::Current)?;
        Ok(CurrentConditions {
            name: self.name,
            country: self.sys.country,
            temperature: self.main.temp,
            description: condition.description,
            icon: condition.icon,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
        })
    }
}

impl ForecastResponse {
    fn into_series(self) -> Result<ForecastSeries, SearchError> {
        let entries = self
            .list
            .into_iter()
            .map(|item| {
                let condition = first_condition(item.weather, RequestKind::Forecast)?;
                Ok(ForecastEntry {
                    timestamp: item.dt_txt,
                    temperature: item.main.temp,
                    description: condition.description,
                    icon: condition.icon,
                })
            })
            .collect::<Result<Vec<_>, SearchError>>()?;
        Ok(ForecastSeries { entries })
    }
}

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the two backend endpoints
#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client for `base_url`. Without a timeout the transport default applies.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url: String = base_url.into();
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for one endpoint, with the location URL-encoded
    pub fn endpoint(&self, request: RequestKind, location: &str) -> String {
        format!(
            "{}/{}?location={}",
            self.base_url,
            request.path(),
            urlencoding::encode(location)
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestKind,
        location: &str,
    ) -> Result<T, SearchError> {
        let url = self.endpoint(request, location);
        tracing::debug!(%url, "requesting {request}");

        let transport = |source| SearchError::Transport { request, source };
        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;

        serde_json::from_str(&body).map_err(|e| SearchError::Parse {
            request,
            reason: e.to_string(),
        })
    }

    /// `GET /weather/current?location=...`
    pub async fn fetch_current(&self, location: &str) -> Result<CurrentConditions, SearchError> {
        self.get_json::<CurrentResponse>(RequestKind::Current, location)
            .await?
            .into_conditions()
    }

    /// `GET /weather/forecast?location=...`
    pub async fn fetch_forecast(&self, location: &str) -> Result<ForecastSeries, SearchError> {
        self.get_json::<ForecastResponse>(RequestKind::Forecast, location)
            .await?
            .into_series()
    }

    /// Run one search: current conditions first, then the forecast.
    ///
    /// The forecast is only requested once current conditions succeeded, and
    /// the report is only returned when both did.
    pub async fn fetch_report(&self, location: &str) -> Result<WeatherReport, SearchError> {
        let location = validate_query(location)?;
        let current = self.fetch_current(location).await?;
        let forecast = self.fetch_forecast(location).await?;
        tracing::info!(
            location,
            samples = forecast.entries.len(),
            "weather report loaded"
        );
        Ok(WeatherReport { current, forecast })
    }
}
