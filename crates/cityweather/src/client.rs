use crate::city::City;
use crate::config::WeatherConfig;
use crate::report::WeatherReport;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("weather service returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("malformed weather response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("forecast for {city} contains no periods")]
    EmptyForecast { city: String },
    #[error("unparseable wind speed {value:?}")]
    WindSpeed { value: String },
    #[error("failed to start fetch runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

// The slice of api.weather.gov responses we actually consume. Anything that
// doesn't match is a Parse error rather than a silently defaulted field.

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    /// Absolute URL of the forecast for the grid cell containing the point.
    forecast: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPeriod {
    temperature: f32,
    /// Free-text like "10 mph" or "5 to 10 mph".
    wind_speed: String,
}

/// Client for the National Weather Service API. Current conditions for a
/// point take two requests: `/points/{lat},{lon}` resolves the forecast URL
/// for the containing grid cell, and that URL yields the forecast periods.
pub struct NwsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn current_conditions(&self, city: &City) -> Result<WeatherReport, WeatherError> {
        // More than 4 decimal places makes the API redirect.
        let points_url = format!(
            "{}/points/{:.4},{:.4}",
            self.base_url, city.latitude, city.longitude
        );
        let points: PointsResponse = self.get_json(&points_url).await?;
        let forecast: ForecastResponse = self.get_json(&points.properties.forecast).await?;

        let current = forecast
            .properties
            .periods
            .first()
            .ok_or_else(|| WeatherError::EmptyForecast {
                city: city.name.clone(),
            })?;

        Ok(WeatherReport {
            city: city.name.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
            temperature_f: current.temperature,
            wind_speed_mph: parse_wind_speed(&current.wind_speed)?,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, WeatherError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// The leading number of an NWS wind speed string; ranges like
/// "5 to 10 mph" report their low end.
fn parse_wind_speed(value: &str) -> Result<f32, WeatherError> {
    value
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f32>().ok())
        .ok_or_else(|| WeatherError::WindSpeed {
            value: value.to_string(),
        })
}
