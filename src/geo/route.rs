use crate::config::GeoConfig;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde_json::{Value, json};
use std::time::Duration;

/// Driving time and distance between two addresses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTime {
    pub minutes: u64,
    pub km: f64,
}

impl TravelTime {
    /// From the ORS summary: seconds and meters.
    pub fn from_summary(duration_s: f64, distance_m: f64) -> Self {
        Self {
            minutes: (duration_s / 60.0).floor() as u64,
            km: (distance_m / 100.0).round() / 10.0,
        }
    }
}

/// `[lon, lat]` of the first geocoding feature.
pub fn first_coordinates(geocode: &Value) -> Option<[f64; 2]> {
    let coords = geocode
        .get("features")?
        .get(0)?
        .pointer("/geometry/coordinates")?
        .as_array()?;
    Some([coords.first()?.as_f64()?, coords.get(1)?.as_f64()?])
}

/// Duration and distance of the first route of a directions response.
pub fn route_summary(directions: &Value) -> Option<TravelTime> {
    let summary = directions
        .get("features")?
        .get(0)?
        .pointer("/properties/summary")?;
    Some(TravelTime::from_summary(
        summary.get("duration")?.as_f64()?,
        summary.get("distance")?.as_f64()?,
    ))
}

pub struct RouteClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RouteClient {
    /// `None` when no OpenRouteService key is configured.
    pub fn new(cfg: &GeoConfig) -> AppResult<Option<Self>> {
        let Some(key) = cfg.ors_api_key.clone().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Geo(e.to_string()))?;

        Ok(Some(Self {
            client,
            base_url: cfg.ors_url.trim_end_matches('/').to_string(),
            api_key: key,
        }))
    }

    fn geocode(&self, address: &str) -> AppResult<[f64; 2]> {
        let url = format!("{}/geocode/search", self.base_url);
        let body: Value = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("text", address)])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| AppError::Geo(e.to_string()))?;

        first_coordinates(&body)
            .ok_or_else(|| AppError::Geo(format!("no coordinates for '{}'", address)))
    }

    fn directions(&self, from: [f64; 2], to: [f64; 2]) -> AppResult<TravelTime> {
        let url = format!("{}/v2/directions/driving-car/geojson", self.base_url);
        let body: Value = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&json!({ "coordinates": [from, to] }))
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| AppError::Geo(e.to_string()))?;

        route_summary(&body).ok_or_else(|| AppError::Geo("no route found".into()))
    }

    /// Driving time from `from` to `to`; any failure is logged and gives `None`.
    pub fn travel_time(&self, from: &str, to: &str) -> Option<TravelTime> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return None;
        }

        let result = self
            .geocode(from)
            .and_then(|a| Ok((a, self.geocode(to)?)))
            .and_then(|(a, b)| self.directions(a, b));

        match result {
            Ok(t) => Some(t),
            Err(e) => {
                tracing::warn!(from, to, error = %e, "travel time lookup failed");
                None
            }
        }
    }
}
