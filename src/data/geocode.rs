use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::http_client;
use crate::domain::{preferences::Language, weather::Place};

const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const RESULT_COUNT: &str = "5";

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

#[must_use]
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(GEOCODE_URL, timeout)
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.into(),
        }
    }

    /// Candidate places in provider order. Every failure collapses to an
    /// empty list; the cause is only logged.
    pub async fn search(&self, query: &str, language: Language) -> Vec<Place> {
        let query = query.trim();
        if !is_searchable(query) {
            return Vec::new();
        }

        match self.fetch(query, language).await {
            Ok(places) => {
                debug!(query, count = places.len(), "geocoding succeeded");
                places
            }
            Err(err) => {
                warn!(query, error = %format!("{err:#}"), "geocoding failed");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, query: &str, language: Language) -> Result<Vec<Place>> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", RESULT_COUNT),
                ("language", language.code()),
                ("format", "json"),
            ])
            .send()
            .await
            .context("geocoding request failed")?
            .error_for_status()
            .context("geocoding request returned non-success status")?;

        let payload: GeocodeResponse = response
            .json()
            .await
            .context("failed to decode geocoding response")?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodeResult::into_place)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    country_code: Option<String>,
    admin1: Option<String>,
}

impl GeocodeResult {
    fn into_place(self) -> Place {
        Place {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country.or(self.country_code).unwrap_or_default(),
            region: self.admin1,
        }
    }
}
