use std::{fmt, time::Duration};

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use super::http_client;
use crate::domain::{i18n::language_name, preferences::Language};

const GENERATIVE_API_URL: &str = "https://generativelanguage.googleapis.com";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, thiserror::Error)]
pub enum CommentaryError {
    #[error("no API key configured for the commentary model")]
    MissingApiKey,
    #[error("commentary request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("commentary request returned {0}")]
    Status(StatusCode),
    #[error("failed to decode commentary response: {0}")]
    Decode(String),
    #[error("commentary response contained no text")]
    EmptyResponse,
}

/// Everything the model is told about the current conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentaryRequest {
    pub city: String,
    pub description: String,
    pub temperature_c: f32,
    pub humidity: f32,
    pub wind_speed_kmh: f32,
    pub language: Language,
}

impl CommentaryRequest {
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "You are a friendly, helpful weather assistant. Write a short, conversational \
             commentary about the weather in {city}.\n\n\
             Conditions: {description}\n\
             Temperature: {temperature:.1}°C\n\
             Humidity: {humidity:.0}%\n\
             Wind speed: {wind:.1} km/h\n\n\
             Say in a sentence what the weather feels like, then give one practical \
             recommendation (for example whether to spend time outdoors or carry an umbrella). \
             If the conditions are dangerous, include a clear safety warning. \
             Reply in {language} ({code}) and put the whole reply in the `alert` field.",
            city = self.city,
            description = self.description,
            temperature = self.temperature_c,
            humidity = self.humidity,
            wind = self.wind_speed_kmh,
            language = language_name(self.language, Language::En),
            code = self.language.code(),
        )
    }
}

#[derive(Clone)]
pub struct CommentaryClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl fmt::Debug for CommentaryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommentaryClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl CommentaryClient {
    #[must_use]
    pub fn new(model: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self::with_base_url(GENERATIVE_API_URL, model, api_key, timeout)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let api_key = self.api_key.as_deref().ok_or(CommentaryError::MissingApiKey)?;

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt() }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": { "alert": { "type": "STRING" } },
                    "required": ["alert"],
                },
            },
        });

        debug!(city = %request.city, language = request.language.code(), "requesting commentary");
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(CommentaryError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CommentaryError::Status(status));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|err| CommentaryError::Decode(err.to_string()))?;
        extract_alert(payload)
    }

    /// Swallows every failure; `None` means "no commentary available".
    pub async fn generate_best_effort(&self, request: &CommentaryRequest) -> Option<String> {
        match self.generate(request).await {
            Ok(text) => Some(text),
            Err(CommentaryError::MissingApiKey) => {
                debug!("commentary disabled: no API key");
                None
            }
            Err(err) => {
                warn!(city = %request.city, error = %err, "commentary generation failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AlertOutput {
    alert: String,
}

fn extract_alert(payload: GenerateResponse) -> Result<String, CommentaryError> {
    let text: String = payload
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(CommentaryError::EmptyResponse);
    }

    let output: AlertOutput =
        serde_json::from_str(&text).map_err(|err| CommentaryError::Decode(err.to_string()))?;
    let alert = output.alert.trim();
    if alert.is_empty() {
        return Err(CommentaryError::EmptyResponse);
    }
    Ok(alert.to_string())
}
