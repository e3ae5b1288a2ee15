//! HTTP client for the city facts backend.
//!
//! One reusable [`FactsService`] wraps a shared `reqwest::Client` and
//! implements the lookup flow: read stored facts, fall back to the
//! generation endpoint on a miss, persist what was generated.

use std::time::Duration;

use reqwest::StatusCode;

use crate::common::models::{ApiErrorBody, CityFacts};

/// Message shown to the user when the backend gives us nothing better.
pub const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum FactsError {
    /// Non-2xx response. `detail` is extracted from the FastAPI error body
    /// when the body is parseable.
    #[error("backend returned {status}: {detail:?}")]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },
    /// Connect, timeout or body-decode failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The generation endpoint answered 2xx but produced no text.
    #[error("generation endpoint returned empty facts")]
    EmptyGeneration,
}

impl FactsError {
    /// The single-line message surfaced in the error banner. Transport
    /// details stay in the log, not in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            FactsError::Api { detail: Some(d), .. } if !d.trim().is_empty() => d.clone(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

pub struct FactsService {
    http: reqwest::Client,
}

impl FactsService {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest client");
        Self { http }
    }

    /// Stored facts for `name`. A miss is a `200` with empty `facts`,
    /// so `Ok` here does not mean the city is known.
    pub async fn get_facts(&self, base_url: &str, name: &str) -> Result<CityFacts, FactsError> {
        let url = format!("{}/city/{}", base_url, urlencoding::encode(name));
        log::info!("[FACTS] GET {}", url);
        let resp = self.http.get(&url).send().await?;
        Self::read_city_body(resp).await
    }

    /// Ask the backend to generate fresh facts for `name`.
    pub async fn generate_facts(&self, base_url: &str, name: &str) -> Result<CityFacts, FactsError> {
        let url = format!("{}/city/gemini/{}", base_url, urlencoding::encode(name));
        log::info!("[FACTS] GET {}", url);
        let resp = self.http.get(&url).send().await?;
        Self::read_city_body(resp).await
    }

    /// Persist generated facts so the next lookup is a direct hit.
    pub async fn save_facts(&self, base_url: &str, city: &CityFacts) -> Result<CityFacts, FactsError> {
        let url = format!("{}/city", base_url);
        log::info!("[FACTS] POST {} ({})", url, city.name);
        let resp = self.http.post(&url).json(city).send().await?;
        Self::read_city_body(resp).await
    }

    /// The full submit flow: stored facts if any, otherwise generate and
    /// persist before handing the result back. The persist is part of the
    /// transaction; if it fails the whole flow fails and nothing is shown.
    pub async fn fetch_or_generate(&self, base_url: &str, name: &str) -> Result<CityFacts, FactsError> {
        let stored = self.get_facts(base_url, name).await?;
        if stored.has_facts() {
            return Ok(stored);
        }

        log::info!("[FACTS] no stored facts for '{}', generating", name);
        let generated = self.generate_facts(base_url, name).await?;
        if !generated.has_facts() {
            return Err(FactsError::EmptyGeneration);
        }

        self.save_facts(base_url, &generated).await?;
        Ok(generated)
    }

    async fn read_city_body(resp: reqwest::Response) -> Result<CityFacts, FactsError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail);
            log::warn!("[FACTS] backend error {}: {:?}", status, detail);
            return Err(FactsError::Api { status, detail });
        }
        Ok(resp.json::<CityFacts>().await?)
    }
}
