//! HTTP client for the court survey API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::detail::DetailSource;

/// Path of the rayon (district) court assessment collection.
pub const DEFAULT_RAYON_PATH: &str = "/api/v1/assessment/rayon/";

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bearer-token client for the survey API.
pub struct SurveyClient {
    client: reqwest::Client,
    base_url: String,
    rayon_path: String,
}

impl SurveyClient {
    /// Create a client for the given API base URL.
    ///
    /// `base_url` should be like `https://opros.sot.kg` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            rayon_path: DEFAULT_RAYON_PATH.to_string(),
        }
    }

    /// Override the rayon collection path.
    pub fn with_rayon_path(mut self, path: impl Into<String>) -> Self {
        let path = path.into();
        self.rayon_path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        self
    }

    /// Fetch the raw rayon assessment response, `{ "rayon_courts": [...] }`.
    ///
    /// The payload is returned untouched; shape validation belongs to
    /// [`courtmap_core::build`].
    pub async fn fetch_rayon_assessment(&self, token: &str) -> Result<Value, SyncError> {
        let url = format!("{}{}", self.base_url, self.rayon_path);
        info!(url = %url, "fetching rayon assessment data");
        let data = self.get_json(&url, &[], token).await?;
        Ok(data)
    }

    /// Fetch the detailed survey results for one court.
    pub async fn fetch_court_detail(
        &self,
        court_id: i64,
        year: i32,
        token: &str,
    ) -> Result<Value, SyncError> {
        let url = format!("{}/api/v1/results/{court_id}/", self.base_url);
        info!(url = %url, year, "fetching court detail");
        self.get_json(&url, &[("year", year.to_string())], token)
            .await
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<Value, SyncError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DetailSource for SurveyClient {
    type Error = SyncError;

    async fn fetch_detail(
        &self,
        court_id: i64,
        year: i32,
        token: &str,
    ) -> Result<Value, Self::Error> {
        self.fetch_court_detail(court_id, year, token).await
    }
}
