use log::error;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::Config;
use crate::model::{ForecastEntry, ForecastResponse, Location};

/// A request-level failure: the whole query failed and nothing can be
/// rendered. Per-field gaps inside a successful response are not errors here;
/// they are handled by the formatter.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the forecast provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse forecast response body: {0}")]
    Malformed(#[source] serde_json::Error),
}

/// Client for the provider forecast endpoint. One instance per run, one
/// request per instance in practice; no retry, no backoff.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            http: Client::new(),
        }
    }

    /// Issue the single GET for `location` and return the ordered forecast
    /// entries. Any failure is logged with its cause and returned; the caller
    /// decides what the user sees.
    pub async fn fetch_forecast(
        &self,
        location: &Location,
    ) -> Result<Vec<ForecastEntry>, FetchError> {
        match self.request_entries(location).await {
            Ok(entries) => Ok(entries),
            Err(err) => {
                error!("There was an issue retrieving the forecast from the API: {err}");
                Err(err)
            }
        }
    }

    async fn request_entries(&self, location: &Location) -> Result<Vec<ForecastEntry>, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", location.to_string().as_str()),
                ("units", "imperial"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        entries_from_response(status, &body)
    }
}

/// Turn a raw status/body pair into forecast entries. Split out of the client
/// so the non-2xx and malformed-body paths are testable without a server.
fn entries_from_response(status: StatusCode, body: &str) -> Result<Vec<ForecastEntry>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status { status, body: truncate_body(body) });
    }

    let parsed: ForecastResponse =
        serde_json::from_str(body).map_err(FetchError::Malformed)?;

    Ok(parsed.list)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Cut on a char boundary; byte MAX may fall inside a multi-byte character.
    let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
    format!("{}...", &body[..cut])
}
