// SPDX-License-Identifier: Apache-2.0

use faunatrack_api::{ApiError, SubmitSightingRequest};
use faunatrack_model::{SightingRecord, SpeciesRecord, StatsSnapshot};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Client-side failure taxonomy. `Api` carries the server's structured
/// error envelope; the rest are transport or decoding problems.
#[derive(Debug)]
#[non_exhaustive]
pub enum ClientError {
    Transport(reqwest::Error),
    Api(ApiError),
    Decode(String),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "transport error: {err}"),
            Self::Api(err) => write!(f, "api error: {err}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Api(err) => Some(err),
            Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

/// Everything the dashboard needs, fetched as one joined unit.
/// All three requests must succeed or the whole fetch fails.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub species: Vec<SpeciesRecord>,
    pub sightings: Vec<SightingRecord>,
    pub stats: StatsSnapshot,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        if status.is_success() {
            return serde_json::from_slice(&bytes)
                .map_err(|err| ClientError::Decode(err.to_string()));
        }
        match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => Err(ClientError::Api(envelope.error)),
            Err(_) => Err(ClientError::Decode(format!(
                "unexpected {status} response without error envelope"
            ))),
        }
    }

    pub async fn fetch_species(&self) -> Result<Vec<SpeciesRecord>, ClientError> {
        let response = self.http.get(self.url("/api/animals")).send().await?;
        Self::decode(response).await
    }

    pub async fn fetch_sightings(&self) -> Result<Vec<SightingRecord>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/animals"))
            .query(&[("type", "sightings")])
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ClientError> {
        let response = self.http.get(self.url("/api/stats")).send().await?;
        Self::decode(response).await
    }

    /// Joined fetch behind the overview screen. No partial results: any
    /// failed leg fails the whole call.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData, ClientError> {
        let (species, sightings, stats) = tokio::try_join!(
            self.fetch_species(),
            self.fetch_sightings(),
            self.fetch_stats(),
        )?;
        Ok(DashboardData {
            species,
            sightings,
            stats,
        })
    }

    pub async fn submit_sighting(
        &self,
        request: &SubmitSightingRequest,
    ) -> Result<SightingRecord, ClientError> {
        let response = self
            .http
            .post(self.url("/api/animals"))
            .query(&[("type", "sightings")])
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/api/stats"), "http://localhost:3000/api/stats");
    }
}
