//! reqwest-backed implementation of [`VotingApi`]

use super::error::{HttpSetupError, from_reqwest, http_error};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use votacao_application::{ApiError, VotingApi};
use votacao_domain::{AgendaId, AgendaItem, NewAgendaItem, Tally, VoteRequest};

/// Request timeout used when the configuration does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// HTTP adapter for the voting administration API
pub struct HttpVotingApi {
    client: Client,
    base: Url,
}

impl HttpVotingApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpSetupError> {
        let base = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("votacao/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Voting API at {} (timeout {:?})", base, timeout);
        Ok(Self { client, base })
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(from_reqwest)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = http_error(status.as_u16(), &body);
        warn!("Voting API request failed: {}", err);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await.map_err(from_reqwest)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, HttpSetupError> {
    let invalid = |reason: String| HttpSetupError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".to_string()));
    }
    Ok(url)
}

#[async_trait]
impl VotingApi for HttpVotingApi {
    async fn list_items(&self) -> Result<Vec<AgendaItem>, ApiError> {
        let url = self.endpoint(&["pautas"]);
        debug!("GET {}", url);
        let response = self.execute(self.client.get(url)).await?;
        Self::decode(response).await
    }

    async fn fetch_tally(&self, id: &AgendaId) -> Result<Tally, ApiError> {
        let url = self.endpoint(&["pautas", id.as_str(), "resultado"]);
        debug!("GET {}", url);
        let response = self.execute(self.client.get(url)).await?;
        Self::decode(response).await
    }

    async fn create_item(&self, item: &NewAgendaItem) -> Result<AgendaItem, ApiError> {
        let url = self.endpoint(&["pautas"]);
        debug!("POST {}", url);
        let response = self.execute(self.client.post(url).json(item)).await?;
        Self::decode(response).await
    }

    async fn open_session(&self, id: &AgendaId, duration_minutes: u32) -> Result<(), ApiError> {
        let url = self.endpoint(&["pautas", id.as_str(), "sessao"]);
        debug!("POST {} (duracao={})", url, duration_minutes);
        self.execute(
            self.client
                .post(url)
                .query(&[("duracao", duration_minutes)]),
        )
        .await?;
        Ok(())
    }

    async fn cast_vote(&self, id: &AgendaId, vote: &VoteRequest) -> Result<(), ApiError> {
        let url = self.endpoint(&["pautas", id.as_str(), "votar"]);
        debug!("POST {} ({})", url, vote.choice.as_wire());
        self.execute(self.client.post(url).json(vote)).await?;
        Ok(())
    }
}
