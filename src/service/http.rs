//! HTTP adapter for the decision service.

use super::{Decision, DecisionService, Resolution};
use crate::board::{Position, Snapshot};
use crate::error::{SyncError, TransportError};
use crate::player::{Outcome, Player};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Body of a `result` response, also nested inside `decide`.
#[derive(Debug, Deserialize)]
struct ResultBody {
    board: String,
    /// Outer `None`: key absent (game continues). Inner `None`: draw.
    #[serde(default, deserialize_with = "present")]
    winner: Option<Option<String>>,
}

/// Body of a `decide` response.
#[derive(Debug, Deserialize)]
struct DecideBody {
    #[serde(default)]
    decision: Option<String>,
    result: ResultBody,
}

/// Distinguishes a key that is present but `null` from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ResultBody {
    fn into_resolution(self) -> Result<Resolution, SyncError> {
        let snapshot = Snapshot::parse(&self.board)?;
        let outcome = self
            .winner
            .map(|winner| Outcome::from_winner_field(winner.as_deref()))
            .transpose()?;
        Ok(Resolution::new(snapshot, outcome))
    }
}

/// Decision service reached over HTTP GET requests.
#[derive(Debug, Clone)]
pub struct HttpDecisionClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDecisionClient {
    /// Creates a client for the service rooted at `base_url`
    /// (for example `http://localhost:8000/api`).
    ///
    /// A request that takes longer than `timeout` fails with a transport
    /// error; `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be built.
    #[instrument(skip(base_url), fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        info!("Created decision service client");
        Ok(Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Root URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a GET to `endpoint` and returns the body of a successful response.
    #[instrument(skip(self, params))]
    async fn send_get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<String, SyncError> {
        let raw = format!("{}/{}", self.base_url, endpoint);
        let url = if params.is_empty() {
            reqwest::Url::parse(&raw)
        } else {
            reqwest::Url::parse_with_params(&raw, params)
        }
        .map_err(|e| TransportError::new(format!("Invalid URL '{}': {}", raw, e)))?;

        debug!(%url, "Sending GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::new(format!("{} returned {}: {}", endpoint, status, body)).into());
        }

        debug!(%body, "Response from the service");
        Ok(body)
    }

    fn decode<T: serde::de::DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, SyncError> {
        serde_json::from_str(body).map_err(|e| {
            TransportError::new(format!("Invalid JSON from {}: {}", endpoint, e)).into()
        })
    }
}

#[async_trait::async_trait]
impl DecisionService for HttpDecisionClient {
    #[instrument(skip(self))]
    async fn initial_board(&self) -> Result<Snapshot, SyncError> {
        let body = self.send_get("initial-board", &[]).await?;
        Ok(Snapshot::parse(&body)?)
    }

    #[instrument(skip(self, board))]
    async fn result(
        &self,
        board: &Snapshot,
        player: Player,
        position: Position,
    ) -> Result<Resolution, SyncError> {
        let body = self
            .send_get(
                "result",
                &[
                    ("board", board.serialize()),
                    ("player", player.to_string()),
                    ("position", position.key()),
                ],
            )
            .await?;
        Self::decode::<ResultBody>("result", &body)?.into_resolution()
    }

    #[instrument(skip(self, board))]
    async fn actions(&self, board: &Snapshot, player: Player) -> Result<HashSet<Position>, SyncError> {
        let body = self
            .send_get(
                "actions",
                &[("board", board.serialize()), ("player", player.to_string())],
            )
            .await?;
        Self::decode::<Vec<String>>("actions", &body)?
            .iter()
            .map(|key| Position::from_key(key))
            .collect()
    }

    #[instrument(skip(self, board))]
    async fn decide(&self, board: &Snapshot, difficulty: u32) -> Result<Decision, SyncError> {
        let body = self
            .send_get(
                "decide",
                &[
                    ("board", board.serialize()),
                    ("intelligence", difficulty.to_string()),
                ],
            )
            .await?;
        let decided = Self::decode::<DecideBody>("decide", &body)?;

        let choice = decided
            .decision
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(Position::from_key)
            .transpose()?;

        Ok(Decision::new(choice, decided.result.into_resolution()?))
    }
}
