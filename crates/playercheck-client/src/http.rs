//! Thin reqwest implementation of [`PlayerService`] over the original wire
//! protocol.
//!
//! Endpoint shapes are fixed by the backend and deliberately asymmetric:
//! create is a GET carrying query parameters, get-by-id is a POST with a
//! `{"playerId": N}` body, delete is a DELETE with the same body, and update
//! is a PATCH with a partial JSON record.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use playercheck_model::{NewPlayer, Player, PlayerId, PlayerItem, PlayerUpdate, PlayersList};

use crate::outcome::{ClientError, Outcome};
use crate::service::PlayerService;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerIdBody {
    player_id: PlayerId,
}

/// HTTP client for the player backend.
pub struct HttpPlayerService {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpPlayerService {
    /// Build a client for `base_url` (e.g. `http://host/player`) with the
    /// given per-call timeout. A stalled call surfaces as a transport error;
    /// the harness does not attempt to interrupt anything itself.
    pub fn new(base_url: &str, call_timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::BaseUrl(e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(call_timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self { base_url, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl("base url cannot be a base".to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn classify<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Outcome<T>, ClientError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, body = body.as_str(), "player service response");

        match status {
            200..=204 => {
                let value = serde_json::from_str(&body).map_err(|e| {
                    ClientError::Decode(format!("status {status}, body {body:?}: {e}"))
                })?;
                Ok(Outcome::Success(value))
            }
            403 => Ok(Outcome::Denied),
            400 | 422 => Ok(Outcome::Invalid(body)),
            404 => Ok(Outcome::NotFound),
            _ => Err(ClientError::UnexpectedStatus { status, body }),
        }
    }

    async fn classify_unit(
        &self,
        response: reqwest::Response,
    ) -> Result<Outcome<()>, ClientError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, body = body.as_str(), "player service response");

        match status {
            200..=204 => Ok(Outcome::Success(())),
            403 => Ok(Outcome::Denied),
            400 | 422 => Ok(Outcome::Invalid(body)),
            404 => Ok(Outcome::NotFound),
            _ => Err(ClientError::UnexpectedStatus { status, body }),
        }
    }
}

#[async_trait]
impl PlayerService for HttpPlayerService {
    async fn list_all(&self) -> Result<Vec<PlayerItem>, ClientError> {
        let url = self.endpoint(&["get", "all"])?;
        debug!(%url, "listing all players");

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..=204).contains(&status) {
            return Err(ClientError::UnexpectedStatus { status, body });
        }
        let list: PlayersList = serde_json::from_str(&body)
            .map_err(|e| ClientError::Decode(format!("listing body {body:?}: {e}")))?;
        Ok(list.players)
    }

    async fn get_by_id(&self, id: PlayerId) -> Result<Outcome<Player>, ClientError> {
        let url = self.endpoint(&["get"])?;
        debug!(%url, %id, "getting player by id");

        let response = self
            .client
            .post(url)
            .json(&PlayerIdBody { player_id: id })
            .send()
            .await?;
        self.classify(response).await
    }

    async fn create(
        &self,
        payload: &NewPlayer,
        actor: &str,
    ) -> Result<Outcome<Player>, ClientError> {
        let url = self.endpoint(&["create", actor])?;
        debug!(%url, login = payload.login.as_str(), role = %payload.role, "creating player");

        let response = self
            .client
            .get(url)
            .query(&[
                ("age", payload.age.to_string()),
                ("gender", payload.gender.as_str().to_string()),
                ("login", payload.login.clone()),
                ("password", payload.password.clone()),
                ("role", payload.role.as_str().to_string()),
                ("screenName", payload.screen_name.clone()),
            ])
            .send()
            .await?;
        self.classify(response).await
    }

    async fn update(
        &self,
        id: PlayerId,
        actor: &str,
        patch: &PlayerUpdate,
    ) -> Result<Outcome<Player>, ClientError> {
        let url = self.endpoint(&["update", actor, &id.to_string()])?;
        debug!(%url, %id, "updating player");

        let response = self.client.patch(url).json(patch).send().await?;
        self.classify(response).await
    }

    async fn delete(&self, id: PlayerId, actor: &str) -> Result<Outcome<()>, ClientError> {
        let url = self.endpoint(&["delete", actor])?;
        debug!(%url, %id, "deleting player");

        let response = self
            .client
            .delete(url)
            .json(&PlayerIdBody { player_id: id })
            .send()
            .await?;
        self.classify_unit(response).await
    }
}
