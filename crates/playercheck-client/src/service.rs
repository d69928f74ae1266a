//! The trait the harness core depends on.

use async_trait::async_trait;
use playercheck_model::{NewPlayer, Player, PlayerId, PlayerItem, PlayerUpdate};

use crate::outcome::{ClientError, Outcome};

/// Blocking (awaited) operations against the player backend.
///
/// `actor` is always the login of the player performing the operation; its
/// role is what the backend's policy decides on. Listing is the backend's only
/// consistency anchor and has no rejection path, so it returns the items
/// directly rather than an [`Outcome`].
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Fetch the full listing (restricted list view).
    async fn list_all(&self) -> Result<Vec<PlayerItem>, ClientError>;

    /// Fetch one full player record by id.
    async fn get_by_id(&self, id: PlayerId) -> Result<Outcome<Player>, ClientError>;

    /// Create a player on behalf of `actor`. The backend assigns the id.
    async fn create(
        &self,
        payload: &NewPlayer,
        actor: &str,
    ) -> Result<Outcome<Player>, ClientError>;

    /// Partially update a player on behalf of `actor`; only provided fields
    /// change.
    async fn update(
        &self,
        id: PlayerId,
        actor: &str,
        patch: &PlayerUpdate,
    ) -> Result<Outcome<Player>, ClientError>;

    /// Delete a player on behalf of `actor`.
    async fn delete(&self, id: PlayerId, actor: &str) -> Result<Outcome<()>, ClientError>;
}
