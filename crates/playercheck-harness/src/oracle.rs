//! Visibility queries against the backend's only consistency anchor: the
//! full listing.
//!
//! Get-by-id on a just-deleted entity and on a never-existing entity answer
//! identically, so "exists" is defined as "appears in a fresh listing". No
//! caching: each query reflects current backend state.

use std::sync::Arc;

use playercheck_client::{ClientError, Outcome, PlayerService};
use playercheck_model::{PlayerId, Role};
use tracing::debug;

pub struct ExistenceOracle {
    service: Arc<dyn PlayerService>,
}

impl ExistenceOracle {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self { service }
    }

    /// Is the entity with this id visible in the listing right now?
    pub async fn exists_by_id(&self, id: PlayerId) -> Result<bool, ClientError> {
        let items = self.service.list_all().await?;
        let found = items.iter().any(|item| item.id == id);
        debug!(%id, found, "existence check by id");
        Ok(found)
    }

    /// Is an entity with this login visible in the listing right now? The
    /// list view carries no login, so each listed id is re-fetched in full.
    pub async fn exists_by_login(&self, login: &str) -> Result<bool, ClientError> {
        Ok(self.find_id_by_login(login).await?.is_some())
    }

    /// Resolve a login to the id it is currently listed under.
    pub async fn find_id_by_login(&self, login: &str) -> Result<Option<PlayerId>, ClientError> {
        let items = self.service.list_all().await?;
        for item in items {
            if let Outcome::Success(player) = self.service.get_by_id(item.id).await? {
                if player.login == login {
                    debug!(login, id = %item.id, "resolved login to id");
                    return Ok(Some(item.id));
                }
            }
        }
        debug!(login, "login not found in listing");
        Ok(None)
    }

    /// Find the login of any currently listed entity holding `role`.
    pub async fn find_login_by_role(&self, role: Role) -> Result<Option<String>, ClientError> {
        let items = self.service.list_all().await?;
        for item in items {
            if let Outcome::Success(player) = self.service.get_by_id(item.id).await? {
                if player.role == role {
                    return Ok(Some(player.login));
                }
            }
        }
        Ok(None)
    }
}
