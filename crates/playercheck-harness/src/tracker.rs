//! Crash-safe create/delete wrappers for test isolation.
//!
//! The backend cannot roll anything back, so every confirmed creation is
//! registered in an in-memory tracked-set and reclaimed at teardown. The set
//! only ever changes on confirmed outcomes, never speculatively; when it
//! disagrees with the backend, the existence oracle is the source of truth.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use playercheck_client::{ClientError, Outcome, PlayerService};
use playercheck_model::{NewPlayer, Player, PlayerId};
use tracing::{debug, info, warn};

use crate::report::{CleanupFailure, CleanupReport};

pub struct ResourceTracker {
    service: Arc<dyn PlayerService>,
    tracked: Mutex<BTreeSet<PlayerId>>,
}

impl ResourceTracker {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self {
            service,
            tracked: Mutex::new(BTreeSet::new()),
        }
    }

    /// Ids the tracker currently believes exist in the backend.
    pub fn tracked_ids(&self) -> Vec<PlayerId> {
        self.tracked.lock().expect("tracker lock poisoned").iter().copied().collect()
    }

    /// Create a player and register the returned id for teardown, but only
    /// on a confirmed success. Rejections pass through untouched.
    pub async fn create_tracked(
        &self,
        payload: &NewPlayer,
        actor: &str,
    ) -> Result<Outcome<Player>, ClientError> {
        let outcome = self.service.create(payload, actor).await?;
        if let Outcome::Success(player) = &outcome {
            self.tracked
                .lock()
                .expect("tracker lock poisoned")
                .insert(player.id);
            debug!(id = %player.id, login = payload.login.as_str(), "tracking created player");
        }
        Ok(outcome)
    }

    /// Delete a player; the id is unregistered only on a success-class
    /// outcome. A rejected delete stays tracked so drain can retry it; a
    /// second delete of the same id simply observes `NotFound`.
    pub async fn delete_tracked(
        &self,
        id: PlayerId,
        actor: &str,
    ) -> Result<Outcome<()>, ClientError> {
        let outcome = self.service.delete(id, actor).await?;
        if outcome.is_success() {
            self.tracked.lock().expect("tracker lock poisoned").remove(&id);
            debug!(%id, "untracked deleted player");
        }
        Ok(outcome)
    }

    /// Teardown: delete everything still tracked, as the supervisor.
    ///
    /// The set is emptied up front so a crash mid-drain cannot leak tracked
    /// state into a later run. Transport errors are retried once per id;
    /// every unreclaimed id is recorded in the report rather than raised, so
    /// one unreachable entity cannot suppress cleanup of the rest.
    pub async fn drain(&self, supervisor_login: &str) -> CleanupReport {
        let ids: Vec<PlayerId> = {
            let mut tracked = self.tracked.lock().expect("tracker lock poisoned");
            std::mem::take(&mut *tracked).into_iter().collect()
        };
        info!(count = ids.len(), "draining tracked players");

        let mut report = CleanupReport::default();
        for id in ids {
            match self.drain_one(id, supervisor_login).await {
                Ok(()) => {}
                Err(reason) => {
                    warn!(%id, reason = reason.as_str(), "failed to reclaim tracked player");
                    report.record(CleanupFailure::Delete { id, reason });
                }
            }
        }
        report
    }

    async fn drain_one(&self, id: PlayerId, actor: &str) -> Result<(), String> {
        let mut last_transport_error = None;
        for _ in 0..2 {
            match self.service.delete(id, actor).await {
                // NotFound means the entity is already gone: reclaimed.
                Ok(Outcome::Success(())) | Ok(Outcome::NotFound) => return Ok(()),
                Ok(Outcome::Denied) => return Err("delete denied".to_string()),
                Ok(Outcome::Invalid(reason)) => {
                    return Err(format!("delete rejected: {reason}"));
                }
                Err(err) => last_transport_error = Some(err),
            }
        }
        Err(match last_transport_error {
            Some(err) => err.to_string(),
            None => "delete failed".to_string(),
        })
    }
}
