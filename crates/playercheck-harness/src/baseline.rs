//! Snapshot/restore protection for long-lived seed entities.
//!
//! Some tests legitimately mutate the supervisor (self-update scenarios);
//! the guard captures its state before the first mutation-capable test and
//! puts it back at teardown if anything drifted.

use std::sync::Arc;

use playercheck_client::{Outcome, PlayerService};
use playercheck_model::{Player, PlayerId};
use tracing::{debug, info};

use crate::error::HarnessError;

pub struct BaselineGuard {
    service: Arc<dyn PlayerService>,
    snapshot: Player,
    /// Actor used for the restoring update; must outrank or own the entity.
    restore_actor: String,
}

impl BaselineGuard {
    /// Capture the entity's full state. Must be taken exactly once, before
    /// the first mutation-capable test runs.
    pub async fn snapshot(
        service: Arc<dyn PlayerService>,
        id: PlayerId,
        restore_actor: &str,
    ) -> Result<Self, HarnessError> {
        match service.get_by_id(id).await? {
            Outcome::Success(snapshot) => {
                debug!(%id, login = snapshot.login.as_str(), "captured baseline snapshot");
                Ok(Self {
                    service,
                    snapshot,
                    restore_actor: restore_actor.to_string(),
                })
            }
            _ => Err(HarnessError::MissingFixture(format!(
                "baseline player {id} is not readable"
            ))),
        }
    }

    pub fn baseline(&self) -> &Player {
        &self.snapshot
    }

    pub fn id(&self) -> PlayerId {
        self.snapshot.id
    }

    /// Compare current state field-by-field against the snapshot (readable
    /// fields only; the write-only credential cannot be compared) and issue
    /// an update carrying exactly the drifted fields. Returns whether a
    /// restore was needed. Any failure is surfaced, never swallowed.
    pub async fn restore_if_drifted(&self) -> Result<bool, HarnessError> {
        let id = self.snapshot.id;
        let current = match self.service.get_by_id(id).await? {
            Outcome::Success(current) => current,
            Outcome::NotFound => return Err(HarnessError::BaselineLost(id)),
            Outcome::Denied => {
                return Err(HarnessError::RestoreRejected {
                    id,
                    reason: "read denied".to_string(),
                })
            }
            Outcome::Invalid(reason) => {
                return Err(HarnessError::RestoreRejected { id, reason })
            }
        };

        let patch = self.snapshot.diff_readable(&current);
        if patch.is_empty() {
            debug!(%id, "baseline unchanged, no restore needed");
            return Ok(false);
        }

        info!(%id, "baseline drifted, restoring");
        match self.service.update(id, &self.restore_actor, &patch).await? {
            Outcome::Success(restored) => {
                if restored.readable_eq(&self.snapshot) {
                    Ok(true)
                } else {
                    Err(HarnessError::RestoreRejected {
                        id,
                        reason: "restored state still differs from snapshot".to_string(),
                    })
                }
            }
            Outcome::Denied => Err(HarnessError::RestoreRejected {
                id,
                reason: "update denied".to_string(),
            }),
            Outcome::Invalid(reason) => Err(HarnessError::RestoreRejected { id, reason }),
            Outcome::NotFound => Err(HarnessError::BaselineLost(id)),
        }
    }
}
