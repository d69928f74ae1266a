//! Uniform error type for harness operations.

use playercheck_client::ClientError;
use playercheck_model::PlayerId;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// Infrastructure failure from the service client. Never a policy or
    /// validation rejection; those are outcomes, not errors.
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A fixture the suite depends on (supervisor seed, auxiliary admin) is
    /// not present in the backend and could not be provisioned.
    #[error("required fixture not found: {0}")]
    MissingFixture(String),

    /// The protected baseline entity disappeared from the backend; the
    /// harness never deletes it, so this is a suite-level defect.
    #[error("baseline entity {0} no longer exists")]
    BaselineLost(PlayerId),

    /// The backend refused the restoring update for the baseline entity.
    #[error("baseline restore for {id} was rejected: {reason}")]
    RestoreRejected { id: PlayerId, reason: String },
}
