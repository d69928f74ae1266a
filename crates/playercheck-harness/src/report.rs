//! Aggregated cleanup failures for the suite-level result.
//!
//! A single unreachable entity must not suppress cleanup of the rest, so
//! drain and restore record failures here instead of raising mid-teardown.

use playercheck_model::PlayerId;

/// One failed teardown action.
#[derive(Clone, Debug)]
pub enum CleanupFailure {
    /// A tracked entity could not be deleted during drain.
    Delete { id: PlayerId, reason: String },
    /// The protected baseline entity could not be restored.
    Restore { id: PlayerId, reason: String },
}

impl std::fmt::Display for CleanupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CleanupFailure::Delete { id, reason } => {
                write!(f, "failed to delete tracked player {id}: {reason}")
            }
            CleanupFailure::Restore { id, reason } => {
                write!(f, "failed to restore baseline player {id}: {reason}")
            }
        }
    }
}

/// Teardown summary. Non-empty failures are a suite-level defect.
#[derive(Clone, Debug, Default)]
pub struct CleanupReport {
    failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn record(&mut self, failure: CleanupFailure) {
        self.failures.push(failure);
    }

    pub fn merge(&mut self, other: CleanupReport) {
        self.failures.extend(other.failures);
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[CleanupFailure] {
        &self.failures
    }

    /// Turn the report into a result so callers can `?` it at suite end.
    pub fn into_result(self) -> Result<(), CleanupReport> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_clean() {
            return write!(f, "cleanup completed with no failures");
        }
        writeln!(f, "cleanup finished with {} failure(s):", self.failures.len())?;
        for failure in &self.failures {
            writeln!(f, "  - {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CleanupReport {}
