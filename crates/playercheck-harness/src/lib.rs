//! Fixture lifecycle management for conformance testing against a live,
//! shared, stateful player backend.
//!
//! The backend has no transactional rollback, so test isolation is the
//! harness's problem: [`ResourceTracker`] guarantees every entity a test
//! creates is deleted at teardown, [`BaselineGuard`] protects long-lived seed
//! entities (the supervisor) from being left mutated, [`ExistenceOracle`]
//! gives a single notion of "currently visible", and
//! [`AuthorizationMatrix`] is the one place the three-role policy is encoded.
//! [`SuiteContext`] wires them together and owns the teardown sequence.

mod baseline;
mod config;
mod context;
mod error;
mod matrix;
mod oracle;
mod report;
mod tracker;

pub use baseline::BaselineGuard;
pub use config::{ConfigError, SuiteConfig, BASE_URL_ENV};
pub use context::SuiteContext;
pub use error::HarnessError;
pub use matrix::{AuthorizationMatrix, Expected, MatrixRules, Operation};
pub use oracle::ExistenceOracle;
pub use report::{CleanupFailure, CleanupReport};
pub use tracker::ResourceTracker;

/// Append a random suffix to a base login/screen-name so fixture entities
/// never collide across runs. The base should carry the suite's fixture
/// marker so leaked entities are recognizable in the backend.
pub fn unique_name(base: &str) -> String {
    format!("{}_{}", base, uuid::Uuid::new_v4())
}
