//! Service client seam for the player service.
//!
//! The harness core depends only on the [`PlayerService`] trait so it can be
//! driven against the live HTTP backend or an in-memory stand-in in tests.
//! Every call returns the same shape: `Result<Outcome<T>, ClientError>`, where
//! `Outcome` classifies the backend's answer (success, policy denial,
//! validation failure, not found) and `ClientError` is reserved for
//! infrastructure faults that must never be mistaken for a policy outcome.

mod http;
mod outcome;
mod service;

pub use http::HttpPlayerService;
pub use outcome::{ClientError, Outcome};
pub use service::PlayerService;
