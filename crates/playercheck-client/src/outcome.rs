//! The uniform outcome type and the infrastructure error type.

use thiserror::Error;

/// Infrastructure failure talking to the backend. Never produced for a
/// well-formed rejection; those are [`Outcome`] variants.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("invalid base url: {0}")]
    BaseUrl(String),
}

/// Classified backend answer for a single operation.
///
/// One success check for every call replaces the ad hoc status-range tests the
/// harness would otherwise scatter: 200..=204 is `Success`, 403 is `Denied`,
/// 400/422 is `Invalid`, 404 is `NotFound`. Anything else is a
/// [`ClientError::UnexpectedStatus`], not an `Outcome`.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// Success-class result carrying the returned entity (or unit for delete).
    Success(T),
    /// Authorization rejection: the actor's role does not permit the operation.
    Denied,
    /// Validation rejection (age range, login/screen-name collision).
    Invalid(String),
    /// The target entity does not exist.
    NotFound,
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True for any rejection class. The live backend answers 403 for both
    /// policy and validation rejections, so live assertions that only care
    /// about "was refused" use this instead of matching a single variant.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Outcome::Denied | Outcome::Invalid(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Unwrap the success value or panic with a scenario-friendly message.
    /// Intended for test code asserting an operation was allowed.
    pub fn expect_success(self, context: &str) -> T {
        match self {
            Outcome::Success(v) => v,
            Outcome::Denied => panic!("{context}: expected success, got policy denial"),
            Outcome::Invalid(reason) => {
                panic!("{context}: expected success, got validation failure: {reason}")
            }
            Outcome::NotFound => panic!("{context}: expected success, got not-found"),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Denied => Outcome::Denied,
            Outcome::Invalid(reason) => Outcome::Invalid(reason),
            Outcome::NotFound => Outcome::NotFound,
        }
    }
}
