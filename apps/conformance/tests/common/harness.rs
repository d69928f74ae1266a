//! Suite bootstrap against the live backend.
//!
//! Every test starts by asking for a [`SuiteContext`]; when
//! `PLAYERCHECK_BASE_URL` is unset the context is `None` and the test
//! returns early as a skip, so the suite stays green on machines without a
//! reachable backend.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Once;

use playercheck_client::{HttpPlayerService, Outcome, PlayerService};
use playercheck_harness::{Expected, SuiteConfig, SuiteContext, BASE_URL_ENV};

static INIT_TRACING: Once = Once::new();

fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "playercheck=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Build a fully initialized suite context, or `None` when no live backend
/// is configured.
pub async fn live_context() -> Result<Option<SuiteContext>, Box<dyn std::error::Error>> {
    init_tracing();

    let Some(config) = SuiteConfig::from_env()? else {
        eprintln!("Skipping live conformance test ({BASE_URL_ENV} not set)");
        return Ok(None);
    };

    let service: Arc<dyn PlayerService> =
        Arc::new(HttpPlayerService::new(&config.base_url, config.call_timeout)?);
    let ctx = SuiteContext::init(config, service).await?;
    Ok(Some(ctx))
}

/// Teardown and fail the test if any fixture could not be reclaimed. Cleanup
/// failures are real defects here: a leaked entity poisons later runs against
/// the shared backend.
pub async fn finish(ctx: SuiteContext) -> Result<(), Box<dyn std::error::Error>> {
    let report = ctx.teardown().await;
    report.into_result()?;
    Ok(())
}

/// Assert that a policy-governed call came out the way the permission table
/// says it should.
pub fn assert_expected<T: std::fmt::Debug>(expected: Expected, outcome: &Outcome<T>, what: &str) {
    match expected {
        Expected::Allow => {
            assert!(
                outcome.is_success(),
                "{what}: expected success, got {outcome:?}"
            );
        }
        Expected::Deny => {
            assert!(
                outcome.is_rejection(),
                "{what}: expected rejection, got {outcome:?}"
            );
        }
    }
}
