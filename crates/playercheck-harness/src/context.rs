//! Per-run suite state, explicitly constructed and threaded into every
//! scenario. No ambient singletons: one service client instance, one
//! tracked-set, one baseline snapshot, all owned here.

use std::sync::Arc;

use playercheck_client::{Outcome, PlayerService};
use playercheck_model::{Gender, NewPlayer, PlayerId, Role};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::baseline::BaselineGuard;
use crate::config::SuiteConfig;
use crate::error::HarnessError;
use crate::matrix::AuthorizationMatrix;
use crate::oracle::ExistenceOracle;
use crate::report::{CleanupFailure, CleanupReport};
use crate::tracker::ResourceTracker;

/// Serializes any sequence that reads-then-writes the protected baseline
/// entity (mutate baseline → assert → restore). Process-wide rather than
/// per-context: test binaries build one context per test and run tests on
/// parallel threads, so a per-instance mutex would exclude nobody.
static BASELINE_LOCK: Mutex<()> = Mutex::const_new(());

pub struct SuiteContext {
    config: SuiteConfig,
    service: Arc<dyn PlayerService>,
    tracker: ResourceTracker,
    oracle: ExistenceOracle,
    guard: BaselineGuard,
    matrix: AuthorizationMatrix,
    supervisor_id: PlayerId,
    admin_login: String,
}

impl SuiteContext {
    /// Suite setup: locate the supervisor seed, snapshot it, and make sure an
    /// auxiliary admin actor exists for scenarios that act as an admin.
    pub async fn init(
        config: SuiteConfig,
        service: Arc<dyn PlayerService>,
    ) -> Result<Self, HarnessError> {
        let oracle = ExistenceOracle::new(Arc::clone(&service));
        let tracker = ResourceTracker::new(Arc::clone(&service));

        let supervisor_id = oracle
            .find_id_by_login(&config.supervisor_login)
            .await?
            .ok_or_else(|| {
                HarnessError::MissingFixture(format!(
                    "supervisor '{}' not present in backend",
                    config.supervisor_login
                ))
            })?;
        info!(%supervisor_id, "located supervisor seed entity");

        let guard = BaselineGuard::snapshot(
            Arc::clone(&service),
            supervisor_id,
            &config.supervisor_login,
        )
        .await?;

        let admin_login =
            Self::ensure_admin_actor(&config, &service, &oracle).await?;
        info!(admin_login = admin_login.as_str(), "auxiliary admin actor ready");

        Ok(Self {
            config,
            service,
            tracker,
            oracle,
            guard,
            matrix: AuthorizationMatrix::default(),
            supervisor_id,
            admin_login,
        })
    }

    /// Create the suite's admin actor under a fixed marker-derived login, or
    /// fall back to any existing admin when creation is rejected (the fixed
    /// login colliding with an admin provisioned by a sibling context or a
    /// leftover from an earlier run is the usual cause, and that admin is
    /// just as usable).
    ///
    /// Deliberately not tracked: the actor is shared by every context in the
    /// binary, so one test's teardown must not delete it out from under the
    /// rest. Its fixed login keeps it idempotent across runs.
    async fn ensure_admin_actor(
        config: &SuiteConfig,
        service: &Arc<dyn PlayerService>,
        oracle: &ExistenceOracle,
    ) -> Result<String, HarnessError> {
        let login = format!("{}_admin1", config.fixture_marker);
        let payload = NewPlayer {
            login: login.clone(),
            password: "vbrhei40fn8".to_string(),
            screen_name: format!("{}_Test_Admin_1", config.fixture_marker),
            gender: Gender::Female,
            age: 27,
            role: Role::Admin,
        };

        match service.create(&payload, &config.supervisor_login).await? {
            Outcome::Success(admin) => Ok(admin.login),
            _ => oracle
                .find_login_by_role(Role::Admin)
                .await?
                .ok_or_else(|| {
                    HarnessError::MissingFixture(
                        "no admin actor available and none could be created".to_string(),
                    )
                }),
        }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<dyn PlayerService> {
        &self.service
    }

    pub fn tracker(&self) -> &ResourceTracker {
        &self.tracker
    }

    pub fn oracle(&self) -> &ExistenceOracle {
        &self.oracle
    }

    pub fn matrix(&self) -> &AuthorizationMatrix {
        &self.matrix
    }

    pub fn baseline(&self) -> &BaselineGuard {
        &self.guard
    }

    pub fn supervisor_id(&self) -> PlayerId {
        self.supervisor_id
    }

    pub fn supervisor_login(&self) -> &str {
        &self.config.supervisor_login
    }

    /// Login of the auxiliary admin actor scenarios use when acting as an
    /// admin.
    pub fn admin_login(&self) -> &str {
        &self.admin_login
    }

    /// Acquire the mutual-exclusion scope for baseline-mutating sequences.
    /// Exclusion holds across every context in the process, not just this
    /// one.
    pub async fn lock_baseline(&self) -> MutexGuard<'static, ()> {
        BASELINE_LOCK.lock().await
    }

    /// Suite teardown: drain every tracked entity, then restore the baseline
    /// if it drifted. Failures are aggregated, never raised mid-teardown.
    pub async fn teardown(&self) -> CleanupReport {
        let mut report = self.tracker.drain(&self.config.supervisor_login).await;

        if let Err(err) = self.guard.restore_if_drifted().await {
            report.record(CleanupFailure::Restore {
                id: self.supervisor_id,
                reason: err.to_string(),
            });
        }
        report
    }
}
