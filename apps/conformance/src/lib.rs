//! Live conformance suite for the player service. All behavior lives in the
//! integration tests under `tests/`; run them with `PLAYERCHECK_BASE_URL`
//! pointing at the backend under test.
