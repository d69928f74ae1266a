//! Shared setup for the live conformance tests.

pub mod fixtures;
pub mod harness;

// Not every test file uses every helper.
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use harness::*;
