//! Test-fixture support for the commerce backend
//!
//! Loads sample products from a seed file into the catalog, creates
//! randomized orders referencing them, and tears everything down afterwards.
//! Used by the seeder binary and by integration tests.

pub mod seed;
pub mod harness;

pub use seed::{ProductSeed, load_seeds};
pub use harness::FixtureHarness;
