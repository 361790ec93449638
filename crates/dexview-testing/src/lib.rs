//! Test support for the dexview workspace: an isolated data directory,
//! typed snapshot fixtures, and JSON assertion helpers shared by the CLI
//! integration tests.

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
