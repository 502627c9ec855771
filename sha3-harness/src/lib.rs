//! Differential conformance harness for the SHA-3 family.
//!
//! Every configured algorithm is computed by a reference and a candidate
//! provider on the same input. The paired digests are collected in insertion
//! order and rendered once as CSV (`algo,source,digest`). Divergence is
//! reported, never judged.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod observation;

pub use config::{Cli, HarnessConfig};
pub use driver::{Harness, RunOutcome};
pub use error::HarnessError;
pub use observation::{Observation, ObservationSet, Pair};
