//! Driftdock Core
//!
//! Shared math, geometry, logging and profiling helpers used by the
//! driftdock widget crates.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
