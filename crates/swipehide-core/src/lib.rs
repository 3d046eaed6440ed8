//! swipehide core
//!
//! Shared plumbing for the swipehide crates: logging bootstrap, profiling
//! hooks, math re-exports and the small geometry types the layout contract
//! is expressed in.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
