//! toastkit Core
//!
//! Shared building blocks for the toastkit crates: geometry, math re-exports,
//! hash collections, logging bootstrap and profiling hooks.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
