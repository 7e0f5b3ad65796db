//----------------------------------------
// Root lib
//----------------------------------------
//! Analytic enrollment forecasting for clinical trials. Raw enrollment
//! progress is turned into a trial -> country -> site tree of Gamma rate and
//! Uniform start-up distributions, with baseline and reprojected (posterior)
//! variants, from which the mean and variance of cumulative accrual at any
//! day are computed in closed form.
//!
//! | Feature | What it enables | Default |
//! |---------|-----------------|---------|
//! | `tracing` | Log events via [`tracing`](https://docs.rs/tracing) while building trees and estimating durations | on |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod accrual_constraint;
pub mod approximation;
/// This module houses the public API for building forecast trees and
/// approximating accrual
pub mod compute;
pub mod distribution;
mod duration;
/// This module contains error types
pub mod error;
pub mod export;
pub mod records;
pub mod settings;
pub mod tree;
mod util;
