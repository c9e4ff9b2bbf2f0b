//! QuickCut Core - Foundation types for timeline arithmetic
//!
//! This crate provides the fundamental types used throughout QuickCut:
//! - Epsilon-aware time comparisons for seconds-as-f64 values
//! - Half-open time ranges (TimeRange)
//! - The library error type

pub mod error;
pub mod time;

pub use error::{QuickcutError, Result};
pub use time::{approx_eq, approx_le, definitely_lt, TimeRange, EPSILON};
