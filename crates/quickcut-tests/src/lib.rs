//! Integration test crate for the QuickCut timeline library.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on quickcut-core and quickcut-timeline to verify they
//! work together.

#[cfg(test)]
mod arrange;
