//! Shared utilities.
//!
//! Test helpers for faking process state.

#[cfg(test)]
pub mod testutil;
