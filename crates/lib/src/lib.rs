//! instkit-lib: OS interaction helpers for installers
//!
//! This crate provides small, standalone helpers:
//! - `expand`: single-pass `$name` / `${name}` substitution
//! - `fs`: directory creation, file copy and existence checks
//! - `user`: root checks
//! - `tty`: interactive terminal detection
//! - `platform`: OS, architecture and distribution detection
//! - `slice`: membership tests
//! - `sysenv`: the process environment capability the checks read through

pub mod consts;
pub mod expand;
pub mod fs;
pub mod platform;
pub mod slice;
pub mod sysenv;
pub mod tty;
pub mod user;
pub mod util;
