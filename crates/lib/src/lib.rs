//! makeover-lib: the build engine behind makeover
//!
//! This crate turns a buildfile into a target graph and brings targets up to
//! date:
//! - `buildfile`: the line grammar and the parsed `BuildModel`
//! - `expand`: `$VAR` / `${VAR}` substitution in commands
//! - `execute`: staleness checks and ordered command execution
//! - `list`: grouped target listings for display

pub mod buildfile;
pub mod config;
pub mod consts;
pub mod execute;
pub mod expand;
pub mod list;
pub mod util;
