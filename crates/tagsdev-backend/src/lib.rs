//! Go toolchain operations for tagsdev.
//!
//! # Compile
//!
//! `tagsdev build`
//!   1. go build ── `go build -mod=vendor -o <output>.tmp <main>`
//!   2. Stale binary ── best-effort delete of the old output (warn only)
//!   3. Install ── rename the fresh build into place (fatal on failure)
//!
//! # Launch
//!
//! `tagsdev run` loads the env file and hands the pairs to [`launch`],
//! which applies them to the child explicitly instead of mutating the
//! parent's environment table.

pub mod compile;
pub mod launch;

pub use compile::{BuildError, compile, install};
pub use launch::{LaunchError, launch};
