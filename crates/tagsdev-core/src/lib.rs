//! Core types and configuration for tagsdev.
//!
//! This crate defines the `tagsdev.toml` schema ([`TagsdevConfig`]),
//! the flat `KEY=VALUE` env-file loader ([`envfile`]), and shared
//! error types.

pub mod config;
pub mod envfile;
pub mod error;

pub use config::{BackendConfig, DockerConfig, Mount, TagsdevConfig};
pub use error::{Error, Result};
