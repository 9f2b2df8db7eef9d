//! Configuration management for Glidepath.
//!
//! This crate provides the pointer, flow, and timing configuration types and
//! the loader that merges them from config files and environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{FlowConfig, GlidepathConfig, PointerConfig, PointerStyle, Timing};
