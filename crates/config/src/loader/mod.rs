//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and JSON config files.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Validate the merged configuration before handing it to the renderer.
//!
//! Does NOT handle:
//! - Applying configuration to a running pointer (pointers are immutable once built).
//!
//! Invariants / Assumptions:
//! - Precedence: builder overrides > env vars > config file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod file;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::default_config_path;
