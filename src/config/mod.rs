//! Configuration module for ytnotes
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{Settings, API_KEY_ENV_VARS};
