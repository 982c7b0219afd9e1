//! Configuration module for FinanzApp
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinanzPaths;
pub use settings::Settings;
