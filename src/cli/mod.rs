//! CLI interface for kazakh-morph
//!
//! Provides conjugation, declension and comparison tables, regression
//! dataset runs and persistent user settings.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Commands};
pub use config::{config_dir, PersistentConfig};
