//! Configuration module for rentbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Rent, lease and projection thresholds

pub mod paths;
pub mod settings;

pub use paths::RentbookPaths;
pub use settings::Settings;
