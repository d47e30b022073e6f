//! Configuration module for finsight
//!
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinsightPaths;
pub use settings::Settings;
