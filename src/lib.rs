//! Read, query, edit and save INI-style configuration files.
//!
//! The crate is a thin facade over the [`configparser`] crate: one
//! [`IniConfig`] owns a parsed document bound to a file path, and every
//! operation delegates to the parser's in-memory representation. Mutations
//! only reach the disk on an explicit [`IniConfig::save`].

pub mod error;
pub mod ini_config;

// Re-export the main types for easier access
pub use error::IniConfigError;
pub use ini_config::IniConfig;
