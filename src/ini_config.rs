//! INI configuration file accessor
//!
//! This module provides an in-memory INI document bound to one file path.
//! Parsing and serialization are delegated to [`configparser::ini::Ini`];
//! the document is parsed once at construction, mutated in place, and
//! written back to disk only on an explicit [`IniConfig::save`] call.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::debug;

use crate::error::IniConfigError;

/// Section name `configparser` files keys under when they appear before any
/// `[section]` header. Hidden from section enumeration.
const DEFAULT_SECTION: &str = "default";

/// `Ini::new()` folds section and option names to lowercase on parse and on
/// every lookup. Direct map access has to apply the same folding.
fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Accessor over one INI configuration file.
///
/// The backing file is read once, at construction; it is not re-read until a
/// new accessor is constructed, and it is only written when [`save`] is
/// called.
///
/// [`save`]: IniConfig::save
#[derive(Debug, Clone)]
pub struct IniConfig {
    /// Path the document was loaded from and saves back to
    path: PathBuf,
    /// The parsed INI content
    ini: Ini,
}

impl IniConfig {
    /// Load a configuration file.
    ///
    /// A missing or unreadable file yields an empty document rather than an
    /// error. Content that is not valid UTF-8, or that the parser rejects,
    /// fails with [`IniConfigError::Parse`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IniConfigError> {
        let path = path.as_ref().to_path_buf();
        let mut ini = Ini::new();

        match fs::read_to_string(&path) {
            Ok(content) => {
                let map = ini.read(content).map_err(IniConfigError::Parse)?;
                debug!("loaded {} section(s) from {}", map.len(), path.display());
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(IniConfigError::Parse(format!(
                    "{}: content is not valid UTF-8",
                    path.display()
                )));
            }
            // Missing or unreadable file starts an empty document
            Err(e) => {
                debug!("could not read {} ({}), starting empty", path.display(), e);
            }
        }

        Ok(IniConfig { path, ini })
    }

    /// Path the document is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get all section names, in file/insertion order.
    ///
    /// The implicit default section is not listed.
    pub fn sections(&self) -> Vec<String> {
        self.ini
            .sections()
            .into_iter()
            .filter(|s| s != DEFAULT_SECTION)
            .collect()
    }

    /// Check if a section exists
    pub fn section_exist(&self, section: &str) -> bool {
        self.ini.get_map_ref().contains_key(&fold(section))
    }

    /// Get all option names in a section, in file/insertion order.
    pub fn options(&self, section: &str) -> Result<Vec<String>, IniConfigError> {
        let items = self
            .ini
            .get_map_ref()
            .get(&fold(section))
            .ok_or_else(|| IniConfigError::SectionNotFound(section.to_string()))?;

        Ok(items.keys().cloned().collect())
    }

    /// Check if an option exists in the given section.
    ///
    /// Returns false when the section itself is absent.
    pub fn option_exist(&self, section: &str, option: &str) -> bool {
        self.ini
            .get_map_ref()
            .get(&fold(section))
            .map(|items| items.contains_key(&fold(option)))
            .unwrap_or(false)
    }

    /// Get all (option, value) pairs in a section.
    ///
    /// An option parsed without a value reads as the empty string.
    pub fn items(&self, section: &str) -> Result<Vec<(String, String)>, IniConfigError> {
        let items = self
            .ini
            .get_map_ref()
            .get(&fold(section))
            .ok_or_else(|| IniConfigError::SectionNotFound(section.to_string()))?;

        Ok(items
            .iter()
            .map(|(option, value)| (option.clone(), value.clone().unwrap_or_default()))
            .collect())
    }

    /// Get the value of an option.
    pub fn get(&self, section: &str, option: &str) -> Result<String, IniConfigError> {
        let items = self
            .ini
            .get_map_ref()
            .get(&fold(section))
            .ok_or_else(|| IniConfigError::SectionNotFound(section.to_string()))?;

        match items.get(&fold(option)) {
            Some(value) => Ok(value.clone().unwrap_or_default()),
            None => Err(IniConfigError::OptionNotFound(
                section.to_string(),
                option.to_string(),
            )),
        }
    }

    /// Add a new, empty section.
    pub fn add_section(&mut self, section: &str) -> Result<(), IniConfigError> {
        let key = fold(section);
        if self.ini.get_map_ref().contains_key(&key) {
            return Err(IniConfigError::SectionExists(section.to_string()));
        }

        self.ini.get_mut_map().entry(key).or_default();
        Ok(())
    }

    /// Set the value of an option, creating the option if it is absent.
    ///
    /// The section must already exist; [`add_section`] is the only way
    /// sections come into being.
    ///
    /// [`add_section`]: IniConfig::add_section
    pub fn set(&mut self, section: &str, option: &str, value: &str) -> Result<(), IniConfigError> {
        if !self.section_exist(section) {
            return Err(IniConfigError::SectionNotFound(section.to_string()));
        }

        self.ini.setstr(section, option, Some(value));
        Ok(())
    }

    /// Remove a section and all of its options.
    pub fn remove_section(&mut self, section: &str) -> Result<(), IniConfigError> {
        self.ini
            .remove_section(section)
            .map(|_| ())
            .ok_or_else(|| IniConfigError::SectionNotFound(section.to_string()))
    }

    /// Remove an option from a section.
    pub fn remove_option(&mut self, section: &str, option: &str) -> Result<(), IniConfigError> {
        if !self.section_exist(section) {
            return Err(IniConfigError::SectionNotFound(section.to_string()));
        }

        self.ini
            .remove_key(section, option)
            .map(|_| ())
            .ok_or_else(|| {
                IniConfigError::OptionNotFound(section.to_string(), option.to_string())
            })
    }

    /// Write the document back to the path it was loaded from, replacing the
    /// file's previous content entirely.
    pub fn save(&self) -> Result<(), IniConfigError> {
        self.ini.write(&self.path)?;
        debug!("wrote configuration to {}", self.path.display());
        Ok(())
    }

    /// Write the document to an arbitrary path.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), IniConfigError> {
        self.ini.write(path)?;
        Ok(())
    }
}

impl fmt::Display for IniConfig {
    /// Serialize the document with valid ini-syntax, exactly as [`save`]
    /// writes it.
    ///
    /// [`save`]: IniConfig::save
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ini.writes())
    }
}
