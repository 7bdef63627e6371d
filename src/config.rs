// SPDX-FileCopyrightText: 2025 Hong Minhee <https://hongminhee.org/>
// SPDX-License-Identifier: GPL-3.0-or-later
//! Configuration file support for Headcase.
//!
//! This module provides functionality for loading and parsing configuration
//! files (`.headcase.toml`) that override the built-in word lists and
//! threshold.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{ALWAYS_CAPITALIZE, ALWAYS_LOWERCASE, MIN_CAPITALIZE_LENGTH, Options, OptionsError};

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".headcase.toml";

/// Configuration for the Headcase converter.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Alphabetic cores at least this long are capitalized (default: 4).
    pub min_capitalize_length: usize,

    /// Exception word lists.
    pub words: WordsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_capitalize_length: MIN_CAPITALIZE_LENGTH,
            words: WordsConfig::default(),
        }
    }
}

/// Exception word list options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    /// Words that are always capitalized.  Replaces the built-in list.
    pub always_capitalize: Vec<String>,

    /// Words that are always lowercased.  Replaces the built-in list.
    pub always_lowercase: Vec<String>,

    /// Words appended to `always_capitalize` (default: empty).
    pub extra_capitalize: Vec<String>,

    /// Words appended to `always_lowercase` (default: empty).
    pub extra_lowercase: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            always_capitalize: ALWAYS_CAPITALIZE.iter().map(|w| w.to_string()).collect(),
            always_lowercase: ALWAYS_LOWERCASE.iter().map(|w| w.to_string()).collect(),
            extra_capitalize: Vec::new(),
            extra_lowercase: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load configuration from a file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Discover and load configuration by searching up the directory tree.
    ///
    /// Starting from `start_dir`, searches for `.headcase.toml` in each parent
    /// directory until the filesystem root is reached. Returns `None` if no
    /// configuration file is found.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut current = start_dir.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                log::debug!("found configuration at {}", config_path.display());
                let config = Self::from_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }
            if !current.pop() {
                break;
            }
        }
        log::debug!(
            "no {} found above {}",
            CONFIG_FILE_NAME,
            start_dir.display()
        );
        Ok(None)
    }

    /// Build validated [`Options`] from this configuration.
    ///
    /// Entries are lowercased before validation, so `"I"` in a file means
    /// the same as `"i"`.
    pub fn to_options(&self) -> Result<Options, OptionsError> {
        let words = &self.words;
        let always_capitalize = words
            .always_capitalize
            .iter()
            .chain(&words.extra_capitalize)
            .map(|w| w.to_lowercase());
        let always_lowercase = words
            .always_lowercase
            .iter()
            .chain(&words.extra_lowercase)
            .map(|w| w.to_lowercase());
        Options::new(
            always_capitalize,
            always_lowercase,
            self.min_capitalize_length,
        )
    }

    /// Load a file and build [`Options`] from it in one step.
    pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
        Self::from_file(path)?
            .to_options()
            .map_err(|e| ConfigError::Invalid(path.to_path_buf(), e))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file.
    Io(PathBuf, std::io::Error),
    /// Error parsing the TOML configuration.
    Parse(PathBuf, toml::de::Error),
    /// The configuration parsed but describes invalid options.
    Invalid(PathBuf, OptionsError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse {}: {}", path.display(), err)
            }
            ConfigError::Invalid(path, err) => {
                write!(f, "invalid configuration in {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
            ConfigError::Invalid(_, err) => Some(err),
        }
    }
}
