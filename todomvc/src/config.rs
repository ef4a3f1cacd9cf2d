//! Configuration management for the todo application.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Call `dotenvy::dotenv()` first to pick up a `.env` file.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default storage file
pub const DEFAULT_STORAGE_PATH: &str = ".todomvc/storage.json";
/// Default storage slot
pub const DEFAULT_NAMESPACE: &str = "todos-composable";
/// Default route on start
pub const DEFAULT_INITIAL_ROUTE: &str = "#/all";

/// Errors from reading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value of the wrong shape
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        /// Variable name
        name: &'static str,
        /// Value found
        value: String,
        /// What was expected
        reason: &'static str,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON file backing the storage (`TODOMVC_STORAGE_PATH`)
    pub storage_path: PathBuf,
    /// Storage slot holding the item list (`TODOMVC_NAMESPACE`)
    pub namespace: String,
    /// Fragment to start on (`TODOMVC_INITIAL_ROUTE`)
    pub initial_route: String,
    /// Keep items in memory only (`TODOMVC_EPHEMERAL`)
    pub ephemeral: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            namespace: DEFAULT_NAMESPACE.to_string(),
            initial_route: DEFAULT_INITIAL_ROUTE.to_string(),
            ephemeral: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let namespace = match lookup("TODOMVC_NAMESPACE") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid {
                    name: "TODOMVC_NAMESPACE",
                    value,
                    reason: "must not be blank",
                });
            },
            Some(value) => value,
            None => defaults.namespace,
        };

        let ephemeral = match lookup("TODOMVC_EPHEMERAL") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                name: "TODOMVC_EPHEMERAL",
                value,
                reason: "expected true/false, 1/0, yes/no or on/off",
            })?,
            None => defaults.ephemeral,
        };

        Ok(Self {
            storage_path: lookup("TODOMVC_STORAGE_PATH")
                .filter(|s| !s.trim().is_empty())
                .map_or(defaults.storage_path, PathBuf::from),
            namespace,
            initial_route: lookup("TODOMVC_INITIAL_ROUTE").unwrap_or(defaults.initial_route),
            ephemeral,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
