// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor and configuration errors.

use std::path::PathBuf;

use tessera_map::MapError;
use thiserror::Error;

/// Failures while loading [`EditorConfig`](crate::EditorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the config schema.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file.
        path: PathBuf,
        /// Parser error.
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of range.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Offending key.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Failures of editor actions.
#[derive(Debug, Error)]
pub enum EditorError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A map save or load failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The palette directory could not be listed.
    #[error("failed to scan palette directory {path}: {source}")]
    Palette {
        /// Directory being scanned.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Reading commands or writing the log failed.
    #[error("session I/O failed: {0}")]
    Session(#[from] std::io::Error),

    /// A tool panel field needed for the action is empty.
    #[error("the {0} field is empty")]
    EmptyField(&'static str),
}

/// Result alias for editor actions.
pub type Result<T> = std::result::Result<T, EditorError>;
