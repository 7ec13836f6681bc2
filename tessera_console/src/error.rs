// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command failures. Their `Display` text is what the console log shows.

use tessera_map::MapError;
use thiserror::Error;

/// Why a command line could not be executed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No command is registered under this name.
    #[error("Unknown command '{0}'")]
    Unknown(String),

    /// Required parameters are missing.
    #[error("Too few parameters. Usage: {usage}")]
    TooFewParameters {
        /// Usage line of the command.
        usage: &'static str,
    },

    /// A parameter could not be parsed or is out of range.
    #[error("Invalid {what} '{value}': {reason}")]
    InvalidArgument {
        /// Parameter description.
        what: &'static str,
        /// Text as typed.
        value: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The command refuses to run in the current state.
    #[error("{0}")]
    Refused(String),

    /// A map operation failed.
    #[error(transparent)]
    Map(#[from] MapError),
}

/// Result alias for command handlers.
pub type Result<T> = std::result::Result<T, CommandError>;
