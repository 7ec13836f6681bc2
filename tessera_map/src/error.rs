// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for the codec and the document.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while encoding or decoding the binary map format.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The first four bytes are not `MaP!`.
    #[error("not a map file: magic {found:#010x}, expected {expected:#010x}")]
    BadMagic {
        /// Magic read from the data.
        found: u32,
        /// Magic the format requires.
        expected: u32,
    },

    /// The data ended inside a field.
    #[error("unexpected end of data while reading {field}")]
    Truncated {
        /// Field being read.
        field: &'static str,
    },

    /// A length-prefixed string does not fit its one-byte length.
    #[error("{field} is {len} bytes long, the format allows at most 255")]
    FieldTooLong {
        /// Field being written.
        field: &'static str,
        /// Actual length in bytes.
        len: usize,
    },

    /// Structurally invalid data, such as a negative block count.
    #[error("corrupt map data: {0}")]
    Corrupt(String),

    /// The underlying reader or writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of document-level save and load.
#[derive(Debug, Error)]
pub enum MapError {
    /// Opening, reading, or writing the map file failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid map.
    #[error("invalid map file {path}: {source}")]
    Format {
        /// File involved.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: CodecError,
    },

    /// Saving needs a filename and none is set.
    #[error("map has no filename")]
    NoFilename,

    /// Neither `create_new` nor a successful load happened yet.
    #[error("no map has been created or loaded")]
    NotReady,
}

/// Result alias for document operations.
pub type Result<T> = std::result::Result<T, MapError>;
