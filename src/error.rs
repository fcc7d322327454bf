// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

#[derive(Debug, PartialEq, Eq)]
pub enum Zip64ErrorCase {
    TooManyFiles,
    LargeFile,
}

impl Display for Zip64ErrorCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyFiles => write!(f, "More than 65535 files in archive"),
            Self::LargeFile => write!(f, "File is larger than 4 GiB"),
        }
    }
}

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("unable to open '{}': {source}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("data is too small to hold an end of central directory record ({0} bytes)")]
    InvalidSize(u64),
    #[error("unable to locate the end of central directory record")]
    UnableToLocateEOCDR,
    #[error("Encountered an unexpected header (actual: {0:#x}, expected: {1:#x}).")]
    UnexpectedHeaderError(u32, u32),
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),

    #[error("entries must have a non-empty filename")]
    EmptyFilename,
    #[error("{field} is {length} bytes long, which exceeds the 65535 byte limit")]
    FieldTooLong { field: &'static str, length: usize },
    #[error("entry '{name}' holds {actual} bytes of data but records a compressed size of {expected}")]
    DataSizeMismatch { name: String, expected: u32, actual: usize },
    #[error("zip64 extensions are required but not supported: {0}")]
    Zip64Needed(Zip64ErrorCase),
    #[error("attempted to convert non-UTF8 bytes to a string/str")]
    StringNotUtf8,

    #[error("an upstream reader returned an error: {0}")]
    UpstreamReadError(#[from] std::io::Error),
}
