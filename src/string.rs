// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::{Result, ZipError};

/// A string encoding supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEncoding {
    Utf8,
    Raw,
}

/// A byte-accurate string as stored within a ZIP file.
///
/// Equality, ordering and hashing only consider the raw bytes, so a [`ZipString`] can be looked up by either a `&str`
/// or a `&[u8]` within maps keyed by it.
#[derive(Debug, Clone)]
pub struct ZipString {
    encoding: StringEncoding,
    raw: Vec<u8>,
}

impl ZipString {
    /// Constructs a new string from its raw bytes.
    ///
    /// The encoding is [`StringEncoding::Utf8`] if the bytes are valid UTF-8, and [`StringEncoding::Raw`] otherwise.
    pub fn new(raw: Vec<u8>) -> Self {
        let encoding = match std::str::from_utf8(&raw) {
            Ok(_) => StringEncoding::Utf8,
            Err(_) => StringEncoding::Raw,
        };

        Self { encoding, raw }
    }

    /// Returns the raw bytes for this string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns the encoding type for this string.
    pub fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    /// Returns the length of this string in bytes.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns whether this string holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the raw bytes converted into a string slice.
    ///
    /// # Note
    /// A call to this method will only succeed if the encoding type is [`StringEncoding::Utf8`].
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.raw).map_err(|_| ZipError::StringNotUtf8)
    }

    /// Returns the raw bytes converted to an owned string.
    ///
    /// # Note
    /// A call to this method will only succeed if the encoding type is [`StringEncoding::Utf8`].
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.raw).map_err(|_| ZipError::StringNotUtf8)
    }

    /// Consumes this string and returns its raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }
}

impl Default for ZipString {
    fn default() -> Self {
        Self { encoding: StringEncoding::Utf8, raw: Vec::new() }
    }
}

impl PartialEq for ZipString {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ZipString {}

impl PartialOrd for ZipString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ZipString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for ZipString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state)
    }
}

impl Borrow<[u8]> for ZipString {
    fn borrow(&self) -> &[u8] {
        &self.raw
    }
}

impl AsRef<[u8]> for ZipString {
    fn as_ref(&self) -> &[u8] {
        &self.raw
    }
}

impl PartialEq<str> for ZipString {
    fn eq(&self, other: &str) -> bool {
        self.raw == other.as_bytes()
    }
}

impl PartialEq<&str> for ZipString {
    fn eq(&self, other: &&str) -> bool {
        self.raw == other.as_bytes()
    }
}

impl Display for ZipString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.raw))
    }
}

impl From<String> for ZipString {
    fn from(value: String) -> Self {
        Self { encoding: StringEncoding::Utf8, raw: value.into_bytes() }
    }
}

impl From<&str> for ZipString {
    fn from(value: &str) -> Self {
        Self { encoding: StringEncoding::Utf8, raw: value.as_bytes().to_vec() }
    }
}

impl From<Vec<u8>> for ZipString {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for ZipString {
    fn from(value: &[u8]) -> Self {
        Self::new(value.to_vec())
    }
}
