// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # storezip
//!
//! A synchronous ZIP archive reading/writing crate built around an owning, in-memory model of the whole file.
//!
//! ## Features
//! - Load any single-disk, non-ZIP64 file into an [`Archive`], edit it, and write it back out.
//! - Stored entries are created directly; entries under any other method are carried through byte-for-byte.
//! - Byte-accurate entry names via [`ZipString`], so names which aren't valid UTF-8 survive a round trip.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Limitations
//! The end of central directory record is located by scanning backwards from the end of the file. A ZIP file comment
//! which itself contains the record's signature may therefore be mistaken for the real record.
//!
//! ## Feature flags
//! - `full` - Enables all features.
//! - `chrono` - Enables support for parsing dates via `chrono`.

pub mod archive;
pub mod codec;
pub(crate) mod core;
pub mod crc;
pub mod date;
pub mod entry;
pub mod error;
pub(crate) mod read;
pub mod spec;
pub mod string;
pub mod write;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::archive::Archive;
pub use crate::codec::{Codec, Endian};
pub use crate::crc::crc32;
pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{
    builder::EntryBuilder,
    ext::{EntryBuilderExt, EntryExt},
    Entry,
};
pub use crate::error::{Result, ZipError};
pub use crate::spec::{attribute::AttributeCompatibility, compression::Compression, flags::GeneralPurposeFlag};
pub use crate::string::{StringEncoding, ZipString};
pub use crate::write::ArchiveWriter;
