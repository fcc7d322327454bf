// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;
pub mod ext;

use crate::date::{ZipDateTime, DATE_NORMAL, TIME_NORMAL};
use crate::entry::builder::EntryBuilder;
use crate::error::{Result, ZipError};
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
use crate::spec::flags::GeneralPurposeFlag;
use crate::spec::version::VERSION_STORE;
use crate::string::ZipString;

/// A single archived item (file or directory marker) together with its raw payload.
///
/// Every header field is kept as the raw value read from (or to be written to) the central directory, so an entry
/// loaded from an existing file is written back unchanged. The payload is held exactly as stored: an entry with a
/// compression method other than [`Compression::Stored`] holds compressed bytes which this crate never interprets.
///
/// # Note
/// The filename is the raw name stored within the ZIP file. If it is used as a path for entries retrieved from
/// untrusted ZIP files, it should be sanitised first to prevent [directory traversal
/// attacks](https://en.wikipedia.org/wiki/Directory_traversal_attack).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) filename: ZipString,
    pub(crate) compression: Compression,
    pub(crate) version_made_by: u16,
    pub(crate) version_needed: u16,
    pub(crate) flags: u16,
    pub(crate) last_modification_date: ZipDateTime,
    pub(crate) crc32: u32,
    pub(crate) compressed_size: u32,
    pub(crate) uncompressed_size: u32,
    pub(crate) internal_file_attribute: u16,
    pub(crate) external_file_attribute: u32,
    pub(crate) extra_field: Vec<u8>,
    pub(crate) comment: ZipString,
    pub(crate) data: Vec<u8>,
}

impl From<EntryBuilder> for Entry {
    fn from(builder: EntryBuilder) -> Self {
        builder.0
    }
}

impl Entry {
    /// Constructs a new stored entry from its name and uncompressed payload.
    ///
    /// The checksum is computed from the payload, both sizes are set to its length, and the version, flags and date
    /// are set to their store-mode defaults.
    pub fn stored(filename: impl Into<ZipString>, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let size = saturating_size(&data);

        Self {
            filename: filename.into(),
            compression: Compression::Stored,
            version_made_by: VERSION_STORE,
            version_needed: VERSION_STORE,
            flags: 0,
            last_modification_date: ZipDateTime::from_raw(DATE_NORMAL, TIME_NORMAL),
            crc32: crate::crc::crc32(&data),
            compressed_size: size,
            uncompressed_size: size,
            internal_file_attribute: 0,
            external_file_attribute: 0,
            extra_field: Vec::new(),
            comment: ZipString::default(),
            data,
        }
    }

    /// Returns the entry's filename.
    pub fn filename(&self) -> &ZipString {
        &self.filename
    }

    /// Returns the entry's compression method.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the raw `version made by` field.
    pub fn version_made_by(&self) -> u16 {
        self.version_made_by
    }

    /// Returns the raw `version needed to extract` field.
    pub fn version_needed(&self) -> u16 {
        self.version_needed
    }

    /// Returns the host compatibility encoded within the `version made by` field.
    pub fn attribute_compatibility(&self) -> AttributeCompatibility {
        self.version_made_by.into()
    }

    /// Returns the raw general purpose bit flag.
    pub fn flags(&self) -> u16 {
        self.flags
    }

    /// Returns an interpreted view over the general purpose bit flag.
    pub fn general_purpose_flag(&self) -> GeneralPurposeFlag {
        self.flags.into()
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> ZipDateTime {
        self.last_modification_date
    }

    /// Returns the CRC-32 checksum of the entry's uncompressed payload.
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Returns the size of the payload as stored.
    pub fn compressed_size(&self) -> u32 {
        self.compressed_size
    }

    /// Returns the size of the payload once fully restored.
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// Returns the entry's internal file attribute.
    pub fn internal_file_attribute(&self) -> u16 {
        self.internal_file_attribute
    }

    /// Returns the entry's external file attribute.
    pub fn external_file_attribute(&self) -> u32 {
        self.external_file_attribute
    }

    /// Returns the entry's extra field data.
    pub fn extra_field(&self) -> &[u8] {
        &self.extra_field
    }

    /// Returns the entry's file comment, byte-for-byte as stored.
    pub fn comment(&self) -> &ZipString {
        &self.comment
    }

    /// Returns the entry's payload exactly as stored.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns whether or not the entry represents a directory.
    pub fn dir(&self) -> bool {
        self.filename.as_bytes().ends_with(b"/")
    }

    /// Returns the uncompressed payload, which is only available for stored entries.
    pub fn stored_data(&self) -> Result<&[u8]> {
        match self.compression {
            Compression::Stored => Ok(&self.data),
            other => Err(ZipError::CompressionNotSupported(other.into())),
        }
    }

    /// Recomputes the checksum of a stored payload and compares it with the recorded value.
    pub fn verify_crc(&self) -> Result<bool> {
        Ok(crate::crc::crc32(self.stored_data()?) == self.crc32)
    }

    /// Sets the entry's file comment.
    pub fn set_comment(&mut self, comment: impl Into<ZipString>) {
        self.comment = comment.into();
    }

    /// Sets the entry's last modification time & date.
    pub fn set_last_modification_date(&mut self, date: ZipDateTime) {
        self.last_modification_date = date;
    }
}

pub(crate) fn saturating_size(data: &[u8]) -> u32 {
    u32::try_from(data.len()).unwrap_or(u32::MAX)
}
