// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP files.
//!
//! # Example
//! ```
//! # use storezip::{Entry, write::ArchiveWriter};
//! # use storezip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ArchiveWriter::new(Vec::<u8>::new());
//!
//! writer.write_entry(&Entry::stored("foo.txt", "This is an example file."))?;
//! writer.comment(String::from("An example archive."));
//!
//! let bytes = writer.close()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod io;

pub use io::offset::OffsetWriter;

use std::io::Write;

use crate::codec::Codec;
use crate::core::cdr::{CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::core::eocdr::{EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::core::lfh::{LocalFileHeader, RawLocalFileHeader};
use crate::entry::Entry;
use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::spec::consts::{NON_ZIP64_MAX_NUM_FILES, NON_ZIP64_MAX_SIZE};
use crate::string::ZipString;

/// A ZIP file writer which acts over [`Write`] implementers.
///
/// Entries are written in the order they are provided: each local file header and payload immediately, and the
/// central directory and end of central directory record once the writer is closed.
///
/// # Note
/// - [`ArchiveWriter::close()`] must be called before the writer goes out of scope, else the output won't be a
///   readable ZIP file.
pub struct ArchiveWriter<W> {
    writer: OffsetWriter<W>,
    codec: Codec,
    cd_entries: Vec<CentralDirectoryRecord>,
    comment: ZipString,
}

impl<W: Write> ArchiveWriter<W> {
    /// Construct a new ZIP file writer from a writer.
    pub fn new(writer: W) -> Self {
        Self::with_codec(writer, Codec::host())
    }

    /// Construct a new ZIP file writer which encodes integers with the provided codec.
    pub fn with_codec(writer: W, codec: Codec) -> Self {
        Self { writer: OffsetWriter::new(writer), codec, cd_entries: Vec::new(), comment: ZipString::default() }
    }

    /// Writes an entry's local file header and raw payload.
    ///
    /// The payload is written as-is under the entry's recorded compression method and sizes.
    #[tracing::instrument(skip(self, entry), fields(filename = %entry.filename))]
    pub fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        validate_entry(entry)?;

        if self.cd_entries.len() >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::Zip64Needed(Zip64ErrorCase::TooManyFiles));
        }

        let offset = self.writer.offset();
        let lh_offset = u32::try_from(offset).map_err(|_| ZipError::Zip64Needed(Zip64ErrorCase::LargeFile))?;

        let header = LocalFileHeader {
            raw: RawLocalFileHeader {
                version_needed_to_extract: entry.version_needed,
                general_purpose_flags: entry.flags,
                compression_method: entry.compression.into(),
                last_mod_file_time: entry.last_modification_date.time,
                last_mod_file_date: entry.last_modification_date.date,
                crc_32: entry.crc32,
                compressed_size: entry.compressed_size,
                uncompressed_size: entry.uncompressed_size,
                file_name_length: entry.filename.len() as u16,
                extra_field_length: entry.extra_field.len() as u16,
            },
            file_name: entry.filename.as_bytes().to_vec(),
            extra_field: entry.extra_field.clone(),
        };

        crate::core::lfh::write(&self.codec, &mut self.writer, &header)?;
        self.writer.write_all(&entry.data)?;

        tracing::trace!(offset, size = entry.compressed_size, "wrote entry");

        self.cd_entries.push(CentralDirectoryRecord {
            raw: RawCentralDirectoryRecord {
                version_made_by: entry.version_made_by,
                version_needed_to_extract: entry.version_needed,
                general_purpose_flags: entry.flags,
                compression_method: entry.compression.into(),
                last_mod_file_time: entry.last_modification_date.time,
                last_mod_file_date: entry.last_modification_date.date,
                crc_32: entry.crc32,
                compressed_size: entry.compressed_size,
                uncompressed_size: entry.uncompressed_size,
                file_name_length: entry.filename.len() as u16,
                extra_field_length: entry.extra_field.len() as u16,
                file_comment_length: entry.comment.len() as u16,
                disk_number_start: 0,
                internal_file_attributes: entry.internal_file_attribute,
                external_file_attributes: entry.external_file_attribute,
                relative_offset_of_local_header: lh_offset,
            },
            file_name: header.file_name,
            extra_field: header.extra_field,
            file_comment: entry.comment.as_bytes().to_vec(),
        });

        Ok(())
    }

    /// Set the ZIP file comment.
    pub fn comment(&mut self, comment: impl Into<ZipString>) {
        self.comment = comment.into();
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory headers.
    /// - Writing the end of central directory header.
    /// - Writing the file comment.
    ///
    /// Failure to call this function before going out of scope would result in a corrupted ZIP file.
    #[tracing::instrument(skip(self))]
    pub fn close(mut self) -> Result<W> {
        validate_comment(&self.comment)?;

        let cd_offset = self.writer.offset();
        crate::core::cd::write(&self.codec, &mut self.writer, &self.cd_entries)?;
        let cd_size = self.writer.offset() - cd_offset;

        let large_file = || ZipError::Zip64Needed(Zip64ErrorCase::LargeFile);
        let cd_offset = u32::try_from(cd_offset).map_err(|_| large_file())?;
        let cd_size = u32::try_from(cd_size).map_err(|_| large_file())?;
        let num_entries = self.cd_entries.len() as u16;

        tracing::debug!(cd_offset, cd_size, num_entries, "writing end of central directory record");

        let eocdr = EndOfCentralDirectoryRecord {
            raw: RawEndOfCentralDirectoryRecord {
                number_of_this_disk: 0,
                number_of_the_disk_with_the_start_of_the_central_directory: 0,
                total_number_of_entries_in_the_central_directory_on_this_disk: num_entries,
                total_number_of_entries_in_the_central_directory: num_entries,
                size_of_the_central_directory: cd_size,
                offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number: cd_offset,
                zip_file_comment_length: self.comment.len() as u16,
            },
            zip_file_comment: self.comment.into_bytes(),
        };

        crate::core::eocdr::write(&self.codec, &mut self.writer, &eocdr)?;
        self.writer.flush()?;

        Ok(self.writer.into_inner())
    }
}

/// Checks that an entry can be represented within a non-ZIP64 file.
pub(crate) fn validate_entry(entry: &Entry) -> Result<()> {
    if entry.filename.is_empty() {
        return Err(ZipError::EmptyFilename);
    }

    validate_length("filename", entry.filename.len())?;
    validate_length("extra field", entry.extra_field.len())?;
    validate_length("file comment", entry.comment.len())?;

    if entry.data.len() as u64 > NON_ZIP64_MAX_SIZE as u64 {
        return Err(ZipError::Zip64Needed(Zip64ErrorCase::LargeFile));
    }

    if entry.data.len() != entry.compressed_size as usize {
        return Err(ZipError::DataSizeMismatch {
            name: entry.filename.to_string(),
            expected: entry.compressed_size,
            actual: entry.data.len(),
        });
    }

    Ok(())
}

/// Checks that a ZIP file comment fits within its 16-bit length field.
pub(crate) fn validate_comment(comment: &ZipString) -> Result<()> {
    validate_length("zip file comment", comment.len())
}

fn validate_length(field: &'static str, length: usize) -> Result<()> {
    if length > u16::MAX as usize {
        return Err(ZipError::FieldTooLong { field, length });
    }

    Ok(())
}
