// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading ZIP files from a seekable source.

pub(crate) mod locator;

use std::collections::BTreeMap;
use std::io::{Read, Seek, SeekFrom};

use crate::codec::Codec;
use crate::core::cdr::CentralDirectoryRecord;
use crate::date::ZipDateTime;
use crate::entry::Entry;
use crate::error::Result;
use crate::string::ZipString;

/// The full contents of a ZIP file, staged before being handed to an [`Archive`](crate::Archive).
#[derive(Debug, Default)]
pub(crate) struct ArchiveContents {
    pub(crate) entries: BTreeMap<ZipString, Entry>,
    pub(crate) comment: ZipString,
}

/// Reads every entry (metadata and raw payload) and the trailing comment from a seekable source.
///
/// This function does so by:
/// - locating and reading the end of central directory record
/// - seeking to the start of the central directory
/// - for each central directory record, seeking to its local file header, reading the entry's payload, and seeking
///   back to the next record
///
/// Entries which share a name are overwritten by the later record.
#[tracing::instrument(skip(reader))]
pub(crate) fn archive<R>(codec: &Codec, mut reader: R) -> Result<ArchiveContents>
where
    R: Read + Seek,
{
    let length = reader.seek(SeekFrom::End(0))?;
    let eocdr_offset = locator::eocdr(codec, &mut reader, length)?;

    reader.seek(SeekFrom::Start(eocdr_offset))?;
    let eocdr = crate::core::eocdr::read(codec, &mut reader)?;

    let comment = codec.read_text(eocdr.zip_file_comment.as_slice(), eocdr.zip_file_comment.len())?;
    let num_entries = eocdr.total_number_of_entries_in_the_central_directory;
    let cd_offset = eocdr.offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number;

    tracing::debug!(num_entries, cd_offset, "reading central directory");
    reader.seek(SeekFrom::Start(cd_offset as u64))?;

    let mut entries = BTreeMap::new();

    for _ in 0..num_entries {
        let record = crate::core::cdr::read(codec, &mut reader)?;
        let next = reader.stream_position()?;

        let data = read_data(codec, &mut reader, &record)?;
        let entry = entry_from_record(codec, record, data)?;

        tracing::trace!(filename = %entry.filename, size = entry.compressed_size, "read entry");
        entries.insert(entry.filename.clone(), entry);

        reader.seek(SeekFrom::Start(next))?;
    }

    Ok(ArchiveContents { entries, comment })
}

/// Reads an entry's raw payload by way of its local file header.
///
/// The local header's own name and extra field lengths are used to skip to the payload, as they needn't match those
/// within the central directory. Entries with a compressed size of zero have no payload to read.
fn read_data<R>(codec: &Codec, mut reader: R, record: &CentralDirectoryRecord) -> Result<Vec<u8>>
where
    R: Read + Seek,
{
    reader.seek(SeekFrom::Start(record.relative_offset_of_local_header as u64))?;
    let header = crate::core::lfh::read_fixed(codec, &mut reader)?;

    if record.compressed_size == 0 {
        return Ok(Vec::new());
    }

    reader.seek(SeekFrom::Current(header.variable_length() as i64))?;
    crate::codec::read_bytes(&mut reader, record.compressed_size as usize)
}

fn entry_from_record(codec: &Codec, record: CentralDirectoryRecord, data: Vec<u8>) -> Result<Entry> {
    let comment = codec.read_text(record.file_comment.as_slice(), record.file_comment.len())?;

    Ok(Entry {
        filename: ZipString::new(record.file_name),
        compression: record.raw.compression_method.into(),
        version_made_by: record.raw.version_made_by,
        version_needed: record.raw.version_needed_to_extract,
        flags: record.raw.general_purpose_flags,
        last_modification_date: ZipDateTime::from_raw(record.raw.last_mod_file_date, record.raw.last_mod_file_time),
        crc32: record.raw.crc_32,
        compressed_size: record.raw.compressed_size,
        uncompressed_size: record.raw.uncompressed_size,
        internal_file_attribute: record.raw.internal_file_attributes,
        external_file_attribute: record.raw.external_file_attributes,
        extra_field: record.extra_field,
        comment,
        data,
    })
}
