// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Read, Write};

use crate::codec::Codec;
use crate::core::{raw, raw_deref};
use crate::error::Result;

pub use crate::spec::consts::EOCDR_SIGNATURE as SIGNATURE;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16,
        total_number_of_entries_in_the_central_directory, u16,
        size_of_the_central_directory, u32,
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number, u32,
        zip_file_comment_length, u16
    }
}

#[derive(Clone, Debug)]
pub struct EndOfCentralDirectoryRecord {
    pub raw: RawEndOfCentralDirectoryRecord,
    pub zip_file_comment: Vec<u8>,
}

raw_deref!(EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord);

/// Reads the end of central directory record from the given reader.
///
/// This function does so by:
/// - asserting the signature of the end of central directory record
/// - reading the raw end of central directory record
/// - reading the zip file comment
#[tracing::instrument(skip(reader))]
pub fn read(codec: &Codec, mut reader: impl Read) -> Result<EndOfCentralDirectoryRecord> {
    crate::codec::assert_signature(codec, &mut reader, SIGNATURE)?;

    let raw = raw_read(codec, &mut reader)?;
    let zip_file_comment = crate::codec::read_bytes(&mut reader, raw.zip_file_comment_length as usize)?;

    Ok(EndOfCentralDirectoryRecord { raw, zip_file_comment })
}

/// Writes the end of central directory record to the given writer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
/// - writing the zip file comment
#[tracing::instrument(skip(writer, header))]
pub fn write(codec: &Codec, mut writer: impl Write, header: &EndOfCentralDirectoryRecord) -> Result<()> {
    codec.write(&mut writer, SIGNATURE)?;

    raw_write(codec, &mut writer, &header.raw)?;
    writer.write_all(&header.zip_file_comment)?;

    Ok(())
}
