// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Read, Write};

use crate::codec::Codec;
use crate::core::{raw, raw_deref};
use crate::error::Result;

pub use crate::spec::consts::LFH_SIGNATURE as SIGNATURE;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16,
        general_purpose_flags, u16,
        compression_method, u16,
        last_mod_file_time, u16,
        last_mod_file_date, u16,
        crc_32, u32,
        compressed_size, u32,
        uncompressed_size, u32,
        file_name_length, u16,
        extra_field_length, u16
    }
}

impl RawLocalFileHeader {
    /// The number of variable-length bytes (name and extra field) between this header and the entry's data.
    pub fn variable_length(&self) -> u64 {
        self.file_name_length as u64 + self.extra_field_length as u64
    }
}

#[derive(Clone, Debug)]
pub struct LocalFileHeader {
    pub raw: RawLocalFileHeader,
    pub file_name: Vec<u8>,
    pub extra_field: Vec<u8>,
}

raw_deref!(LocalFileHeader, RawLocalFileHeader);

/// Reads the signature and fixed-width fields of a local file header, leaving the reader positioned at the start of
/// the file name.
#[tracing::instrument(skip(reader))]
pub fn read_fixed(codec: &Codec, mut reader: impl Read) -> Result<RawLocalFileHeader> {
    crate::codec::assert_signature(codec, &mut reader, SIGNATURE)?;
    raw_read(codec, &mut reader)
}

/// Writes a local file header to the given writer.
///
/// This function does so by:
/// - writing the signature of the local file header
/// - writing the raw local file header
/// - writing the file name
/// - writing the extra field
#[tracing::instrument(skip(writer, header))]
pub fn write(codec: &Codec, mut writer: impl Write, header: &LocalFileHeader) -> Result<()> {
    codec.write(&mut writer, SIGNATURE)?;

    raw_write(codec, &mut writer, &header.raw)?;
    writer.write_all(&header.file_name)?;
    writer.write_all(&header.extra_field)?;

    Ok(())
}
