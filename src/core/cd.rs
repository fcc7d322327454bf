// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::Write;

use crate::codec::Codec;
use crate::core::cdr::CentralDirectoryRecord;
use crate::error::Result;

/// Writes the central directory records to the given writer.
///
/// The end of central directory record is not written, as its size and offset fields depend on where this function
/// leaves the writer.
#[tracing::instrument(skip(writer, records))]
pub fn write(codec: &Codec, mut writer: impl Write, records: &[CentralDirectoryRecord]) -> Result<()> {
    for record in records {
        crate::core::cdr::write(codec, &mut writer, record)?;
    }

    Ok(())
}
