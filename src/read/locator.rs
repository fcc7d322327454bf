// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#4316>
//!
//! The end of central directory record may be followed by a variable-length comment of up to 65535 bytes, so we
//! cannot assume it starts 22 bytes before the end of the data. Instead, the data is scanned backwards for the
//! record's signature, starting at the last position a comment-less record could occupy and continuing down to the
//! very start of the data. The first (ie. highest-offset) match wins.
//!
//! The scan reads the data in reverse buffered windows rather than seeking and reading four bytes at every offset.
//! Consecutive windows overlap by one byte less than the signature length, so a signature straddling a window
//! boundary is still found, and the order in which offsets are tested is the same as a byte-by-byte scan.
//!
//! # Limitation
//! The comment is free-form, so a comment which itself contains the signature bytes (at least 22 bytes before the
//! end of the data) will be matched before the real record further back.

use std::io::{Read, Seek, SeekFrom};

use crate::codec::Codec;
use crate::error::{Result, ZipError};
use crate::spec::consts::{EOCDR_LENGTH, EOCDR_MINIMUM_SIZE, EOCDR_SIGNATURE, SIGNATURE_LENGTH};

/// The buffer size used when locating the EOCDR, equal to 2KiB.
const BUFFER_SIZE: usize = 2048;

/// Locate the offset of the `end of central directory record` signature, if one exists.
///
/// `length` is the total length of the data, which must be at least [`EOCDR_MINIMUM_SIZE`] bytes.
#[tracing::instrument(skip(reader))]
pub fn eocdr<R>(codec: &Codec, mut reader: R, length: u64) -> Result<u64>
where
    R: Read + Seek,
{
    if length < EOCDR_MINIMUM_SIZE {
        return Err(ZipError::InvalidSize(length));
    }

    let mut signature = Vec::with_capacity(SIGNATURE_LENGTH);
    codec.write(&mut signature, EOCDR_SIGNATURE)?;

    let mut buffer = vec![0; BUFFER_SIZE];

    // Exclusive upper bound of the bytes which may hold a signature.
    let mut end = length - EOCDR_LENGTH as u64;

    loop {
        let start = end.saturating_sub(BUFFER_SIZE as u64);
        let window = &mut buffer[..(end - start) as usize];

        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(window)?;

        if let Some(index) = reverse_search_buffer(window, &signature) {
            let offset = start + index as u64;
            tracing::debug!(offset, "located end of central directory record");
            return Ok(offset);
        }

        if start == 0 {
            return Err(ZipError::UnableToLocateEOCDR);
        }

        end = start + (SIGNATURE_LENGTH - 1) as u64;
    }
}

/// A reverse linear search along the buffer for the specified signature bytes.
///
/// Returns the index of the first byte of the last match.
pub(crate) fn reverse_search_buffer(buffer: &[u8], signature: &[u8]) -> Option<usize> {
    buffer.windows(signature.len()).rposition(|window| window == signature)
}
