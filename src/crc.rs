// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The CRC-32 checksum stored against every ZIP entry.
//!
//! This is the standard reflected CRC-32 (polynomial `0xEDB88320`) shared with PNG and gzip, computed by `crc32fast`.

pub use crc32fast::Hasher;

/// Computes the CRC-32 checksum of the provided bytes.
///
/// ```
/// assert_eq!(storezip::crc32(b"123456789"), 0xCBF43926);
/// ```
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}
