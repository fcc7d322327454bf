// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::compression::Compression;

/// The version needed to extract a stored entry (1.0).
pub const VERSION_STORE: u16 = 0x000A;

/// The version needed to extract a deflated entry or a directory (2.0).
pub const VERSION_DEFLATE: u16 = 0x0014;

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#443
pub fn as_needed_to_extract(compression: Compression, filename: &[u8]) -> u16 {
    let version = match compression {
        Compression::Deflate => VERSION_DEFLATE,
        _ => VERSION_STORE,
    };

    if filename.ends_with(b"/") {
        return std::cmp::max(version, VERSION_DEFLATE);
    }

    version
}
