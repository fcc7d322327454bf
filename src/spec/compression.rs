// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// A compression method code.
///
/// Payloads are never (de)compressed by this crate; the code is carried alongside the raw bytes so that an external
/// codec can interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    Stored,
    Deflate,
    Other(u16),
}

impl From<u16> for Compression {
    // Convert a u16 stored with little endianness into a compression method.
    // https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#445
    fn from(value: u16) -> Self {
        match value {
            0 => Compression::Stored,
            8 => Compression::Deflate,
            other => Compression::Other(other),
        }
    }
}

impl From<&Compression> for u16 {
    // Convert a compression method into its relevant u16 stored with little endianness.
    // https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#445
    fn from(compression: &Compression) -> u16 {
        match compression {
            Compression::Stored => 0,
            Compression::Deflate => 8,
            Compression::Other(value) => *value,
        }
    }
}

impl From<Compression> for u16 {
    fn from(compression: Compression) -> u16 {
        (&compression).into()
    }
}
