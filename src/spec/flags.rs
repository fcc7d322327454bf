// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#444

const ENCRYPTED: u16 = 1 << 0;
const DATA_DESCRIPTOR: u16 = 1 << 3;
const FILENAME_UNICODE: u16 = 1 << 11;

/// An interpreted view over the general purpose bit flag.
///
/// Entries keep the raw 16-bit value and round-trip every bit; this view only decodes the bits callers commonly ask
/// about.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GeneralPurposeFlag {
    pub encrypted: bool,
    pub data_descriptor: bool,
    pub filename_unicode: bool,
}

impl From<u16> for GeneralPurposeFlag {
    fn from(value: u16) -> Self {
        Self {
            encrypted: value & ENCRYPTED != 0,
            data_descriptor: value & DATA_DESCRIPTOR != 0,
            filename_unicode: value & FILENAME_UNICODE != 0,
        }
    }
}

impl GeneralPurposeFlag {
    /// Writes the interpreted bits over a raw flag value, leaving all other bits untouched.
    pub fn apply(&self, raw: u16) -> u16 {
        let mut value = raw & !(ENCRYPTED | DATA_DESCRIPTOR | FILENAME_UNICODE);

        if self.encrypted {
            value |= ENCRYPTED;
        }
        if self.data_descriptor {
            value |= DATA_DESCRIPTOR;
        }
        if self.filename_unicode {
            value |= FILENAME_UNICODE;
        }

        value
    }
}
