// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// The host system an entry's attributes were produced on.
///
/// This is the upper byte of the `version made by` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeCompatibility {
    Dos,
    Unix,
    Other(u8),
}

impl From<u16> for AttributeCompatibility {
    // Extract the host compatibility from a `version made by` value.
    // https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#4422
    fn from(version_made_by: u16) -> Self {
        match (version_made_by >> 8) as u8 {
            0 => AttributeCompatibility::Dos,
            3 => AttributeCompatibility::Unix,
            other => AttributeCompatibility::Other(other),
        }
    }
}

impl From<AttributeCompatibility> for u8 {
    fn from(compatibility: AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Dos => 0,
            AttributeCompatibility::Unix => 3,
            AttributeCompatibility::Other(value) => value,
        }
    }
}

impl AttributeCompatibility {
    /// Replaces the host byte of a `version made by` value, keeping the specification version in the lower byte.
    pub fn apply(self, version_made_by: u16) -> u16 {
        ((u8::from(self) as u16) << 8) | (version_made_by & 0x00FF)
    }
}
