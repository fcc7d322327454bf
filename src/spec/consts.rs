// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// The smallest possible ZIP file: a bare end of central directory record without a comment.
pub const EOCDR_MINIMUM_SIZE: u64 = (SIGNATURE_LENGTH + EOCDR_LENGTH) as u64;

/// The upper limit of any variable-length field (name, extra field, comment) and of the entry count.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = u16::MAX;

/// The upper limit of any size or offset field.
pub const NON_ZIP64_MAX_SIZE: u32 = u32::MAX;
