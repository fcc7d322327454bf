// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};

use storezip::Archive;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

pub const FILE_LIST: &[(&str, &str)] = &[
    ("sample_data/alpha/back_to_front.txt", "zyxwvutsrqponmlkjihgfedcba"),
    ("sample_data/alpha/front_to_back.txt", "abcdefghijklmnopqrstuvwxyz"),
    ("sample_data/numeric/forward.txt", "0123456789"),
    ("sample_data/numeric/reverse.txt", "9876543210"),
];

/// Returns deterministic pseudo-random bytes from a linear congruential generator.
pub fn pseudo_random(length: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..length)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

/// Writes [`FILE_LIST`] into memory with a third-party writer.
pub fn compress_to_mem(compress: CompressionMethod) -> anyhow::Result<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(compress);

    for (name, content) in FILE_LIST {
        writer.start_file(*name, options)?;
        writer.write_all(content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Checks that every file within a third-party reader matches [`FILE_LIST`].
pub fn check_decompress_external(zip_data: Vec<u8>) -> anyhow::Result<()> {
    let mut zip = zip::ZipArchive::new(Cursor::new(zip_data))?;
    assert_eq!(zip.len(), FILE_LIST.len());

    for (name, expected) in FILE_LIST {
        let mut output = String::new();
        zip.by_name(name)?.read_to_string(&mut output)?;
        assert_eq!(&output, expected, "for {name}, expect zip data to match file data");
    }

    Ok(())
}

/// Saves an archive into memory and loads it back.
pub fn round_trip(archive: &Archive) -> anyhow::Result<Archive> {
    let bytes = archive.save(Cursor::new(Vec::new()))?.into_inner();
    Ok(Archive::open(Cursor::new(bytes))?)
}
