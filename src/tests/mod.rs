// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod read;
pub(crate) mod spec;

use crate::error::ZipError;
use crate::Archive;

use std::io::Cursor;

/// Saves an archive into memory.
pub(crate) fn save_to_vec(archive: &Archive) -> Vec<u8> {
    archive.save(Cursor::new(Vec::new())).expect("failed to save archive").into_inner()
}

#[test]
fn empty() {
    let bytes = save_to_vec(&Archive::new());
    assert_eq!(bytes.len(), 22);

    let archive = Archive::open(Cursor::new(bytes)).expect("failed to open archive");
    assert!(archive.is_empty());
    assert_eq!(archive.comment(), "");
}

#[test]
fn zero_length_zip() {
    let result = Archive::open(Cursor::new(Vec::<u8>::new()));
    assert!(matches!(result, Err(ZipError::InvalidSize(0))));
}

#[test]
fn too_small_zip() {
    let result = Archive::open(Cursor::new(vec![0; 21]));
    assert!(matches!(result, Err(ZipError::InvalidSize(21))));
}

#[test]
fn non_zip_data() {
    let result = Archive::open(Cursor::new(vec![0; 100]));
    assert!(matches!(result, Err(ZipError::UnableToLocateEOCDR)));
}

#[test]
fn single_entry_no_data() {
    let mut archive = Archive::new();
    archive.add("foo/", Vec::new());

    let archive = Archive::open(Cursor::new(save_to_vec(&archive))).expect("failed to open archive");

    assert_eq!(archive.len(), 1);
    assert_eq!(archive.file_count(), 0);
    assert_eq!(archive.directory_count(), 1);

    let entry = archive.get("foo/").expect("no 'foo/' entry");
    assert!(entry.dir());
    assert_eq!(entry.compressed_size(), 0);
    assert_eq!(entry.uncompressed_size(), 0);
    assert!(entry.data().is_empty());
}

#[test]
fn single_entry_stored() {
    let data = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt...";

    let mut archive = Archive::new();
    archive.add("foo.bar", data);

    let archive = Archive::open(Cursor::new(save_to_vec(&archive))).expect("failed to open archive");
    let entry = archive.get("foo.bar").expect("no 'foo.bar' entry");

    assert_eq!(entry.compression(), crate::Compression::Stored);
    assert_eq!(entry.uncompressed_size(), data.len() as u32);
    assert_eq!(entry.stored_data().expect("entry isn't stored"), data.as_bytes());
    assert!(entry.verify_crc().expect("entry isn't stored"));
}
