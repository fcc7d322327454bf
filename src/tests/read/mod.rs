// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod locator;

use crate::error::ZipError;
use crate::spec::consts::{CDH_SIGNATURE, LFH_SIGNATURE};
use crate::tests::save_to_vec;
use crate::{Archive, Compression, EntryBuilder};

use std::io::Cursor;

// A single stored entry named "a.txt" holding "hello": its local file header is at offset 0 and the central directory
// starts at offset 40.
fn single_entry() -> Vec<u8> {
    let mut archive = Archive::new();
    archive.add("a.txt", "hello");
    save_to_vec(&archive)
}

#[test]
fn central_directory_signature_mismatch() {
    let mut bytes = single_entry();
    bytes[40] = 0x00;

    match Archive::open(Cursor::new(bytes)) {
        Err(ZipError::UnexpectedHeaderError(actual, expected)) => {
            assert_eq!(actual, 0x02014b00);
            assert_eq!(expected, CDH_SIGNATURE);
        }
        other => panic!("expected a header error, got {other:?}"),
    }
}

#[test]
fn local_header_signature_mismatch() {
    let mut bytes = single_entry();
    bytes[0] = 0x00;

    match Archive::open(Cursor::new(bytes)) {
        Err(ZipError::UnexpectedHeaderError(actual, expected)) => {
            assert_eq!(actual, 0x04034b00);
            assert_eq!(expected, LFH_SIGNATURE);
        }
        other => panic!("expected a header error, got {other:?}"),
    }
}

#[test]
fn failed_load_leaves_archive_untouched() {
    let mut archive = Archive::new();
    archive.add("keep", "me");
    archive.set_comment("original");

    let mut bytes = single_entry();
    bytes[0] = 0x00;

    assert!(archive.load(Cursor::new(bytes)).is_err());
    assert!(archive.load(Cursor::new(vec![0; 100])).is_err());

    assert_eq!(archive.len(), 1);
    assert!(archive.has("keep"));
    assert_eq!(archive.comment(), "original");
}

#[test]
fn load_replaces_contents() {
    let mut archive = Archive::new();
    archive.add("old", "data");
    archive.set_comment("old comment");

    archive.load(Cursor::new(single_entry())).expect("failed to load archive");

    assert!(!archive.has("old"));
    assert!(archive.has("a.txt"));
    assert_eq!(archive.comment(), "");
}

#[test]
fn truncated_payload() {
    let mut bytes = single_entry();

    // The compressed size sits 20 bytes into the central directory record.
    bytes[40 + 20..40 + 24].copy_from_slice(&1000u32.to_le_bytes());

    assert!(matches!(Archive::open(Cursor::new(bytes)), Err(ZipError::UpstreamReadError(_))));
}

#[test]
fn false_signature_within_comment() {
    let mut comment = String::from("PK\u{5}\u{6}");
    comment.push_str(&"\0".repeat(18));

    let mut archive = Archive::new();
    archive.add("a.txt", "hello");
    archive.set_comment(comment);

    let bytes = save_to_vec(&archive);

    // The comment is matched as a record with no entries and no comment of its own, shadowing the real record.
    let loaded = Archive::open(Cursor::new(bytes)).expect("failed to open archive");
    assert!(loaded.is_empty());
    assert_eq!(loaded.comment(), "");
}

#[test]
fn duplicate_names_keep_last() {
    let mut bytes = Vec::new();
    let mut writer = crate::ArchiveWriter::new(&mut bytes);

    writer.write_entry(&crate::Entry::stored("a.txt", "first")).expect("failed to write entry");
    writer.write_entry(&crate::Entry::stored("a.txt", "second")).expect("failed to write entry");
    writer.close().expect("failed to close writer");

    let archive = Archive::open(Cursor::new(bytes)).expect("failed to open archive");
    assert_eq!(archive.len(), 1);
    assert_eq!(archive.get("a.txt").map(|entry| entry.data()), Some(&b"second"[..]));
}

#[test]
fn non_stored_passthrough() {
    let payload = vec![0xCB, 0x48, 0xCD, 0xC9, 0xC9, 0x07, 0x00];
    let entry = EntryBuilder::new("a.txt", payload.clone())
        .precompressed(Compression::Deflate, 5, crate::crc32(b"hello"))
        .comment("deflated elsewhere")
        .build();

    let mut archive = Archive::new();
    archive.insert(entry.clone());

    let loaded = Archive::open(Cursor::new(save_to_vec(&archive))).expect("failed to open archive");
    let loaded_entry = loaded.get("a.txt").expect("no 'a.txt' entry");

    assert_eq!(loaded_entry, &entry);
    assert_eq!(loaded_entry.data(), payload.as_slice());
    assert!(matches!(loaded_entry.stored_data(), Err(ZipError::CompressionNotSupported(8))));
    assert!(matches!(loaded_entry.verify_crc(), Err(ZipError::CompressionNotSupported(8))));
}

#[test]
fn stored_crc_not_verified_on_load() {
    let mut bytes = single_entry();

    // The CRC-32 sits 16 bytes into the central directory record.
    bytes[40 + 16..40 + 20].copy_from_slice(&0xDEADBEEFu32.to_le_bytes());

    let archive = Archive::open(Cursor::new(bytes)).expect("failed to open archive");
    let entry = archive.get("a.txt").expect("no 'a.txt' entry");

    assert_eq!(entry.crc32(), 0xDEADBEEF);
    assert_eq!(entry.data(), b"hello");
    assert!(matches!(entry.verify_crc(), Ok(false)));

    let reloaded = Archive::open(Cursor::new(save_to_vec(&archive))).expect("failed to open archive");
    assert_eq!(reloaded.get("a.txt").map(|entry| entry.crc32()), Some(0xDEADBEEF));
}

#[test]
fn non_utf8_comments_kept() {
    let mut archive = Archive::new();
    archive.add("a.txt", "hello");
    archive.get_mut("a.txt").expect("no 'a.txt' entry").set_comment(b"\x82".to_vec());
    archive.set_comment(b"\x82A".to_vec());

    let bytes = save_to_vec(&archive);
    assert_eq!(&bytes[bytes.len() - 4..], b"\x02\x00\x82A");

    let loaded = Archive::open(Cursor::new(bytes.clone())).expect("failed to open archive");
    assert_eq!(loaded.comment().as_bytes(), b"\x82A");
    assert_eq!(loaded.get("a.txt").map(|entry| entry.comment().as_bytes()), Some(&b"\x82"[..]));

    assert_eq!(save_to_vec(&loaded), bytes);
}
