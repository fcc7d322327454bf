// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::codec::Codec;
use crate::error::ZipError;
use crate::read::locator::{eocdr, reverse_search_buffer};
use crate::write::ArchiveWriter;

use std::io::Cursor;

const SIGNATURE: [u8; 4] = [0x50, 0x4b, 0x05, 0x06];

fn locate(data: &[u8]) -> crate::error::Result<u64> {
    eocdr(&Codec::host(), Cursor::new(data), data.len() as u64)
}

fn with_signature_at(length: usize, offsets: &[usize]) -> Vec<u8> {
    let mut data = vec![0; length];
    for offset in offsets {
        data[*offset..*offset + 4].copy_from_slice(&SIGNATURE);
    }
    data
}

#[test]
fn search_one_byte_test() {
    let buffer: &[u8] = &[0x0, 0x0, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert!(matched.is_none());

    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(matched, Some(1));
}

#[test]
fn search_two_byte_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x0, 0x0, 0x0, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    let matched = reverse_search_buffer(buffer, signature);
    assert_eq!(matched, Some(0));
}

#[test]
fn search_last_match_test() {
    let buffer: &[u8] = &[0x2, 0x1, 0x2, 0x1, 0x0];
    let signature: &[u8] = &[0x2, 0x1];

    assert_eq!(reverse_search_buffer(buffer, signature), Some(2));
}

#[test]
fn locator_empty_test() {
    let data = ArchiveWriter::new(Vec::new()).close().expect("failed to close writer");
    assert_eq!(locate(&data).expect("failed to locate"), 0);
}

#[test]
fn locator_empty_max_comment_test() {
    let mut writer = ArchiveWriter::new(Vec::new());
    writer.comment("a".repeat(u16::MAX as usize));

    let data = writer.close().expect("failed to close writer");
    assert_eq!(data.len(), 22 + u16::MAX as usize);
    assert_eq!(locate(&data).expect("failed to locate"), 0);
}

#[test]
fn locator_buffer_boundary_test() {
    // The first window covers [2030, 4078), so this signature straddles its lower edge.
    let data = with_signature_at(4096, &[2028]);
    assert_eq!(locate(&data).expect("failed to locate"), 2028);
}

#[test]
fn locator_highest_match_test() {
    let data = with_signature_at(200, &[10, 50]);
    assert_eq!(locate(&data).expect("failed to locate"), 50);
}

#[test]
fn locator_search_start_test() {
    // A record can't start within the last 21 bytes, as it wouldn't fit.
    let data = with_signature_at(100, &[78]);
    assert_eq!(locate(&data).expect("failed to locate"), 78);

    let data = with_signature_at(100, &[79]);
    assert!(matches!(locate(&data), Err(ZipError::UnableToLocateEOCDR)));
}

#[test]
fn locator_start_of_data_test() {
    let data = with_signature_at(22, &[0]);
    assert_eq!(locate(&data).expect("failed to locate"), 0);
}

#[test]
fn locator_invalid_size_test() {
    assert!(matches!(locate(&[0; 21]), Err(ZipError::InvalidSize(21))));
    assert!(matches!(locate(&[0; 100]), Err(ZipError::UnableToLocateEOCDR)));
}
