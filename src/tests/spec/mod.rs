// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)


use crate::spec::version::{as_needed_to_extract, VERSION_DEFLATE, VERSION_STORE};
use crate::{AttributeCompatibility, Compression, EntryBuilder, EntryBuilderExt, EntryExt, GeneralPurposeFlag};

#[test]
fn compression_codes() {
    assert_eq!(Compression::from(0u16), Compression::Stored);
    assert_eq!(Compression::from(8u16), Compression::Deflate);
    assert_eq!(Compression::from(12u16), Compression::Other(12));

    assert_eq!(u16::from(Compression::Stored), 0);
    assert_eq!(u16::from(Compression::Deflate), 8);
    assert_eq!(u16::from(Compression::Other(93)), 93);
}

#[test]
fn attribute_compatibility() {
    assert_eq!(AttributeCompatibility::from(0x0314u16), AttributeCompatibility::Unix);
    assert_eq!(AttributeCompatibility::from(0x000Au16), AttributeCompatibility::Dos);
    assert_eq!(AttributeCompatibility::from(0x0A14u16), AttributeCompatibility::Other(0x0A));

    assert_eq!(AttributeCompatibility::Unix.apply(0x0014), 0x0314);
    assert_eq!(AttributeCompatibility::Dos.apply(0x0314), 0x0014);
}

#[test]
fn general_purpose_flag() {
    let flag = GeneralPurposeFlag::from(0x0809u16);
    assert!(flag.encrypted);
    assert!(flag.data_descriptor);
    assert!(flag.filename_unicode);

    let flag = GeneralPurposeFlag { encrypted: false, data_descriptor: false, filename_unicode: true };
    assert_eq!(flag.apply(0x0009), 0x0800);
    assert_eq!(flag.apply(0x0006), 0x0806);
}

#[test]
fn version_needed() {
    assert_eq!(as_needed_to_extract(Compression::Stored, b"a.txt"), VERSION_STORE);
    assert_eq!(as_needed_to_extract(Compression::Deflate, b"a.txt"), VERSION_DEFLATE);
    assert_eq!(as_needed_to_extract(Compression::Stored, b"dir/"), VERSION_DEFLATE);
}

#[test]
fn unix_permissions() {
    let entry = EntryBuilder::new("a.sh", "#!/bin/sh").unix_permissions(0o755).build();

    assert_eq!(entry.attribute_compatibility(), AttributeCompatibility::Unix);
    assert_eq!(entry.unix_permissions(), Some(0o755));
    assert_eq!(entry.external_file_attribute() >> 16, 0o755);

    let entry = EntryBuilder::new("a.txt", "text").build();
    assert_eq!(entry.unix_permissions(), None);
}
