// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::borrow::Cow;

use crate::entry::EntryBytes;
use crate::error::{DecodeError, ExtractError};
use crate::header::cdr::{self, CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::header::eocdr::{self, EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::header::lfh::{self, LocalFileHeader, RawLocalFileHeader};
use crate::{Compression, ZipEntryBuilder, ZipFile};

#[test]
fn extract_stored_test() {
    crate::tests::init_logger();

    let file = ZipFile::new(crate::tests::hello_world()).unwrap();
    let content = file.entries()[0].extract().expect("failed to extract entry");

    assert_eq!(&content[..], b"hello world");
    assert!(matches!(content, Cow::Borrowed(_)));
}

#[test]
fn raw_borrows_source_test() {
    let file = ZipFile::new(crate::tests::hello_world()).unwrap();
    let entry = &file.entries()[0];

    let source = match entry.bytes() {
        EntryBytes::Offset { source, .. } => source,
        EntryBytes::Exactly(_) => panic!("expected an offset-backed entry"),
    };

    let raw = entry.raw().unwrap();
    assert_eq!(raw, b"hello world");
    assert!(std::ptr::eq(raw.as_ptr(), source[36..].as_ptr()));
}

#[test]
fn entries_outlive_file_test() {
    let entries = ZipFile::new(crate::tests::hello_world()).unwrap().into_entries();
    assert_eq!(&entries[0].extract().unwrap()[..], b"hello world");
}

#[test]
fn extract_data_bit_flip_test() {
    for bit in 0..8 {
        let mut data = crate::tests::hello_world();
        data[36 + 4] ^= 1 << bit;

        let file = ZipFile::new(data).unwrap();
        match file.entries()[0].extract() {
            Err(ExtractError::Integrity { expected, actual }) => {
                assert_eq!(expected, crc32fast::hash(b"hello world"));
                assert_ne!(expected, actual);
            }
            other => panic!("expected an integrity error, got {other:?}"),
        }
    }
}

#[test]
fn extract_stored_crc_bit_flip_test() {
    let mut data = crate::tests::hello_world();
    // The CRC32 field of the central directory record.
    data[47 + 16] ^= 0x01;

    let file = ZipFile::new(data).unwrap();
    assert!(matches!(file.entries()[0].extract(), Err(ExtractError::Integrity { .. })));
}

#[test]
fn extract_unsupported_compression_test() {
    let raw = vec![1, 2, 3, 4, 5];
    let entry =
        ZipEntryBuilder::new("method.bin".into(), Compression::Unsupported(10)).build_raw(raw.clone(), 0, 5).unwrap();

    let file = ZipFile::new(crate::write::encode(&[entry]).unwrap()).unwrap();
    let entry = &file.entries()[0];
    assert_eq!(entry.compression(), Compression::Unsupported(10));

    match entry.extract() {
        Err(ExtractError::UnsupportedCompression { code, raw: returned }) => {
            assert_eq!(code, 10);
            assert_eq!(returned.len(), entry.compressed_size() as usize);
            assert_eq!(returned, raw);
        }
        other => panic!("expected an unsupported compression error, got {other:?}"),
    }
}

#[test]
fn extract_with_fallback_test() {
    let entry = ZipEntryBuilder::new("method.bin".into(), Compression::Unsupported(10))
        .build_raw(vec![0xAA; 3], crc32fast::hash(b"hello"), 5)
        .unwrap();

    let file = ZipFile::new(crate::write::encode(&[entry]).unwrap()).unwrap();
    let entry = &file.entries()[0];

    let content = entry
        .extract_with(|code, raw| {
            assert_eq!(code, 10);
            assert_eq!(raw, [0xAAu8; 3]);
            Some(b"hello".to_vec())
        })
        .unwrap();
    assert_eq!(&content[..], b"hello");

    let wrong = entry.extract_with(|_, _| Some(b"goodbye".to_vec()));
    assert!(matches!(wrong, Err(ExtractError::Integrity { .. })));
}

#[cfg(feature = "deflate")]
#[test]
fn extract_deflate_test() {
    let data = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor...".repeat(64);
    let entry = crate::ZipEntry::deflate("lorem.txt", data.as_bytes()).unwrap();
    assert!(entry.compressed_size() < entry.uncompressed_size());

    let file = ZipFile::new(crate::write::encode(&[entry]).unwrap()).unwrap();
    let content = file.entries()[0].extract().unwrap();

    assert_eq!(&content[..], data.as_bytes());
    assert!(matches!(content, Cow::Owned(_)));
}

#[cfg(feature = "deflate")]
#[test]
fn extract_deflate_garbage_test() {
    let entry = ZipEntryBuilder::new("garbage".into(), Compression::Deflate)
        .build_raw(vec![0xFF; 16], 0, 16)
        .unwrap();

    let file = ZipFile::new(crate::write::encode(&[entry]).unwrap()).unwrap();
    assert!(matches!(file.entries()[0].extract(), Err(ExtractError::Inflate(_))));
}

#[test]
fn extract_no_data_test() {
    let mut data = crate::tests::hello_world();
    // The compressed size field of the central directory record.
    data[47 + 20..47 + 24].copy_from_slice(&1000u32.to_le_bytes());

    let file = ZipFile::new(data).unwrap();
    match file.entries()[0].extract() {
        Err(ExtractError::NoData { offset, wanted }) => {
            assert_eq!(offset, 36);
            assert_eq!(wanted, 1000);
        }
        other => panic!("expected a no data error, got {other:?}"),
    }
}

#[test]
fn extract_bad_local_header_test() {
    let mut data = crate::tests::hello_world();
    data[0] ^= 0xFF;

    // The directory still decodes; only the entry itself is affected.
    let file = ZipFile::new(data).unwrap();
    assert!(matches!(
        file.entries()[0].extract(),
        Err(ExtractError::LocalHeaderDecode(DecodeError::UnexpectedHeader { .. }))
    ));
}

#[test]
fn extract_local_lengths_differ_test() {
    crate::tests::init_logger();

    let data = b"hello world";
    let crc_32 = crc32fast::hash(data);
    let mut buffer = Vec::new();

    let raw = RawLocalFileHeader {
        version_needed_to_extract: 10,
        crc_32,
        compressed_size: 11,
        uncompressed_size: 11,
        file_name_length: 6,
        extra_field_length: 4,
        ..Default::default()
    };
    lfh::write(&mut buffer, &LocalFileHeader { raw, file_name: b"hi.txt", extra_field: &[0xAB; 4] });
    buffer.extend_from_slice(data);

    let directory_start = buffer.len();
    let raw = RawCentralDirectoryRecord {
        version_needed_to_extract: 10,
        crc_32,
        compressed_size: 11,
        uncompressed_size: 11,
        file_name_length: 6,
        ..Default::default()
    };
    cdr::write(&mut buffer, &CentralDirectoryRecord { raw, file_name: b"hi.txt", extra_field: &[], file_comment: &[] });

    let raw = RawEndOfCentralDirectoryRecord {
        total_number_of_entries_in_the_central_directory_on_this_disk: 1,
        total_number_of_entries_in_the_central_directory: 1,
        size_of_the_central_directory: (buffer.len() - directory_start) as u32,
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number: directory_start as u32,
        ..Default::default()
    };
    eocdr::write(&mut buffer, &EndOfCentralDirectoryRecord { raw, zip_file_comment: &[] });

    let file = ZipFile::new(buffer).unwrap();
    let entry = &file.entries()[0];

    assert!(entry.extra_field().is_empty());
    assert_eq!(&entry.extract().unwrap()[..], data);
}

#[test]
fn extract_exactly_test() {
    let entry = crate::ZipEntry::store("owned.txt", b"owned data").unwrap();

    assert!(matches!(entry.bytes(), EntryBytes::Exactly(_)));
    assert_eq!(entry.raw().unwrap(), b"owned data");
    assert_eq!(&entry.extract().unwrap()[..], b"owned data");
}
