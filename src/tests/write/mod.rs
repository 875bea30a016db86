// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)


use crate::error::{ExtractError, ZipError};
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, FLAG_DATA_DESCRIPTOR, LFH_SIGNATURE};
use crate::write::{encode, ZipFileWriter};
use crate::{Compression, ZipEntry, ZipEntryBuilder, ZipFile, ZipString};

#[test]
fn empty() {
    let data = encode(&[]).expect("failed to encode archive");

    assert_eq!(data.len(), 22);
    assert_eq!(data[..4], EOCDR_SIGNATURE.to_le_bytes());

    let file = ZipFile::new(data).expect("failed to parse archive");
    assert!(file.entries().is_empty());
}

#[test]
fn single_entry_no_data() {
    let entry = ZipEntry::store("foo.bar", &[]).unwrap();
    let file = ZipFile::new(encode(&[entry]).unwrap()).unwrap();

    assert_eq!(1, file.entries().len());
    assert_eq!(0, file.entries()[0].compressed_size());
    assert_eq!(0, file.entries()[0].uncompressed_size());
    assert_eq!(Compression::Stored, file.entries()[0].compression());
    assert!(file.entries()[0].extract().unwrap().is_empty());
}

#[test]
fn hello_world_layout() {
    let data = crate::tests::hello_world();

    assert_eq!(data.len(), 121);
    assert_eq!(data[..4], LFH_SIGNATURE.to_le_bytes());
    assert_eq!(&data[30..36], b"hi.txt");
    assert_eq!(&data[36..47], b"hello world");
    assert_eq!(data[47..51], CDH_SIGNATURE.to_le_bytes());
    assert_eq!(data[99..103], EOCDR_SIGNATURE.to_le_bytes());

    // Entry counts, directory size & start, and comment length.
    assert_eq!(data[107..109], 1u16.to_le_bytes());
    assert_eq!(data[109..111], 1u16.to_le_bytes());
    assert_eq!(data[111..115], 52u32.to_le_bytes());
    assert_eq!(data[115..119], 47u32.to_le_bytes());
    assert_eq!(data[119..121], 0u16.to_le_bytes());
}

#[test]
fn reencode_identical() {
    let original = ZipFile::from(vec![
        ZipEntry::store("a.txt", b"first").unwrap(),
        ZipEntryBuilder::new("b.bin".into(), Compression::Unsupported(99)).build_raw(vec![9; 7], 1, 2).unwrap(),
    ]);
    let data = original.to_bytes().unwrap();

    let parsed = ZipFile::new(data.clone()).unwrap();
    assert_eq!(parsed.to_bytes().unwrap(), data);
}

#[test]
fn mixed_sources() {
    let parsed = ZipFile::new(crate::tests::hello_world()).unwrap();

    let mut entries = parsed.into_entries();
    entries.push(ZipEntry::store("new.txt", b"fresh").unwrap());

    let file = ZipFile::new(encode(&entries).unwrap()).unwrap();
    assert_eq!(&file.entries()[0].extract().unwrap()[..], b"hello world");
    assert_eq!(&file.entries()[1].extract().unwrap()[..], b"fresh");
}

#[test]
fn data_descriptor_flag_cleared() {
    let mut entry = ZipEntry::store("foo.bar", b"data").unwrap();
    entry.meta.flag |= FLAG_DATA_DESCRIPTOR;

    let file = ZipFile::new(encode(&[entry]).unwrap()).unwrap();
    assert_eq!(file.entries()[0].flag() & FLAG_DATA_DESCRIPTOR, 0);
    assert_eq!(&file.entries()[0].extract().unwrap()[..], b"data");
}

#[test]
fn unresolvable_entry() {
    let mut data = crate::tests::hello_world();
    data[0] ^= 0xFF;

    let file = ZipFile::new(data).unwrap();
    let mut writer = ZipFileWriter::new();

    assert!(matches!(
        writer.write_entry(&file.entries()[0]),
        Err(ZipError::Resolve(ExtractError::LocalHeaderDecode(_)))
    ));
    assert_eq!(writer.offset(), 0);
    assert!(matches!(file.to_bytes(), Err(ZipError::Resolve(_))));
}

#[test]
fn file_name_too_large() {
    let name = "a".repeat(u16::MAX as usize + 1);
    let entry = ZipEntry::store(name.as_str(), b"").unwrap();

    let mut writer = ZipFileWriter::new();
    assert!(matches!(writer.write_entry(&entry), Err(ZipError::FileNameTooLarge)));
    assert_eq!(writer.offset(), 0);
}

#[test]
fn extra_field_too_large() {
    let entry = ZipEntryBuilder::new("foo.bar".into(), Compression::Stored)
        .extra_field(vec![0; u16::MAX as usize + 1])
        .build(b"")
        .unwrap();

    assert!(matches!(encode(&[entry]), Err(ZipError::ExtraFieldTooLarge)));
}

#[test]
fn comment_too_large() {
    let entry = ZipEntryBuilder::new("foo.bar".into(), Compression::Stored)
        .comment("c".repeat(u16::MAX as usize + 1).into())
        .build(b"")
        .unwrap();
    assert!(matches!(encode(&[entry]), Err(ZipError::CommentTooLarge)));

    let mut writer = ZipFileWriter::new();
    writer.comment(ZipString::from("c".repeat(u16::MAX as usize + 1)));
    assert!(matches!(writer.close(), Err(ZipError::CommentTooLarge)));
}

#[test]
fn archive_comment() {
    let mut writer = ZipFileWriter::new();
    writer.write_entry(&ZipEntry::store("foo.bar", b"data").unwrap()).unwrap();
    writer.comment("trailing".into());

    let data = writer.close().unwrap();
    assert!(data.ends_with(b"trailing"));
    assert_eq!(ZipFile::new(data).unwrap().comment().as_str().unwrap(), "trailing");
}

#[cfg(feature = "deflate")]
#[test]
fn deflate_options() {
    use crate::DeflateOption;

    let data = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit".repeat(32);

    for (option, bits) in [(DeflateOption::Normal, 0), (DeflateOption::Maximum, 2), (DeflateOption::Fast, 4)] {
        let entry = ZipEntryBuilder::new("lorem.txt".into(), Compression::Deflate)
            .deflate_option(option)
            .build(&data)
            .unwrap();

        let file = ZipFile::new(encode(&[entry]).unwrap()).unwrap();
        assert_eq!(file.entries()[0].flag() & 0b110, bits);
        assert_eq!(&file.entries()[0].extract().unwrap()[..], &data[..]);
    }
}
