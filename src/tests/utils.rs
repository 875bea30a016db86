// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::DecodeError;
use crate::utils::{assert_signature, ByteCursor};

#[test]
fn cursor_little_endian_test() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
    let mut cursor = ByteCursor::at(&data, 0);

    assert_eq!(cursor.read_u16().unwrap(), 0x0201);
    assert_eq!(cursor.read_u32().unwrap(), 0x06050403);
    assert_eq!(cursor.position(), 6);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn cursor_eof_leaves_position_test() {
    let data = [0x01, 0x02, 0x03];
    let mut cursor = ByteCursor::at(&data, 1);

    assert_eq!(cursor.read_u32(), Err(DecodeError::UnexpectedEof { offset: 1, wanted: 4 }));
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.read_bytes(2).unwrap(), [0x02u8, 0x03]);
    assert!(cursor.skip(1).is_err());
}

#[test]
fn cursor_past_end_test() {
    let data = [0x01];
    let mut cursor = ByteCursor::at(&data, 10);

    assert_eq!(cursor.remaining(), 0);
    assert!(cursor.read_bytes(0).is_err());
}

#[test]
fn cursor_list_test() {
    let data = [0x01, 0x00, 0x02, 0x00, 0x03];
    let mut cursor = ByteCursor::at(&data, 0);

    assert_eq!(cursor.read_list(2, |cursor| cursor.read_u16()).unwrap(), [1u16, 2]);
    assert!(cursor.read_list(1, |cursor| cursor.read_u16()).is_err());
}

#[test]
fn signature_test() {
    let data = 0x04034b50u32.to_le_bytes();

    assert!(assert_signature(&mut ByteCursor::at(&data, 0), 0x04034b50).is_ok());
    assert_eq!(
        assert_signature(&mut ByteCursor::at(&data, 0), 0x02014b50),
        Err(DecodeError::UnexpectedHeader { actual: 0x04034b50, expected: 0x02014b50 })
    );
}
