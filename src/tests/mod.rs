// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod utils;
pub(crate) mod write;

use crate::entry::ZipEntry;

/// Initialises a logger capturing test output; tracing events reach it through tracing's `log` feature.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single stored entry named `hi.txt` holding `hello world`.
///
/// Its layout is a 36-byte local header, 11 bytes of data, a 52-byte central directory record, and a 22-byte end
/// of central directory record.
pub(crate) fn hello_world() -> Vec<u8> {
    let entry = ZipEntry::store("hi.txt", b"hello world").expect("failed to build entry");
    crate::write::encode(&[entry]).expect("failed to encode archive")
}
