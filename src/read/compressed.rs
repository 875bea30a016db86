// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The decompression backend.
//!
//! `async-compression`'s decoders are driven to completion over the in-memory data; as the underlying reader never
//! returns pending, blocking on them doesn't park the thread.

#![cfg(feature = "deflate")]

use async_compression::futures::bufread::DeflateDecoder;
use futures_lite::io::{AsyncReadExt, Cursor};

/// The largest output buffer preallocated from a declared uncompressed size, equal to 16MiB.
const MAX_PREALLOCATION: usize = 16 * 1024 * 1024;

/// Inflates raw DEFLATE data (without any zlib or gzip framing).
pub(crate) fn inflate(data: &[u8], size_hint: u32) -> std::io::Result<Vec<u8>> {
    let mut output = Vec::with_capacity(std::cmp::min(size_hint as usize, MAX_PREALLOCATION));
    let mut decoder = DeflateDecoder::new(Cursor::new(data));

    futures_lite::future::block_on(decoder.read_to_end(&mut output))?;

    Ok(output)
}
