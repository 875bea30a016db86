// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The compression backend.

#![cfg(feature = "deflate")]

use async_compression::futures::write::DeflateEncoder;
use async_compression::Level;
use futures_lite::io::AsyncWriteExt;

/// Deflates the given data at the given level, producing raw DEFLATE data (without any zlib or gzip framing).
pub(crate) fn deflate(data: &[u8], level: Level) -> std::io::Result<Vec<u8>> {
    let mut writer = DeflateEncoder::with_quality(Vec::new(), level);

    futures_lite::future::block_on(async {
        writer.write_all(data).await?;
        writer.close().await
    })?;

    Ok(writer.into_inner())
}
