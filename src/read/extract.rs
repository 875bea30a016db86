// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::borrow::Cow;

use crate::entry::ZipEntry;
use crate::error::ExtractError;
use crate::spec::compression::Compression;

impl ZipEntry {
    /// Returns the entry's decompressed content, verified against its stored CRC32 value.
    ///
    /// Entries using a compression method this crate can't handle fail with
    /// [`ExtractError::UnsupportedCompression`], which carries the raw bytes for reuse. See
    /// [`ZipEntry::extract_with()`] to supply a decompressor for such methods.
    pub fn extract(&self) -> std::result::Result<Cow<'_, [u8]>, ExtractError> {
        self.extract_with(|_, _| None)
    }

    /// Returns the entry's decompressed content, deferring to `fallback` for unsupported compression methods.
    ///
    /// The fallback is handed the method code and the raw bytes; returning `None` fails the extraction with
    /// [`ExtractError::UnsupportedCompression`]. Whichever path produced the content, its CRC32 value is checked
    /// against the one stored for the entry. Stored content is returned without copying.
    pub fn extract_with<F>(&self, fallback: F) -> std::result::Result<Cow<'_, [u8]>, ExtractError>
    where
        F: FnOnce(u16, &[u8]) -> Option<Vec<u8>>,
    {
        let raw = self.raw()?;

        let data = match self.meta.compression {
            Compression::Stored => Cow::Borrowed(raw),
            #[cfg(feature = "deflate")]
            Compression::Deflate => Cow::Owned(
                crate::read::compressed::inflate(raw, self.meta.uncompressed_size).map_err(ExtractError::Inflate)?,
            ),
            other => {
                let code = u16::from(other);
                match fallback(code, raw) {
                    Some(data) => Cow::Owned(data),
                    None => return Err(ExtractError::UnsupportedCompression { code, raw: raw.to_vec() }),
                }
            }
        };

        let actual = crc32fast::hash(&data);
        if actual != self.meta.crc32 {
            return Err(ExtractError::Integrity { expected: self.meta.crc32, actual });
        }

        Ok(data)
    }
}
