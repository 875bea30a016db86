// Copyright (c) 2022-2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading ZIP archives held in memory.
//!
//! Reading happens in two phases. The end of central directory record is first located by scanning backward from
//! the end of the data ([`locate()`]), and the central directory it points to is then decoded front to back
//! ([`decode()`]). The resulting entries only hold a back-reference into the archive; their content is resolved and
//! verified on demand via [`ZipEntry::raw()`](crate::ZipEntry::raw) and
//! [`ZipEntry::extract()`](crate::ZipEntry::extract).
//!
//! ### Example
//! ```
//! # use memzip::{ZipEntry, ZipFile, error::Result};
//! #
//! # fn run() -> Result<()> {
//! let data = ZipFile::from(vec![ZipEntry::store("hi.txt", b"hello world")?]).to_bytes()?;
//!
//! let file = ZipFile::new(data)?;
//! let content = file.entries()[0].extract()?;
//!
//! assert_eq!(&content[..], b"hello world");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub(crate) mod cd;
pub(crate) mod compressed;
pub(crate) mod extract;
pub(crate) mod locator;
pub(crate) mod resolve;

pub use cd::decode;
pub use locator::{locate, CdBounds};

use std::sync::Arc;

use crate::error::{Result, ZipError};
use crate::file::ZipFile;

/// Locates and decodes the central directory of the given archive.
#[tracing::instrument(skip_all, fields(length = data.len()))]
pub(crate) fn file(data: Arc<[u8]>) -> Result<ZipFile> {
    let bounds = locate(&data).ok_or(ZipError::UnableToLocateEOCDR)?;
    tracing::debug!(?bounds, "located end of central directory record");

    let entries = decode(&data, &bounds)?;
    let comment = crate::string::detect(bounds.comment, false);

    Ok(ZipFile { entries, comment })
}
