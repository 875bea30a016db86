// Copyright (c) 2021-2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # memzip
//!
//! An in-memory ZIP archive codec with lazy, zero-copy entry resolution.
//!
//! ## Features
//! - Whole archives are decoded from, and encoded into, plain byte buffers.
//! - Parsing only decodes the central directory; each entry's content is located and decompressed on demand.
//! - Entries parsed from one archive can be written into another without being decompressed.
//! - Support for the Stored and Deflate compression methods, with a fallback hook for any other method.
//! - Aims for reasonable [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Non-goals
//! ZIP64 extensions, encryption, data descriptors on write, and split/spanned archives are not supported.
//!
//! ## Example
//! ```
//! # use memzip::{ZipEntry, ZipFile, ZipFileBuilder, error::Result};
//! #
//! # fn run() -> Result<()> {
//! let file = ZipFileBuilder::new()
//!     .entry(ZipEntry::store("hi.txt", b"hello world")?)
//!     .comment("an archive".into())
//!     .build();
//!
//! let data = file.to_bytes()?;
//! let parsed = ZipFile::new(data)?;
//!
//! assert_eq!(parsed.comment().as_str()?, "an archive");
//! assert_eq!(parsed.entries()[0].filename().as_str()?, "hi.txt");
//! assert_eq!(&parsed.entries()[0].extract()?[..], b"hello world");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

pub mod error;
pub mod read;
pub mod write;

pub(crate) mod date;
pub(crate) mod entry;
pub(crate) mod file;
pub(crate) mod header;
pub(crate) mod spec;
pub(crate) mod string;
pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod tests;

pub use crate::spec::attribute::AttributeCompatibility;
pub use crate::spec::compression::Compression;
#[cfg(feature = "deflate")]
pub use crate::spec::compression::DeflateOption;

pub use crate::date::{builder::ZipDateTimeBuilder, ZipDateTime};
pub use crate::entry::{builder::ZipEntryBuilder, EntryBytes, ZipEntry, ZipEntryMeta};
pub use crate::file::{builder::ZipFileBuilder, ZipFile};
pub use crate::string::{StringEncoding, ZipString};
