// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use std::ops::Deref;
use std::sync::Arc;

use crate::date::ZipDateTime;
use crate::entry::builder::ZipEntryBuilder;
use crate::error::Result;
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
use crate::spec::consts::DOS_DIRECTORY_ATTRIBUTE;
use crate::string::ZipString;

/// Where an entry's raw (still compressed) bytes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryBytes {
    /// The entry owns its bytes directly.
    Exactly(Vec<u8>),
    /// The entry is backed by the archive it was parsed from.
    ///
    /// The source buffer is shared by every entry parsed from the same archive and is never written to. The byte
    /// range is only located (by re-reading the local file header) when the content is requested.
    Offset { source: Arc<[u8]>, local_header_offset: u32 },
}

/// The metadata of a ZIP entry, as stored within its central directory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntryMeta {
    pub(crate) made_by: u16,
    pub(crate) extract_min_version: u16,
    pub(crate) flag: u16,
    pub(crate) compression: Compression,
    pub(crate) last_modification_date: ZipDateTime,
    pub(crate) crc32: u32,
    pub(crate) compressed_size: u32,
    pub(crate) uncompressed_size: u32,
    pub(crate) filename: ZipString,
    pub(crate) extra_field: Vec<u8>,
    pub(crate) comment: ZipString,
    pub(crate) internal_file_attribute: u16,
    pub(crate) external_file_attribute: u32,
}

impl ZipEntryMeta {
    /// Returns the entry's filename.
    ///
    /// ## Note
    /// This will return the raw filename stored during ZIP creation. If calling this method on entries retrieved from
    /// untrusted ZIP files, the filename should be sanitised before being used as a path to prevent [directory
    /// traversal attacks](https://en.wikipedia.org/wiki/Directory_traversal_attack).
    pub fn filename(&self) -> &ZipString {
        &self.filename
    }

    /// Returns the entry's compression method.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the 'version made by' field.
    pub fn made_by(&self) -> u16 {
        self.made_by
    }

    /// Returns the minimum version needed to extract the entry.
    pub fn extract_min_version(&self) -> u16 {
        self.extract_min_version
    }

    /// Returns the general purpose bit flag.
    pub fn flag(&self) -> u16 {
        self.flag
    }

    /// Returns the entry's attribute host compatibility.
    pub fn attribute_compatibility(&self) -> AttributeCompatibility {
        AttributeCompatibility::from(self.made_by.to_le_bytes()[1])
    }

    /// Returns the entry's last modification time & date.
    pub fn last_modification_date(&self) -> &ZipDateTime {
        &self.last_modification_date
    }

    /// Returns the entry's CRC32 value.
    pub fn crc32(&self) -> u32 {
        self.crc32
    }

    /// Returns the entry's uncompressed size.
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// Returns the entry's compressed size.
    pub fn compressed_size(&self) -> u32 {
        self.compressed_size
    }

    /// Returns the entry's internal file attribute.
    pub fn internal_file_attribute(&self) -> u16 {
        self.internal_file_attribute
    }

    /// Returns the entry's external file attribute.
    pub fn external_file_attribute(&self) -> u32 {
        self.external_file_attribute
    }

    /// Returns the entry's extra field data.
    pub fn extra_field(&self) -> &[u8] {
        &self.extra_field
    }

    /// Returns the entry's file comment.
    pub fn comment(&self) -> &ZipString {
        &self.comment
    }

    /// Returns whether or not the entry represents a directory.
    ///
    /// That is the case when its filename ends with a forward slash or its MS-DOS directory attribute is set.
    pub fn dir(&self) -> bool {
        self.filename.as_bytes().ends_with(b"/") || self.external_file_attribute & DOS_DIRECTORY_ATTRIBUTE != 0
    }

    /// Returns the entry's integer-based UNIX permissions.
    ///
    /// # Note
    /// This will return None if the attribute host compatibility is not listed as Unix.
    pub fn unix_permissions(&self) -> Option<u16> {
        if !matches!(self.attribute_compatibility(), AttributeCompatibility::Unix) {
            return None;
        }

        Some((self.external_file_attribute >> 16) as u16)
    }
}

/// A ZIP entry: its metadata paired with the location of its raw bytes.
///
/// # Builder pattern
/// Each [`ZipEntry`] is immutable. To construct a new entry from data, the [`ZipEntryBuilder`] builder must be used;
/// "editing" an entry means building a new one.
///
/// Entries parsed from an archive share that archive's buffer and remain valid after the originating
/// [`ZipFile`](crate::ZipFile) is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipEntry {
    pub(crate) bytes: EntryBytes,
    pub(crate) meta: ZipEntryMeta,
}

impl ZipEntry {
    /// Constructs an entry holding the given data uncompressed.
    pub fn store(filename: impl Into<ZipString>, data: &[u8]) -> Result<ZipEntry> {
        ZipEntryBuilder::new(filename.into(), Compression::Stored).build(data)
    }

    /// Constructs an entry holding the given data deflated.
    #[cfg(feature = "deflate")]
    pub fn deflate(filename: impl Into<ZipString>, data: &[u8]) -> Result<ZipEntry> {
        ZipEntryBuilder::new(filename.into(), Compression::Deflate).build(data)
    }

    /// Returns the entry's metadata.
    pub fn meta(&self) -> &ZipEntryMeta {
        &self.meta
    }

    /// Returns where the entry's raw bytes live.
    pub fn bytes(&self) -> &EntryBytes {
        &self.bytes
    }
}

impl Deref for ZipEntry {
    type Target = ZipEntryMeta;

    fn deref(&self) -> &Self::Target {
        &self.meta
    }
}

impl From<ZipEntry> for (EntryBytes, ZipEntryMeta) {
    fn from(entry: ZipEntry) -> Self {
        (entry.bytes, entry.meta)
    }
}
