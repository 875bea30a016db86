// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::builder::ZipDateTimeBuilder;
use crate::date::ZipDateTime;
use crate::entry::{EntryBytes, ZipEntry, ZipEntryMeta};
use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
#[cfg(feature = "deflate")]
use crate::spec::compression::DeflateOption;
use crate::spec::consts::{DOS_DIRECTORY_ATTRIBUTE, FLAG_UTF8};
use crate::string::{StringEncoding, ZipString};

/// A builder for [`ZipEntry`].
///
/// The checksum, sizes and version fields of the final entry are computed from the data handed to
/// [`ZipEntryBuilder::build()`] rather than being set directly.
pub struct ZipEntryBuilder {
    filename: ZipString,
    compression: Compression,
    #[cfg(feature = "deflate")]
    deflate_option: DeflateOption,
    attribute_compatibility: AttributeCompatibility,
    last_modification_date: ZipDateTime,
    internal_file_attribute: u16,
    external_file_attribute: u32,
    extra_field: Vec<u8>,
    comment: ZipString,
}

impl ZipEntryBuilder {
    /// Constructs a new builder which defines the properties of a ZIP entry.
    ///
    /// A filename and compression method are needed to construct the builder as minimal parameters. The last
    /// modification date defaults to the MS-DOS epoch (1980-01-01 00:00:00).
    pub fn new(filename: ZipString, compression: Compression) -> Self {
        Self {
            filename,
            compression,
            #[cfg(feature = "deflate")]
            deflate_option: DeflateOption::default(),
            attribute_compatibility: AttributeCompatibility::Unix,
            last_modification_date: ZipDateTimeBuilder::new().year(1980).month(1).day(1).build(),
            internal_file_attribute: 0,
            external_file_attribute: 0,
            extra_field: Vec::new(),
            comment: ZipString::default(),
        }
    }

    /// Sets the entry's filename.
    pub fn filename(mut self, filename: ZipString) -> Self {
        self.filename = filename;
        self
    }

    /// Sets the entry's compression method.
    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set the deflate compression option.
    ///
    /// If the compression type isn't deflate, this option has no effect.
    #[cfg(feature = "deflate")]
    pub fn deflate_option(mut self, option: DeflateOption) -> Self {
        self.deflate_option = option;
        self
    }

    /// Sets the entry's attribute host compatibility.
    pub fn attribute_compatibility(mut self, compatibility: AttributeCompatibility) -> Self {
        self.attribute_compatibility = compatibility;
        self
    }

    /// Sets the entry's last modification date.
    pub fn last_modification_date(mut self, date: ZipDateTime) -> Self {
        self.last_modification_date = date;
        self
    }

    /// Sets the entry's internal file attribute.
    pub fn internal_file_attribute(mut self, attribute: u16) -> Self {
        self.internal_file_attribute = attribute;
        self
    }

    /// Sets the entry's external file attribute.
    pub fn external_file_attribute(mut self, attribute: u32) -> Self {
        self.external_file_attribute = attribute;
        self
    }

    /// Sets the entry's extra field data.
    pub fn extra_field(mut self, field: Vec<u8>) -> Self {
        self.extra_field = field;
        self
    }

    /// Sets the entry's file comment.
    pub fn comment(mut self, comment: ZipString) -> Self {
        self.comment = comment;
        self
    }

    /// Sets the entry's Unix permissions mode.
    ///
    /// If the attribute host compatibility isn't set to Unix, this will have no effect.
    pub fn unix_permissions(mut self, mode: u16) -> Self {
        if matches!(self.attribute_compatibility, AttributeCompatibility::Unix) {
            self.external_file_attribute = (self.external_file_attribute & 0xFFFF) | (mode as u32) << 16;
        }
        self
    }

    /// Consumes this builder and returns a final [`ZipEntry`] owning the given data, compressed as configured.
    ///
    /// Fails with [`ZipError::CompressionNotSupported`] if the compression method can't be applied by this crate.
    pub fn build(self, data: &[u8]) -> Result<ZipEntry> {
        let raw = match self.compression {
            Compression::Stored => data.to_vec(),
            #[cfg(feature = "deflate")]
            Compression::Deflate => crate::write::compressed::deflate(data, self.deflate_option.into_level())?,
            other => return Err(ZipError::CompressionNotSupported(other.into())),
        };

        let crc32 = crc32fast::hash(data);
        let uncompressed_size = as_size(data.len())?;

        self.build_raw(raw, crc32, uncompressed_size)
    }

    /// Consumes this builder and returns a final [`ZipEntry`] owning data which has already been compressed.
    ///
    /// Any compression method is accepted here, including those this crate can't decompress. The caller is
    /// responsible for the checksum & uncompressed size describing the data once decompressed.
    pub fn build_raw(self, raw: Vec<u8>, crc32: u32, uncompressed_size: u32) -> Result<ZipEntry> {
        let compressed_size = as_size(raw.len())?;
        let dir =
            self.filename.as_bytes().ends_with(b"/") || self.external_file_attribute & DOS_DIRECTORY_ATTRIBUTE != 0;

        let mut flag = 0;
        let utf8 = |string: &ZipString| matches!(string.encoding(), StringEncoding::Utf8);
        if utf8(&self.filename) && utf8(&self.comment) {
            flag |= FLAG_UTF8;
        }
        #[cfg(feature = "deflate")]
        if matches!(self.compression, Compression::Deflate) {
            flag |= self.deflate_option.as_flag_bits();
        }

        let meta = ZipEntryMeta {
            made_by: crate::spec::version::as_made_by(self.attribute_compatibility),
            extract_min_version: crate::spec::version::as_needed_to_extract(self.compression, dir),
            flag,
            compression: self.compression,
            last_modification_date: self.last_modification_date,
            crc32,
            compressed_size,
            uncompressed_size,
            filename: self.filename,
            extra_field: self.extra_field,
            comment: self.comment,
            internal_file_attribute: self.internal_file_attribute,
            external_file_attribute: self.external_file_attribute,
        };

        Ok(ZipEntry { bytes: EntryBytes::Exactly(raw), meta })
    }
}

fn as_size(length: usize) -> Result<u32> {
    u32::try_from(length).map_err(|_| ZipError::Zip64NotSupported(Zip64ErrorCase::LargeFile))
}
