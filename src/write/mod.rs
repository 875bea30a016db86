// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing ZIP archives into memory.
//!
//! Archives are always written in a single pass: every entry's local file header and raw bytes, then the central
//! directory, then the end of central directory record. Entries are never recompressed; whatever raw bytes an entry
//! resolves to are copied through as-is.
//!
//! # Example
//! ```
//! # #[cfg(feature = "deflate")]
//! # {
//! # use memzip::{ZipEntry, write::ZipFileWriter};
//! # use memzip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let mut writer = ZipFileWriter::new();
//!
//! writer.write_entry(&ZipEntry::deflate("foo.txt", b"This is an example file.")?)?;
//! writer.write_entry(&ZipEntry::store("bar.txt", b"This is another.")?)?;
//!
//! let data: Vec<u8> = writer.close()?;
//! #   Ok(())
//! # }
//! # run().unwrap();
//! # }
//! ```

pub(crate) mod compressed;

use crate::entry::ZipEntry;
use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::header::cdr::{self, CentralDirectoryRecord, RawCentralDirectoryRecord};
use crate::header::eocdr::{self, EndOfCentralDirectoryRecord, RawEndOfCentralDirectoryRecord};
use crate::header::lfh::{self, LocalFileHeader, RawLocalFileHeader};
use crate::spec::consts::{FLAG_DATA_DESCRIPTOR, NON_ZIP64_MAX_NUM_FILES};
use crate::string::ZipString;

/// A ZIP file writer which accumulates an archive in memory.
///
/// The local section and the central directory are built up side by side, and only joined once the writer is closed.
#[derive(Debug, Default)]
pub struct ZipFileWriter {
    local: Vec<u8>,
    directory: Vec<u8>,
    entries: usize,
    comment_opt: Option<ZipString>,
}

impl ZipFileWriter {
    /// Construct a new, empty ZIP file writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ZIP file comment.
    pub fn comment(&mut self, comment: ZipString) {
        self.comment_opt = Some(comment);
    }

    /// Returns the offset at which the next local file header will be written.
    pub fn offset(&self) -> usize {
        self.local.len()
    }

    /// Write an entry's local file header and raw bytes, and stage its central directory record.
    ///
    /// An entry backed by an archive is resolved first; if that fails, or if any of the entry's fields can't be
    /// represented without ZIP64 extensions, nothing is written and the writer is left as it was.
    #[tracing::instrument(skip_all, fields(offset = self.local.len()))]
    pub fn write_entry(&mut self, entry: &ZipEntry) -> Result<()> {
        if self.entries >= NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::Zip64NotSupported(Zip64ErrorCase::TooManyFiles));
        }

        let raw = entry.raw()?;

        let file_name = entry.filename().as_bytes();
        let extra_field = entry.extra_field();
        let file_comment = entry.comment().as_bytes();

        let file_name_length = u16::try_from(file_name.len()).map_err(|_| ZipError::FileNameTooLarge)?;
        let extra_field_length = u16::try_from(extra_field.len()).map_err(|_| ZipError::ExtraFieldTooLarge)?;
        let file_comment_length = u16::try_from(file_comment.len()).map_err(|_| ZipError::CommentTooLarge)?;
        let compressed_size = as_offset(raw.len())?;
        let lh_offset = as_offset(self.local.len())?;

        // The raw bytes are written whole, so no data descriptor ever follows them.
        let general_purpose_flags = entry.flag() & !FLAG_DATA_DESCRIPTOR;

        let lf_header = RawLocalFileHeader {
            version_needed_to_extract: entry.extract_min_version(),
            general_purpose_flags,
            compression_method: entry.compression().into(),
            last_mod_file_time: entry.last_modification_date().time,
            last_mod_file_date: entry.last_modification_date().date,
            crc_32: entry.crc32(),
            compressed_size,
            uncompressed_size: entry.uncompressed_size(),
            file_name_length,
            extra_field_length,
        };

        let header = RawCentralDirectoryRecord {
            version_made_by: entry.made_by(),
            version_needed_to_extract: lf_header.version_needed_to_extract,
            general_purpose_flags,
            compression_method: lf_header.compression_method,
            last_mod_file_time: lf_header.last_mod_file_time,
            last_mod_file_date: lf_header.last_mod_file_date,
            crc_32: lf_header.crc_32,
            compressed_size,
            uncompressed_size: lf_header.uncompressed_size,
            file_name_length,
            extra_field_length,
            file_comment_length,
            disk_number_start: 0,
            internal_file_attributes: entry.internal_file_attribute(),
            external_file_attributes: entry.external_file_attribute(),
            relative_offset_of_local_header: lh_offset,
        };

        lfh::write(&mut self.local, &LocalFileHeader { raw: lf_header, file_name, extra_field });
        self.local.extend_from_slice(raw);

        cdr::write(&mut self.directory, &CentralDirectoryRecord { raw: header, file_name, extra_field, file_comment });
        self.entries += 1;

        tracing::trace!(lh_offset, compressed_size, "wrote entry");
        Ok(())
    }

    /// Consumes this ZIP writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Appending the staged central directory records.
    /// - Writing the end of central directory record.
    /// - Writing the file comment.
    pub fn close(self) -> Result<Vec<u8>> {
        let comment = self.comment_opt.unwrap_or_default();

        let directory_start = as_offset(self.local.len())?;
        let directory_size = as_offset(self.directory.len())?;
        let zip_file_comment_length =
            u16::try_from(comment.as_bytes().len()).map_err(|_| ZipError::CommentTooLarge)?;
        let num_entries = u16::try_from(self.entries)
            .map_err(|_| ZipError::Zip64NotSupported(Zip64ErrorCase::TooManyFiles))?;

        let header = RawEndOfCentralDirectoryRecord {
            number_of_this_disk: 0,
            number_of_the_disk_with_the_start_of_the_central_directory: 0,
            total_number_of_entries_in_the_central_directory_on_this_disk: num_entries,
            total_number_of_entries_in_the_central_directory: num_entries,
            size_of_the_central_directory: directory_size,
            offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number: directory_start,
            zip_file_comment_length,
        };

        let mut buffer = self.local;
        buffer.extend_from_slice(&self.directory);
        eocdr::write(&mut buffer, &EndOfCentralDirectoryRecord { raw: header, zip_file_comment: comment.as_bytes() });

        tracing::debug!(entries = num_entries, length = buffer.len(), "closed archive");
        Ok(buffer)
    }
}

/// Encodes the given entries, in order, into a complete archive without a trailing comment.
pub fn encode(entries: &[ZipEntry]) -> Result<Vec<u8>> {
    let mut writer = ZipFileWriter::new();

    for entry in entries {
        writer.write_entry(entry)?;
    }

    writer.close()
}

fn as_offset(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| ZipError::Zip64NotSupported(Zip64ErrorCase::LargeFile))
}
