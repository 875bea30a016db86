// Copyright (c) 2022-2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::sync::Arc;

use crate::date::ZipDateTime;
use crate::entry::{EntryBytes, ZipEntry, ZipEntryMeta};
use crate::error::{DecodeError, Result, ZipError};
use crate::header::cdr;
use crate::read::locator::CdBounds;
use crate::spec::consts::FLAG_UTF8;
use crate::utils::ByteCursor;

/// Decodes every central directory record declared by the given bounds.
///
/// Decoding is all or nothing: a single malformed record fails the whole directory. Each resulting entry holds a
/// back-reference into `data` rather than a copy of its bytes.
#[tracing::instrument(skip_all, fields(records = bounds.record_count, start = bounds.directory_start))]
pub fn decode(data: &Arc<[u8]>, bounds: &CdBounds<'_>) -> Result<Vec<ZipEntry>> {
    // Outdated feature so unlikely to ever make it into this crate.
    if bounds.spanned {
        return Err(ZipError::FeatureNotSupported("Spanned/split files"));
    }

    let mut cursor = ByteCursor::at(data, bounds.directory_start as usize);
    let entries = cursor.read_list(bounds.record_count.into(), |cursor| cd_record(cursor, data))?;

    let consumed = cursor.position() - bounds.directory_start as usize;
    if consumed != bounds.directory_size as usize {
        tracing::debug!(consumed, declared = bounds.directory_size, "central directory size mismatch");
    }

    Ok(entries)
}

fn cd_record(cursor: &mut ByteCursor<'_>, source: &Arc<[u8]>) -> std::result::Result<ZipEntry, DecodeError> {
    let record = cdr::read(cursor)?;
    let utf8 = record.general_purpose_flags & FLAG_UTF8 != 0;

    let meta = ZipEntryMeta {
        made_by: record.version_made_by,
        extract_min_version: record.version_needed_to_extract,
        flag: record.general_purpose_flags,
        compression: record.compression_method.into(),
        last_modification_date: ZipDateTime { date: record.last_mod_file_date, time: record.last_mod_file_time },
        crc32: record.crc_32,
        compressed_size: record.compressed_size,
        uncompressed_size: record.uncompressed_size,
        filename: crate::string::detect(record.file_name, utf8),
        extra_field: record.extra_field.to_vec(),
        comment: crate::string::detect(record.file_comment, utf8),
        internal_file_attribute: record.internal_file_attributes,
        external_file_attribute: record.external_file_attributes,
    };

    let bytes =
        EntryBytes::Offset { source: Arc::clone(source), local_header_offset: record.relative_offset_of_local_header };

    Ok(ZipEntry { bytes, meta })
}
