// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::header::{raw, raw_deref};

pub use crate::spec::consts::CDH_SIGNATURE as SIGNATURE;

raw! {
    RawCentralDirectoryRecord {
        version_made_by, u16, read_u16, write_u16,
        version_needed_to_extract, u16, read_u16, write_u16,
        general_purpose_flags, u16, read_u16, write_u16,
        compression_method, u16, read_u16, write_u16,
        last_mod_file_time, u16, read_u16, write_u16,
        last_mod_file_date, u16, read_u16, write_u16,
        crc_32, u32, read_u32, write_u32,
        compressed_size, u32, read_u32, write_u32,
        uncompressed_size, u32, read_u32, write_u32,
        file_name_length, u16, read_u16, write_u16,
        extra_field_length, u16, read_u16, write_u16,
        file_comment_length, u16, read_u16, write_u16,
        disk_number_start, u16, read_u16, write_u16,
        internal_file_attributes, u16, read_u16, write_u16,
        external_file_attributes, u32, read_u32, write_u32,
        relative_offset_of_local_header, u32, read_u32, write_u32
    }
}

#[derive(Clone, Debug)]
pub struct CentralDirectoryRecord<'a> {
    pub raw: RawCentralDirectoryRecord,
    pub file_name: &'a [u8],
    pub extra_field: &'a [u8],
    pub file_comment: &'a [u8],
}

raw_deref!(CentralDirectoryRecord<'_>, RawCentralDirectoryRecord);

/// Reads a central directory record from the given cursor.
///
/// This function does so by:
/// - asserting the signature of the central directory record
/// - reading the raw central directory record
/// - reading the file name
/// - reading the extra field
/// - reading the file comment
#[tracing::instrument(level = "trace", skip_all, fields(offset = cursor.position()))]
pub fn read<'a>(cursor: &mut ByteCursor<'a>) -> std::result::Result<CentralDirectoryRecord<'a>, DecodeError> {
    crate::utils::assert_signature(cursor, SIGNATURE)?;

    let raw = raw_read(cursor)?;
    let file_name = cursor.read_bytes(raw.file_name_length.into())?;
    let extra_field = cursor.read_bytes(raw.extra_field_length.into())?;
    let file_comment = cursor.read_bytes(raw.file_comment_length.into())?;

    Ok(CentralDirectoryRecord { raw, file_name, extra_field, file_comment })
}

/// Writes a central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the central directory record
/// - writing the raw central directory record
/// - writing the file name
/// - writing the extra field
/// - writing the file comment
#[tracing::instrument(level = "trace", skip_all)]
pub fn write(buffer: &mut Vec<u8>, header: &CentralDirectoryRecord<'_>) {
    crate::utils::write_u32(buffer, SIGNATURE);

    raw_write(buffer, &header.raw);
    buffer.extend_from_slice(header.file_name);
    buffer.extend_from_slice(header.extra_field);
    buffer.extend_from_slice(header.file_comment);
}
