// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::header::{raw, raw_deref};

pub use crate::spec::consts::EOCDR_SIGNATURE as SIGNATURE;

raw! {
    RawEndOfCentralDirectoryRecord {
        number_of_this_disk, u16, read_u16, write_u16,
        number_of_the_disk_with_the_start_of_the_central_directory, u16, read_u16, write_u16,
        total_number_of_entries_in_the_central_directory_on_this_disk, u16, read_u16, write_u16,
        total_number_of_entries_in_the_central_directory, u16, read_u16, write_u16,
        size_of_the_central_directory, u32, read_u32, write_u32,
        offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number, u32, read_u32, write_u32,
        zip_file_comment_length, u16, read_u16, write_u16
    }
}

#[derive(Clone, Debug)]
pub struct EndOfCentralDirectoryRecord<'a> {
    pub raw: RawEndOfCentralDirectoryRecord,
    pub zip_file_comment: &'a [u8],
}

raw_deref!(EndOfCentralDirectoryRecord<'_>, RawEndOfCentralDirectoryRecord);

/// Reads the end of central directory record from the given cursor.
///
/// This function does so by:
/// - asserting the signature of the end of central directory record
/// - reading the raw end of central directory record
/// - reading the zip file comment
///
/// A comment whose declared length overruns the data is truncated to the bytes available rather than rejected.
#[tracing::instrument(level = "trace", skip_all, fields(offset = cursor.position()))]
pub fn read<'a>(cursor: &mut ByteCursor<'a>) -> std::result::Result<EndOfCentralDirectoryRecord<'a>, DecodeError> {
    crate::utils::assert_signature(cursor, SIGNATURE)?;

    let raw = raw_read(cursor)?;
    let declared = usize::from(raw.zip_file_comment_length);
    let available = std::cmp::min(declared, cursor.remaining());

    if available < declared {
        tracing::warn!(declared, available, "archive comment overruns the data, truncating");
    }

    let zip_file_comment = cursor.read_bytes(available)?;

    Ok(EndOfCentralDirectoryRecord { raw, zip_file_comment })
}

/// Writes the end of central directory record to the given buffer.
///
/// This function does so by:
/// - writing the signature of the end of central directory record
/// - writing the raw end of central directory record
/// - writing the zip file comment
#[tracing::instrument(level = "trace", skip_all)]
pub fn write(buffer: &mut Vec<u8>, header: &EndOfCentralDirectoryRecord<'_>) {
    crate::utils::write_u32(buffer, SIGNATURE);

    raw_write(buffer, &header.raw);
    buffer.extend_from_slice(header.zip_file_comment);
}
