// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::header::{raw, raw_deref};

pub use crate::spec::consts::LFH_SIGNATURE as SIGNATURE;

raw! {
    RawLocalFileHeader {
        version_needed_to_extract, u16, read_u16, write_u16,
        general_purpose_flags, u16, read_u16, write_u16,
        compression_method, u16, read_u16, write_u16,
        last_mod_file_time, u16, read_u16, write_u16,
        last_mod_file_date, u16, read_u16, write_u16,
        crc_32, u32, read_u32, write_u32,
        compressed_size, u32, read_u32, write_u32,
        uncompressed_size, u32, read_u32, write_u32,
        file_name_length, u16, read_u16, write_u16,
        extra_field_length, u16, read_u16, write_u16
    }
}

#[derive(Clone, Debug)]
pub struct LocalFileHeader<'a> {
    pub raw: RawLocalFileHeader,
    pub file_name: &'a [u8],
    pub extra_field: &'a [u8],
}

raw_deref!(LocalFileHeader<'_>, RawLocalFileHeader);

/// Writes a local file header to the given buffer.
///
/// This function does so by:
/// - writing the signature of the local file header
/// - writing the raw local file header
/// - writing the file name
/// - writing the extra field
#[tracing::instrument(level = "trace", skip_all)]
pub fn write(buffer: &mut Vec<u8>, header: &LocalFileHeader<'_>) {
    crate::utils::write_u32(buffer, SIGNATURE);

    raw_write(buffer, &header.raw);
    buffer.extend_from_slice(header.file_name);
    buffer.extend_from_slice(header.extra_field);
}
