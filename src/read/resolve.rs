// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::{EntryBytes, ZipEntry, ZipEntryMeta};
use crate::error::ExtractError;
use crate::header::lfh;
use crate::utils::ByteCursor;

impl ZipEntry {
    /// Returns the entry's raw (still compressed) bytes.
    ///
    /// For an entry backed by an archive, this re-reads the entry's local file header to find where its data
    /// begins; the local header's name and extra field lengths may legitimately differ from those within the central
    /// directory, and only the former locate the data. The returned slice borrows from the archive without copying.
    pub fn raw(&self) -> std::result::Result<&[u8], ExtractError> {
        match &self.bytes {
            EntryBytes::Exactly(bytes) => Ok(bytes.as_slice()),
            EntryBytes::Offset { source, local_header_offset } => {
                resolve(source, *local_header_offset as usize, &self.meta)
            }
        }
    }
}

pub(crate) fn resolve<'a>(
    source: &'a [u8],
    offset: usize,
    meta: &ZipEntryMeta,
) -> std::result::Result<&'a [u8], ExtractError> {
    let mut cursor = ByteCursor::at(source, offset);

    crate::utils::assert_signature(&mut cursor, lfh::SIGNATURE).map_err(ExtractError::LocalHeaderDecode)?;
    let header = lfh::raw_read(&mut cursor).map_err(ExtractError::LocalHeaderDecode)?;

    if usize::from(header.file_name_length) != meta.filename.as_bytes().len() {
        tracing::warn!(
            offset,
            local = header.file_name_length,
            central = meta.filename.as_bytes().len(),
            "local file header name length differs from the central directory"
        );
    }

    let variable_length = usize::from(header.file_name_length) + usize::from(header.extra_field_length);
    cursor.skip(variable_length).map_err(ExtractError::LocalHeaderDecode)?;

    let data_offset = cursor.position();
    let wanted = meta.compressed_size as usize;

    cursor.read_bytes(wanted).map_err(|_| ExtractError::NoData { offset: data_offset, wanted })
}
