// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316>
//!
//! As with other ZIP libraries, we face the predicament that the end of central directory record may be followed by
//! a variable-length file comment (of up to `u16::MAX` bytes). As a result, we cannot just make the assumption that
//! the start of this record is 22 bytes (the length of the EOCDR plus its signature) offset from the end of the data
//! - we must locate it ourselves.
//!
//! As the whole archive is already in memory, this is a plain reverse linear scan over every candidate offset, from
//! the last position at which a full record could fit down to the start of the data. The first candidate found (ie.
//! the last one in buffer order) wins, which correctly skips over earlier comment bytes that happen to contain the
//! signature. A comment which itself ends in a well-formed record will be picked over the genuine one.

use crate::header::eocdr::{self, EndOfCentralDirectoryRecord};
use crate::spec::consts::{EOCDR_LENGTH, SIGNATURE_LENGTH};
use crate::utils::ByteCursor;

/// The bounds of an archive's central directory, as declared by its end of central directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CdBounds<'a> {
    /// The total number of central directory records.
    pub record_count: u16,
    /// The size of the central directory in bytes.
    pub directory_size: u32,
    /// The offset of the first central directory record.
    pub directory_start: u32,
    /// The offset of the end of central directory record itself (at its signature).
    pub eocdr_offset: usize,
    /// The archive's trailing comment.
    pub comment: &'a [u8],
    pub(crate) spanned: bool,
}

impl<'a> CdBounds<'a> {
    fn new(eocdr_offset: usize, record: &EndOfCentralDirectoryRecord<'a>) -> Self {
        let spanned = record.number_of_this_disk != record.number_of_the_disk_with_the_start_of_the_central_directory
            || record.total_number_of_entries_in_the_central_directory_on_this_disk
                != record.total_number_of_entries_in_the_central_directory;

        Self {
            record_count: record.total_number_of_entries_in_the_central_directory,
            directory_size: record.size_of_the_central_directory,
            directory_start: record.offset_of_start_of_central_directory_with_respect_to_the_starting_disk_number,
            eocdr_offset,
            comment: record.zip_file_comment,
            spanned,
        }
    }
}

/// Locate the `end of central directory record` and return the central directory bounds it declares, if one exists.
pub fn locate(data: &[u8]) -> Option<CdBounds<'_>> {
    let last = data.len().checked_sub(SIGNATURE_LENGTH + EOCDR_LENGTH)?;

    (0..=last).rev().find_map(|offset| {
        let record = eocdr::read(&mut ByteCursor::at(data, offset)).ok()?;
        Some(CdBounds::new(offset, &record))
    })
}
