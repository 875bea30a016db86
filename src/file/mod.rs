// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub(crate) mod builder;

use std::sync::Arc;

use crate::entry::ZipEntry;
use crate::error::Result;
use crate::string::ZipString;
use crate::write::ZipFileWriter;
use builder::ZipFileBuilder;

/// An immutable store of data about a ZIP file.
///
/// A file is either parsed from an in-memory archive via [`ZipFile::new()`] or assembled from entries via
/// [`ZipFileBuilder`], and is turned back into an archive via [`ZipFile::to_bytes()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipFile {
    pub(crate) entries: Vec<ZipEntry>,
    pub(crate) comment: ZipString,
}

impl ZipFile {
    /// Parses the central directory of the given archive.
    ///
    /// The archive's bytes are moved into a shared buffer which every returned entry references; no entry content is
    /// read or decompressed at this point.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Result<ZipFile> {
        crate::read::file(data.into())
    }

    /// Returns a list of this ZIP file's entries.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Consumes this ZIP file and returns its entries.
    pub fn into_entries(self) -> Vec<ZipEntry> {
        self.entries
    }

    /// Returns this ZIP file's trailing comment.
    pub fn comment(&self) -> &ZipString {
        &self.comment
    }

    /// Encodes this ZIP file into a complete archive.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipFileWriter::new();

        for entry in &self.entries {
            writer.write_entry(entry)?;
        }

        writer.comment(self.comment.clone());
        writer.close()
    }
}

impl From<ZipFileBuilder> for ZipFile {
    fn from(builder: ZipFileBuilder) -> Self {
        builder.0
    }
}

impl From<Vec<ZipEntry>> for ZipFile {
    fn from(entries: Vec<ZipEntry>) -> Self {
        Self { entries, comment: ZipString::default() }
    }
}
