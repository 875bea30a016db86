// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::ZipEntry;
use crate::{file::ZipFile, string::ZipString};

/// A builder for [`ZipFile`].
#[derive(Debug, Clone)]
pub struct ZipFileBuilder(pub(crate) ZipFile);

impl From<ZipFile> for ZipFileBuilder {
    fn from(file: ZipFile) -> Self {
        Self(file)
    }
}

impl Default for ZipFileBuilder {
    fn default() -> Self {
        ZipFileBuilder(ZipFile { entries: Vec::new(), comment: ZipString::default() })
    }
}

impl ZipFileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the file's comment.
    pub fn comment(mut self, comment: ZipString) -> Self {
        self.0.comment = comment;
        self
    }

    /// Appends an entry to the file.
    pub fn entry(mut self, entry: ZipEntry) -> Self {
        self.0.entries.push(entry);
        self
    }

    /// Consumes this builder and returns a final [`ZipFile`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use memzip::{ZipFile, ZipFileBuilder};
    /// #
    /// # let builder = ZipFileBuilder::new();
    /// let file: ZipFile = builder.into();
    /// ```
    pub fn build(self) -> ZipFile {
        self.into()
    }
}
