// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of archive-level errors and their descriptions.
///
/// These errors abort the operation they're returned from as a whole; a directory which fails to decode never
/// yields a partial list of entries.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("feature not supported: '{0}'")]
    FeatureNotSupported(&'static str),
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),
    #[error("attempted to write a ZIP archive that would need ZIP64 extensions ({0})")]
    Zip64NotSupported(Zip64ErrorCase),

    #[error("unable to locate the end of central directory record")]
    UnableToLocateEOCDR,
    #[error("the central directory is malformed: {0}")]
    DirectoryDecode(#[from] DecodeError),
    #[error("an entry could not be resolved whilst encoding: {0}")]
    Resolve(#[from] ExtractError),

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
    #[error("attempted to convert non-UTF8 bytes to a string/str")]
    StringNotUtf8,

    #[error("file name too large (over u16::MAX bytes)")]
    FileNameTooLarge,
    #[error("comment too large (over u16::MAX bytes)")]
    CommentTooLarge,
    #[error("extra field too large (over u16::MAX bytes)")]
    ExtraFieldTooLarge,
}

/// The reason an archive would have needed ZIP64 extensions to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zip64ErrorCase {
    TooManyFiles,
    LargeFile,
}

impl Display for Zip64ErrorCase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyFiles => write!(f, "more than u16::MAX entries"),
            Self::LargeFile => write!(f, "an offset or size over u32::MAX bytes"),
        }
    }
}

/// A failure to decode a fixed-layout record from a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("encountered an unexpected header (actual: {actual:#x}, expected: {expected:#x})")]
    UnexpectedHeader { actual: u32, expected: u32 },
    #[error("unexpected end of data (wanted {wanted} bytes at offset {offset})")]
    UnexpectedEof { offset: usize, wanted: usize },
}

/// An error produced whilst resolving or extracting a single entry's content.
///
/// These errors are local to the entry in question and have no bearing on sibling entries or the archive as a whole.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("the local file header is malformed: {0}")]
    LocalHeaderDecode(DecodeError),
    #[error("the entry's data overruns the archive (wanted {wanted} bytes at offset {offset})")]
    NoData { offset: usize, wanted: usize },
    #[error("compression not supported: {code}")]
    UnsupportedCompression { code: u16, raw: Vec<u8> },
    #[error("the decompressor rejected the entry's data: {0}")]
    Inflate(#[source] std::io::Error),
    #[error("a computed CRC32 value did not match the expected value (actual: {actual:#x}, expected: {expected:#x})")]
    Integrity { expected: u32, actual: u32 },
}
