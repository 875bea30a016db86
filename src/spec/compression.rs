// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

#[cfg(feature = "deflate")]
use async_compression::Level;

/// A compression method of a ZIP entry.
///
/// Only [`Compression::Stored`] and [`Compression::Deflate`] are handled natively; any other method code is kept
/// verbatim so that it survives a decode/encode round trip and can be surfaced to the caller on extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    Stored,
    Deflate,
    Unsupported(u16),
}

impl Compression {
    /// Returns whether or not this crate can compress & decompress data with this method.
    pub fn is_supported(&self) -> bool {
        match self {
            Compression::Stored => true,
            Compression::Deflate => cfg!(feature = "deflate"),
            Compression::Unsupported(_) => false,
        }
    }
}

impl From<u16> for Compression {
    // Convert a u16 stored with little endianness into a compression method.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn from(value: u16) -> Self {
        match value {
            0 => Compression::Stored,
            8 => Compression::Deflate,
            code => Compression::Unsupported(code),
        }
    }
}

impl From<&Compression> for u16 {
    // Convert a compression method into its relevant u16 stored with little endianness.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
    fn from(compression: &Compression) -> u16 {
        match compression {
            Compression::Stored => 0,
            Compression::Deflate => 8,
            Compression::Unsupported(code) => *code,
        }
    }
}

impl From<Compression> for u16 {
    fn from(compression: Compression) -> u16 {
        (&compression).into()
    }
}

/// Level of compression data should be compressed with for deflate.
#[cfg(feature = "deflate")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeflateOption {
    // Normal (-en) compression option was used.
    #[default]
    Normal,

    // Maximum (-exx/-ex) compression option was used.
    Maximum,

    // Fast (-ef) compression option was used.
    Fast,

    // Super Fast (-es) compression option was used.
    Super,

    /// Other implementation defined level.
    Other(i32),
}

#[cfg(feature = "deflate")]
impl DeflateOption {
    pub(crate) fn into_level(self) -> Level {
        match self {
            DeflateOption::Normal => Level::Default,
            DeflateOption::Maximum => Level::Best,
            DeflateOption::Fast => Level::Fastest,
            DeflateOption::Super => Level::Fastest,
            DeflateOption::Other(level) => Level::Precise(level),
        }
    }

    // Bits 1 & 2 of the general purpose flag for deflated entries.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#444
    pub(crate) fn as_flag_bits(self) -> u16 {
        match self {
            DeflateOption::Normal | DeflateOption::Other(_) => 0b000,
            DeflateOption::Maximum => 0b010,
            DeflateOption::Fast => 0b100,
            DeflateOption::Super => 0b110,
        }
    }
}
