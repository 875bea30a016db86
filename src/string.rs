// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A string encoding supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEncoding {
    Utf8,
    Raw,
}

/// A string wrapper for handling different encodings.
///
/// The raw bytes are always kept as read so that names and comments in legacy code pages survive a round trip
/// unchanged. Equality compares the raw bytes only.
#[derive(Debug, Clone, Eq)]
pub struct ZipString {
    encoding: StringEncoding,
    raw: Vec<u8>,
}

impl ZipString {
    /// Constructs a new encoded string from its raw bytes and its encoding type.
    ///
    /// # Note
    /// If the provided encoding is [`StringEncoding::Utf8`] but the raw bytes are not valid UTF-8 (ie. a call to
    /// `std::str::from_utf8()` fails), the encoding is defaulted back to [`StringEncoding::Raw`].
    pub fn new(raw: Vec<u8>, mut encoding: StringEncoding) -> Self {
        if let StringEncoding::Utf8 = encoding {
            if std::str::from_utf8(&raw).is_err() {
                encoding = StringEncoding::Raw;
            }
        }

        Self { encoding, raw }
    }

    /// Returns the raw bytes for this string.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns the encoding type for this string.
    pub fn encoding(&self) -> StringEncoding {
        self.encoding
    }

    /// Returns whether or not this string holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the raw bytes converted into a string slice.
    ///
    /// # Note
    /// A call to this method will only succeed if the encoding type is [`StringEncoding::Utf8`].
    pub fn as_str(&self) -> Result<&str> {
        if !matches!(self.encoding, StringEncoding::Utf8) {
            return Err(ZipError::StringNotUtf8);
        }

        std::str::from_utf8(&self.raw).map_err(|_| ZipError::StringNotUtf8)
    }

    /// Returns the raw bytes converted to an owned string.
    ///
    /// # Note
    /// A call to this method will only succeed if the encoding type is [`StringEncoding::Utf8`].
    pub fn into_string(self) -> Result<String> {
        if !matches!(self.encoding, StringEncoding::Utf8) {
            return Err(ZipError::StringNotUtf8);
        }

        String::from_utf8(self.raw).map_err(|_| ZipError::StringNotUtf8)
    }
}

impl PartialEq for ZipString {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Default for ZipString {
    fn default() -> Self {
        String::new().into()
    }
}

impl From<String> for ZipString {
    fn from(value: String) -> Self {
        Self { encoding: StringEncoding::Utf8, raw: value.into_bytes() }
    }
}

impl From<&str> for ZipString {
    fn from(value: &str) -> Self {
        Self { encoding: StringEncoding::Utf8, raw: value.as_bytes().to_vec() }
    }
}

/// Detects the encoding of a name or comment read from a header.
///
/// Bytes are treated as UTF-8 when the general purpose UTF-8 flag is set or when they're plain ASCII. Without the
/// flag, non-ASCII bytes may be in some MBCS code page that happens to be valid UTF-8 in form, so they're left raw.
pub(crate) fn detect(raw: &[u8], utf8_flag: bool) -> ZipString {
    if utf8_flag || raw.is_ascii() {
        ZipString::new(raw.to_vec(), StringEncoding::Utf8)
    } else {
        ZipString::new(raw.to_vec(), StringEncoding::Raw)
    }
}
