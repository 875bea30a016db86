// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Primitive little-endian readers and writers over in-memory buffers.

use crate::error::DecodeError;

/// A Result type alias over DecodeError.
pub(crate) type DecodeResult<V> = std::result::Result<V, DecodeError>;

/// A forward-only reading position over a borrowed byte buffer.
///
/// Every read either consumes exactly the requested number of bytes or fails with [`DecodeError::UnexpectedEof`]
/// whilst leaving the position untouched. Byte ranges are handed out as sub-slices of the underlying buffer so no
/// read ever copies.
#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Constructs a new cursor positioned at the given offset of the buffer.
    ///
    /// The offset may lie past the end of the buffer, in which case the first read will fail.
    pub(crate) fn at(data: &'a [u8], position: usize) -> Self {
        Self { data, position }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left between the current position and the end of the buffer.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Reads a dynamic length range of bytes.
    pub(crate) fn read_bytes(&mut self, length: usize) -> DecodeResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(length)
            .filter(|end| *end <= self.data.len())
            .ok_or(DecodeError::UnexpectedEof { offset: self.position, wanted: length })?;

        let bytes = &self.data[self.position..end];
        self.position = end;

        Ok(bytes)
    }

    /// Reads a fixed length array of bytes.
    pub(crate) fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut array = [0; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }

    pub(crate) fn read_u16(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub(crate) fn read_u32(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Advances the position by the given number of bytes without inspecting them.
    pub(crate) fn skip(&mut self, length: usize) -> DecodeResult<()> {
        self.read_bytes(length).map(|_| ())
    }

    /// Runs the given reader `count` times, collecting each result in order.
    ///
    /// The first failure aborts the whole read.
    pub(crate) fn read_list<T, E, F>(&mut self, count: usize, mut read: F) -> std::result::Result<Vec<T>, E>
    where
        F: FnMut(&mut Self) -> std::result::Result<T, E>,
    {
        let mut list = Vec::with_capacity(count);

        for _ in 0..count {
            list.push(read(self)?);
        }

        Ok(list)
    }
}

/// Assert that the next four-byte signature read by the cursor matches the expected signature.
pub(crate) fn assert_signature(cursor: &mut ByteCursor<'_>, expected: u32) -> DecodeResult<()> {
    match cursor.read_u32()? {
        actual if actual == expected => Ok(()),
        actual => Err(DecodeError::UnexpectedHeader { actual, expected }),
    }
}

pub(crate) fn write_u16(buffer: &mut Vec<u8>, value: u16) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn write_u32(buffer: &mut Vec<u8>, value: u32) {
    buffer.extend_from_slice(&value.to_le_bytes());
}
