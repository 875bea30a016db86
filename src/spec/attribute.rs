// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

/// The host system an entry's external file attribute was written for.
///
/// This is the upper byte of the 'version made by' field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCompatibility {
    Dos,
    Unix,
    Other(u8),
}

impl From<u8> for AttributeCompatibility {
    // Convert a host byte into an attribute host compatibility.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
    fn from(value: u8) -> Self {
        match value {
            0 => AttributeCompatibility::Dos,
            3 => AttributeCompatibility::Unix,
            other => AttributeCompatibility::Other(other),
        }
    }
}

impl From<AttributeCompatibility> for u8 {
    // Convert an attribute host compatibility into its relevant host byte.
    // https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4422
    fn from(compatibility: AttributeCompatibility) -> Self {
        match compatibility {
            AttributeCompatibility::Dos => 0,
            AttributeCompatibility::Unix => 3,
            AttributeCompatibility::Other(other) => other,
        }
    }
}
