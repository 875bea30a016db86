// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;

/// The version of the ZIP specification this crate follows (6.3).
pub const SPECIFICATION_VERSION: u8 = 63;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#442
pub fn as_made_by(compatibility: AttributeCompatibility) -> u16 {
    let host: u8 = compatibility.into();
    u16::from_le_bytes([SPECIFICATION_VERSION, host])
}

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#443
pub fn as_needed_to_extract(compression: Compression, dir: bool) -> u16 {
    let mut version = match compression {
        Compression::Deflate => 20,
        _ => 10,
    };

    if dir {
        version = std::cmp::max(version, 20);
    }

    version
}
