// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Raw, fixed-layout ZIP records and their byte-exact readers & writers.
//!
//! Each record is split into a `Raw*` structure holding its fixed-width fields (excluding the leading signature) and
//! a wrapping structure which additionally borrows the variable-length fields that trail it.

pub mod cdr;
pub mod eocdr;
pub mod lfh;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty, $read:ident, $write:ident),* }) => {
        use crate::error::DecodeError;
        use crate::utils::ByteCursor;

        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        /// Reads the raw underlying header from the given cursor.
        pub fn raw_read(cursor: &mut ByteCursor<'_>) -> std::result::Result<$name, DecodeError> {
            Ok($name {
                $($field : cursor.$read()? ),*
            })
        }

        /// Writes the raw underlying header to the given buffer.
        pub fn raw_write(buffer: &mut Vec<u8>, raw: &$name) {
            $(crate::utils::$write(buffer, raw.$field);)*
        }
    }
}

macro_rules! raw_deref {
    ($from:ty, $to:ident) => {
        use std::ops::{Deref, DerefMut};

        impl Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

pub(crate) use raw;
pub(crate) use raw_deref;
