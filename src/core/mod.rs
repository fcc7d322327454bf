// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Readers and writers for the fixed-layout ZIP records.
//!
//! Each record is split into its fixed-width part (a `Raw*` struct generated by `raw!`, read and written field by
//! field in declaration order with no padding) and the variable-length tail which follows it on the wire.

pub mod cd;
pub mod cdr;
pub mod eocdr;
pub mod lfh;

macro_rules! raw {
    ($name:ident { $($field:ident, $type:ty),* }) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field : $type),*
        }

        impl $name {
            /// The length of this record on the wire, excluding its signature.
            pub const LENGTH: usize = 0 $(+ std::mem::size_of::<$type>())*;
        }

        /// Reads the raw underlying header from the given reader.
        #[tracing::instrument(skip(reader))]
        pub fn raw_read(codec: &crate::codec::Codec, mut reader: impl std::io::Read) -> crate::error::Result<$name> {
            Ok($name {
                $($field : codec.read_one::<$type>(&mut reader)? ),*
            })
        }

        /// Writes the raw underlying header to the given writer.
        #[tracing::instrument(skip(writer, raw))]
        pub fn raw_write(
            codec: &crate::codec::Codec,
            mut writer: impl std::io::Write,
            raw: &$name,
        ) -> crate::error::Result<()> {
            $(codec.write(&mut writer, raw.$field)?;)*
            Ok(())
        }
    }
}

macro_rules! raw_deref {
    ($from:ident, $to:ident) => {
        impl std::ops::Deref for $from {
            type Target = $to;

            fn deref(&self) -> &Self::Target {
                &self.raw
            }
        }

        impl std::ops::DerefMut for $from {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.raw
            }
        }
    };
}

pub(crate) use raw;
pub(crate) use raw_deref;
