// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Fixed-width integer and raw byte codec used by every record reader and writer.
//!
//! All ZIP integers are little endian on the wire. Values are moved between the stream and memory in host order and
//! byte-reversed afterwards (or beforehand, when writing) if the codec's reverse flag is set. The flag is derived once
//! from [`Endian::HOST`] and carried by value, so there is no global state involved.

use std::io::{Read, Write};

use crate::error::{Result, ZipError};
use crate::string::ZipString;

/// A byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// The byte order of the compilation target.
    pub const HOST: Endian = if cfg!(target_endian = "big") { Endian::Big } else { Endian::Little };

    /// The byte order of all integers stored within a ZIP file.
    pub const WIRE: Endian = Endian::Little;
}

/// A fixed-width integer which can be moved through a [`Codec`].
pub trait Primitive: Copy {
    /// The width of this type in bytes.
    const WIDTH: usize;

    /// The host-order byte representation of this type.
    type Bytes: AsRef<[u8]>;

    /// Interprets exactly [`Self::WIDTH`] bytes in host order.
    fn from_host_bytes(bytes: &[u8]) -> Self;

    /// Returns this value's bytes in host order.
    fn to_host_bytes(self) -> Self::Bytes;

    /// Returns this value with its bytes reversed.
    fn reverse_bytes(self) -> Self;
}

macro_rules! primitive {
    ($($type:ty),*) => {
        $(
            impl Primitive for $type {
                const WIDTH: usize = std::mem::size_of::<$type>();

                type Bytes = [u8; std::mem::size_of::<$type>()];

                fn from_host_bytes(bytes: &[u8]) -> Self {
                    let mut buffer = [0; std::mem::size_of::<$type>()];
                    buffer.copy_from_slice(&bytes[..Self::WIDTH]);
                    <$type>::from_ne_bytes(buffer)
                }

                fn to_host_bytes(self) -> Self::Bytes {
                    self.to_ne_bytes()
                }

                fn reverse_bytes(self) -> Self {
                    self.swap_bytes()
                }
            }
        )*
    };
}

primitive!(u8, u16, u32, u64);

/// Reads and writes wire integers, reversing their bytes when the host isn't little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    reverse: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self::host()
    }
}

impl Codec {
    /// Constructs a codec with an explicit reverse flag.
    pub const fn new(reverse: bool) -> Self {
        Self { reverse }
    }

    /// Constructs the codec appropriate for the compilation target.
    pub const fn host() -> Self {
        Self::new(!matches!(Endian::HOST, Endian::Little))
    }

    /// Returns whether values are byte-reversed after reading and before writing.
    pub fn reverses(&self) -> bool {
        self.reverse
    }

    /// Reads `count` contiguous values from the reader.
    pub fn read<T: Primitive>(&self, mut reader: impl Read, count: usize) -> Result<Vec<T>> {
        let raw = read_bytes(&mut reader, count * T::WIDTH)?;
        Ok(raw.chunks_exact(T::WIDTH).map(|chunk| self.adjust(T::from_host_bytes(chunk))).collect())
    }

    /// Reads a single value from the reader.
    pub fn read_one<T: Primitive>(&self, mut reader: impl Read) -> Result<T> {
        let mut buffer = [0; 8];
        let buffer = &mut buffer[..T::WIDTH];
        reader.read_exact(buffer)?;
        Ok(self.adjust(T::from_host_bytes(buffer)))
    }

    /// Writes a single value to the writer.
    pub fn write<T: Primitive>(&self, mut writer: impl Write, value: T) -> Result<()> {
        writer.write_all(self.adjust(value).to_host_bytes().as_ref())?;
        Ok(())
    }

    /// Reads `length` raw bytes as text.
    ///
    /// The bytes are kept exactly as read, with no dependency on a terminating NUL and no re-encoding.
    pub fn read_text(&self, reader: impl Read, length: usize) -> Result<ZipString> {
        Ok(ZipString::new(read_bytes(reader, length)?))
    }

    fn adjust<T: Primitive>(&self, value: T) -> T {
        if self.reverse {
            value.reverse_bytes()
        } else {
            value
        }
    }
}

/// Reads exactly `length` bytes from the reader.
pub fn read_bytes(reader: impl Read, length: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.take(length as u64).read_to_end(&mut buffer)?;

    if buffer.len() != length {
        return Err(ZipError::UpstreamReadError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("expected {} bytes but only {} were available", length, buffer.len()),
        )));
    }

    Ok(buffer)
}

/// Reads a signature and asserts that it matches the expected value.
pub fn assert_signature(codec: &Codec, reader: impl Read, expected: u32) -> Result<()> {
    match codec.read_one::<u32>(reader)? {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}
