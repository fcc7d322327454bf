// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::date::ZipDateTime;
use crate::entry::{saturating_size, Entry};
use crate::spec::attribute::AttributeCompatibility;
use crate::spec::compression::Compression;
use crate::string::ZipString;

/// A builder for [`Entry`].
///
/// Starts from the same defaults as [`Entry::stored`].
pub struct EntryBuilder(pub(crate) Entry);

impl From<Entry> for EntryBuilder {
    fn from(entry: Entry) -> Self {
        Self(entry)
    }
}

impl EntryBuilder {
    /// Constructs a new builder for a stored entry with the provided name and uncompressed payload.
    pub fn new(filename: impl Into<ZipString>, data: impl Into<Vec<u8>>) -> Self {
        Self(Entry::stored(filename, data))
    }

    /// Marks the payload as already compressed by an external codec.
    ///
    /// The compressed size is taken from the payload, while the uncompressed size and checksum must describe the
    /// original data.
    pub fn precompressed(mut self, compression: Compression, uncompressed_size: u32, crc32: u32) -> Self {
        self.0.compression = compression;
        self.0.uncompressed_size = uncompressed_size;
        self.0.crc32 = crc32;
        self.0.compressed_size = saturating_size(&self.0.data);

        let needed = crate::spec::version::as_needed_to_extract(compression, self.0.filename.as_bytes());
        self.0.version_needed = needed;
        self.0.version_made_by = (self.0.version_made_by & 0xFF00) | needed;
        self
    }

    /// Sets the entry's attribute host compatibility.
    pub fn attribute_compatibility(mut self, compatibility: AttributeCompatibility) -> Self {
        self.0.version_made_by = compatibility.apply(self.0.version_made_by);
        self
    }

    /// Sets the entry's raw general purpose bit flag.
    pub fn flags(mut self, flags: u16) -> Self {
        self.0.flags = flags;
        self
    }

    /// Sets the entry's last modification date.
    pub fn last_modification_date(mut self, date: ZipDateTime) -> Self {
        self.0.last_modification_date = date;
        self
    }

    /// Sets the entry's internal file attribute.
    pub fn internal_file_attribute(mut self, attribute: u16) -> Self {
        self.0.internal_file_attribute = attribute;
        self
    }

    /// Sets the entry's external file attribute.
    pub fn external_file_attribute(mut self, attribute: u32) -> Self {
        self.0.external_file_attribute = attribute;
        self
    }

    /// Sets the entry's extra field data.
    pub fn extra_field(mut self, field: Vec<u8>) -> Self {
        self.0.extra_field = field;
        self
    }

    /// Sets the entry's file comment.
    pub fn comment(mut self, comment: impl Into<ZipString>) -> Self {
        self.0.comment = comment.into();
        self
    }

    /// Consumes this builder and returns a final [`Entry`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use storezip::{Entry, EntryBuilder};
    /// #
    /// # let builder = EntryBuilder::new("foo.bar", "data");
    /// let entry: Entry = builder.into();
    /// ```
    pub fn build(self) -> Entry {
        self.into()
    }
}
