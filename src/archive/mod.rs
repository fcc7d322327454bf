// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! An owning, mutable model of a whole ZIP file.
//!
//! ### Example
//! ```
//! # use storezip::Archive;
//! # use storezip::error::Result;
//! # use std::io::Cursor;
//! #
//! # fn run() -> Result<()> {
//! let mut archive = Archive::new();
//! archive.add("a.txt", "hello");
//! archive.set_comment("note");
//!
//! let bytes = archive.save(Cursor::new(Vec::new()))?.into_inner();
//!
//! let loaded = Archive::open(Cursor::new(bytes))?;
//! assert_eq!(loaded.get("a.txt").map(|entry| entry.data()), Some(&b"hello"[..]));
//! assert_eq!(loaded.comment(), "note");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! ### Concurrency
//! An [`Archive`] holds no internal synchronisation. Callers sharing one between threads must serialise mutation and
//! I/O themselves (eg. behind a `Mutex`).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use crate::codec::Codec;
use crate::entry::Entry;
use crate::error::{Result, Zip64ErrorCase, ZipError};
use crate::spec::consts::NON_ZIP64_MAX_NUM_FILES;
use crate::string::ZipString;
use crate::write::ArchiveWriter;

/// A ZIP file held fully in memory: its entries (keyed by raw name) and its trailing comment.
///
/// Entries iterate, and are written, in ascending order of their raw name bytes.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    codec: Codec,
    entries: BTreeMap<ZipString, Entry>,
    comment: ZipString,
}

impl Archive {
    /// Constructs a new empty archive using the host codec.
    pub fn new() -> Self {
        Self::with_codec(Codec::host())
    }

    /// Constructs a new empty archive which reads and writes integers with the provided codec.
    pub fn with_codec(codec: Codec) -> Self {
        Self { codec, entries: BTreeMap::new(), comment: ZipString::default() }
    }

    /// Constructs an archive from the contents of a seekable source.
    pub fn open<R>(reader: R) -> Result<Self>
    where
        R: Read + Seek,
    {
        let mut archive = Self::new();
        archive.load(reader)?;
        Ok(archive)
    }

    /// Constructs an archive from the contents of a file on disk.
    pub fn open_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let mut archive = Self::new();
        archive.load_path(path)?;
        Ok(archive)
    }

    /// Replaces this archive's entries and comment with those read from a seekable source.
    ///
    /// On failure, this archive is left exactly as it was.
    #[tracing::instrument(skip(self, reader))]
    pub fn load<R>(&mut self, reader: R) -> Result<()>
    where
        R: Read + Seek,
    {
        let contents = crate::read::archive(&self.codec, reader)?;

        tracing::debug!(entries = contents.entries.len(), "loaded archive");
        self.entries = contents.entries;
        self.comment = contents.comment;

        Ok(())
    }

    /// Replaces this archive's entries and comment with those read from a file on disk.
    pub fn load_path<P>(&mut self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ZipError::FileError { path: path.to_owned(), source })?;

        self.load(BufReader::new(file))
    }

    /// Writes this archive to a sink, returning the sink once the end of central directory record is written.
    ///
    /// Every entry and the comment are validated before the first byte is written.
    #[tracing::instrument(skip(self, writer))]
    pub fn save<W>(&self, writer: W) -> Result<W>
    where
        W: Write,
    {
        self.validate()?;

        let mut writer = ArchiveWriter::with_codec(writer, self.codec);

        for entry in self.entries.values() {
            writer.write_entry(entry)?;
        }

        writer.comment(self.comment.clone());
        writer.close()
    }

    /// Writes this archive to a file on disk, truncating any existing content.
    pub fn save_path<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.validate()?;

        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ZipError::FileError { path: path.to_owned(), source })?;

        let mut writer = self.save(BufWriter::new(file))?;
        writer.flush()?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.entries.len() > NON_ZIP64_MAX_NUM_FILES as usize {
            return Err(ZipError::Zip64Needed(Zip64ErrorCase::TooManyFiles));
        }

        for entry in self.entries.values() {
            crate::write::validate_entry(entry)?;
        }

        crate::write::validate_comment(&self.comment)
    }

    /// Adds a stored entry built from the provided name and payload, replacing any entry of the same name.
    ///
    /// The payload may be bytes or text.
    pub fn add(&mut self, name: impl Into<ZipString>, data: impl Into<Vec<u8>>) {
        self.insert(Entry::stored(name, data));
    }

    /// Inserts a prebuilt entry under its own name, returning the entry it replaced (if any).
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.filename.clone(), entry)
    }

    /// Removes and returns the entry with the provided name.
    ///
    /// Removing a name which isn't present is a no-op.
    pub fn remove(&mut self, name: impl AsRef<[u8]>) -> Option<Entry> {
        self.entries.remove(name.as_ref())
    }

    /// Returns whether an entry with the provided name is present.
    pub fn has(&self, name: impl AsRef<[u8]>) -> bool {
        self.entries.contains_key(name.as_ref())
    }

    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&Entry> {
        self.entries.get(name.as_ref())
    }

    pub fn get_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut Entry> {
        self.entries.get_mut(name.as_ref())
    }

    /// Returns an iterator over the entries in write order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Returns an iterator over the entry names in write order.
    pub fn names(&self) -> impl Iterator<Item = &ZipString> {
        self.entries.keys()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries with a payload.
    pub fn file_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.compressed_size != 0).count()
    }

    /// Returns the number of entries without a payload (directory markers).
    pub fn directory_count(&self) -> usize {
        self.len() - self.file_count()
    }

    /// Returns this archive's trailing comment, byte-for-byte as stored.
    pub fn comment(&self) -> &ZipString {
        &self.comment
    }

    /// Sets this archive's trailing comment.
    ///
    /// The comment's length is only checked when the archive is saved.
    pub fn set_comment(&mut self, comment: impl Into<ZipString>) {
        self.comment = comment.into();
    }

    /// Returns the codec this archive reads and writes with.
    pub fn codec(&self) -> Codec {
        self.codec
    }
}
