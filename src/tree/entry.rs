//! Directory entries as seen by the walker

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::DirEntry;

/// Whether an entry is recursed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// Regular files, symlinks, sockets and everything else.
    Other,
}

/// One visible child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Build from a `read_dir` item. The file type is read without following
    /// symlinks, so a link to a directory is `EntryKind::Other`.
    pub fn from_dir_entry(entry: &DirEntry) -> Self {
        let kind = match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => EntryKind::Directory,
            _ => EntryKind::Other,
        };
        Self::new(entry.file_name(), kind)
    }

    /// Name for display and style lookup.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Hidden entries are those whose name starts with a `.` byte.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}
