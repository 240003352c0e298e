use crate::areas::index_file::IndexFile;
use crate::artifacts::index::entries::Entries;
use crate::artifacts::index::entry_flags::ExtendedFlagsPolicy;
use crate::artifacts::index::hash_algorithm::HashAlgorithm;
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::read_index;
use anyhow::Context;
use derive_new::new;
use std::cell::{RefCell, RefMut};

/// Settings fixed for one decode pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DecodeOptions {
    pub hash: HashAlgorithm,
    pub extended_flags: ExtendedFlagsPolicy,
}

/// Entry point for the commands: one index file, one output sink.
pub struct Inspector {
    index_file: IndexFile,
    writer: RefCell<Box<dyn std::io::Write>>,
    options: DecodeOptions,
}

impl Inspector {
    pub fn new(
        index_file: IndexFile,
        writer: Box<dyn std::io::Write>,
        options: DecodeOptions,
    ) -> Self {
        Inspector {
            index_file,
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn index_file(&self) -> &IndexFile {
        &self.index_file
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Load the file and decode its header.
    ///
    /// The returned iterator owns the file contents; they are freed once it
    /// is dropped, whether or not it was run to the end.
    pub fn open(&self) -> anyhow::Result<(IndexHeader, Entries)> {
        let buffer = self.index_file.load()?;
        let (header, entries) = read_index(&buffer, self.options.hash, self.options.extended_flags)
            .with_context(|| {
                format!(
                    "Failed to decode index header of {}",
                    self.index_file.path().display()
                )
            })?;

        tracing::debug!(
            version = header.version,
            entries = header.entries_count,
            hash = %self.options.hash,
            "decoded index header"
        );
        Ok((header, entries))
    }
}
