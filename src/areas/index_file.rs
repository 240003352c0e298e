use anyhow::Context;
use bytes::Bytes;
use std::io::Read;
use std::ops::DerefMut;
use std::path::Path;

/// Default location of the index, relative to the working directory
pub const DEFAULT_INDEX_PATH: &str = ".git/index";

/// An index file on disk
#[derive(Debug)]
pub struct IndexFile {
    path: Box<Path>,
}

impl IndexFile {
    pub fn new(path: Box<Path>) -> Self {
        IndexFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into an immutable buffer.
    ///
    /// A shared lock is held while reading so a concurrent `git add` cannot
    /// rewrite the file under us; it is released before this returns.
    pub fn load(&self) -> anyhow::Result<Bytes> {
        let mut index_file = std::fs::File::open(&self.path)
            .with_context(|| format!("Failed to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)
            .with_context(|| format!("Failed to lock index file {}", self.path.display()))?;

        let mut buffer = Vec::new();
        lock.deref_mut()
            .read_to_end(&mut buffer)
            .with_context(|| format!("Failed to read index file {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), bytes = buffer.len(), "loaded index file");
        Ok(Bytes::from(buffer))
    }
}
