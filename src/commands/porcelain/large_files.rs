use crate::areas::inspector::Inspector;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::index::record::LargeFileRecord;
use anyhow::Context;
use derive_new::new;
use regex::Regex;
use std::sync::LazyLock;

static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d*)?|\.\d+)\s*([kmg])?b?\s*$").expect("valid size pattern")
});

#[derive(Debug, Clone, Default, new)]
pub struct LargeFilesOptions {
    /// Maximum number of entries to list, 0 for all
    pub top: usize,
    /// Smallest size (bytes) worth listing
    pub min_size: u64,
}

impl Inspector {
    /// List tracked files by recorded size, largest first.
    pub fn large_files(&self, opts: &LargeFilesOptions) -> anyhow::Result<()> {
        let (_, entries) = self.open()?;
        let entries = entries
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to decode {}", self.index_file().path().display()))?;

        for entry in select_large_files(entries, opts) {
            writeln!(self.writer(), "{}", LargeFileRecord::new(&entry))?;
        }

        Ok(())
    }
}

/// Sort by size (descending, ties by name), then apply the size floor and the
/// top-N limit.
pub fn select_large_files(
    mut entries: Vec<IndexEntry>,
    opts: &LargeFilesOptions,
) -> Vec<IndexEntry> {
    entries.sort_by(|a, b| {
        b.metadata
            .size
            .cmp(&a.metadata.size)
            .then_with(|| a.name.cmp(&b.name))
    });

    let limit = match opts.top {
        0 => usize::MAX,
        top => top,
    };

    entries
        .into_iter()
        .take_while(|entry| u64::from(entry.metadata.size) >= opts.min_size)
        .take(limit)
        .collect()
}

/// Parse sizes such as `512`, `100K`, `1.5m` or `2GB` (powers of 1024).
pub fn parse_size(input: &str) -> anyhow::Result<u64> {
    let captures = SIZE_PATTERN
        .captures(input)
        .ok_or_else(|| anyhow::anyhow!("Invalid size: {input:?}"))?;

    let number: f64 = captures[1]
        .parse()
        .with_context(|| format!("Invalid size: {input:?}"))?;
    let multiplier = match captures.get(2).map(|unit| unit.as_str().to_ascii_lowercase()) {
        Some(unit) if unit == "k" => 1024.0,
        Some(unit) if unit == "m" => 1024.0 * 1024.0,
        Some(unit) if unit == "g" => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };

    Ok((number * multiplier) as u64)
}
