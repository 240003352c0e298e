use crate::areas::inspector::Inspector;
use crate::artifacts::index::record::{ENTRIES_LEGEND, EntryRecord, HEADER_LEGEND, HeaderRecord};
use anyhow::Context;
use colored::Colorize;

impl Inspector {
    /// Print the header and every entry, one line each.
    ///
    /// When an entry fails to decode, the entries before it have already been
    /// written and the error is returned to the caller.
    pub fn show_index(&self) -> anyhow::Result<()> {
        let (header, mut entries) = self.open()?;

        writeln!(self.writer(), "{}", HEADER_LEGEND.dimmed())?;
        writeln!(self.writer(), "{}", HeaderRecord::new(&header))?;
        writeln!(self.writer())?;

        if header.entries_count > 0 {
            writeln!(self.writer(), "{}", ENTRIES_LEGEND.dimmed())?;
        }

        let mut shown = 0u32;
        for entry in entries.by_ref() {
            let entry = entry.with_context(|| {
                format!(
                    "Failed to decode entry {} of {} in {}",
                    shown + 1,
                    header.entries_count,
                    self.index_file().path().display()
                )
            })?;
            writeln!(self.writer(), "{}", EntryRecord::new(&entry))?;
            shown += 1;
        }

        if entries.remaining() > 0 {
            tracing::warn!(
                declared = header.entries_count,
                found = shown,
                offset = entries.offset(),
                "index ended before all declared entries"
            );
        }

        Ok(())
    }
}
