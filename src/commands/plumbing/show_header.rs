use crate::areas::inspector::Inspector;
use crate::artifacts::index::record::HeaderSummary;

impl Inspector {
    pub fn show_header(&self) -> anyhow::Result<()> {
        let (header, _) = self.open()?;

        writeln!(self.writer(), "{}", HeaderSummary::new(&header))?;

        Ok(())
    }
}
