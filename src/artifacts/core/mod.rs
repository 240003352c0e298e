//! Output plumbing shared by the commands
//!
//! Commands write to a `Box<dyn Write>`; this module decides whether that is
//! plain stdout or the minus pager.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Adapter that implements `Write` for the minus pager
///
/// minus only accepts strings, so incoming bytes are decoded as UTF-8 with
/// invalid sequences replaced.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where command output ends up
pub enum Output {
    Stdout,
    Paged(Pager),
}

impl Output {
    /// Page only when stdout is a terminal and paging was not disabled.
    pub fn select(no_pager: bool) -> Self {
        if !no_pager && io::stdout().is_terminal() {
            Output::Paged(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Paged(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Hand buffered output to the pager; a no-op for stdout.
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Paged(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }

    /// Show the output, then report the command's own error ahead of any
    /// pager failure.
    pub fn finish_after(self, result: anyhow::Result<()>) -> anyhow::Result<()> {
        keep_command_error(result, self.finish())
    }
}

fn keep_command_error(
    result: anyhow::Result<()>,
    finished: anyhow::Result<()>,
) -> anyhow::Result<()> {
    match (result, finished) {
        (Err(err), Err(pager_err)) => {
            tracing::warn!(error = %pager_err, "pager failed");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), finished) => finished,
    }
}
