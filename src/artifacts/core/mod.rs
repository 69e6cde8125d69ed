//! Shared utilities
//!
//! - `clock`: wall-clock and pinned commit clocks
//! - [`PagerWriter`]: `Write` adapter over the `minus` pager

pub mod clock;

use minus::Pager;
use std::io::{self, Write};

/// Collects output for the `minus` pager through `std::io::Write`
///
/// Bytes are pushed to the pager as text. A multi-byte character split across
/// two writes is held back until it is complete. Call [`PagerWriter::page`] once
/// everything is written to show the pager.
pub struct PagerWriter {
    pager: Pager,
    pending: Vec<u8>,
}

impl PagerWriter {
    pub fn new() -> Self {
        PagerWriter {
            pager: Pager::new(),
            pending: Vec::new(),
        }
    }

    /// Hand the collected text to the pager and block until the user quits it
    pub fn page(self) -> anyhow::Result<()> {
        if !self.pending.is_empty() {
            let rest = String::from_utf8_lossy(&self.pending).into_owned();
            self.pager.push_str(rest).map_err(io::Error::other)?;
        }

        minus::page_all(self.pager)?;

        Ok(())
    }
}

impl Default for PagerWriter {
    fn default() -> Self {
        PagerWriter::new()
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);

        let valid = match std::str::from_utf8(&self.pending) {
            Ok(text) => text.len(),
            // an incomplete character at the end waits for the next write
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(e) => {
                self.pending.clear();
                return Err(io::Error::new(io::ErrorKind::InvalidData, e));
            }
        };

        let text = self.pending.drain(..valid).collect::<Vec<u8>>();
        let text = String::from_utf8(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
