//! Line-oriented terminal I/O for the interactive screens.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Reads prompted lines from `R` and writes screen output to `W`.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    /// Print `label` and read one line. `None` at end of input.
    pub async fn prompt(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.lines.next_line().await
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Print a counterpart chat line.
    pub fn counterpart(&mut self, name: &str, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{name}: {text}")
    }

    pub fn blank(&mut self) -> std::io::Result<()> {
        writeln!(self.out)
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.out
    }
}
