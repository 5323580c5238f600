//! Sinks for emitted robot reports

use std::io::Write;

use crate::error::Result;

/// Receives serialized messages in emission order.
pub trait MessageSink {
    fn emit(&mut self, line: String) -> Result<()>;
}

/// Collects emitted lines in memory
impl MessageSink for Vec<String> {
    fn emit(&mut self, line: String) -> Result<()> {
        self.push(line);
        Ok(())
    }
}

/// Writes each message on its own line and flushes immediately
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn emit(&mut self, line: String) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}
