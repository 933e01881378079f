//! Envelope output on stdout

use std::io::{self, Write};

use crate::domain::envelope::ResponseEnvelope;

/// Writes the one response line an invocation produces
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the envelope as a single line and flush
    pub fn present(&mut self, envelope: &ResponseEnvelope) -> io::Result<()> {
        self.out.write_all(envelope.to_line().as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
