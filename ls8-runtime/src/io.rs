//! PRN output handling
//!
//! Printed values are always recorded in order; when a sink is attached
//! they are also written out immediately, one decimal integer per line.

use crate::error::Result;
use std::io::Write;

pub struct IoHandler {
    sink: Option<Box<dyn Write + Send>>,
    values: Vec<u8>,
}

impl IoHandler {
    pub fn new() -> Self {
        Self {
            sink: None,
            values: Vec::new(),
        }
    }

    pub fn set_sink(&mut self, sink: Box<dyn Write + Send>) {
        self.sink = Some(sink);
    }

    /// Record one printed value
    pub(crate) fn emit(&mut self, value: u8) -> Result<()> {
        tracing::debug!(value, "PRN");
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", value)?;
        }
        self.values.push(value);
        Ok(())
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

impl Default for IoHandler {
    fn default() -> Self {
        Self::new()
    }
}
