use std::fmt::Display;
use std::io::Write;

use crate::highlight::Painter;

pub const ERROR_PREFIX: &str = "lsh:";

/// The output and error sinks one command writes to.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub painter: Painter,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            out,
            err,
            painter: Painter::plain(),
        }
    }

    pub fn with_painter(mut self, painter: Painter) -> Self {
        self.painter = painter;
        self
    }

    /// Writes `lsh: <message>` as one line on the error sink.
    pub fn report(&mut self, message: impl Display) {
        let prefix = self.painter.error(ERROR_PREFIX);
        // nowhere left to report a failing error sink
        let _ = writeln!(self.err, "{} {}", prefix, message);
        let _ = self.err.flush();
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}
