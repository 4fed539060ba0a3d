mod buffer;
pub mod tokenizer;

use std::io::{BufRead, ErrorKind};

use tracing::warn;

use crate::error::ShellError;

pub use buffer::GrowBuffer;
pub use tokenizer::{split_line, Tokens};

/// Initial size of the line buffer, and the amount it grows by.
pub const LINE_BUFSIZE: usize = 1024;

/// One line of operator input, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
}

impl Line {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(Line),
    EndOfInput,
}

pub struct LineReader<R> {
    source: R,
    step: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_step(source, LINE_BUFSIZE)
    }

    pub fn with_step(source: R, step: usize) -> Self {
        Self { source, step }
    }

    /// Reads up to and including the next `\n`.
    ///
    /// A trailing line with no terminator is still returned; the call after
    /// it reports `EndOfInput`.
    pub fn read_line(&mut self) -> Result<ReadOutcome, ShellError> {
        let mut buffer = GrowBuffer::with_step(self.step)?;

        loop {
            let available = match self.source.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ShellError::Read(e)),
            };

            if available.is_empty() {
                if buffer.is_empty() {
                    return Ok(ReadOutcome::EndOfInput);
                }
                return Ok(ReadOutcome::Line(Self::decode(buffer)));
            }

            match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    buffer.extend_from_slice(&available[..end])?;
                    self.source.consume(end + 1);
                    return Ok(ReadOutcome::Line(Self::decode(buffer)));
                }
                None => {
                    let taken = available.len();
                    buffer.extend_from_slice(available)?;
                    self.source.consume(taken);
                }
            }
        }
    }

    fn decode(buffer: GrowBuffer<u8>) -> Line {
        let text = match String::from_utf8(buffer.into_vec()) {
            Ok(text) => text,
            Err(e) => {
                warn!("input line is not valid UTF-8, replacing invalid bytes");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Line { text }
    }
}
