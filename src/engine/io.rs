//! Line-oriented channel to the game engine.
//!
//! The harness launches the agent with the engine on stdin/stdout, one
//! JSON document per line. Stdout belongs to the protocol; diagnostics
//! must go to stderr.

use crate::engine::EngineError;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

pub struct Channel<R, W> {
    reader: R,
    writer: W,
}

impl Channel<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self {
            reader: BufReader::new(io::stdin()),
            writer: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Channel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Next message from the engine, or `None` once the channel closes
    /// (the match is over).
    pub fn next_line(&mut self) -> Result<Option<String>, EngineError> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self.reader.read_line(&mut line)?;
            if read == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    pub fn send_line(&mut self, line: &str) -> Result<(), EngineError> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
