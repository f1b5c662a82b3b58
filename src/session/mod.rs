//! Interactive command loop for the address book.
//!
//! This module reads commands line by line, hands them to a [`Session`], and
//! prints the replies. The directory is saved when the user exits, when input
//! ends, and before an I/O failure ends the loop.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{Reply, Session};

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Prompt shown before each command.
pub const PROMPT: &str = "Enter command: ";

/// How the command loop stopped.
enum Ending {
    /// An exit command saved the directory.
    Exit,
    /// Input ran out without an exit command.
    EndOfInput,
}

impl Session {
    /// Run the command loop until an exit command or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and answered like
    /// any other unknown input.
    ///
    /// # Arguments
    /// * `input` - Source of command lines
    /// * `output` - Destination for the prompt and replies
    ///
    /// # Returns
    /// An error if reading input, writing output, or the final save fails.
    /// The directory is saved before a read or write error is returned.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        match self.converse(&mut input, &mut output) {
            Ok(Ending::Exit) => Ok(()),
            Ok(Ending::EndOfInput) => {
                writeln!(output)?;
                self.save()?;
                tracing::info!("Input closed, address book saved");
                Ok(())
            }
            Err(e) => {
                match self.save() {
                    Ok(()) => tracing::info!("Address book saved after I/O error"),
                    Err(save_err) => {
                        tracing::error!("Failed to save address book: {}", save_err)
                    }
                }
                Err(e.into())
            }
        }
    }

    fn converse<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<Ending> {
        writeln!(output, "{}", command::HELP)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(Ending::EndOfInput);
            }
            let line = String::from_utf8_lossy(&buf);

            let reply = match Command::parse(&line) {
                Ok(command) => self.execute(command),
                Err(e) => Reply {
                    message: format!("Error: {}", e),
                    exit: false,
                },
            };

            if !reply.message.is_empty() {
                writeln!(output, "{}", reply.message)?;
            }
            if reply.exit {
                return Ok(Ending::Exit);
            }
        }
    }
}
