//! Terminal front end for a running session.

use crate::core::attendance::{AttendanceSession, SessionSummary};
use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};

const RESET: &str = "\x1b[0m";
const FG_RED: &str = "\x1b[31m";

/// Lines that end the session, besides end of input.
const EXIT_WORDS: [&str; 2] = ["quit", "exit"];

pub struct Shell<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read identifiers until `quit`/`exit` or end of input, then persist the session.
    ///
    /// The session is saved even when the loop stops on an error.
    pub fn run(mut self, mut session: AttendanceSession) -> AppResult<SessionSummary> {
        match self.read_loop(&mut session) {
            Ok(()) => session.finish(),
            Err(e) => {
                if let Err(save_err) = session.finish() {
                    eprintln!("⚠️ Failed to save the interrupted session: {}", save_err);
                }
                Err(e)
            }
        }
    }

    fn read_loop(&mut self, session: &mut AttendanceSession) -> AppResult<()> {
        let theme = session.theme();

        writeln!(
            self.writer,
            "{}{} Attendance {} Type an ID and press Enter ('quit' to finish).",
            theme.background(),
            theme.foreground(),
            RESET
        )?;

        let mut buf = Vec::new();
        loop {
            write!(self.writer, "ID> ")?;
            self.writer.flush()?;

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.writer)?;
                return Ok(());
            }

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if EXIT_WORDS.contains(&input.to_lowercase().as_str()) {
                        return Ok(());
                    }
                    session.handle_input(input)
                }
                Err(_) => Err(AppError::InvalidId(
                    String::from_utf8_lossy(&buf).trim().to_string(),
                )),
            };

            match result {
                Ok(outcome) => {
                    writeln!(
                        self.writer,
                        "{}{}{}",
                        theme.foreground(),
                        outcome.message(),
                        RESET
                    )?;
                }
                Err(e) if e.is_recoverable() => {
                    writeln!(self.writer, "{FG_RED}{e}{RESET}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
