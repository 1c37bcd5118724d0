use std::io::{self, BufRead, Write};

use log::debug;

use crate::ast::Command;
use crate::parser::parse_command;
use crate::session::Session;

pub const BANNER: &str = "Welcome to linedb. Enter a command or 'quit' to exit";

/// Settings of the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Written before reading each command.
    pub prompt: String,
    /// Whether to greet the user on start.
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            banner: true,
        }
    }
}

/// Line-based read/prompt/quit loop around a [Session].
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ShellConfig,
    session: Session,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            config,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the shell and hands back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 reach the
    /// session as replacement characters instead of ending the loop.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying reader or writer.
    pub fn run(&mut self) -> io::Result<()> {
        if self.config.banner {
            writeln!(self.output, "{BANNER}")?;
        }

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("end of input");
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            let command = parse_command(&line);
            if command == Command::Quit {
                writeln!(self.output, "Bye")?;
                break;
            }

            let response = self.session.respond(command);
            writeln!(self.output, "{response}")?;
        }

        self.output.flush()
    }
}
