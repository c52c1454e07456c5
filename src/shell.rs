use std::io::{BufRead, Write};

use crate::core::{
    command::Command,
    error::Error,
    ledger::Ledger,
};
use anyhow::Result;
use log::*;

pub const PROMPT: &str = "partsim> ";

/// Interactive front end of the simulator: reads commands from
/// `input`, applies them to the ledger and writes the outcome
/// to `output`.
pub struct Shell<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Runs until `X` or end of input. Only I/O failures on the
    /// terminal are returned; rejected commands are reported
    /// and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End of input behaves like an explicit exit,
                // but the prompt line still needs terminating.
                writeln!(self.output)?;
                debug!("End of input, leaving");
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            let outcome = match line.parse::<Command>() {
                Ok(Command::Exit) => return Ok(()),
                Ok(command) => self.execute(command),
                Err(error) => Err(error),
            };

            // The user sees rejections on the output already, so
            // the log only keeps a trace of them.
            match outcome {
                Ok(message) => writeln!(self.output, "{message}")?,
                Err(error) => {
                    debug!("Rejected command: {error}");
                    writeln!(self.output, "Error: {error}")?;
                }
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Applies a command to the ledger and returns the line to
    /// show for it.
    fn execute(&mut self, command: Command) -> Result<String, Error> {
        let message = match command {
            Command::Request {
                owner,
                size,
                policy,
            } => {
                let range = self.ledger.allocate(&owner, size, policy)?;
                format!("Allocated {owner} {range}")
            }
            Command::Release { owner } => {
                let range = self.ledger.release(&owner)?;
                format!("Released {owner} {range}")
            }
            Command::Compact => {
                self.ledger.compact();
                "Memory compacted.".to_string()
            }
            Command::Status => self.ledger.report().to_string().trim_end().to_string(),
            Command::Exit => String::new(),
        };
        Ok(message)
    }
}
