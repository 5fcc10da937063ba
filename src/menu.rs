// Interactive menu session

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::{generate_batch_with, Algorithm, DigitCount, DigitError, MAX_DIGITS};
use crate::crypto::random::SecureRandom;

/// Menu entry that ends the session
pub const EXIT_CHOICE: i64 = 4;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("digit generation failed")]
    Generation(#[from] DigitError),
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked the exit entry
    Quit,
    /// The algorithm choice was not an integer, or input ran out
    InvalidInput,
    /// The digit count was not an integer in range
    InvalidDigitCount,
}

impl SessionEnd {
    pub fn exit_code(self) -> u8 {
        match self {
            SessionEnd::Quit => 0,
            SessionEnd::InvalidInput | SessionEnd::InvalidDigitCount => 1,
        }
    }
}

/// Whitespace-delimited tokens read lazily from a line source
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens { reader, pending: VecDeque::new() }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an integer, `None` on EOF or a non-integer
    fn next_int(&mut self) -> io::Result<Option<i64>> {
        Ok(self.next_token()?.and_then(|t| t.parse().ok()))
    }
}

pub struct Session<R, W, S> {
    input: Tokens<R>,
    output: W,
    source: S,
}

impl<R: BufRead, W: Write, S: SecureRandom> Session<R, W, S> {
    pub fn new(input: R, output: W, source: S) -> Self {
        Session { input: Tokens::new(input), output, source }
    }

    /// Run the menu loop to completion
    pub fn run(&mut self) -> Result<SessionEnd, MenuError> {
        loop {
            self.print_menu()?;
            let choice = match self.input.next_int()? {
                Some(c) => c,
                None => {
                    writeln!(self.output, "Invalid input. Exiting.")?;
                    return Ok(SessionEnd::InvalidInput);
                }
            };

            if choice == EXIT_CHOICE {
                writeln!(self.output, "Exiting program.")?;
                info!("session ended by user");
                return Ok(SessionEnd::Quit);
            }

            write!(
                self.output,
                "Enter the number of digits for the random number (max {}):\n> ",
                MAX_DIGITS
            )?;
            self.output.flush()?;
            let count = match self.input.next_int()?.map(DigitCount::new) {
                Some(Ok(count)) => count,
                _ => {
                    writeln!(self.output, "Invalid number of digits. Exiting.")?;
                    return Ok(SessionEnd::InvalidDigitCount);
                }
            };

            match Algorithm::from_menu_choice(choice) {
                Some(algorithm) => self.print_batch(algorithm, count)?,
                None => {
                    debug!(choice, "unknown menu choice");
                    writeln!(self.output, "Invalid selection. Try again.")?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Select RNG Algorithm:")?;
        for algorithm in Algorithm::ALL {
            writeln!(self.output, "{}: {}", algorithm.menu_choice(), algorithm)?;
        }
        write!(self.output, "{}: Exit\n> ", EXIT_CHOICE)?;
        self.output.flush()
    }

    fn print_batch(&mut self, algorithm: Algorithm, count: DigitCount) -> Result<(), MenuError> {
        let batch = generate_batch_with(&mut self.source, algorithm.label(), count.get() as i64)?;
        write_batch(&mut self.output, algorithm.label(), &batch)?;
        Ok(())
    }
}

/// Print a batch the way the menu shows it
pub fn write_batch<W: Write, D: std::fmt::Display>(
    out: &mut W,
    algorithm: &str,
    batch: &[D],
) -> io::Result<()> {
    writeln!(out, "\nGenerating numbers using {}:", algorithm)?;
    for digits in batch {
        writeln!(out, "Generated Random Number: {}", digits)?;
    }
    out.flush()
}
