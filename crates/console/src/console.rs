// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator console abstraction.
//!
//! Every workflow talks to the operator through the `Console` trait instead
//! of touching stdin/stdout directly, so the whole menu loop can be driven
//! end-to-end from tests with a scripted console double.

use poise_domain::{Money, calendar_date};
use std::io::{BufRead, Write};
use time::Date;

/// Errors raised by the console itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The input stream reached end-of-file. Treated as a clean request to
    /// end the session.
    InputClosed,
    /// Reading from or writing to the terminal failed.
    Io(String),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputClosed => write!(f, "Console input closed"),
            Self::Io(msg) => write!(f, "Console I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

/// The operator's terminal.
pub trait Console {
    /// Prints the prompt on its own line and reads the operator's reply,
    /// with the trailing line break removed.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` at end-of-file.
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Prints one line of text.
    fn say(&mut self, text: &str);
}

/// Console backed by the process's stdin and stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        println!("{prompt}");
        std::io::stdout()
            .flush()
            .map_err(|e| ConsoleError::Io(e.to_string()))?;

        let mut line = String::new();
        let bytes = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ConsoleError::Io(e.to_string()))?;
        if bytes == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Prompts until the operator enters a valid non-negative amount.
///
/// # Errors
///
/// Returns an error only if the console fails; invalid entries re-prompt.
pub fn prompt_amount(console: &mut dyn Console, label: &str) -> Result<Money, ConsoleError> {
    loop {
        let entry = console.read_line(label)?;
        match Money::parse(&entry) {
            Ok(amount) => return Ok(amount),
            Err(_) => console.say("Invalid entry. Try again."),
        }
    }
}

/// Prompts for numeric day/month/year values until they name a real date.
///
/// # Errors
///
/// Returns an error only if the console fails; invalid entries re-prompt.
pub fn prompt_date(console: &mut dyn Console, header: &str) -> Result<Date, ConsoleError> {
    loop {
        let day = console.read_line(&format!("{header}\n- Day: "))?;
        let month = console.read_line("- Month: ")?;
        let year = console.read_line("- Year: ")?;

        let parsed = day
            .trim()
            .parse::<u8>()
            .ok()
            .zip(month.trim().parse::<u8>().ok())
            .zip(year.trim().parse::<i32>().ok());
        let Some(((day, month), year)) = parsed else {
            console.say("Invalid date entry. Try again.\n");
            continue;
        };

        match calendar_date(year, month, day) {
            Ok(date) => return Ok(date),
            Err(_) => console.say("Invalid date entry. Try again.\n"),
        }
    }
}
