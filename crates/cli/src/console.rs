//! Console session: the explicit input/output pair the menu runs over.
//!
//! Replaces a process-wide scanner with a value scoped to the session,
//! generic over the underlying reader and writer so tests can drive the
//! shell with in-memory buffers. Every prompt re-prints until the input
//! satisfies its rule, and invalid input never escalates past a retry.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

/// Input/output pair for one interactive session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and hands back the writer, so tests can
    /// inspect everything the shell printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints one line.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints the prompt and reads one line, without the trailing
    /// newline. Exhausted input is an error rather than a busy loop.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "entrada agotada",
            ));
        }
        Ok(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
    }

    /// Reads a non-empty line, re-prompting until one arrives.
    pub fn read_text(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let text = self.prompt_line(prompt)?;
            if !text.is_empty() {
                return Ok(text);
            }
        }
    }

    /// Reads a single line that may be left empty.
    pub fn read_optional_text(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt_line(prompt)
    }

    /// Reads a decimal, re-prompting silently until one parses.
    /// Both `.` and `,` work as the fractional separator.
    pub fn read_decimal(&mut self, prompt: &str) -> io::Result<Decimal> {
        loop {
            let raw = self.prompt_line(prompt)?;
            if let Ok(value) = raw.trim().replace(',', ".").parse::<Decimal>() {
                return Ok(value);
            }
        }
    }

    /// Reads a decimal, re-prompting while the value is not > 0.
    pub fn read_positive_decimal(&mut self, prompt: &str) -> io::Result<Decimal> {
        loop {
            let value = self.read_decimal(prompt)?;
            if value > Decimal::ZERO {
                return Ok(value);
            }
        }
    }

    /// Reads a menu selection within the inclusive `[min, max]` range,
    /// complaining on anything else.
    pub fn read_menu_choice(&mut self, prompt: &str, min: u32, max: u32) -> io::Result<u32> {
        loop {
            let raw = self.prompt_line(prompt)?;
            match raw.trim().parse::<u32>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(choice),
                _ => {
                    self.say(&format!(
                        "Por favor, ingrese un número válido entre {min} y {max}."
                    ))?;
                }
            }
        }
    }
}
