use crate::error::FixerError;
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Interprets a yes/no answer. Empty input means `default`, only `y` or `Y`
/// means yes.
pub fn parse_answer(answer: &str, default: bool) -> bool {
    if answer.is_empty() {
        default
    } else {
        answer.to_lowercase() == "y"
    }
}

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Where prompts and everything else are printed.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the prompter, returning the output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `text` and reads one line, without its line ending.
    pub fn read_line(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Err(FixerError::InputClosed.into());
        }

        let answer = line.trim_end_matches(&['\n', '\r'][..]).to_owned();

        debug!("{:?} answered with {:?}", text.trim(), answer);

        Ok(answer)
    }

    /// Asks a yes/no question, see [`parse_answer`].
    pub fn ask(&mut self, text: &str, default: bool) -> Result<bool> {
        let answer = self.read_line(text)?;
        Ok(parse_answer(&answer, default))
    }

    /// Blocks until a line is entered.
    pub fn wait_for_enter(&mut self, text: &str) -> Result<()> {
        self.read_line(text)?;
        Ok(())
    }
}
