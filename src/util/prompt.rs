//! Line-based interactive prompts.
//!
//! Prompts read whole lines, so they work the same whether stdin is a
//! terminal or a pipe. Invalid answers re-ask; end of input is an error.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the process's stdin, writing questions to stderr.
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for free-form text.
    ///
    /// An empty answer takes `default` when there is one. The answer is
    /// trimmed before `validate` sees it; a validation error is shown and
    /// the question is asked again.
    pub fn input<F>(&mut self, message: &str, default: Option<&str>, validate: F) -> Result<String>
    where
        F: Fn(&str) -> Result<(), String>,
    {
        loop {
            match default {
                Some(d) => write!(self.output, "? {} ({}) ", message, d)?,
                None => write!(self.output, "? {} ", message)?,
            }
            self.output.flush()?;

            let line = self.read_answer(message)?;
            let answer = match (line.as_str(), default) {
                ("", Some(d)) => d.to_string(),
                (answer, _) => answer.to_string(),
            };

            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(msg) => writeln!(self.output, ">> {}", msg)?,
            }
        }
    }

    /// Ask the user to pick one of `choices`.
    ///
    /// Accepts the 1-based option number or the option's display name,
    /// case-insensitively. An empty answer picks `default`, or the first
    /// choice when there is no default.
    pub fn select<T>(&mut self, message: &str, choices: &[T], default: Option<T>) -> Result<T>
    where
        T: Display + Copy + PartialEq,
    {
        if choices.is_empty() {
            bail!("no choices available for `{}`", message);
        }
        let default = default
            .filter(|d| choices.contains(d))
            .unwrap_or(choices[0]);

        writeln!(self.output, "? {}", message)?;
        for (i, choice) in choices.iter().enumerate() {
            let marker = if *choice == default { ">" } else { " " };
            writeln!(self.output, "  {} {}) {}", marker, i + 1, choice)?;
        }

        loop {
            write!(self.output, "  Answer [1-{}] ({}) ", choices.len(), default)?;
            self.output.flush()?;

            let answer = self.read_answer(message)?;
            if answer.is_empty() {
                return Ok(default);
            }
            if let Some(choice) = pick(choices, &answer) {
                return Ok(choice);
            }

            let names: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
            writeln!(self.output, ">> Please choose one of: {}", names.join(", "))?;
        }
    }

    /// Read one trimmed line, failing on end of input.
    fn read_answer(&mut self, message: &str) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context(|| format!("failed to read answer for `{}`", message))?;
        if read == 0 {
            bail!("no answer given for `{}` (end of input)", message);
        }
        Ok(line.trim().to_string())
    }
}

fn pick<T: Display + Copy>(choices: &[T], answer: &str) -> Option<T> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| choices.get(i)).copied();
    }
    choices
        .iter()
        .find(|c| c.to_string().eq_ignore_ascii_case(answer))
        .copied()
}
