//! Line input sources
//!
//! The preference store asks an [`InputSource`] for a value when nothing is remembered yet.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A blocking source of single lines of text
pub trait InputSource {
    /// Show `prompt` and block until one line is available.
    ///
    /// Returns `Ok(None)` at end of input. The returned line carries no line terminator.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Prompts on a writer and reads the answer from a buffered reader
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Console input bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Replays a fixed list of answers; used by tests and non-interactive callers
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_input_strips_line_ending() {
        let mut out = Vec::new();
        let mut input = ConsoleInput::new("Dana\r\n".as_bytes(), &mut out);

        let line = input.read_line("What is your name? ").unwrap();
        assert_eq!(line.as_deref(), Some("Dana"));
        drop(input);
        assert_eq!(String::from_utf8(out).unwrap(), "What is your name? ");
    }

    #[test]
    fn test_console_input_end_of_input() {
        let mut input = ConsoleInput::new("".as_bytes(), io::sink());
        assert_eq!(input.read_line("? ").unwrap(), None);
    }

    #[test]
    fn test_console_input_keeps_inner_whitespace() {
        let mut input = ConsoleInput::new(" Mary Ann \n".as_bytes(), io::sink());
        assert_eq!(input.read_line("? ").unwrap().as_deref(), Some(" Mary Ann "));
    }

    #[test]
    fn test_scripted_input_records_prompts() {
        let mut input = ScriptedInput::new(["Alice"]);
        assert_eq!(input.read_line("name? ").unwrap().as_deref(), Some("Alice"));
        assert_eq!(input.read_line("name? ").unwrap(), None);
        assert_eq!(input.prompt_count(), 2);
        assert_eq!(input.prompts()[0], "name? ");
    }
}
