//! Anonymous survey collection
//!
//! Collects free-text answers to a single question without recording who gave them.

use std::io::{self, Write};

/// A question and the anonymous answers given to it
#[derive(Debug, Clone, Default)]
pub struct AnonymousSurvey {
    question: String,
    responses: Vec<String>,
}

impl AnonymousSurvey {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            responses: Vec::new(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Responses in the order they were stored
    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn store_response(&mut self, response: impl Into<String>) {
        let response = response.into();
        tracing::debug!("Stored survey response #{}", self.responses.len() + 1);
        self.responses.push(response);
    }

    pub fn show_question(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.question)
    }

    pub fn show_results(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Survey results:")?;
        for response in &self.responses {
            writeln!(out, "- {}", response)?;
        }
        Ok(())
    }
}
