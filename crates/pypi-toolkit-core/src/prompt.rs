use std::io::{BufRead, Write};

use crate::error::{Result, ToolkitError};

/// Interactive line input.
pub trait Prompt {
    /// Show `question` and return one line of input, without the line ending.
    /// End of input is an error.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Ask until a non-blank answer arrives. The answer is returned trimmed.
pub fn ask_non_empty(prompt: &mut dyn Prompt, question: &str) -> Result<String> {
    loop {
        let answer = prompt.ask(question)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

/// Reads answers from any buffered reader and writes questions to a writer.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            let what = question.trim().trim_end_matches(':').to_string();
            return Err(ToolkitError::PromptClosed(what));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

pub type StdinPrompt = LinePrompt<std::io::StdinLock<'static>, std::io::Stderr>;

/// Prompt on the terminal: questions to stderr, answers from stdin.
pub fn stdin_prompt() -> StdinPrompt {
    LinePrompt::new(std::io::stdin().lock(), std::io::stderr())
}
