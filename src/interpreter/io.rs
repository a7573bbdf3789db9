use std::{
    collections::{HashMap, VecDeque},
    io::{self, BufRead, Write},
};

use tracing::warn;

/// Supplies lines of user input to `readInput`.
pub trait InputProvider {
    /// Shows `prompt` to the user and returns the line they entered, without
    /// its line terminator.
    fn read_input(&mut self, prompt: &str) -> String;
}

/// Supplies environment variables to `readEnv`.
pub trait EnvProvider {
    /// Returns the value of the variable `name`, or `None` if it is not set.
    fn get_env_variable(&self, name: &str) -> Option<String>;
}

/// Receives everything `println` prints, one message per call.
pub trait OutputSink {
    /// Emits one line of program output.
    fn print(&mut self, message: &str);
}

/// Reads input lines from the process's standard input.
///
/// Prompts are written to standard output without a trailing newline. A read
/// failure or end of input yields an empty line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn read_input(&mut self, prompt: &str) -> String {
        let mut stdout = io::stdout().lock();
        if let Err(error) = write!(stdout, "{prompt}").and_then(|()| stdout.flush()) {
            warn!(%error, "could not write input prompt");
        }

        let mut line = String::new();
        if let Err(error) = io::stdin().lock().read_line(&mut line) {
            warn!(%error, "could not read from standard input");
            return String::new();
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        line
    }
}

/// Reads variables from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn get_env_variable(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Prints program output to standard output, one line per message.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn print(&mut self, message: &str) {
        println!("{message}");
    }
}

/// An [`InputProvider`] answering from a fixed list of lines.
///
/// Every prompt it is shown is recorded. Once the lines run out it answers
/// with empty lines.
///
/// # Example
/// ```
/// use printscript::interpreter::io::{InputProvider, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["Ada"]);
///
/// assert_eq!(input.read_input("name: "), "Ada");
/// assert_eq!(input.read_input("again: "), "");
/// assert_eq!(input.prompts(), ["name: ", "again: "]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines:   VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates an input that answers with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { lines:   lines.into_iter().map(Into::into).collect(),
               prompts: Vec::new(), }
    }

    /// The prompts shown so far, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl InputProvider for ScriptedInput {
    fn read_input(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().unwrap_or_default()
    }
}

impl EnvProvider for HashMap<String, String> {
    fn get_env_variable(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// An [`OutputSink`] collecting printed lines in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedOutput {
    lines: Vec<String>,
}

impl BufferedOutput {
    /// The lines printed so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the buffer, returning the printed lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for BufferedOutput {
    fn print(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
