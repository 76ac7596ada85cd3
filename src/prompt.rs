//! Console interaction for choosing a template set.

use dialoguer::Input;
use log::debug;
use std::io::{BufRead, Write};

use crate::constants::MAX_SELECTION_ATTEMPTS;
use crate::error::{Error, Result};

/// Console abstraction used by the interactive selection.
pub trait Prompter {
    /// Shows a line of text to the user.
    fn show(&mut self, text: &str) -> Result<()>;

    /// Asks a question and returns the answer, or `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Prompter backed by dialoguer, used when stdin is a terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn show(&mut self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(Some(answer))
    }
}

/// Line-oriented prompter over any reader and writer.
///
/// Used for piped input and for scripted input in tests.
pub struct LinePrompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parses a 1-based choice, returning the 0-based index when it is in range.
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Some(choice - 1),
        _ => None,
    }
}

/// Lists `names` numbered from 1 and asks the user to pick one.
///
/// Invalid answers are asked again, up to `MAX_SELECTION_ATTEMPTS` times.
///
/// # Errors
/// * `Error::NoTemplatesAvailable` if `names` is empty
/// * `Error::SelectionAborted` when input ends or attempts run out
pub fn choose_template(
    prompter: &mut dyn Prompter,
    names: &[String],
    templates_root: &str,
) -> Result<String> {
    if names.is_empty() {
        return Err(Error::NoTemplatesAvailable { templates_root: templates_root.to_string() });
    }

    prompter.show("Available templates:\n")?;
    for (i, name) in names.iter().enumerate() {
        prompter.show(&format!("  {} - {}", i + 1, name))?;
    }
    prompter.show("")?;

    let question = format!("Choose your template [1-{}]", names.len());
    for attempt in 1..=MAX_SELECTION_ATTEMPTS {
        let Some(answer) = prompter.ask(&question)? else {
            return Err(Error::SelectionAborted("no input".to_string()));
        };
        if let Some(index) = parse_choice(&answer, names.len()) {
            return Ok(names[index].clone());
        }
        debug!("Invalid choice '{}' (attempt {}/{})", answer, attempt, MAX_SELECTION_ATTEMPTS);
    }

    Err(Error::SelectionAborted(format!("no valid choice after {MAX_SELECTION_ATTEMPTS} attempts")))
}
