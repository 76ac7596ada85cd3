//! Error handling for plate.
//! Defines the error taxonomy and the result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum Error {
    /// A required command-line argument is missing.
    #[error("Usage error: {0}.")]
    UsageError(String),

    /// The user's home directory could not be resolved.
    #[error("Could not determine the home directory; pass --templates-dir instead.")]
    HomeDirectoryNotFound,

    /// The template-set file could not be opened.
    #[error("Template '{name}' not found at '{}': {source}.", .path.display())]
    TemplateNotFound {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template-set file was opened but could not be read.
    #[error("Failed to read template '{}': {source}.", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The template-set file contains malformed template syntax.
    #[error("Failed to parse template '{name}'{}: {message}.", format_line(.line))]
    ParseFailure {
        name: String,
        line: Option<usize>,
        message: String,
    },

    /// A template asked for a positional argument that was not supplied.
    #[error("Argument index {index} is out of bounds.\n{}", format_arguments(.available))]
    ArgumentOutOfBounds { index: usize, available: Vec<String> },

    /// An output directory or file could not be created or written.
    #[error("Failed to create '{}': {source}.", .path.display())]
    CreateFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sub-template failed while rendering.
    #[error("Failed to render '{template}': {source}.")]
    ExecutionFailure {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// The templates root could not be scanned.
    #[error("Failed to scan templates: {0}.")]
    CatalogScanError(String),

    /// There is nothing to choose from in the templates root.
    #[error("No templates available in '{templates_root}'.")]
    NoTemplatesAvailable { templates_root: String },

    /// The interactive selection ended without a valid choice.
    #[error("Template selection aborted: {0}.")]
    SelectionAborted(String),

    /// The console could not be read or written.
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors that occur during other file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

fn format_line(line: &Option<usize>) -> String {
    line.map(|line| format!(" at line {line}")).unwrap_or_default()
}

fn format_arguments(available: &[String]) -> String {
    if available.is_empty() {
        return "No arguments were supplied.".to_string();
    }
    let lines: Vec<String> = available
        .iter()
        .enumerate()
        .map(|(index, value)| format!("  {index}: {value}"))
        .collect();
    format!("Available arguments:\n{}", lines.join("\n"))
}

/// Convenience type alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
