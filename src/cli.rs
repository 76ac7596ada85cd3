//! Command-line interface implementation for plate.
//! Provides argument parsing and help text formatting using clap.

use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Command-line arguments structure for plate.
#[derive(Parser, Debug)]
#[command(author, version, about = "plate: scaffold projects from template sets", long_about = None)]
pub struct Args {
    /// Directory where the project will be generated
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: Option<PathBuf>,

    /// Extra arguments available to templates through args(i)
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Template set to use, skipping the interactive selection
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Directory holding the template sets (defaults to ~/.plate)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// List the available template sets and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Returns the project path, which every mode but `--list` needs.
    ///
    /// # Errors
    /// * `Error::UsageError` if no project path was given
    pub fn require_project_path(&self) -> Result<PathBuf> {
        self.project_path
            .clone()
            .ok_or_else(|| Error::UsageError("PROJECT_PATH is required".to_string()))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for malformed arguments
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}

/// Writes the usage text to `writer`.
pub fn write_usage<W: Write>(writer: &mut W) -> io::Result<()> {
    let help = Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .render_help();
    write!(writer, "{help}")?;
    writer.flush()
}

/// Prints the usage text to stdout, reporting a failed write on stderr.
pub fn print_usage() {
    if let Err(e) = write_usage(&mut io::stdout()) {
        eprintln!("Failed to print usage: {e}");
    }
}
