//! Resolution of the templates root directory.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::TEMPLATES_FOLDER;
use crate::error::{Error, Result};

/// Returns the templates root: `override_dir` when given, otherwise
/// `~/.plate`.
///
/// # Errors
/// * `Error::HomeDirectoryNotFound` if no override is given and the home
///   directory cannot be resolved
pub fn templates_root(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    let home = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
    Ok(home.join(TEMPLATES_FOLDER))
}

/// Creates the templates root if it does not exist yet.
pub fn ensure_templates_root<P: AsRef<Path>>(templates_root: P) -> Result<()> {
    let templates_root = templates_root.as_ref();
    if templates_root.is_dir() {
        return Ok(());
    }
    debug!("Creating templates root {}", templates_root.display());
    fs::create_dir_all(templates_root).map_err(|source| Error::CreateFailure {
        path: templates_root.to_path_buf(),
        source,
    })
}
