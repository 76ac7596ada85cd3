//! Discovery of the template sets available under a templates root.

use globset::Glob;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::TEMPLATES_EXTENSION;
use crate::error::{Error, Result};
use crate::locator::template_name;

/// Lists the template-set names found directly under `templates_root`.
///
/// Only regular files matching `*.tpl` are considered, subdirectories are
/// not descended into. Names are returned sorted by file name. A missing
/// root yields an empty list.
///
/// # Errors
/// * `Error::CatalogScanError` if the directory scan fails
pub fn list<P: AsRef<Path>>(templates_root: P) -> Result<Vec<String>> {
    let templates_root = templates_root.as_ref();
    if !templates_root.is_dir() {
        debug!("Templates root {} does not exist", templates_root.display());
        return Ok(Vec::new());
    }

    let matcher = Glob::new(&format!("*{TEMPLATES_EXTENSION}"))
        .map_err(|e| Error::CatalogScanError(e.to_string()))?
        .compile_matcher();

    let mut names = Vec::new();
    for entry in WalkDir::new(templates_root).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::CatalogScanError(e.to_string()))?;
        let path = entry.path();
        if !path.is_file() || !matcher.is_match(Path::new(entry.file_name())) {
            debug!("Skipping {}", path.display());
            continue;
        }
        if let Some(name) = template_name(path) {
            names.push(name);
        }
    }

    debug!("Found {} templates in {}", names.len(), templates_root.display());
    Ok(names)
}
