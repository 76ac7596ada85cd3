//! Materialization of a compiled template set into an output directory.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compiler::TemplateCollection;
use crate::error::{Error, Result};
use crate::locator::output_path;

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|source| Error::CreateFailure { path: parent.to_path_buf(), source })?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|source| Error::CreateFailure { path: path.to_path_buf(), source })
}

/// Renders every named sub-template of `collection` under `output_root`.
///
/// Each result is trimmed of surrounding whitespace and written to
/// `{output_root}/{name}`, replacing any existing file. The anonymous root
/// template is never written.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Written files, in declaration order
///
/// # Errors
/// The first failure aborts the run. Files written before it are kept.
/// * `Error::CreateFailure` if a directory or file cannot be created
/// * `Error::ExecutionFailure` if a sub-template fails to render
/// * `Error::ArgumentOutOfBounds` if a sub-template asks for a missing argument
pub fn render<P: AsRef<Path>>(
    collection: &TemplateCollection,
    output_root: P,
) -> Result<Vec<PathBuf>> {
    render_with(collection, output_root, |_| {})
}

/// Same as [`render`], calling `on_written` right after each file is written.
///
/// Files reported before an error are the ones left on disk.
pub fn render_with<P, F>(
    collection: &TemplateCollection,
    output_root: P,
    mut on_written: F,
) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: FnMut(&Path),
{
    let output_root = output_root.as_ref();
    debug!("Rendering '{}' into {}", collection.name(), output_root.display());

    let mut written = Vec::with_capacity(collection.len());
    for name in collection.template_names() {
        if name.is_empty() {
            continue;
        }

        let target = output_path(output_root, name);
        create_parent_dir(&target)?;

        let content = collection.render_template(name)?;
        debug!("Writing file: {}", target.display());
        write_file(&target, content.trim())?;
        on_written(&target);
        written.push(target);
    }

    Ok(written)
}
