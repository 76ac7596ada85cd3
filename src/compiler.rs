//! Template-set compilation.
//! Reads a `.tpl` file, binds the helper functions and compiles every block
//! into a single MiniJinja environment.

use log::debug;
use minijinja::{context, Environment, UndefinedBehavior};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::ROOT_TEMPLATE;
use crate::document::parse_document;
use crate::error::{Error, Result};
use crate::helpers::{find_argument_error, register_helpers};
use crate::locator::template_path;

/// A compiled template set.
///
/// Holds the anonymous root template and every named sub-template. The names
/// of the sub-templates are their output-relative paths.
pub struct TemplateCollection {
    name: String,
    env: Environment<'static>,
    templates: Vec<String>,
}

impl std::fmt::Debug for TemplateCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateCollection")
            .field("name", &self.name)
            .field("templates", &self.templates)
            .finish()
    }
}

impl TemplateCollection {
    /// Name of the template set this collection was compiled from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Named sub-templates in declaration order.
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(String::as_str)
    }

    /// Number of named sub-templates. The anonymous root is not counted.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up a template by name. The empty name is the anonymous root.
    pub fn contains(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Renders one template with an empty context.
    ///
    /// # Errors
    /// * `Error::ArgumentOutOfBounds` if the template called `args` past the
    ///   supplied arguments
    /// * `Error::ExecutionFailure` for any other rendering failure
    pub fn render_template(&self, name: &str) -> Result<String> {
        let execution_failure = |source: minijinja::Error| match find_argument_error(&source) {
            Some(cause) => Error::ArgumentOutOfBounds {
                index: cause.index,
                available: cause.available.clone(),
            },
            None => Error::ExecutionFailure { template: name.to_string(), source },
        };

        let template = self.env.get_template(name).map_err(execution_failure)?;
        template.render(context! {}).map_err(execution_failure)
    }
}

fn read_template_set(name: &str, path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::TemplateNotFound {
        name: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| Error::ReadFailure { path: path.to_path_buf(), source })?;
    Ok(content)
}

fn parse_failure(set_name: &str, line_offset: usize, err: minijinja::Error) -> Error {
    let message = match err.detail() {
        Some(detail) => format!("{}: {}", err.kind(), detail),
        None => err.kind().to_string(),
    };
    Error::ParseFailure {
        name: set_name.to_string(),
        line: err.line().map(|line| line + line_offset),
        message,
    }
}

/// Compiles the template set `name` found under `templates_root`.
///
/// # Arguments
/// * `templates_root` - Directory holding the `.tpl` files
/// * `name` - Template-set name without extension
/// * `args` - Positional arguments exposed through `args(i)`
///
/// # Errors
/// * `Error::TemplateNotFound` if the file cannot be opened
/// * `Error::ReadFailure` if the file cannot be read
/// * `Error::ParseFailure` on malformed blocks or template syntax
pub fn compile<P: AsRef<Path>>(
    templates_root: P,
    name: &str,
    args: &[String],
) -> Result<TemplateCollection> {
    let path = template_path(templates_root, name);
    debug!("Compiling template set '{}' from {}", name, path.display());

    let content = read_template_set(name, &path)?;
    let document = parse_document(name, &content)?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    register_helpers(&mut env, args);

    env.add_template_owned(ROOT_TEMPLATE, document.root)
        .map_err(|e| parse_failure(name, 0, e))?;

    let mut templates = Vec::with_capacity(document.blocks.len());
    for (block_name, block) in document.blocks {
        env.add_template_owned(block_name.clone(), block.source)
            .map_err(|e| parse_failure(name, block.line - 1, e))?;
        templates.push(block_name);
    }

    debug!("Compiled {} templates from '{}'", templates.len(), name);
    Ok(TemplateCollection { name: name.to_string(), env, templates })
}
