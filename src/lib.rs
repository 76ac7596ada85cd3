//! plate is a project-scaffolding tool.
//! A template set is a single `.tpl` file declaring named blocks; every block
//! is rendered and written to the output path its name describes.

/// Discovery of available template sets
pub mod catalog;

/// Command-line interface module
pub mod cli;

/// Template-set compilation into a MiniJinja environment
pub mod compiler;

/// Templates root resolution
pub mod config;

pub mod constants;

/// Splitting of template-set files into named blocks
pub mod document;

/// Error types and handling
pub mod error;

/// Helper functions available inside templates, such as `args(i)`
pub mod helpers;

/// Path composition for template sets and generated files
pub mod locator;

pub mod logger;

/// Interactive template-set selection
pub mod prompt;

/// Writing rendered sub-templates to disk
pub mod renderer;
