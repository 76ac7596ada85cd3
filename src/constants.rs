//! Common constants used throughout plate.

/// Extension every template-set file carries.
pub const TEMPLATES_EXTENSION: &str = ".tpl";

/// Folder under the user's home directory holding the template sets.
pub const TEMPLATES_FOLDER: &str = ".plate";

/// How many times the interactive selection asks before giving up.
pub const MAX_SELECTION_ATTEMPTS: usize = 5;

/// Name the anonymous root template is registered under.
pub const ROOT_TEMPLATE: &str = "";
