//! Path composition for template sets and generated files.

use std::path::{Component, Path, PathBuf};

use crate::constants::TEMPLATES_EXTENSION;

/// Returns `{templates_root}/{name}.tpl`.
pub fn template_path<P: AsRef<Path>>(templates_root: P, name: &str) -> PathBuf {
    templates_root.as_ref().join(format!("{name}{TEMPLATES_EXTENSION}"))
}

/// Returns `{output_root}/{relative}`.
pub fn output_path<P: AsRef<Path>>(output_root: P, relative: &str) -> PathBuf {
    output_root.as_ref().join(relative)
}

/// Recovers the template-set name from a `.tpl` file path.
pub fn template_name<P: AsRef<Path>>(path: P) -> Option<String> {
    let file_name = path.as_ref().file_name()?.to_str()?;
    let name = file_name.strip_suffix(TEMPLATES_EXTENSION)?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Checks that a sub-template name is a plain relative path that stays
/// inside the output root.
///
/// # Examples
/// * `main.go`, `config/app.config` are valid
/// * ``, `/etc/passwd`, `../x`, `a//b`, `a/./b` are not
pub fn is_output_name_valid(name: &str) -> bool {
    if name.is_empty() || name.contains('\\') {
        return false;
    }
    if name.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        return false;
    }
    Path::new(name).components().all(|component| matches!(component, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_name() {
        assert_eq!(template_name("/home/user/.plate/go.tpl"), Some("go".to_string()));
        assert_eq!(template_name("node.tpl"), Some("node".to_string()));
        assert_eq!(template_name("README.md"), None);
        assert_eq!(template_name(".tpl"), None);
    }
}
