//! Splitting of a template-set file into its named blocks.
//!
//! A template set is MiniJinja source extended with block declarations:
//!
//! ```text
//! {% define "main.go" %}
//! package main
//! {% enddefine %}
//! ```
//!
//! Every block name doubles as the output-relative path of the file it
//! renders to. Anything outside a block belongs to the anonymous root.

use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::locator::is_output_name_valid;

static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{%-?\s*(?:define\s+(?:"([^"]*)"|'([^']*)')|(enddefine))\s*-?%\}"#)
        .expect("directive pattern is valid")
});

// Comments and raw regions, whose content is never a declaration.
static ESCAPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{#.*?#\}|\{%-?\s*raw\s*-?%\}.*?\{%-?\s*endraw\s*-?%\}")
        .expect("escaped region pattern is valid")
});

/// A named block declared in a template set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block name, which is also its output-relative path
    pub name: String,
    /// Raw MiniJinja source of the block body
    pub source: String,
    /// 1-based line in the set file where the body starts
    pub line: usize,
}

/// A template set split into its anonymous root and named blocks.
#[derive(Debug, Default)]
pub struct Document {
    /// Content outside every block. Block regions are replaced by the same
    /// number of newlines so line numbers still match the set file.
    pub root: String,
    /// Named blocks in declaration order
    pub blocks: IndexMap<String, Block>,
}

fn line_at(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

fn escaped_regions(content: &str) -> Vec<Range<usize>> {
    ESCAPED.find_iter(content).map(|m| m.range()).collect()
}

fn blank_lines(region: &str) -> String {
    "\n".repeat(region.matches('\n').count())
}

/// Splits the content of the template set `set_name` into blocks.
///
/// # Errors
/// * `Error::ParseFailure` for nested, unopened or unclosed blocks, and for
///   empty, invalid or duplicate block names
pub fn parse_document(set_name: &str, content: &str) -> Result<Document> {
    let parse_error = |offset: usize, message: String| Error::ParseFailure {
        name: set_name.to_string(),
        line: Some(line_at(content, offset)),
        message,
    };

    let mut document = Document::default();
    // Name, tag start and body start of the block being read.
    let mut open: Option<(String, usize, usize)> = None;
    let mut cursor = 0;
    let escaped = escaped_regions(content);

    for captures in DIRECTIVE.captures_iter(content) {
        let Some(tag) = captures.get(0) else { continue };
        if escaped.iter().any(|region| region.contains(&tag.start())) {
            continue;
        }

        if captures.get(3).is_some() {
            let Some((name, tag_start, body_start)) = open.take() else {
                return Err(parse_error(tag.start(), "'enddefine' without 'define'".to_string()));
            };
            let block = Block {
                source: content[body_start..tag.start()].to_string(),
                line: line_at(content, body_start),
                name: name.clone(),
            };
            debug!("Found block '{}' at line {}", name, block.line);
            document.root.push_str(&blank_lines(&content[tag_start..tag.end()]));
            document.blocks.insert(name, block);
            cursor = tag.end();
            continue;
        }

        if open.is_some() {
            return Err(parse_error(tag.start(), "nested 'define' is not allowed".to_string()));
        }

        let name = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(parse_error(tag.start(), "block name must not be empty".to_string()));
        }
        if !is_output_name_valid(&name) {
            return Err(parse_error(
                tag.start(),
                format!("block name '{name}' is not a valid relative path"),
            ));
        }
        if document.blocks.contains_key(&name) {
            return Err(parse_error(tag.start(), format!("block '{name}' is defined twice")));
        }

        document.root.push_str(&content[cursor..tag.start()]);
        open = Some((name, tag.start(), tag.end()));
    }

    if let Some((name, tag_start, _)) = open {
        return Err(parse_error(tag_start, format!("block '{name}' is never closed")));
    }

    document.root.push_str(&content[cursor..]);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_keep_declaration_order() {
        let content = "{% define \"b\" %}B{% enddefine %}\n{% define 'a' %}A{% enddefine %}";
        let document = parse_document("set", content).unwrap();
        let names: Vec<&str> = document.blocks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(document.blocks["a"].source, "A");
    }

    #[test]
    fn test_root_keeps_line_numbers() {
        let content = "top\n{% define \"x\" %}\none\ntwo\n{% enddefine %}\nbottom";
        let document = parse_document("set", content).unwrap();
        assert_eq!(document.root, "top\n\n\n\n\nbottom");
        assert_eq!(document.blocks["x"].line, 2);
        assert_eq!(document.blocks["x"].source, "\none\ntwo\n");
    }

    #[test]
    fn test_whitespace_control_markers() {
        let content = "{%- define \"x\" -%}body{%- enddefine -%}";
        let document = parse_document("set", content).unwrap();
        assert_eq!(document.blocks["x"].source, "body");
    }

    #[test]
    fn test_commented_declaration_stays_in_root() {
        let content = "{# {% define \"x.txt\" %}hi{% enddefine %} #}\n{% define \"a.txt\" %}ok{% enddefine %}";
        let document = parse_document("set", content).unwrap();
        let names: Vec<&str> = document.blocks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a.txt"]);
        assert!(document.root.starts_with("{# {% define \"x.txt\" %}"));
    }

    #[test]
    fn test_raw_declaration_stays_in_root() {
        let content = "{% raw %}{% define \"y.txt\" %}doc{% enddefine %}{% endraw %}\n{% define \"a.txt\" %}ok{% enddefine %}";
        let document = parse_document("set", content).unwrap();
        let names: Vec<&str> = document.blocks.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["a.txt"]);
    }

    #[test]
    fn test_raw_region_inside_block_keeps_literal_tags() {
        let content = "{% define \"docs.md\" %}{% raw %}{% define \"x\" %}{% enddefine %}{% endraw %}{% enddefine %}";
        let document = parse_document("set", content).unwrap();
        assert_eq!(document.blocks.len(), 1);
        assert_eq!(
            document.blocks["docs.md"].source,
            "{% raw %}{% define \"x\" %}{% enddefine %}{% endraw %}"
        );
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse_document("set", "\n\n{% define \"x\" %}body").unwrap_err();
        match err {
            Error::ParseFailure { line, message, .. } => {
                assert_eq!(line, Some(3));
                assert!(message.contains("never closed"));
            }
            other => panic!("Expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_block() {
        let content = "{% define \"a\" %}{% define \"b\" %}{% enddefine %}{% enddefine %}";
        assert!(matches!(parse_document("set", content), Err(Error::ParseFailure { .. })));
    }

    #[test]
    fn test_stray_enddefine() {
        let content = "text\n{% enddefine %}";
        match parse_document("set", content) {
            Err(Error::ParseFailure { line, .. }) => assert_eq!(line, Some(2)),
            other => panic!("Expected ParseFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_and_invalid_names() {
        let duplicate = "{% define \"a\" %}{% enddefine %}{% define \"a\" %}{% enddefine %}";
        assert!(parse_document("set", duplicate).is_err());

        for name in ["", "/etc/passwd", "../escape", "a//b"] {
            let content = format!("{{% define \"{name}\" %}}x{{% enddefine %}}");
            assert!(parse_document("set", &content).is_err(), "{name} should be rejected");
        }
    }
}
