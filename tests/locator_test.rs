use plate::locator::{is_output_name_valid, output_path, template_path};
use std::path::PathBuf;

#[test]
fn test_template_path() {
    assert_eq!(template_path("foo", "go"), PathBuf::from("foo/go.tpl"));
    assert_eq!(template_path("/home/user/.plate", "node"), PathBuf::from("/home/user/.plate/node.tpl"));
}

#[test]
fn test_output_path() {
    assert_eq!(output_path("bar", "tmp/file.go"), PathBuf::from("bar/tmp/file.go"));
    assert_eq!(output_path("__out__", "main.go"), PathBuf::from("__out__/main.go"));
}

#[test]
fn test_is_output_name_valid() {
    assert!(is_output_name_valid("main.go"));
    assert!(is_output_name_valid("config/app.config"));
    assert!(is_output_name_valid(".gitignore"));

    assert!(!is_output_name_valid(""));
    assert!(!is_output_name_valid("/etc/passwd"));
    assert!(!is_output_name_valid("../outside"));
    assert!(!is_output_name_valid("config/../../outside"));
    assert!(!is_output_name_valid("config//app.config"));
    assert!(!is_output_name_valid("./main.go"));
    assert!(!is_output_name_valid("config\\app.config"));
}
