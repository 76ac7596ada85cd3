use plate::error::Error;
use plate::prompt::{choose_template, LinePrompter};
use std::io::Cursor;

fn names() -> Vec<String> {
    vec!["go".to_string(), "node".to_string()]
}

#[test]
fn test_choose_template() {
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(Cursor::new("2\n"), &mut output);

    let chosen = choose_template(&mut prompter, &names(), "/templates").unwrap();

    assert_eq!(chosen, "node");
    let shown = String::from_utf8(output).unwrap();
    assert_eq!(
        shown,
        "Available templates:\n\n  1 - go\n  2 - node\n\nChoose your template [1-2]: "
    );
}

#[test]
fn test_choose_template_reprompts_on_invalid_input() {
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(Cursor::new("0\nthree\n3\n1\n"), &mut output);

    let chosen = choose_template(&mut prompter, &names(), "/templates").unwrap();

    assert_eq!(chosen, "go");
    let shown = String::from_utf8(output).unwrap();
    assert_eq!(shown.matches("Choose your template [1-2]: ").count(), 4);
}

#[test]
fn test_choose_template_gives_up_after_max_attempts() {
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(Cursor::new("9\n9\n9\n9\n9\n9\n1\n"), &mut output);

    let result = choose_template(&mut prompter, &names(), "/templates");

    assert!(matches!(result, Err(Error::SelectionAborted(_))));
}

#[test]
fn test_choose_template_end_of_input() {
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(Cursor::new("7\n"), &mut output);

    let result = choose_template(&mut prompter, &names(), "/templates");

    assert!(matches!(result, Err(Error::SelectionAborted(_))));
}

#[test]
fn test_choose_template_without_templates() {
    let mut output = Vec::new();
    let mut prompter = LinePrompter::new(Cursor::new("1\n"), &mut output);

    match choose_template(&mut prompter, &[], "/templates") {
        Err(Error::NoTemplatesAvailable { templates_root }) => {
            assert_eq!(templates_root, "/templates")
        }
        other => panic!("Expected NoTemplatesAvailable, got {other:?}"),
    }
    assert!(output.is_empty());
}
