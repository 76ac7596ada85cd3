//! plate's main application entry point and orchestration logic.
//! Handles command-line argument parsing, template-set selection and the
//! compile and render flow.

use std::io::{stdin, stdout, IsTerminal};
use std::path::Path;

use plate::{
    catalog,
    cli::{get_args, print_usage, Args},
    compiler::compile,
    config::{ensure_templates_root, templates_root},
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    prompt::{choose_template, DialoguerPrompter, LinePrompter, Prompter},
    renderer::render_with,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        if matches!(err, Error::UsageError(_)) {
            print_usage();
        }
        default_error_handler(err);
    }
}

fn default_prompter() -> Box<dyn Prompter> {
    if stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(LinePrompter::new(stdin().lock(), stdout()))
    }
}

fn select_template(templates_root: &Path, requested: Option<String>) -> Result<String> {
    if let Some(name) = requested {
        return Ok(name);
    }
    let names = catalog::list(templates_root)?;
    let mut prompter = default_prompter();
    choose_template(&mut *prompter, &names, &templates_root.display().to_string())
}

fn list_templates(templates_root: &Path) -> Result<()> {
    for name in catalog::list(templates_root)? {
        println!("{name}");
    }
    Ok(())
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves and creates the templates root
/// 2. Lists the catalog when `--list` is given
/// 3. Selects the template set from `--template` or interactively
/// 4. Compiles the template set with the positional arguments
/// 5. Renders every sub-template into the project path
fn run(args: Args) -> Result<()> {
    let project_path = if args.list { None } else { Some(args.require_project_path()?) };
    let templates_root = templates_root(args.templates_dir)?;
    ensure_templates_root(&templates_root)?;

    let Some(project_path) = project_path else {
        return list_templates(&templates_root);
    };

    let name = select_template(&templates_root, args.template)?;
    let collection = compile(&templates_root, &name, &args.args)?;

    render_with(&collection, &project_path, |target| {
        println!("created: '{}'", target.display());
    })?;

    println!(
        "Project generated from template '{}' in {}.",
        collection.name(),
        project_path.display()
    );
    Ok(())
}
