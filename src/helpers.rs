//! Helper functions bound into every compiled template set.

use minijinja::{Environment, ErrorKind};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Name of the positional-argument accessor inside templates.
pub const ARGS_FUNCTION: &str = "args";

/// Raised by `args(i)` when `i` is past the end of the positional arguments.
///
/// It travels as the source of a MiniJinja error and is recovered with
/// [`find_argument_error`] once rendering returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentIndexError {
    pub index: usize,
    pub available: Vec<String>,
}

impl fmt::Display for ArgumentIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "argument index {} is out of bounds ({} supplied)",
            self.index,
            self.available.len()
        )
    }
}

impl StdError for ArgumentIndexError {}

/// Returns the positional argument at `index`.
pub fn lookup_arg(args: &[String], index: usize) -> Result<String, minijinja::Error> {
    args.get(index).cloned().ok_or_else(|| {
        let cause = ArgumentIndexError { index, available: args.to_vec() };
        minijinja::Error::new(ErrorKind::InvalidOperation, cause.to_string()).with_source(cause)
    })
}

/// Binds the helper functions into `env`.
pub fn register_helpers(env: &mut Environment<'static>, args: &[String]) {
    let args: Arc<[String]> = args.into();
    env.add_function(ARGS_FUNCTION, move |index: usize| lookup_arg(&args, index));
}

/// Walks the source chain of a rendering error looking for an
/// out-of-bounds argument lookup.
pub fn find_argument_error(err: &minijinja::Error) -> Option<&ArgumentIndexError> {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err as &(dyn StdError + 'static));
    while let Some(cause) = current {
        if let Some(found) = cause.downcast_ref::<ArgumentIndexError>() {
            return Some(found);
        }
        current = cause.source();
    }
    None
}
