//! Input module.
//!
//! This module contains helpers around the step inputs a GitHub
//! Actions runner passes through the environment.

use log::debug;
use std::env;

/// Reads the action input with the given name.
///
/// The runner exposes step inputs as `INPUT_*` environment variables.
/// A missing input resolves to an empty string, and values are
/// returned verbatim, without trimming.
pub fn get_input(name: &str) -> String {
    let key = env_key(name);
    debug!("reading action input {:?} from {}", name, key);
    env::var(key).unwrap_or_default()
}

/// Mangles an input name into its environment key: spaces become
/// underscores, the result is uppercased and prefixed with `INPUT_`.
fn env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
