//! Environment lookup capability.
//!
//! The resolver never reads `std::env` directly; it asks an [`EnvSource`],
//! so tests can supply a map instead of mutating process state.

use std::collections::HashMap;

/// Looks up environment variables by name.
pub trait EnvSource {
    /// Value of `name`, or `None` if unset.
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
