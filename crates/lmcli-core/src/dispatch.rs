//! Command registry and dispatch
//!
//! The registry maps short command tokens to handlers. It is built once at
//! startup, never mutated afterwards, and handed to whoever dispatches.

use std::collections::HashMap;

/// Immutable token -> handler mapping
#[derive(Debug, Clone)]
pub struct CommandRegistry<H> {
    handlers: HashMap<&'static str, H>,
}

/// Result of resolving an argument vector against a registry
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch<'a, H> {
    /// Run `handler` with the full argument list, command token included
    Run { handler: H, args: &'a [String] },
    /// Empty or unknown command: show usage and fail
    Usage,
}

impl<H: Copy> CommandRegistry<H> {
    /// Build a registry from `(token, handler)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a token is registered twice.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, H)>,
    {
        let mut handlers = HashMap::new();
        for (token, handler) in entries {
            let previous = handlers.insert(token, handler);
            assert!(previous.is_none(), "command token '{}' registered twice", token);
        }
        Self { handlers }
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, token: &str) -> Option<H> {
        self.handlers.get(token).copied()
    }

    /// Resolve the first argument to a handler
    pub fn resolve<'a>(&self, args: &'a [String]) -> Dispatch<'a, H> {
        match args.first().and_then(|token| self.get(token)) {
            Some(handler) => Dispatch::Run { handler, args },
            None => Dispatch::Usage,
        }
    }
}
