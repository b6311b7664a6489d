use std::collections::HashMap;

use crate::config::Config;
use crate::error::EnvoptError;
use crate::resolve;
use crate::store::{FieldDef, FieldStore};
use crate::types::FlagSet;

/// A set of declared fields and the entry point for resolving them.
///
/// ```ignore
/// let schema = Schema::new()
///     .field("api url", [Flag::Required])
///     .field("verbose", [Flag::Flag, Flag::Multi]);
///
/// let config = schema.resolve_process()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub(crate) store: FieldStore,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field, replacing the flags of an existing field with the
    /// same name.
    pub fn declare(&mut self, name: &str, flags: impl Into<FlagSet>) -> &mut Self {
        self.store.declare(name, flags.into());
        self
    }

    /// Builder form of [`declare`](Self::declare).
    pub fn field(mut self, name: &str, flags: impl Into<FlagSet>) -> Self {
        self.declare(name, flags);
        self
    }

    /// Declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDef> {
        self.store.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.store.get(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Resolve into a fresh config.
    pub fn resolve<S: AsRef<str>>(
        &self,
        env: &HashMap<String, String>,
        argv: &[S],
    ) -> Result<Config, EnvoptError> {
        self.resolve_with(env, argv, Config::new())
    }

    /// Resolve on top of `initial` and return it.
    ///
    /// Values already in `initial` have the lowest precedence: environment
    /// variables override them, and options override both.
    pub fn resolve_with<S: AsRef<str>>(
        &self,
        env: &HashMap<String, String>,
        argv: &[S],
        mut initial: Config,
    ) -> Result<Config, EnvoptError> {
        self.resolve_into(env, argv, &mut initial)?;
        Ok(initial)
    }

    /// Resolve into a caller-owned config.
    ///
    /// On error the config is left as the failing pass found it; nothing is
    /// rolled back.
    pub fn resolve_into<S: AsRef<str>>(
        &self,
        env: &HashMap<String, String>,
        argv: &[S],
        config: &mut Config,
    ) -> Result<(), EnvoptError> {
        resolve::resolve_into(&self.store, env, argv, config)
    }

    /// Resolve against the current process's environment and arguments.
    ///
    /// The program name (`argv[0]`) is passed through like any other token and
    /// ends up first in the leftovers.
    pub fn resolve_process(&self) -> Result<Config, EnvoptError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        let argv: Vec<String> = std::env::args().collect();
        self.resolve(&env, &argv)
    }
}
