//! Core resolution pipeline: run every pass against one config object.
//!
//! Operates on pre-loaded data with no I/O, making the full pipeline testable
//! with synthetic inputs. Steps:
//!
//! 1. Environment pass (overrides initial values)
//! 2. Argument pass (overrides environment, records leftovers)
//! 3. Required-field validation and flag defaults

use std::collections::HashMap;

use crate::args;
use crate::config::Config;
use crate::env;
use crate::error::EnvoptError;
use crate::store::FieldStore;
use crate::validate;

/// Resolve `store`'s fields into `config` in place.
///
/// There is no rollback: on error `config` keeps whatever the passes and the
/// validator had written up to the failing field.
pub fn resolve_into<S: AsRef<str>>(
    store: &FieldStore,
    env_vars: &HashMap<String, String>,
    argv: &[S],
    config: &mut Config,
) -> Result<(), EnvoptError> {
    env::apply(store, env_vars, config);
    args::apply(store, argv, config);
    validate::apply(store, config)
}
