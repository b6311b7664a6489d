use std::collections::HashMap;

use tracing::debug;

use crate::config::Config;
use crate::names::env_name;
use crate::store::FieldDef;
use crate::types::Value;

/// Populate `config` from environment variables matching declared fields.
///
/// Each field is looked up under its mangled name (see [`env_name`]). Missing
/// variables leave any existing value untouched; a variable that is present
/// but empty is still a hit.
///
/// | Flags | Value |
/// |-------|-------|
/// | none / `Required` | the raw string |
/// | `Flag` | `true` if non-empty |
/// | `Multi` | single-element list |
/// | `Flag + Multi` | `1` if non-empty, else `0` |
///
/// Takes a map so tests can pass synthetic data instead of `std::env::vars()`.
pub fn apply<'a>(
    defs: impl IntoIterator<Item = &'a FieldDef>,
    env: &HashMap<String, String>,
    config: &mut Config,
) {
    for def in defs {
        let key = env_name(&def.name);
        let Some(raw) = env.get(&key) else {
            continue;
        };
        debug!(field = %def.name, var = %key, "field set from environment");
        config.set(&def.name, env_value(def, raw));
    }
}

fn env_value(def: &FieldDef, raw: &str) -> Value {
    let flags = def.flags;
    if flags.is_counter() {
        Value::Count(u64::from(!raw.is_empty()))
    } else if flags.is_flag() {
        Value::Bool(!raw.is_empty())
    } else if flags.is_multi() {
        Value::List(vec![raw.to_string()])
    } else {
        Value::String(raw.to_string())
    }
}
