//! Required-field enforcement, run after both read passes.
//!
//! A `Required` field that is still unset gets a default when its shape has a
//! natural "off" value (`false` for `Flag`, `0` for `Flag + Multi`). Any other
//! unset required field is an error.

use tracing::debug;

use crate::config::Config;
use crate::error::EnvoptError;
use crate::store::FieldDef;
use crate::types::Value;

/// Check required fields in declaration order, stopping at the first one
/// that cannot be defaulted.
pub fn apply<'a>(
    defs: impl IntoIterator<Item = &'a FieldDef>,
    config: &mut Config,
) -> Result<(), EnvoptError> {
    for def in defs {
        if !def.flags.is_required() || config.contains(&def.name) {
            continue;
        }

        let default = if def.flags.is_counter() {
            Value::Count(0)
        } else if def.flags.is_flag() {
            Value::Bool(false)
        } else {
            return Err(EnvoptError::missing_required(&def.name));
        };

        debug!(field = %def.name, ?default, "required field defaulted");
        config.set(&def.name, default);
    }
    Ok(())
}
