//! Clap adapter for envopt.
//!
//! This module is the **optional integration layer** between envopt's
//! resolution core and the [clap](https://docs.rs/clap) CLI toolkit. It is
//! compiled only when the `clap` Cargo feature is enabled (on by default).
//!
//! Resolution never goes through clap. The adapter only mirrors a [`Schema`]
//! as a runtime [`clap::Command`] so an application can render `--help` and
//! usage text that stays in sync with its declared fields.

use clap::{Arg, ArgAction, Command};

use crate::names::{env_name, opt_name};
use crate::schema::Schema;
use crate::store::FieldDef;

impl Schema {
    /// Build a clap command with one long option per declared field.
    ///
    /// Options are never marked required in clap: a required field may still
    /// be satisfied from the environment or an initial config.
    pub fn command(&self, name: impl Into<String>) -> Command {
        let name: String = name.into();
        self.iter().fold(Command::new(name), |cmd, def| cmd.arg(field_arg(def)))
    }
}

fn field_arg(def: &FieldDef) -> Arg {
    let long = opt_name(&def.name).trim_start_matches('-').to_string();
    let flags = def.flags;

    let action = if flags.is_counter() {
        ArgAction::Count
    } else if flags.is_flag() {
        ArgAction::SetTrue
    } else if flags.is_multi() {
        ArgAction::Append
    } else {
        ArgAction::Set
    };

    let mut help = format!("[env: {}]", env_name(&def.name));
    if flags.is_required() {
        help.push_str(" [required]");
    }

    let arg = Arg::new(def.name.clone())
        .long(long)
        .action(action)
        .help(help);

    if flags.is_flag() {
        arg
    } else {
        arg.value_name("VALUE")
    }
}
