//! Declare configuration fields once, resolve them from environment variables
//! and command-line options.
//!
//! ```ignore
//! let schema = Schema::new()
//!     .field("api url", [Flag::Required])
//!     .field("verbose", [Flag::Flag, Flag::Multi])
//!     .field("include", [Flag::Multi]);
//!
//! let config = schema.resolve_process()?;
//! ```
//!
//! `api url` is read from `API_URL` or `--api-url`, `verbose` counts
//! `--verbose` occurrences, and `include` collects every `--include` value.
//!
//! # Names
//!
//! Every field name has two mangled forms:
//!
//! | Field | Env var | Option |
//! |-------|---------|--------|
//! | `api url` | `API_URL` | `--api-url` |
//! | `log-level` | `LOG_LEVEL` | `--log-level` |
//! | `pool_size` | `POOL_SIZE` | `--pool-size` |
//!
//! See [`env_name`] and [`opt_name`].
//!
//! # Layer precedence
//!
//! ```text
//! Initial config        Schema::resolve_with(.., initial)
//!        ↑ overridden by
//! Environment vars      API_URL=...
//!        ↑ overridden by
//! Options               --api-url ... / --api-url=...
//! ```
//!
//! Layers are sparse: a field missing from a layer keeps the value of the
//! layer below. Plain and `Flag` options replace the value from lower layers,
//! and counters restart on the first option: two `--verbose` flags resolve
//! to `2` regardless of what `VERBOSE` said. `Multi` options append to the
//! list from lower layers (`INCLUDE=a --include b` → `[a, b]`), except for
//! `Multi + Required` fields, which the option pass resets to `[]` first.
//!
//! # Flags
//!
//! | Flags | Env value | Options | Unset & required |
//! |-------|-----------|---------|------------------|
//! | none | string | `--x v`, last wins | error |
//! | [`Flag::Flag`] | non-empty → `true` | `--x` → `true` | `false` |
//! | [`Flag::Multi`] | `[value]` | `--x a --x b` → `[a, b]` | `[]` |
//! | `Flag + Multi` | non-empty → `1` | occurrence count | `0` |
//!
//! [`Flag::Prompt`] is accepted and stored but has no effect on resolution.
//!
//! # Leftover arguments
//!
//! Tokens no field consumed are kept, in order, in [`Config::argv`]. The
//! program name is not special-cased: it is the first leftover.
//!
//! # Error handling
//!
//! Resolution fails only with [`EnvoptError::MissingRequired`], which carries
//! the field name and both mangled names so callers can format their own
//! message. Enable the `rich-errors` feature for `miette` diagnostics.

pub mod error;
pub mod types;

mod args;
#[cfg(feature = "clap")]
mod cli;
mod config;
mod env;
mod names;
mod resolve;
mod schema;
mod store;
mod validate;

#[cfg(test)]
mod fixtures;

pub use args::split_assignments;
pub use config::{ARGV_KEY, Config};
pub use error::EnvoptError;
pub use names::{env_name, opt_name};
pub use schema::Schema;
pub use store::FieldDef;
pub use types::{Flag, FlagSet, Value};
