//! Argument pass: consume declared options from an argument list.
//!
//! Operates on an owned working copy of the arguments. Each declared field
//! removes the tokens it claims; whatever survives every field is stored as
//! the config's leftover `argv`. Fields are processed in declaration order,
//! so an earlier field can claim a token (e.g. as its value) before a later
//! field sees it.

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::names::opt_name;
use crate::store::FieldDef;
use crate::types::Value;

/// Split every `--name=value` token into `--name`, `value`.
///
/// Splits on the first `=` only, so the value may itself contain `=`, and
/// `--name=` yields an empty value token. Tokens not starting with `--` pass
/// through untouched.
pub fn split_assignments<S: AsRef<str>>(argv: &[S]) -> Vec<String> {
    let mut out = Vec::with_capacity(argv.len());
    for arg in argv {
        let arg = arg.as_ref();
        match arg.split_once('=') {
            Some((opt, value)) if opt.starts_with("--") => {
                out.push(opt.to_string());
                out.push(value.to_string());
            }
            _ => out.push(arg.to_string()),
        }
    }
    out
}

/// Populate `config` from matching options in `argv` and store the leftovers.
///
/// Per field, every occurrence of its option (see [`opt_name`]) is consumed:
///
/// - `Flag + Multi`: the option alone; counts occurrences, replacing any
///   earlier value on the first one.
/// - `Flag`: the option alone; sets `true`.
/// - `Multi`: option and value; appends to the field's list, creating it on
///   the first value. `Multi + Required` is reset to `[]` before scanning.
/// - otherwise: option and value; the last occurrence wins.
///
/// An option in last position has no value token; it is consumed and ignored.
pub fn apply<'a, S: AsRef<str>>(
    defs: impl IntoIterator<Item = &'a FieldDef>,
    argv: &[S],
    config: &mut Config,
) {
    let mut working = split_assignments(argv);
    trace!(?working, "normalized arguments");

    for def in defs {
        consume_field(def, &mut working, config);
    }

    config.set_argv(working);
}

fn consume_field(def: &FieldDef, working: &mut Vec<String>, config: &mut Config) {
    let opt = opt_name(&def.name);
    let flags = def.flags;

    if flags.is_multi() && flags.is_required() && !flags.is_flag() {
        config.set(&def.name, Value::List(Vec::new()));
    }

    let mut seen = 0usize;
    while let Some(pos) = working.iter().position(|t| *t == opt) {
        working.remove(pos);
        seen += 1;

        if flags.is_counter() {
            if seen == 1 {
                config.set(&def.name, Value::Count(0));
            }
            if let Some(Value::Count(n)) = config.get_mut(&def.name) {
                *n += 1;
            }
            continue;
        }

        if flags.is_flag() {
            config.set(&def.name, Value::Bool(true));
            continue;
        }

        if pos >= working.len() {
            warn!(option = %opt, "option given without a value");
            continue;
        }
        let value = working.remove(pos);

        if flags.is_multi() {
            match config.get_mut(&def.name) {
                Some(Value::List(items)) => items.push(value),
                _ => {
                    config.set(&def.name, Value::List(vec![value]));
                }
            }
        } else {
            config.set(&def.name, Value::String(value));
        }
    }

    if seen > 0 {
        debug!(field = %def.name, option = %opt, occurrences = seen, "field set from arguments");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{argv, schema};

    fn run(args: &[&str]) -> Config {
        let mut config = Config::new();
        apply(&schema().store, &argv(args), &mut config);
        config
    }

    // --- split_assignments ---

    #[test]
    fn split_long_assignment() {
        assert_eq!(split_assignments(&["--a=b"]), ["--a", "b"]);
    }

    #[test]
    fn split_keeps_later_equals_in_value() {
        assert_eq!(split_assignments(&["--url=a=b"]), ["--url", "a=b"]);
    }

    #[test]
    fn split_empty_value() {
        assert_eq!(split_assignments(&["--a="]), ["--a", ""]);
    }

    #[test]
    fn split_leaves_other_tokens() {
        assert_eq!(
            split_assignments(&["node", "x=y", "-a=b", "--flag"]),
            ["node", "x=y", "-a=b", "--flag"]
        );
    }

    // --- apply ---

    #[test]
    fn plain_value_separate_token() {
        let config = run(&["--simple-value", "foo"]);
        assert_eq!(config.get_str("simple value"), Some("foo"));
        assert!(config.argv().is_empty());
    }

    #[test]
    fn plain_value_last_wins() {
        let config = run(&["--simple-value=a", "--simple-value", "b"]);
        assert_eq!(config.get_str("simple value"), Some("b"));
    }

    #[test]
    fn plain_empty_assignment_is_empty_string() {
        let config = run(&["--simple-value="]);
        assert_eq!(config.get_str("simple value"), Some(""));
    }

    #[test]
    fn leftovers_keep_order() {
        let config = run(&["node", "script.js", "--simple-value", "foo", "extra"]);
        assert_eq!(config.argv(), ["node", "script.js", "extra"]);
    }

    #[test]
    fn flag_bare_option() {
        let config = run(&["--flag"]);
        assert_eq!(config.get_bool("flag"), Some(true));
    }

    #[test]
    fn flag_does_not_consume_next_token() {
        let config = run(&["--flag", "positional"]);
        assert_eq!(config.get_bool("flag"), Some(true));
        assert_eq!(config.argv(), ["positional"]);
    }

    #[test]
    fn flag_assignment_leaves_value_behind() {
        let config = run(&["--flag=yes"]);
        assert_eq!(config.get_bool("flag"), Some(true));
        assert_eq!(config.argv(), ["yes"]);
    }

    #[test]
    fn multi_collects_in_order() {
        let config = run(&["--multi=foo", "--multi=bar"]);
        assert_eq!(
            config.get_list("multi"),
            Some(&["foo".to_string(), "bar".to_string()][..])
        );
    }

    #[test]
    fn multi_absent_stays_unset() {
        let config = run(&[]);
        assert!(!config.contains("multi"));
    }

    #[test]
    fn multi_appends_to_earlier_list() {
        let mut config = Config::new().with("multi", vec!["env".to_string()]);
        apply(&schema().store, &argv(&["--multi", "arg"]), &mut config);
        assert_eq!(
            config.get_list("multi"),
            Some(&["env".to_string(), "arg".to_string()][..])
        );
    }

    #[test]
    fn multi_replaces_non_list_value() {
        let mut config = Config::new().with("multi", "scalar");
        apply(&schema().store, &argv(&["--multi=a"]), &mut config);
        assert_eq!(config.get_list("multi"), Some(&["a".to_string()][..]));
    }

    #[test]
    fn counter_counts_occurrences() {
        let config = run(&["--multi-flag", "--multi-flag"]);
        assert_eq!(config.get_count("multi flag"), Some(2));
    }

    #[test]
    fn counter_overrides_earlier_count() {
        let mut config = Config::new().with("multi flag", 1u64);
        apply(&schema().store, &argv(&["--multi-flag"]), &mut config);
        assert_eq!(config.get_count("multi flag"), Some(1));
    }

    #[test]
    fn counter_absent_keeps_earlier_count() {
        let mut config = Config::new().with("multi flag", 1u64);
        apply(&schema().store, &argv(&["other"]), &mut config);
        assert_eq!(config.get_count("multi flag"), Some(1));
    }

    #[test]
    fn counter_absent_stays_unset() {
        let config = run(&[]);
        assert!(!config.contains("multi flag"));
    }

    #[test]
    fn multi_required_absent_is_empty_list() {
        let config = run(&[]);
        assert_eq!(config.get_list("multi required"), Some(&[][..]));
    }

    #[test]
    fn multi_required_empty_assignment() {
        let config = run(&["--multi-required="]);
        assert_eq!(config.get_list("multi required"), Some(&[String::new()][..]));
    }

    #[test]
    fn multi_required_resets_earlier_list_when_absent() {
        let mut config = Config::new().with("multi required", vec!["env".to_string()]);
        apply(&schema().store, &argv(&[]), &mut config);
        assert_eq!(config.get_list("multi required"), Some(&[][..]));
    }

    #[test]
    fn multi_required_option_replaces_earlier_list() {
        let mut config = Config::new().with("multi required", vec!["x".to_string()]);
        apply(&schema().store, &argv(&["--multi-required=y"]), &mut config);
        assert_eq!(config.get_list("multi required"), Some(&["y".to_string()][..]));
    }

    #[test]
    fn trailing_option_without_value_is_dropped() {
        let config = run(&["a", "--simple-value"]);
        assert!(!config.contains("simple value"));
        assert_eq!(config.argv(), ["a"]);
    }

    #[test]
    fn value_token_may_look_like_an_option() {
        let config = run(&["--simple-value", "--flag"]);
        assert_eq!(config.get_str("simple value"), Some("--flag"));
        assert!(!config.contains("flag"));
    }

    #[test]
    fn unknown_options_are_leftovers() {
        let config = run(&["--unknown=1", "--flag"]);
        assert_eq!(config.argv(), ["--unknown", "1"]);
    }

    #[test]
    fn caller_argv_untouched() {
        let input = argv(&["--simple-value=foo", "rest"]);
        let snapshot = input.clone();
        let mut config = Config::new();
        apply(&schema().store, &input, &mut config);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn argv_rewritten_each_pass() {
        let mut config = Config::new();
        apply(&schema().store, &argv(&["one"]), &mut config);
        apply(&schema().store, &argv(&["two"]), &mut config);
        assert_eq!(config.argv(), ["two"]);
    }
}
