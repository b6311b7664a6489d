//! # envopt demo application
//!
//! A sample CLI tool that showcases how to declare and resolve fields with
//! [envopt](https://docs.rs/envopt). It exists purely to demonstrate and
//! manually verify envopt's behavior.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example envopt_demo -- --api-url http://localhost
//! cargo run --example envopt_demo -- --help
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                                     |
//! |----------------------|------------------------------------------------------------------------|
//! | Required field       | `cargo run --example envopt_demo` (fails: no `API_URL`)                |
//! | Env var              | `API_URL=http://x cargo run --example envopt_demo`                     |
//! | Option overrides env | `API_URL=http://x cargo run --example envopt_demo -- --api-url=http://y` |
//! | Counter              | `... -- --api-url x --verbose --verbose`                               |
//! | Repeated values      | `... -- --api-url x --include a --include=b`                           |
//! | Leftovers            | `... -- --api-url x some extra args`                                   |
//! | Help from schema     | `cargo run --example envopt_demo -- --help`                            |

use envopt::{Config, Flag, Schema};

fn schema() -> Schema {
    Schema::new()
        .field("api url", [Flag::Required])
        .field("verbose", [Flag::Flag, Flag::Multi])
        .field("dry run", [Flag::Flag, Flag::Required])
        .field("include", [Flag::Multi])
        .field("color", [Flag::Flag])
}

fn print_config(config: &Config) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to render config: {e}"),
    }
}

fn main() {
    let schema = schema();

    if std::env::args().skip(1).any(|a| a == "--help" || a == "-h") {
        let mut cmd = schema.command("envopt-demo");
        println!("{}", cmd.render_help());
        return;
    }

    let config = schema.resolve_process().unwrap_or_else(|e| {
        eprintln!("Failed to resolve config:\n{e}");
        std::process::exit(1);
    });

    if config.get_count("verbose").unwrap_or(0) > 0 {
        eprintln!("[verbose] leftover arguments: {:?}", config.argv());
    }
    print_config(&config);
}
