//! Name mangling: field name → environment variable / CLI option.

/// Environment variable form of a field name.
///
/// Uppercased, with every space or hyphen replaced by `_`:
/// `"simple value"` → `SIMPLE_VALUE`, `"log-level"` → `LOG_LEVEL`.
pub fn env_name(field: &str) -> String {
    field
        .to_uppercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// CLI option form of a field name.
///
/// Lowercased, with every space or underscore replaced by `-`, prefixed with
/// `--`: `"simple value"` → `--simple-value`, `"LOG_LEVEL"` → `--log-level`.
pub fn opt_name(field: &str) -> String {
    let body: String = field
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect();
    format!("--{body}")
}
