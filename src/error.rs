use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[cfg_attr(feature = "rich-errors", derive(miette::Diagnostic))]
pub enum EnvoptError {
    #[error("Missing required value for '{field}' (set {env} or pass {opt})")]
    #[cfg_attr(
        feature = "rich-errors",
        diagnostic(
            code(envopt::missing_required),
            help("export {env}=<value> or pass {opt} <value>")
        )
    )]
    MissingRequired {
        field: String,
        env: String,
        opt: String,
    },

    #[error("Invalid value for '{key}': {reason}")]
    #[cfg_attr(feature = "rich-errors", diagnostic(code(envopt::invalid_value)))]
    InvalidValue { key: String, reason: String },
}

impl EnvoptError {
    /// Build a `MissingRequired` error, deriving the mangled names from `field`.
    pub fn missing_required(field: &str) -> Self {
        EnvoptError::MissingRequired {
            field: field.to_string(),
            env: crate::names::env_name(field),
            opt: crate::names::opt_name(field),
        }
    }
}
