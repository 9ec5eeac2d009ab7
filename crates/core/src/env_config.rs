//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and returns `default` silently.
/// A set but unparsable value logs a warning before falling back.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %raw,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}
