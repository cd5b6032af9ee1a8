//! Case conversion for identifier-like text. Every conversion is a thin wrapper around a single
//! transition-scanning pass that decides where word boundaries fall, so all of them agree on
//! acronyms, digit runs and pre-existing separators.
//! - [`to_snake`]: `snake_case`
//! - [`to_screaming_snake`]: `SCREAMING_SNAKE_CASE`
//! - [`to_kebab`]: `kebab-case`
//! - [`to_screaming_kebab`]: `SCREAMING-KEBAB-CASE`
//! - [`to_delimited`]: words joined by an arbitrary delimiter
//! - [`to_screaming_delimited`]: the underlying converter, with every knob exposed

mod delimited;

pub use delimited::to_screaming_delimited;

/// Converts a string to `snake_case`.
pub fn to_snake(s: &str) -> String {
    to_delimited(s, '_')
}

/// Converts a string to `snake_case`, leaving characters in `ignore` untouched.
///
/// Useful to keep structural separators intact: `to_snake_with_ignore("User.Id", ".")` keeps the
/// dot while still snake-casing each segment.
pub fn to_snake_with_ignore(s: &str, ignore: &str) -> String {
    to_screaming_delimited(s, '_', ignore, false)
}

/// Converts a string to `SCREAMING_SNAKE_CASE`.
pub fn to_screaming_snake(s: &str) -> String {
    to_screaming_delimited(s, '_', "", true)
}

/// Converts a string to `kebab-case`.
pub fn to_kebab(s: &str) -> String {
    to_delimited(s, '-')
}

/// Converts a string to `SCREAMING-KEBAB-CASE`.
pub fn to_screaming_kebab(s: &str) -> String {
    to_screaming_delimited(s, '-', "", true)
}

/// Converts a string to lowercase words joined by `delimiter`
/// (with `delimiter = '.'` this is `delimited.snake.case`).
pub fn to_delimited(s: &str, delimiter: char) -> String {
    to_screaming_delimited(s, delimiter, "", false)
}
