//! `0x` prefix helpers.

const PREFIX: &str = "0x";

/// Drop one leading `0x`, so `add_0x(strip_0x(x)) == x` for prefixed input.
pub fn strip_0x(hex: &str) -> &str {
    hex.strip_prefix(PREFIX).unwrap_or(hex)
}

/// Prepend `0x` unless it is already there.
pub fn add_0x(hex: &str) -> String {
    if hex.starts_with(PREFIX) {
        hex.to_string()
    } else {
        format!("{PREFIX}{hex}")
    }
}
