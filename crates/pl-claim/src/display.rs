//! Short, human-facing renderings of claim fields.

use crate::date::parse_timestamp;

const SIGNATURE_EDGE: usize = 10;
const ADDRESS_EDGE: usize = 4;
const ELLIPSIS: char = '…';

fn truncate_middle(value: &str, edge: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= edge * 2 {
        return value.to_string();
    }
    let head: String = chars[..edge].iter().collect();
    let tail: String = chars[chars.len() - edge..].iter().collect();
    format!("{head}{ELLIPSIS}{tail}")
}

/// `0xd98f53bc…61ffdd91c` style, keeping ten characters each side.
pub fn truncate_signature(signature: &str) -> String {
    truncate_middle(signature, SIGNATURE_EDGE)
}

/// `0x6A…4bcE` style. Addresses of eight characters or fewer are kept whole.
pub fn truncate_address(address: &str) -> String {
    truncate_middle(address, ADDRESS_EDGE)
}

/// `YYYY-MM-DD HH:MM:SS UTC`, or the input unchanged when it is not a time.
pub fn format_utc(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => timestamp.to_string(),
    }
}
