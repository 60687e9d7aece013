//! AI lookup: resolves an AI key string, either by its exact known
//! length or — when the length isn't known yet, such as while scanning
//! a raw element string — by prefix match.

use super::table::TABLE;
use super::AiDefinition;

/// Exact-match lookup: `key` must equal a registered AI's full string.
pub fn lookup_exact(key: &str) -> Option<&'static AiDefinition> {
    TABLE.iter().find(|def| def.ai == key)
}

/// Prefix-match lookup: finds the registered AI whose key is a prefix of
/// `buffer`. Registry keys of different lengths never overlap in the
/// prefix sense (e.g. `"37"` is unregistered even though `"3710"` is
/// registered), so trying the longest admissible AI length first and
/// falling back to shorter ones is deterministic.
pub fn lookup_prefix(buffer: &str) -> Option<&'static AiDefinition> {
    let max_len = buffer.len().min(4);
    for len in (2..=max_len).rev() {
        if let Some(def) = lookup_exact(&buffer[..len]) {
            return Some(def);
        }
    }
    None
}
