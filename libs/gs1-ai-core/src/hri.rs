//! Human-readable interpretation (HRI) line formatting over an
//! already-extracted AI list.
//!
//! Additive formatting only: it adds no parsing surface of its own and
//! never changes which AIs were extracted.

use crate::extracted::ExtractedAi;

/// Renders one line per entry in `extracted`: `"(ai) value"`, or
/// `"TITLE (ai) value"` when `include_titles` is set.
pub fn lines(element_string: &str, extracted: &[ExtractedAi], include_titles: bool) -> Vec<String> {
    extracted
        .iter()
        .map(|ai| {
            let value = ai.value(element_string);
            if include_titles {
                format!("{} ({}) {}", ai.title(), ai.ai(), value)
            } else {
                format!("({}) {}", ai.ai(), value)
            }
        })
        .collect()
}
