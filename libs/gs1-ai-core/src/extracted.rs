//! One entry of the extracted-AI index built by the element-string
//! processor.

use crate::registry::AiDefinition;

/// A single parsed AI occurrence: which [`AiDefinition`] it matched and
/// where its value lives within the owning [`Context`](crate::Context)'s
/// element-string buffer.
#[derive(Debug, Clone, Copy)]
pub struct ExtractedAi {
    /// The registry entry this occurrence matched.
    pub definition: &'static AiDefinition,
    /// Byte offset of the value's first byte within the element string.
    pub value_start: usize,
    /// Number of bytes in the value.
    pub length: usize,
}

impl ExtractedAi {
    /// The AI key, e.g. `"01"`.
    pub fn ai(&self) -> &'static str {
        self.definition.ai
    }

    /// Short display title, e.g. `"GTIN"`.
    pub fn title(&self) -> &'static str {
        self.definition.title
    }

    /// `true` if this AI wants a trailing FNC1 when another AI follows it.
    pub fn fnc1_required(&self) -> bool {
        self.definition.fnc1_required
    }

    /// Slices this entry's value out of `element_string`, which must be
    /// the same buffer it was extracted from.
    pub fn value<'buf>(&self, element_string: &'buf str) -> &'buf str {
        &element_string[self.value_start..self.value_start + self.length]
    }
}
