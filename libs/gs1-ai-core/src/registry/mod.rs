//! The static AI Registry: an immutable, process-lifetime table of every
//! known GS1 Application Identifier and its component structure.
//!
//! The registry is laid out as plain `const` data rather than built up
//! at runtime, so lookup and validation never pay an initialisation cost
//! and the table is trivially `Sync` without any locking.

mod lookup;
mod table;

#[cfg(test)]
mod tests;

pub use lookup::{lookup_exact, lookup_prefix};

use crate::cset::Cset;
use crate::linters::Linter;

/// One component of an AI's value: a character-set rule, a length bound,
/// and zero or more additional [`Linter`]s checked after the implicit
/// charset rule.
///
/// A component with `cset == Cset::None` is the sentinel marking
/// end-of-components within the fixed-capacity `[AiComponent; 5]` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiComponent {
    pub cset: Cset,
    pub min: u8,
    pub max: u8,
    pub linters: &'static [Linter],
}

impl AiComponent {
    /// Sentinel marking end-of-components.
    pub const NONE: AiComponent = AiComponent {
        cset: Cset::None,
        min: 0,
        max: 0,
        linters: &[],
    };

    /// Fixed-length all-numeric component, no additional linters.
    pub const fn n(len: u8) -> Self {
        AiComponent {
            cset: Cset::Numeric,
            min: len,
            max: len,
            linters: &[],
        }
    }

    /// Variable-length all-numeric component in `[min, max]`.
    pub const fn nr(min: u8, max: u8) -> Self {
        AiComponent {
            cset: Cset::Numeric,
            min,
            max,
            linters: &[],
        }
    }

    /// Fixed-length all-numeric component whose trailing digit is a
    /// mod-10 check digit over the rest.
    pub const fn nchk(len: u8) -> Self {
        AiComponent {
            cset: Cset::Numeric,
            min: len,
            max: len,
            linters: &[Linter::Mod10Check],
        }
    }

    /// Variable-length CSET82 component in `[min, max]`.
    pub const fn x(min: u8, max: u8) -> Self {
        AiComponent {
            cset: Cset::Cset82,
            min,
            max,
            linters: &[],
        }
    }

    /// Fixed-length CSET82 component.
    pub const fn xe(len: u8) -> Self {
        Self::x(len, len)
    }

    /// Variable-length CPID component in `[min, max]` (treated as CSET82
    /// for validation).
    pub const fn cpid(min: u8, max: u8) -> Self {
        AiComponent {
            cset: Cset::CsetC,
            min,
            max,
            linters: &[],
        }
    }
}

/// A complete definition of one Application Identifier: its key, whether
/// it requires a trailing FNC1 when followed by another AI, its ordered
/// component list, and a short human-readable title.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiDefinition {
    /// 2-4 digit AI key, e.g. `"01"` or `"8003"`.
    pub ai: &'static str,
    /// `false` means this AI has a fixed total length (SSCC, GTIN, a
    /// process date, …): consumers must not emit FNC1 after it and must
    /// not require one to terminate it.
    pub fnc1_required: bool,
    /// Up to five ordered components; padded with [`AiComponent::NONE`].
    pub components: [AiComponent; 5],
    /// Short display name, e.g. `"GTIN"`.
    pub title: &'static str,
}

/// The set of two-digit AI prefixes for which no trailing FNC1 is ever
/// emitted in the element string, regardless of whether that exact prefix
/// names a registered AI.
pub const FIXED_PREFIX_SET: &[&str] = &[
    "00", "01", "02", "03", "04", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "31",
    "32", "33", "34", "35", "36", "41",
];

/// The only AIs permitted to root a GS1 Digital Link URI's path info.
pub const DL_PRIMARY_KEY_SET: &[&str] = &[
    "00", "01", "253", "255", "401", "402", "414", "417", "8003", "8004", "8006", "8010", "8013",
    "8017", "8018",
];

/// Returns `true` if `ai`'s two-digit prefix is in [`FIXED_PREFIX_SET`].
pub fn has_fixed_prefix(ai: &str) -> bool {
    ai.len() >= 2 && FIXED_PREFIX_SET.contains(&&ai[..2])
}

/// Returns `true` if `ai` is a member of [`DL_PRIMARY_KEY_SET`].
pub fn is_dl_primary_key(ai: &str) -> bool {
    DL_PRIMARY_KEY_SET.contains(&ai)
}

/// Iterates every registered [`AiDefinition`] in table order.
pub fn all() -> impl Iterator<Item = &'static AiDefinition> {
    table::TABLE.iter()
}

/// Number of registered AI definitions.
pub fn len() -> usize {
    table::TABLE.len()
}

impl AiDefinition {
    /// Sum of each active component's `min` and `max`. Used by the
    /// bracketed and Digital-Link ingesters' coarse length pre-check,
    /// which runs ahead of the full per-component linting the
    /// Element-String Processor performs.
    pub fn value_len_bounds(&self) -> (usize, usize) {
        let mut min_sum = 0usize;
        let mut max_sum = 0usize;
        for c in &self.components {
            if c.cset == Cset::None {
                break;
            }
            min_sum += c.min as usize;
            max_sum += c.max as usize;
        }
        (min_sum, max_sum)
    }
}

/// Builds a synthetic "unknown AI" definition, used only when
/// unrecognised-AI input is explicitly permitted: CSET82, a single
/// component spanning the whole remaining value, and treated as
/// variable-length (an FNC1 separator follows it like any other
/// variable-length AI). The key is leaked to satisfy `AiDefinition::ai`'s
/// `'static` bound — this path is an opt-in escape hatch for
/// otherwise-rejected input, not the steady state, so the leak is bounded
/// by how often callers opt in.
pub fn unknown(ai_key: &str, remaining_len: u8) -> &'static AiDefinition {
    let key: &'static str = Box::leak(ai_key.to_string().into_boxed_str());
    let def = AiDefinition {
        ai: key,
        fnc1_required: true,
        components: [
            AiComponent {
                cset: Cset::Cset82,
                min: remaining_len,
                max: remaining_len,
                linters: &[],
            },
            AiComponent::NONE,
            AiComponent::NONE,
            AiComponent::NONE,
            AiComponent::NONE,
        ],
        title: "UNKNOWN",
    };
    Box::leak(Box::new(def))
}
