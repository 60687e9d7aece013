//! Character-set tags attached to an [`AiComponent`](crate::registry::AiComponent).

/// Character repertoire permitted in one AI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cset {
    /// Sentinel marking end-of-components within a fixed-capacity component
    /// list; never matched against data.
    None,
    /// Digits `0`-`9` only.
    Numeric,
    /// The 82-glyph GS1 AI alphabet (see [`crate::linters::CSET82_ALPHABET`]).
    Cset82,
    /// CPID characters: a numeric-and-uppercase subset of CSET82. Treated
    /// identically to [`Cset::Cset82`] for validation purposes; kept
    /// distinct only so a registry entry can self-document which rule it
    /// actually follows.
    CsetC,
}
