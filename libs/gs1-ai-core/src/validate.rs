//! Component Validator: walks an [`AiDefinition`]'s ordered components
//! against a value substring.

use crate::cset::Cset;
use crate::error::{self, Result};
use crate::registry::AiDefinition;

/// Applies `def`'s ordered component rules to `value`, returning the
/// number of bytes consumed. Stops at the first component with
/// `cset == Cset::None`; does not look past that sentinel. Does not
/// consume any trailing FNC1 — the caller handles that.
pub fn validate(def: &AiDefinition, value: &[u8]) -> Result<usize> {
    let mut consumed = 0usize;
    for component in &def.components {
        if component.cset == Cset::None {
            break;
        }

        let remaining = &value[consumed..];
        let take = (component.max as usize).min(remaining.len());
        let slice = &remaining[..take];

        if slice.len() < component.min as usize {
            return error::ValueTooShortSnafu { ai: def.ai }.fail();
        }

        match component.cset {
            Cset::Numeric => crate::linters::numeric_only(def.ai, slice)?,
            Cset::Cset82 | Cset::CsetC => crate::linters::cset82_only(def.ai, slice)?,
            Cset::None => unreachable!("handled above"),
        }

        for linter in component.linters {
            linter.check(def.ai, slice)?;
        }

        consumed += slice.len();
    }
    Ok(consumed)
}
