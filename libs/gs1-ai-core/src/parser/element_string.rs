//! Element-String Processor: the single validator and extracted-AI
//! producer every ingester ultimately feeds through.
//!
//! Input: canonical `#ai1val1[#]ai2val2…` string.

use crate::error::{self, Result};
use crate::extracted::ExtractedAi;
use crate::registry::{self, AiDefinition};

/// Validates `data` and returns its ordered extracted-AI list.
///
/// `data` must begin with `#`. Each AI key is resolved by prefix match;
/// its value runs to the next `#` or end of string, and the registered
/// [`crate::validate::validate`] determines how many of those bytes the
/// AI actually consumes — the remainder, if any, belongs to the AI that
/// follows with no separator (a fixed-length AI trailing a
/// variable-length one). When `permit_unknown_ais` is set, an
/// unresolvable key falls back to a synthetic definition keyed on its
/// first two digits, spanning the rest of the run.
pub fn process(data: &str, permit_unknown_ais: bool) -> Result<Vec<ExtractedAi>> {
    let rest = data.strip_prefix('#').ok_or_else(|| error::MissingLeadingFnc1Snafu.build())?;
    if rest.is_empty() {
        return error::EmptyAiDataSnafu.fail();
    }

    let mut extracted = Vec::new();
    let base = data.len() - rest.len();
    let mut pos = base;

    while pos < data.len() {
        let remaining = &data[pos..];
        let key_len_hint = remaining.find('#').unwrap_or(remaining.len());
        let candidate = &remaining[..key_len_hint];

        let def: &'static AiDefinition = match registry::lookup_prefix(candidate) {
            Some(d) => d,
            None if permit_unknown_ais && candidate.len() >= 2 => {
                registry::unknown(&candidate[..2], 0)
            }
            None => return error::UnrecognisedAiSnafu { ai: candidate.to_string() }.fail(),
        };

        pos += def.ai.len();
        if pos > data.len() {
            return error::UnrecognisedAiSnafu { ai: def.ai.to_string() }.fail();
        }

        let value_run_end = data[pos..].find('#').map(|off| pos + off).unwrap_or(data.len());
        let value_run = &data[pos..value_run_end];

        let def = if def.title == "UNKNOWN" {
            registry::unknown(def.ai, value_run.len().min(u8::MAX as usize) as u8)
        } else {
            def
        };

        let consumed = crate::validate::validate(def, value_run.as_bytes())?;
        if consumed == 0 {
            return error::EmptyValueSnafu.fail();
        }

        if extracted.len() >= crate::MAX_AIS {
            return error::TooManyAisSnafu.fail();
        }
        extracted.push(ExtractedAi {
            definition: def,
            value_start: pos,
            length: consumed,
        });

        pos += consumed;

        if def.fnc1_required && pos < data.len() && data.as_bytes()[pos] != b'#' {
            return error::ValueTooLongSnafu { ai: def.ai }.fail();
        }

        if pos < data.len() && data.as_bytes()[pos] == b'#' {
            pos += 1;
        }
    }

    Ok(extracted)
}
