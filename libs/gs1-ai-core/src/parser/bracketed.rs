//! Bracketed-AI Parser: `(ai)value(ai)value…` → canonical element string.
//!
//! This module only builds the canonical string and performs a coarse
//! length pre-check — the full per-component linting happens once,
//! uniformly, when the caller hands the result to
//! [`crate::parser::element_string::process`], which is also where an
//! unrecognised AI gets its synthetic "unknown AI" definition built (once
//! its value's length is known) when `permit_unknown_ais` is set.

use crate::cset::Cset;
use crate::error::{self, Result};
use crate::linters::Linter;
use crate::registry::{self, AiDefinition};

/// Parses `input` into the canonical element string.
pub fn parse(input: &str, permit_unknown_ais: bool) -> Result<String> {
    parse_impl(input, permit_unknown_ais, false)
}

/// As [`parse`], but for any AI whose trailing component carries
/// [`Linter::Mod10Check`], overwrites a mismatched check digit instead of
/// leaving it for the Element-String Processor to reject. Backs
/// `Context::set_add_check_digit`.
pub fn parse_with_check_digit_recompute(input: &str, permit_unknown_ais: bool) -> Result<String> {
    parse_impl(input, permit_unknown_ais, true)
}

fn parse_impl(input: &str, permit_unknown_ais: bool, recompute_check_digit: bool) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = String::new();
    let mut fnc1_required = true;
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] != b'(' {
            return error::MissingOpenBracketSnafu.fail();
        }
        let key_start = i + 1;
        let key_end = match bytes[key_start..].iter().position(|&b| b == b')') {
            Some(off) => key_start + off,
            None => return error::UnmatchedBracketSnafu.fail(),
        };
        let ai_key = &input[key_start..key_end];

        let def: Option<&'static AiDefinition> = registry::lookup_exact(ai_key);
        if def.is_none() && !permit_unknown_ais {
            return error::UnrecognisedAiSnafu { ai: ai_key.to_string() }.fail();
        }
        // An unrecognised AI is always folded down to its first two digits
        // here, matching the convention `element_string::process` uses when
        // re-validating this same output: anything beyond those two digits
        // is indistinguishable from value data once it's back in the
        // canonical string, so it is treated as the start of the value
        // rather than silently dropped or mis-labelled on re-parse.
        let (ai_out, key_tail): (&str, &str) = match def {
            Some(d) => (d.ai, ""),
            None => {
                let split = ai_key.len().min(2);
                ai_key.split_at(split)
            }
        };

        if fnc1_required {
            out.push('#');
        }
        out.push_str(ai_out);
        fnc1_required = !registry::has_fixed_prefix(ai_out);

        let mut j = key_end + 1;
        let mut value = Vec::<u8>::new();
        value.extend_from_slice(key_tail.as_bytes());
        while j < bytes.len() {
            if bytes[j] == b'\\' && j + 1 < bytes.len() && bytes[j + 1] == b'(' {
                value.push(b'(');
                j += 2;
            } else if bytes[j] == b'(' {
                break;
            } else {
                value.push(bytes[j]);
                j += 1;
            }
        }

        if value.is_empty() {
            return error::EmptyValueSnafu.fail();
        }

        if recompute_check_digit {
            if let Some(d) = def {
                recompute_check_digit_in_place(d, &mut value);
            }
        }

        if let Some(d) = def {
            let (min_sum, max_sum) = d.value_len_bounds();
            if value.len() < min_sum {
                return error::ValueTooShortSnafu { ai: d.ai }.fail();
            }
            if value.len() > max_sum {
                return error::ValueTooLongSnafu { ai: d.ai }.fail();
            }
        }
        if value.contains(&b'#') {
            return error::StrayFnc1Snafu { ai: ai_out }.fail();
        }

        let value_str = match std::str::from_utf8(&value) {
            Ok(s) => s,
            Err(_) => return error::NonCset82Snafu { ai: ai_out }.fail(),
        };
        out.push_str(value_str);

        if out.len() > crate::MAX_DATA {
            return error::DataTooLongSnafu.fail();
        }

        i = j;
    }

    Ok(out)
}

/// Overwrites the trailing byte of whichever component carries
/// [`Linter::Mod10Check`] with the correct check digit for its preceding
/// digits, walking components left to right the same way
/// [`crate::validate::validate`] does.
fn recompute_check_digit_in_place(def: &AiDefinition, value: &mut [u8]) {
    let mut offset = 0usize;
    for component in &def.components {
        if component.cset == Cset::None {
            break;
        }
        let take = (component.max as usize).min(value.len().saturating_sub(offset));
        if take == 0 {
            break;
        }
        if component.linters.contains(&Linter::Mod10Check) {
            crate::linters::recompute_mod10_check_digit(&mut value[offset..offset + take]);
        }
        offset += take;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fixed_length_ais_need_no_separator() {
        assert_eq!(
            parse("(01)12345678901231(10)12345", false).unwrap(),
            "#01123456789012311012345"
        );
    }

    #[test]
    fn measurement_ai_then_batch_lot() {
        assert_eq!(
            parse("(3100)123456(10)12345", false).unwrap(),
            "#31001234561012345"
        );
    }

    #[test]
    fn two_variable_length_ais_need_a_separator() {
        assert_eq!(
            parse("(10)12345(11)991225", false).unwrap(),
            "#1012345#11991225"
        );
    }

    #[test]
    fn escaped_paren_does_not_terminate_the_value() {
        assert_eq!(
            parse(r"(10)12345\(11)991225", false).unwrap(),
            "#1012345(11)991225"
        );
    }

    #[test]
    fn empty_value_is_rejected() {
        assert!(parse("(10)(11)98765", false).is_err());
    }

    #[test]
    fn fixed_ai_too_long_is_rejected() {
        assert!(parse("(01)123456789012312(10)12345", false).is_err());
    }

    #[test]
    fn unknown_ai_is_rejected_by_default() {
        assert!(parse("(76)hello", false).is_err());
    }

    #[test]
    fn unknown_ai_is_accepted_when_permitted() {
        let out = parse("(76)hello", true).unwrap();
        assert_eq!(out, "#76hello");
    }

    #[test]
    fn unknown_four_digit_ai_folds_the_trailing_digits_into_the_value() {
        // The written bytes are unchanged either way ("9999" + "hello"); this
        // pins that the *key* recorded by element_string::process for this
        // output is "99", not "9999", so re-parsing the canonical string
        // later agrees with what was written here.
        let out = parse("(9999)hello", true).unwrap();
        assert_eq!(out, "#9999hello");
        let extracted = crate::parser::element_string::process(&out, true).unwrap();
        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].ai(), "99");
        assert_eq!(extracted[0].value(&out), "99hello");
    }

    #[test]
    fn add_check_digit_mode_repairs_a_bad_gtin() {
        let out = parse_with_check_digit_recompute("(01)12345678901234", false).unwrap();
        assert_eq!(out, "#0112345678901231");
    }
}
