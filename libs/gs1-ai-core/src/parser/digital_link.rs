//! Digital-Link Parser: an http/https GS1 Digital Link URI →
//! canonical element string.
//!
//! The allowed-character set, scheme/host/path/query split, DL-root
//! discovery, and query-parameter handling follow the algorithm below
//! exactly; only the surrounding plumbing (error taxonomy, registry
//! shape) is this crate's own.

use crate::error::{self, Result};
use crate::registry::{self, AiDefinition};

const ALLOWED_URI_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~:/?#[]@!$&'()*+,;=%";

/// Parses an absolute `http(s)://` Digital Link URI into the canonical
/// element string. Non-numeric query keys that do not resolve to a
/// known AI are appended, verbatim, to `ignored_query_params` rather
/// than silently discarded.
pub fn parse(uri: &str, permit_unknown_ais: bool, ignored_query_params: &mut Vec<String>) -> Result<String> {
    if !uri.bytes().all(|b| ALLOWED_URI_CHARS.as_bytes().contains(&b)) {
        return error::IllegalUriCharacterSnafu.fail();
    }

    let rest = if let Some(r) = uri.strip_prefix("https://") {
        r
    } else if let Some(r) = uri.strip_prefix("http://") {
        r
    } else {
        return error::BadUriSchemeSnafu.fail();
    };

    let path_start = rest.find('/').ok_or_else(|| error::MissingHostSnafu.build())?;
    let host = &rest[..path_start];
    if host.is_empty() {
        return error::MissingHostSnafu.fail();
    }
    let after_host = &rest[path_start..];

    let (path_info, query_and_fragment) = match after_host.find('?') {
        Some(off) => (&after_host[..off], &after_host[off + 1..]),
        None => (after_host, ""),
    };
    let query = match query_and_fragment.find('#') {
        Some(off) => &query_and_fragment[..off],
        None => query_and_fragment,
    };

    let segments: Vec<&str> = path_info.split('/').filter(|s| !s.is_empty()).collect();

    let mut candidate_end = segments.len();
    let mut root = None;
    while candidate_end >= 2 {
        let candidate_ai = segments[candidate_end - 2];
        if registry::lookup_exact(candidate_ai).is_some() && registry::is_dl_primary_key(candidate_ai) {
            root = Some(candidate_end - 2);
            break;
        }
        candidate_end -= 2;
    }
    let root = match root {
        Some(r) => r,
        None => return error::NoDlKeyFoundSnafu.fail(),
    };

    let mut out = String::new();
    let mut fnc1_required = true;

    let mut i = root;
    while i + 1 < segments.len() {
        let ai_key = segments[i];
        let raw_value = segments[i + 1];

        match registry::lookup_exact(ai_key) {
            Some(def) => {
                let decoded = crate::parser::percent::decode(def.ai, raw_value, crate::MAX_AI_LEN)?;
                emit_ai(&mut out, &mut fnc1_required, def, decoded)?;
            }
            None if permit_unknown_ais => {
                let (def, decoded) = unknown_ai_and_value(ai_key, raw_value)?;
                emit_ai(&mut out, &mut fnc1_required, def, decoded)?;
            }
            None => return error::NotADlPrimaryKeySnafu { ai: ai_key.to_string() }.fail(),
        };
        i += 2;
    }

    for token in query.split('&') {
        if token.is_empty() {
            continue;
        }
        let eq = match token.find('=') {
            Some(off) => off,
            None => continue,
        };
        let key = &token[..eq];
        let value = &token[eq + 1..];
        let key_is_numeric = !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit());

        match registry::lookup_exact(key) {
            Some(def) => {
                let decoded = crate::parser::percent::decode(def.ai, value, crate::MAX_AI_LEN)?;
                emit_ai(&mut out, &mut fnc1_required, def, decoded)?;
            }
            None if key_is_numeric => {
                return error::UnrecognisedNumericQueryKeySnafu { key: key.to_string() }.fail();
            }
            None => ignored_query_params.push(key.to_string()),
        }
    }

    Ok(out)
}

/// Resolves the synthetic definition and decoded value for an unrecognised
/// path-info AI key. The key is folded down to its first two digits, the
/// same convention `element_string::process` uses when re-validating the
/// resulting canonical string; any further digits of the original key are
/// indistinguishable from value data once written out, so they are decoded
/// as a literal prefix of the value rather than dropped.
fn unknown_ai_and_value(ai_key: &str, raw_value: &str) -> Result<(&'static AiDefinition, Vec<u8>)> {
    let split = ai_key.len().min(2);
    let (key2, tail) = ai_key.split_at(split);
    let mut decoded = crate::parser::percent::decode(key2, raw_value, crate::MAX_AI_LEN)?;
    if !tail.is_empty() {
        let mut full = tail.as_bytes().to_vec();
        full.append(&mut decoded);
        decoded = full;
    }
    let def = registry::unknown(key2, decoded.len().min(u8::MAX as usize) as u8);
    Ok((def, decoded))
}

fn emit_ai(out: &mut String, fnc1_required: &mut bool, def: &'static AiDefinition, mut decoded: Vec<u8>) -> Result<()> {
    if def.ai == "01" {
        match decoded.len() {
            8 | 12 | 13 => {
                let mut padded = vec![b'0'; 14 - decoded.len()];
                padded.extend_from_slice(&decoded);
                decoded = padded;
            }
            14 => {}
            n if n > 14 => return error::ValueTooLongSnafu { ai: def.ai }.fail(),
            _ => return error::ValueTooShortSnafu { ai: def.ai }.fail(),
        }
    }

    let (min_sum, max_sum) = def.value_len_bounds();
    if decoded.len() < min_sum {
        return error::ValueTooShortSnafu { ai: def.ai }.fail();
    }
    if decoded.len() > max_sum {
        return error::ValueTooLongSnafu { ai: def.ai }.fail();
    }
    if decoded.contains(&b'#') {
        return error::StrayFnc1Snafu { ai: def.ai }.fail();
    }

    let value_str = match std::str::from_utf8(&decoded) {
        Ok(s) => s,
        Err(_) => return error::NonCset82Snafu { ai: def.ai }.fail(),
    };

    if *fnc1_required {
        out.push('#');
    }
    out.push_str(def.ai);
    out.push_str(value_str);
    *fnc1_required = !registry::has_fixed_prefix(def.ai);

    if out.len() > crate::MAX_DATA {
        return error::DataTooLongSnafu.fail();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(uri: &str) -> String {
        let mut ignored = Vec::new();
        parse(uri, false, &mut ignored).unwrap()
    }

    #[test]
    fn single_gtin_key() {
        assert_eq!(parse_ok("https://id.gs1.org/01/9520123456788"), "#0109520123456788");
    }

    #[test]
    fn gtin_key_with_batch_and_query_param() {
        assert_eq!(
            parse_ok("https://id.gs1.org/01/09520123456788/10/ABC1/21/12345?17=180426"),
            "#010952012345678810ABC1#2112345#17180426"
        );
    }

    #[test]
    fn non_root_key_then_numeric_query_key_resolving_to_gtin() {
        assert_eq!(
            parse_ok("https://example.com/8004/9520614141234567?01=9520123456788"),
            "#80049520614141234567#0109520123456788"
        );
    }

    #[test]
    fn no_dl_key_found_fails() {
        let mut ignored = Vec::new();
        assert!(parse("https://example.com/77/hello", false, &mut ignored).is_err());
    }

    #[test]
    fn unrecognised_numeric_query_key_fails() {
        let mut ignored = Vec::new();
        assert!(parse(
            "https://a/01/12312312312333?99=ABC&999=faux",
            false,
            &mut ignored
        )
        .is_err());
    }

    #[test]
    fn unrecognised_non_numeric_query_key_is_ignored_and_recorded() {
        let mut ignored = Vec::new();
        let out = parse("https://id.gs1.org/01/9520123456788?linkType=all", false, &mut ignored).unwrap();
        assert_eq!(out, "#0109520123456788");
        assert_eq!(ignored, vec!["linkType".to_string()]);
    }

    #[test]
    fn gtin_253_tail_over_seventeen_chars_fails() {
        let mut ignored = Vec::new();
        assert!(parse(
            "https://id.gs1.org/253/1231231231232TEST56789012345678",
            false,
            &mut ignored
        )
        .is_err());
    }

    #[test]
    fn bad_scheme_fails() {
        let mut ignored = Vec::new();
        assert!(parse("ftp://id.gs1.org/01/9520123456788", false, &mut ignored).is_err());
    }

    #[test]
    fn gtin_longer_than_fourteen_digits_is_reported_as_too_long_not_too_short() {
        let mut ignored = Vec::new();
        let err = parse(
            "https://id.gs1.org/01/123456789012345678",
            false,
            &mut ignored,
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::Error::ValueTooLong { ref ai } if ai == "01"));
    }

    #[test]
    fn unknown_four_digit_ai_folds_the_trailing_digits_into_the_value() {
        let mut ignored = Vec::new();
        let out = parse("https://example.com/8004/X/9999/hello", true, &mut ignored).unwrap();
        let extracted = crate::parser::element_string::process(&out, true).unwrap();
        let last = extracted.last().unwrap();
        assert_eq!(last.ai(), "99");
        assert_eq!(last.value(&out), "99hello");
    }
}
