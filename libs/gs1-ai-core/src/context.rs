//! The mutable per-encoding state (error buffer, element-string buffer,
//! extracted-AI list, and configuration) behind the external interfaces.
//!
//! A [`Context`] is cheap to create and owns no resources beyond its own
//! buffers — there is no `free`/`drop` counterpart to call, unlike the
//! reference engine this mirrors; `Drop` is the natural equivalent.

use tracing::debug;

use crate::error::Error;
use crate::extracted::ExtractedAi;
use crate::parser::{bracketed, digital_link, element_string};

/// Holds one encoding's working state: the canonical element string, its
/// decomposition into [`ExtractedAi`] entries, the last error observed,
/// and a small set of behavioural switches.
///
/// Every `set_*`/`parse_*` method is all-or-nothing: on failure the
/// element-string buffer is emptied, [`Context::has_error`] becomes
/// `true`, and the extracted-AI list from any prior success is left
/// untouched until the next successful call resets it.
#[derive(Debug, Default)]
pub struct Context {
    data_str: String,
    extracted: Vec<ExtractedAi>,
    last_error: Option<Error>,
    dl_ignored_query_params: Vec<String>,
    markup_source: String,

    permit_unknown_ais: bool,
    include_data_titles_in_hri: bool,
    validate_requisite_ais: bool,
    add_check_digit: bool,
}

impl Context {
    /// Creates an empty context with default configuration.
    pub fn new() -> Self {
        Context {
            validate_requisite_ais: true,
            ..Default::default()
        }
    }

    /// When `true`, an AI key the Registry does not recognise is accepted
    /// as a synthetic CSET82 value spanning the rest of its run, instead
    /// of failing. Default `false`.
    pub fn set_permit_unknown_ais(&mut self, value: bool) {
        self.permit_unknown_ais = value;
    }

    pub fn permit_unknown_ais(&self) -> bool {
        self.permit_unknown_ais
    }

    /// When `true`, [`Context::hri`] prefixes each line with the AI's
    /// title. Default `false`.
    pub fn set_include_data_titles_in_hri(&mut self, value: bool) {
        self.include_data_titles_in_hri = value;
    }

    pub fn include_data_titles_in_hri(&self) -> bool {
        self.include_data_titles_in_hri
    }

    /// Cross-AI "requires AI Y" relationships are never enforced by this
    /// crate regardless of this flag's value — it exists only so callers
    /// can observe that the absence of that enforcement is deliberate,
    /// not a bug. Default `true`.
    pub fn set_validate_requisite_ais(&mut self, value: bool) {
        self.validate_requisite_ais = value;
    }

    pub fn validate_requisite_ais(&self) -> bool {
        self.validate_requisite_ais
    }

    /// When `true`, [`Context::set_gs1_data_str`] repairs a mismatched
    /// mod-10 check digit instead of rejecting it. Default `false`.
    pub fn set_add_check_digit(&mut self, value: bool) {
        self.add_check_digit = value;
    }

    pub fn add_check_digit(&self) -> bool {
        self.add_check_digit
    }

    /// Accepts a raw data string. If it begins with `#`, it is treated as
    /// a canonical element string and fully validated; otherwise it is
    /// stored verbatim, for symbology-specific non-AI payloads.
    pub fn set_data_str(&mut self, raw: &str) -> Result<(), &Error> {
        self.reset();
        self.markup_source = raw.to_string();
        if raw.starts_with('#') {
            match element_string::process(raw, self.permit_unknown_ais) {
                Ok(extracted) => {
                    self.data_str = raw.to_string();
                    self.extracted = extracted;
                    Ok(())
                }
                Err(err) => Err(self.fail(err)),
            }
        } else {
            self.data_str = raw.to_string();
            Ok(())
        }
    }

    /// Runs the Bracketed-AI Parser over `bracketed` and, on success,
    /// validates the resulting element string.
    pub fn set_gs1_data_str(&mut self, bracketed: &str) -> Result<(), &Error> {
        self.reset();
        self.markup_source = bracketed.to_string();
        let parsed = if self.add_check_digit {
            bracketed::parse_with_check_digit_recompute(bracketed, self.permit_unknown_ais)
        } else {
            bracketed::parse(bracketed, self.permit_unknown_ais)
        };
        match parsed {
            Ok(element_string) => self.finish_parse(element_string),
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Runs the Digital-Link Parser over `dl_uri` and, on success,
    /// validates the resulting element string.
    pub fn parse_dl_uri(&mut self, dl_uri: &str) -> Result<(), &Error> {
        self.reset();
        self.markup_source = dl_uri.to_string();
        let mut ignored = Vec::new();
        match digital_link::parse(dl_uri, self.permit_unknown_ais, &mut ignored) {
            Ok(element_string) => {
                self.dl_ignored_query_params = ignored;
                self.finish_parse(element_string)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn finish_parse(&mut self, element_string: String) -> Result<(), &Error> {
        self.markup_source = element_string.clone();
        match element_string::process(&element_string, self.permit_unknown_ais) {
            Ok(extracted) => {
                self.data_str = element_string;
                self.extracted = extracted;
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn reset(&mut self) {
        self.data_str.clear();
        self.last_error = None;
        self.dl_ignored_query_params.clear();
    }

    fn fail(&mut self, err: Error) -> &Error {
        self.data_str.clear();
        debug!(error = %err, "GS1 AI/DL parse failed");
        self.last_error = Some(err);
        self.last_error.as_ref().expect("just assigned")
    }

    /// The current canonical element string, or the verbatim payload set
    /// through [`Context::set_data_str`] when it did not start with `#`.
    pub fn get_data_str(&self) -> &str {
        &self.data_str
    }

    /// The ordered list of AIs extracted from the current element string.
    pub fn get_extracted_ais(&self) -> &[ExtractedAi] {
        &self.extracted
    }

    /// `true` if the last `set_*`/`parse_*` call failed.
    pub fn has_error(&self) -> bool {
        self.last_error.is_some()
    }

    /// The last error's human-readable message, or an empty string if
    /// the last call succeeded.
    pub fn err_msg(&self) -> String {
        match &self.last_error {
            Some(err) => err.to_string(),
            None => String::new(),
        }
    }

    /// The markup attempted by the last failing call, with the offending
    /// AI's key and value bracketed by `|`. Returns an empty string if the
    /// last call succeeded or the error names no AI. `markup_source` may
    /// hold a canonical element string (`#ai...`) or, when the failure was
    /// raised by the Bracketed-AI or Digital-Link parser itself before a
    /// canonical string existed, the raw bracketed/DL input; both forms are
    /// searched for the offending AI.
    pub fn err_markup(&self) -> String {
        let ai = match self.last_error.as_ref().and_then(Error::ai) {
            Some(ai) => ai,
            None => return String::new(),
        };

        let source = &self.markup_source;
        let canonical_needle = format!("#{ai}");
        if let Some(pos) = source.find(&canonical_needle) {
            let ai_start = pos + 1;
            let value_start = ai_start + ai.len();
            let value_end = source[value_start..].find('#').map(|o| value_start + o).unwrap_or(source.len());
            return format!("{}|{}|{}", &source[..ai_start], &source[ai_start..value_end], &source[value_end..]);
        }

        let bracketed_needle = format!("({ai})");
        if let Some(pos) = source.find(&bracketed_needle) {
            let ai_start = pos;
            let value_start = pos + bracketed_needle.len();
            let value_end = source[value_start..].find('(').map(|o| value_start + o).unwrap_or(source.len());
            return format!(
                "{}|{}|{}",
                &source[..ai_start],
                &source[ai_start..value_end],
                &source[value_end..]
            );
        }

        source.clone()
    }

    /// Non-numeric Digital Link query keys that did not resolve to a
    /// known AI and were therefore skipped, populated only by
    /// [`Context::parse_dl_uri`].
    pub fn dl_ignored_query_params(&self) -> &[String] {
        &self.dl_ignored_query_params
    }

    /// Renders the current extracted-AI list as human-readable
    /// interpretation lines, one per AI.
    pub fn hri(&self) -> Vec<String> {
        crate::hri::lines(&self.data_str, &self.extracted, self.include_data_titles_in_hri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn set_gs1_data_str_round_trips_through_element_string() {
        let mut ctx = Context::new();
        ctx.set_gs1_data_str("(01)12345678901231(10)12345").unwrap();
        assert_eq!(ctx.get_data_str(), "#01123456789012311012345");
        assert_eq!(ctx.get_extracted_ais().len(), 2);
        assert!(!ctx.has_error());
    }

    #[traced_test]
    #[test]
    fn failure_clears_the_buffer_and_sets_the_error() {
        let mut ctx = Context::new();
        assert!(ctx.set_gs1_data_str("(10)(11)98765").is_err());
        assert!(ctx.has_error());
        assert_eq!(ctx.get_data_str(), "");
        assert!(!ctx.err_msg().is_empty());
        assert!(logs_contain("GS1 AI/DL parse failed"));
    }

    #[test]
    fn set_data_str_accepts_a_non_ai_payload_verbatim() {
        let mut ctx = Context::new();
        ctx.set_data_str("raw-symbology-payload").unwrap();
        assert_eq!(ctx.get_data_str(), "raw-symbology-payload");
        assert!(ctx.get_extracted_ais().is_empty());
    }

    #[test]
    fn parse_dl_uri_records_ignored_query_params() {
        let mut ctx = Context::new();
        ctx.parse_dl_uri("https://id.gs1.org/01/9520123456788?linkType=all").unwrap();
        assert_eq!(ctx.dl_ignored_query_params(), &["linkType".to_string()]);
    }

    #[test]
    fn permit_unknown_ais_allows_otherwise_rejected_input() {
        let mut ctx = Context::new();
        ctx.set_permit_unknown_ais(true);
        ctx.set_gs1_data_str("(76)hello").unwrap();
        assert_eq!(ctx.get_extracted_ais().len(), 1);
    }

    #[test]
    fn err_markup_brackets_the_offending_ai() {
        let mut ctx = Context::new();
        assert!(ctx.set_data_str("#0112345678901234").is_err());
        assert_eq!(ctx.err_markup(), "#|0112345678901234|");
    }

    #[test]
    fn err_markup_brackets_a_bracketed_source_rejected_before_any_canonical_string_exists() {
        let mut ctx = Context::new();
        assert!(ctx.set_gs1_data_str("(76)hello").is_err());
        assert_eq!(ctx.err_markup(), "|(76)hello|");
    }

    #[test]
    fn add_check_digit_repairs_a_bad_gtin_before_validation() {
        let mut ctx = Context::new();
        ctx.set_add_check_digit(true);
        ctx.set_gs1_data_str("(01)12345678901234").unwrap();
        assert!(!ctx.has_error());
        assert_eq!(ctx.get_extracted_ais()[0].value(ctx.get_data_str()), "12345678901231");
    }
}
