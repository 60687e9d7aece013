//! End-to-end scenarios driving [`gs1_ai_core::Context`] through its
//! public API exactly as an external renderer or HRI formatter would:
//! bracketed AI strings, Digital Link URIs and raw element strings in,
//! canonical element strings and extracted AIs out.

use gs1_ai_core::Context;

fn bracketed_ok(input: &str) -> String {
    let mut ctx = Context::new();
    ctx.set_gs1_data_str(input).expect("expected successful parse");
    ctx.get_data_str().to_string()
}

fn dl_ok(uri: &str) -> String {
    let mut ctx = Context::new();
    ctx.parse_dl_uri(uri).expect("expected successful parse");
    ctx.get_data_str().to_string()
}

#[test]
fn bracketed_two_fixed_length_ais_need_no_separator() {
    assert_eq!(
        bracketed_ok("(01)12345678901231(10)12345"),
        "#01123456789012311012345"
    );
}

#[test]
fn bracketed_measurement_ai_then_batch_lot() {
    assert_eq!(bracketed_ok("(3100)123456(10)12345"), "#31001234561012345");
}

#[test]
fn bracketed_two_variable_length_ais_need_a_separator() {
    assert_eq!(bracketed_ok("(10)12345(11)991225"), "#1012345#11991225");
}

#[test]
fn bracketed_escaped_paren_does_not_terminate_the_value() {
    assert_eq!(
        bracketed_ok(r"(10)12345\(11)991225"),
        "#1012345(11)991225"
    );
}

#[test]
fn dl_single_gtin_key() {
    assert_eq!(
        dl_ok("https://id.gs1.org/01/9520123456788"),
        "#0109520123456788"
    );
}

#[test]
fn dl_path_and_query_combine_in_path_then_query_order() {
    assert_eq!(
        dl_ok("https://id.gs1.org/01/09520123456788/10/ABC1/21/12345?17=180426"),
        "#010952012345678810ABC1#2112345#17180426"
    );
}

#[test]
fn dl_non_primary_root_then_query_key_resolves_to_gtin() {
    assert_eq!(
        dl_ok("https://example.com/8004/9520614141234567?01=9520123456788"),
        "#80049520614141234567#0109520123456788"
    );
}

#[test]
fn bracketed_rejects_empty_value() {
    let mut ctx = Context::new();
    assert!(ctx.set_gs1_data_str("(10)(11)98765").is_err());
    assert!(ctx.has_error());
    assert!(ctx.get_data_str().is_empty());
}

#[test]
fn bracketed_rejects_fixed_ai_value_that_is_too_long() {
    let mut ctx = Context::new();
    assert!(ctx.set_gs1_data_str("(01)123456789012312(10)12345").is_err());
}

#[test]
fn dl_rejects_gdti_tail_over_seventeen_characters() {
    let mut ctx = Context::new();
    assert!(ctx
        .parse_dl_uri("https://id.gs1.org/253/1231231231232TEST56789012345678")
        .is_err());
}

#[test]
fn dl_rejects_unrecognised_numeric_query_key() {
    let mut ctx = Context::new();
    assert!(ctx
        .parse_dl_uri("https://a/01/12312312312333?99=ABC&999=faux")
        .is_err());
}

#[test]
fn element_string_rejects_bad_gtin_check_digit() {
    let mut ctx = Context::new();
    assert!(ctx.set_data_str("#0112345678901234").is_err());
}

#[test]
fn gtin_dl_values_pad_to_fourteen_digits() {
    for (len, raw) in [(8, "95201238"), (12, "952012345672"), (13, "9520123456788")] {
        let mut ctx = Context::new();
        let uri = format!("https://id.gs1.org/01/{raw}");
        ctx.parse_dl_uri(&uri).unwrap_or_else(|e| panic!("len {len} should parse: {e}"));
        let ais = ctx.get_extracted_ais();
        assert_eq!(ais.len(), 1);
        assert_eq!(ais[0].value(ctx.get_data_str()).len(), 14);
    }
}

#[test]
fn extracted_list_round_trips_bracketed_values() {
    let mut ctx = Context::new();
    ctx.set_gs1_data_str("(10)12345(11)991225").expect("parse");
    let data = ctx.get_data_str().to_string();
    let ais = ctx.get_extracted_ais();
    assert_eq!(ais.len(), 2);
    assert_eq!(ais[0].ai(), "10");
    assert_eq!(ais[0].value(&data), "12345");
    assert_eq!(ais[1].ai(), "11");
    assert_eq!(ais[1].value(&data), "991225");
}

#[test]
fn add_check_digit_mode_repairs_a_bad_gtin_end_to_end() {
    let mut ctx = Context::new();
    ctx.set_add_check_digit(true);
    ctx.set_gs1_data_str("(01)12345678901234").expect("repaired parse should succeed");
    assert_eq!(
        ctx.get_extracted_ais()[0].value(ctx.get_data_str()),
        "12345678901231"
    );
}

#[test]
fn hri_lines_prefix_titles_when_requested() {
    let mut ctx = Context::new();
    ctx.set_include_data_titles_in_hri(true);
    ctx.set_gs1_data_str("(01)12345678901231").expect("parse");
    assert_eq!(ctx.hri(), vec!["GTIN (01) 12345678901231".to_string()]);
}
