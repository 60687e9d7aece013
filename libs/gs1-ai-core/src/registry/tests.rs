use super::*;

#[test]
fn exact_lookup_finds_gtin() {
    let def = lookup_exact("01").expect("01 must be registered");
    assert_eq!(def.title, "GTIN");
    assert_eq!(def.components[0].min, 14);
    assert_eq!(def.components[0].max, 14);
}

#[test]
fn exact_lookup_misses_unknown_ai() {
    assert!(lookup_exact("77").is_none());
}

#[test]
fn prefix_lookup_prefers_longest_match() {
    // "8003" (GRAI) is a registered four-digit AI; its two-digit prefix
    // "80" is not itself registered.
    let def = lookup_prefix("8003212345678901231").expect("8003 must resolve");
    assert_eq!(def.ai, "8003");
}

#[test]
fn prefix_lookup_resolves_three_digit_ai() {
    let def = lookup_prefix("2531234567890").expect("253 must resolve");
    assert_eq!(def.ai, "253");
}

#[test]
fn registry_keys_of_different_lengths_never_overlap() {
    for def in all() {
        let shorter_keys_that_would_shadow = all()
            .filter(|other| other.ai.len() < def.ai.len() && def.ai.starts_with(other.ai));
        assert_eq!(
            shorter_keys_that_would_shadow.count(),
            0,
            "AI {} is shadowed by a shorter registered prefix",
            def.ai
        );
    }
}

#[test]
fn fixed_prefix_set_matches_known_fixed_length_ais() {
    assert!(has_fixed_prefix("01"));
    assert!(has_fixed_prefix("414"));
    assert!(!has_fixed_prefix("21"));
    assert!(!has_fixed_prefix("10"));
}

#[test]
fn dl_primary_key_set_contains_gtin_and_grai_not_batch() {
    assert!(is_dl_primary_key("01"));
    assert!(is_dl_primary_key("8003"));
    assert!(!is_dl_primary_key("10"));
}

#[test]
fn every_entry_terminates_its_component_list_with_none() {
    for def in all() {
        let used = def
            .components
            .iter()
            .take_while(|c| c.cset != crate::cset::Cset::None)
            .count();
        assert!(used >= 1, "AI {} has no components", def.ai);
        for c in &def.components[used..] {
            assert_eq!(c.cset, crate::cset::Cset::None);
        }
    }
}

#[test]
fn registry_has_no_duplicate_keys() {
    let mut keys: Vec<&str> = all().map(|d| d.ai).collect();
    keys.sort_unstable();
    let mut deduped = keys.clone();
    deduped.dedup();
    assert_eq!(keys.len(), deduped.len(), "duplicate AI key in registry");
}

#[test]
fn len_matches_all_iterator() {
    assert_eq!(len(), all().count());
}
