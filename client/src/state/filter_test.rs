use super::*;
use crate::catalog::SHOPS;

fn ids(shops: &[&ShopRecord]) -> Vec<&'static str> {
    shops.iter().map(|s| s.id).collect()
}

fn state(query: &str, pet_friendly_only: bool) -> FilterState {
    FilterState { query: query.to_owned(), pet_friendly_only }
}

// =============================================================
// FilterState defaults
// =============================================================

#[test]
fn filter_state_default_is_empty_query_pet_friendly_only() {
    let s = FilterState::default();
    assert!(s.query.is_empty());
    assert!(s.pet_friendly_only);
}

// =============================================================
// Pet-friendly predicate
// =============================================================

#[test]
fn pet_predicate_accepts_dogs_and_cats_policy() {
    assert!(is_pet_friendly("Dogs and cats welcome indoors"));
}

#[test]
fn pet_predicate_is_case_insensitive() {
    assert!(is_pet_friendly("PETS WELCOME"));
    assert!(is_pet_friendly("Big DOG patio"));
}

#[test]
fn pet_predicate_rejects_policy_without_keywords() {
    assert!(!is_pet_friendly("Pet-friendly indoors"));
    assert!(!is_pet_friendly("Service animals only"));
}

#[test]
fn pet_predicate_keeps_loose_negative_match() {
    assert!(is_pet_friendly("No pets allowed"));
}

#[test]
fn default_state_hides_only_shop_without_keyword() {
    let visible = visible_shops(SHOPS, &FilterState::default());
    assert_eq!(ids(&visible), vec!["a1", "a2", "a3", "a5", "a6"]);
}

// =============================================================
// Query predicate
// =============================================================

#[test]
fn query_matches_name_case_insensitively() {
    let visible = visible_shops(SHOPS, &state("purr", true));
    assert_eq!(ids(&visible), vec!["a1"]);
    assert_eq!(visible[0].name, "The Purr & Pour");
}

#[test]
fn query_matches_address() {
    let visible = visible_shops(SHOPS, &state("ocean", true));
    assert_eq!(ids(&visible), vec!["a3"]);
    assert_eq!(visible[0].address, "3 Ocean Dr");
}

#[test]
fn query_without_match_yields_empty_list() {
    let visible = visible_shops(SHOPS, &state("zzz", false));
    assert!(visible.is_empty());
}

#[test]
fn query_matching_only_excluded_shop_is_empty_when_pet_filter_on() {
    assert!(visible_shops(SHOPS, &state("whisk", true)).is_empty());
    assert_eq!(ids(&visible_shops(SHOPS, &state("whisk", false))), vec!["a4"]);
}

#[test]
fn empty_query_without_pet_filter_returns_full_catalog_in_order() {
    let visible = visible_shops(SHOPS, &state("", false));
    assert_eq!(visible.len(), 6);
    assert_eq!(ids(&visible), vec!["a1", "a2", "a3", "a4", "a5", "a6"]);
}

#[test]
fn shared_substring_preserves_catalog_order() {
    // Only "12 Maple St" and "9 Harbor St" contain "st".
    let visible = visible_shops(SHOPS, &state("St", false));
    assert_eq!(ids(&visible), vec!["a2", "a6"]);
}

#[test]
fn filtering_is_deterministic() {
    let s = state("a", true);
    assert_eq!(visible_shops(SHOPS, &s), visible_shops(SHOPS, &s));
}

#[test]
fn admits_requires_both_predicates() {
    let a4 = &SHOPS[3];
    assert!(!state("", true).admits(a4));
    assert!(state("cedar", false).admits(a4));
    assert!(!state("ocean", false).admits(a4));
}
