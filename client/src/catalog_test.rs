use super::*;

use std::collections::HashSet;

#[test]
fn catalog_has_six_shops_in_fixed_order() {
    let ids: Vec<&str> = SHOPS.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3", "a4", "a5", "a6"]);
}

#[test]
fn catalog_ids_are_unique() {
    let ids: HashSet<&str> = SHOPS.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), SHOPS.len());
}

#[test]
fn catalog_ratings_and_distances_in_range() {
    for shop in SHOPS {
        assert!((0.0..=5.0).contains(&shop.rating), "{} rating out of range", shop.id);
        assert!(shop.distance_km >= 0.0, "{} distance negative", shop.id);
    }
}

#[test]
fn rating_label_uses_one_decimal_and_star() {
    assert_eq!(SHOPS[0].rating_label(), "4.8 ★");
    let whole = ShopRecord { rating: 5.0, ..SHOPS[0].clone() };
    assert_eq!(whole.rating_label(), "5.0 ★");
}

#[test]
fn location_label_joins_distance_and_address() {
    assert_eq!(SHOPS[0].location_label(), "0.9 km • 45 Willow Ave");
    assert_eq!(SHOPS[4].location_label(), "3.2 km • 22 Parkside");
}
