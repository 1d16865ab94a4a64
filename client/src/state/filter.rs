//! Search and pet-policy filtering over the shop catalog.
//!
//! The visible list is a pure function of the catalog and a `FilterState`.
//! Nothing else influences which records are shown or their order.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::catalog::ShopRecord;

/// Lowercase substrings that mark a pet policy as pet-friendly.
///
/// This is a loose match: a policy such as "No pets allowed" still passes.
pub const PET_KEYWORDS: [&str; 3] = ["pets", "dog", "cat"];

/// Notice shown in place of the grid when no shop survives the filters.
pub const EMPTY_RESULTS_NOTICE: &str = "No results. Try clearing filters.";

/// User-edited filter inputs for the shop grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub pet_friendly_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { query: String::new(), pet_friendly_only: true }
    }
}

impl FilterState {
    /// Whether `shop` passes both the pet-policy and the query predicate.
    #[must_use]
    pub fn admits(&self, shop: &ShopRecord) -> bool {
        (!self.pet_friendly_only || is_pet_friendly(shop.pet_policy)) && matches_query(shop, &self.query)
    }
}

/// Pet-policy predicate over the lowercased policy text.
#[must_use]
pub fn is_pet_friendly(policy: &str) -> bool {
    let policy = policy.to_lowercase();
    PET_KEYWORDS.iter().any(|kw| policy.contains(kw))
}

/// Case-insensitive substring match against name or address.
/// An empty query matches every shop.
#[must_use]
pub fn matches_query(shop: &ShopRecord, query: &str) -> bool {
    let query = query.to_lowercase();
    shop.name.to_lowercase().contains(&query) || shop.address.to_lowercase().contains(&query)
}

/// Ordered subsequence of `catalog` admitted by `state`.
#[must_use]
pub fn visible_shops<'a>(catalog: &'a [ShopRecord], state: &FilterState) -> Vec<&'a ShopRecord> {
    catalog.iter().filter(|shop| state.admits(shop)).collect()
}
