//! Card for a single shop in the grid.

use leptos::prelude::*;

use crate::catalog::ShopRecord;

/// Image, name, rating, location and pet policy for one shop.
///
/// The image URL is rendered as-is; there is no fallback when it fails to
/// load.
#[component]
pub fn ShopCard(shop: &'static ShopRecord) -> impl IntoView {
    view! {
        <article class="shop-card" data-shop-id=shop.id>
            <img class="shop-card__image" src=shop.image alt=shop.name/>
            <div class="shop-card__body">
                <div class="shop-card__heading">
                    <span class="shop-card__name">{shop.name}</span>
                    <span class="shop-card__rating">{shop.rating_label()}</span>
                </div>
                <div class="shop-card__location">{shop.location_label()}</div>
                <div class="shop-card__policy">{shop.pet_policy}</div>
            </div>
        </article>
    }
}
