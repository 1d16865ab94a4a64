//! Landing page: hero with widgets, filterable shop grid, map placeholder.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. The search box and the pet-friendly checkbox
//! write into a page-local `FilterState`; `ShopResults` memoizes
//! `visible_shops` over it, so the shown cards are always a function of those
//! two inputs and the fixed catalog.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::catalog::{SHOPS, ShopRecord};
use crate::components::clock_widget::ClockWidget;
use crate::components::shop_card::ShopCard;
use crate::components::tips_widget::TipsWidget;
use crate::components::weather_widget::WeatherWidget;
use crate::state::filter::{EMPTY_RESULTS_NOTICE, FilterState, visible_shops};
use crate::state::widgets::{copyright_line, current_year};

pub(crate) const SHOPS_SECTION_ID: &str = "shops";
pub(crate) const WIDGETS_SECTION_ID: &str = "widgets";
pub(crate) const MAP_SECTION_ID: &str = "map";

/// In-page navigation: (fragment target, label).
pub(crate) const NAV_LINKS: [(&str, &str); 3] =
    [("#shops", "Shops"), ("#widgets", "Widgets"), ("#map", "Map")];

#[component]
pub fn HomePage() -> impl IntoView {
    let filter = RwSignal::new(FilterState::default());

    view! {
        <div class="home-page">
            <SiteHeader/>
            <Hero/>

            <section id=SHOPS_SECTION_ID class="shops" aria-label="Shops">
                <div class="shops__toolbar">
                    <h2 class="shops__title">"Nearby Pet-friendly Cafés"</h2>
                    <div class="shops__filters">
                        <input
                            class="shops__search"
                            type="text"
                            placeholder="Search by name or address..."
                            prop:value=move || filter.with(|f| f.query.clone())
                            on:input=move |ev| {
                                let query = event_target_value(&ev);
                                filter.update(|f| f.query = query);
                            }
                        />
                        <label class="shops__toggle">
                            <input
                                type="checkbox"
                                prop:checked=move || filter.with(|f| f.pet_friendly_only)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    filter.update(|f| f.pet_friendly_only = checked);
                                }
                            />
                            "Pet-friendly only"
                        </label>
                    </div>
                </div>

                <ShopResults filter=filter/>
            </section>

            <MapPlaceholder/>

            <footer class="site-footer">{copyright_line(current_year())}</footer>
        </div>
    }
}

/// Notice to show for a filtered list: only when nothing is visible.
pub(crate) fn empty_notice(visible: &[&ShopRecord]) -> Option<&'static str> {
    visible.is_empty().then_some(EMPTY_RESULTS_NOTICE)
}

/// Card grid for the shops admitted by `filter`, or the empty notice.
#[component]
pub(crate) fn ShopResults(#[prop(into)] filter: Signal<FilterState>) -> impl IntoView {
    let visible = Memo::new(move |_| filter.with(|f| visible_shops(SHOPS, f)));

    view! {
        <div class="shops__grid">
            <For
                each=move || visible.get()
                key=|shop| shop.id
                children=move |shop: &'static ShopRecord| view! { <ShopCard shop=shop/> }
            />
        </div>
        {move || {
            visible
                .with(|shops| empty_notice(shops))
                .map(|notice| view! { <p class="shops__empty">{notice}</p> })
        }}
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                <div class="site-header__brand">"CoffeePaws"</div>
                <div class="site-header__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a class="site-header__link" href=href>{label}</a> })
                        .collect::<Vec<_>>()}
                </div>
            </nav>
        </header>
    }
}

/// Headline, pitch, call-to-action buttons and the widget grid.
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__shade"></div>
            <div class="hero__inner">
                <div class="hero__copy">
                    <h1 class="hero__headline">
                        "Pet-friendly Coffee Spots"
                        <span class="hero__headline-sub">" for you and your \"furry friends\""</span>
                    </h1>
                    <p class="hero__pitch">
                        "Discover modern, pet-friendly cafes with cozy vibes, great drafts, and outdoor spaces. \
                         Explore, filter, and plan your next pup-approved coffee stop."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary">"Explore Shops"</button>
                        <button class="btn btn--ghost">"Get Updates"</button>
                    </div>
                </div>
                <div id=WIDGETS_SECTION_ID class="hero__widgets">
                    <WeatherWidget/>
                    <ClockWidget/>
                    <TipsWidget/>
                    <div class="widget widget--availability">
                        <span>"Live Availability: Local data"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MapPlaceholder() -> impl IntoView {
    view! {
        <section id=MAP_SECTION_ID class="map" aria-label="Map">
            <h2 class="map__title">"Map & Nearby"</h2>
            <div class="map__placeholder">
                <span>"Map placeholder (interactive map would appear here)"</span>
            </div>
        </section>
    }
}
