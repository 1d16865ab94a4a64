use super::*;
use crate::catalog::SHOPS;

#[test]
fn nav_links_target_page_sections() {
    let sections = [SHOPS_SECTION_ID, WIDGETS_SECTION_ID, MAP_SECTION_ID];
    for (href, _) in NAV_LINKS {
        let target = href.strip_prefix('#').unwrap();
        assert!(sections.contains(&target), "dangling anchor {href}");
    }
}

#[test]
fn nav_link_labels_in_display_order() {
    let labels: Vec<&str> = NAV_LINKS.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, vec!["Shops", "Widgets", "Map"]);
}

#[test]
fn empty_notice_only_for_empty_list() {
    assert_eq!(empty_notice(&[]), Some(EMPTY_RESULTS_NOTICE));
    assert_eq!(empty_notice(&[&SHOPS[0]]), None);
}

#[test]
fn unmatched_query_yields_notice() {
    let state = FilterState { query: "zzz".into(), pet_friendly_only: true };
    assert_eq!(empty_notice(&visible_shops(SHOPS, &state)), Some(EMPTY_RESULTS_NOTICE));
}

// =============================================================
// Server-rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod rendered {
    use super::*;

    use leptos::tachys::view::RenderHtml;

    fn render_results(query: &str, pet_friendly_only: bool) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let filter = RwSignal::new(FilterState { query: query.to_owned(), pet_friendly_only });
            view! { <ShopResults filter=filter/> }.to_html()
        })
    }

    fn card_count(html: &str) -> usize {
        html.matches("data-shop-id=").count()
    }

    #[test]
    fn unmatched_query_renders_notice_and_no_cards() {
        let html = render_results("zzz", true);
        assert!(html.contains(EMPTY_RESULTS_NOTICE));
        assert_eq!(card_count(&html), 0);
    }

    #[test]
    fn matching_query_renders_cards_without_notice() {
        let html = render_results("ocean", true);
        assert!(html.contains("Pawsitive Cafe"));
        assert_eq!(card_count(&html), 1);
        assert!(!html.contains(EMPTY_RESULTS_NOTICE));
    }

    #[test]
    fn home_page_defaults_show_five_cards() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <HomePage/> }.to_html());
        assert_eq!(card_count(&html), 5);
        assert!(!html.contains(EMPTY_RESULTS_NOTICE));
        assert!(html.contains("id=\"shops\""));
        assert!(html.contains("Map placeholder (interactive map would appear here)"));
    }
}
