//! Root application component with routing and the SSR document shell.
//!
//! The app can be mounted under a path prefix. The server passes the prefix
//! to `shell`, which writes it into a `<meta name="coffeepaws-base">` tag so
//! the browser bundle hydrates with the same router base.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;

/// Name of the meta tag carrying the router base into the browser.
pub const BASE_META_NAME: &str = "coffeepaws-base";

/// Canonical form of a mount prefix: empty for the site root, otherwise a
/// leading slash and no trailing slash (`"/a/b"`).
#[must_use]
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() { String::new() } else { format!("/{trimmed}") }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=BASE_META_NAME content=base.clone()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options root=base.clone()/>
                <MetaTags/>
            </head>
            <body>
                <App base/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// `base` is the normalized mount prefix; empty means the site root. The
/// page keeps its filter state locally, so no shared contexts are provided
/// beyond the meta context.
#[component]
pub fn App(#[prop(optional, into)] base: String) -> impl IntoView {
    provide_meta_context();

    let stylesheet = format!("{base}/pkg/coffeepaws.css");
    let routes = || {
        view! {
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        }
    };

    let router = if base.is_empty() {
        view! { <Router>{routes()}</Router> }.into_any()
    } else {
        view! { <Router base=base>{routes()}</Router> }.into_any()
    };

    view! {
        <Stylesheet id="leptos" href=stylesheet/>
        <Title text="CoffeePaws"/>
        {router}
    }
}

/// Router base written by `shell`, read back in the browser.
#[cfg(feature = "hydrate")]
pub fn base_from_document() -> String {
    let selector = format!("meta[name=\"{BASE_META_NAME}\"]");
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(&selector).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .map(|raw| normalize_base_path(&raw))
        .unwrap_or_default()
}
