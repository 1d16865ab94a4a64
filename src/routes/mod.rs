//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check with Leptos SSR rendering under a
//! single Axum router. The page and its compiled WASM/CSS/JS assets live
//! under the configured base path; the router base inside the Leptos app
//! carries that prefix into the generated route list, so the SSR routes are
//! merged at the top level rather than nested.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Operational routes, always at the site root.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().route("/healthz", get(healthz)).layer(cors)
}

/// Mount point of the static bundle for a normalized base path.
fn pkg_mount(base_path: &str) -> String {
    format!("{base_path}/pkg")
}

/// Full application: health check + Leptos SSR page + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(base_path: &str) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list({
        let base = base_path.to_owned();
        move || view! { <App base=base.clone()/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let base = base_path.to_owned();
            move || shell(opts.clone(), base.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service(&pkg_mount(base_path), ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
