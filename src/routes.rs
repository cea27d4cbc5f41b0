//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR page at `/`, the compiled client
//! bundle under `/pkg`, images and the stylesheet under `/assets`, and a
//! liveness probe at `/healthz`. The host keeps no state of its own.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;

/// Leptos options from the workspace's `[[workspace.metadata.leptos]]` entry,
/// with any `LEPTOS_*` variables cargo-leptos exports taking precedence.
///
/// # Errors
///
/// Returns [`ConfigError::Leptos`] if the metadata is missing or malformed.
pub fn leptos_options() -> Result<LeptosOptions, ConfigError> {
    get_configuration(Some(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")))
        .map(|conf| conf.leptos_options)
        .map_err(|e| ConfigError::Leptos(e.to_string()))
}

/// Full application router.
pub fn app(options: LeptosOptions, assets_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(options.site_root.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
