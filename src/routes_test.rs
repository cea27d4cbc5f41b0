use super::*;
use axum_test::TestServer;

use crate::config::HostConfig;

fn server() -> TestServer {
    let options = LeptosOptions::builder().output_name("litterwatch").build();
    let config = HostConfig::from_lookup(|_| None).unwrap();
    TestServer::new(app(options, &config.assets_dir)).unwrap()
}

// =============================================================================
// Probes
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let response = server().get("/healthz").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = server().get("/api/penalties").await;
    response.assert_status_not_found();
}

// =============================================================================
// Static assets
// =============================================================================

#[tokio::test]
async fn stylesheet_is_served_from_assets_dir() {
    let response = server().get("/assets/main.css").await;
    response.assert_status_ok();
    assert!(response.text().contains(".status-badge"));
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let response = server().get("/assets/nope.css").await;
    response.assert_status_not_found();
}

// =============================================================================
// Server-rendered page
// =============================================================================

#[tokio::test]
async fn dashboard_renders_seeded_table_and_stat_cards() {
    let response = server().get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("penalty-table"));
    assert_eq!(html.matches("class=\"status-badge status-").count(), 8);
    assert_eq!(html.matches("class=\"stat-card\"").count(), 4);
    assert!(html.contains("Ridwan Siddique"));
}

// =============================================================================
// Leptos configuration
// =============================================================================

#[test]
fn workspace_metadata_supplies_leptos_options() {
    let options = leptos_options().unwrap();
    assert_eq!(options.output_name.as_ref(), "litterwatch");
    assert_eq!(options.site_pkg_dir.as_ref(), "pkg");
}

#[test]
fn workspace_metadata_pairs_host_binary_with_client_library() {
    let manifest = std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
    assert!(!manifest.contains("[package.metadata.leptos]"));
    let section = manifest.split("[[workspace.metadata.leptos]]").nth(1).unwrap();
    assert!(section.contains("bin-package = \"litterwatch\""));
    assert!(section.contains("lib-package = \"client\""));
    assert!(section.contains("lib-features = [\"hydrate\"]"));
}
