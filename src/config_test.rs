use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("assets"));
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", ""), ("ASSETS_DIR", " ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert!(cfg.assets_dir.ends_with("assets"));
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn overrides_are_applied() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("ASSETS_DIR", "/srv/litter")]))
        .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/litter"));
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = HostConfig::from_lookup(lookup(&[("HOST", "::1")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3000");
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn non_numeric_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn hostname_is_not_an_ip() {
    let err = HostConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
    assert_eq!(err.to_string(), "invalid HOST: \"localhost\"");
}
